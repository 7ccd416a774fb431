// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1

//! End-to-end normalization of realistic provider payloads

use roadsign_detect::{normalize, Detection};
use serde_json::{json, Value};

fn normalized_json(payload: Value) -> Value {
    serde_json::to_value(normalize(&payload)).unwrap()
}

#[test]
fn test_roboflow_style_payload() {
    let payload = json!({
        "time": 0.041,
        "image": {"width": 640, "height": 480},
        "predictions": [
            {"x": 320.5, "y": 200, "width": 64, "height": 60,
             "confidence": 0.93, "class": "speed limit 50 km/h", "class_id": 7,
             "detection_id": "b1f1"}
        ]
    });

    let detections = normalize(&payload);
    assert_eq!(detections.len(), 1);

    let d = &detections[0];
    assert_eq!(d.label.as_deref(), Some("speed limit 50 km/h"));
    assert_eq!(d.confidence, Some(0.93));
    assert_eq!(d.x, Some(320.5));
    assert_eq!(d.y, Some(200.0));
    assert_eq!(d.width, Some(64.0));
    assert_eq!(d.height, Some(60.0));
    assert_eq!(d.raw, payload["predictions"][0]);
}

#[test]
fn test_corner_box_scenario_serializes() {
    let item = json!({"class": "stop", "confidence": 0.87, "bbox": [10, 20, 50, 60]});
    let output = normalized_json(json!({"predictions": [item.clone()]}));

    assert_eq!(
        output,
        json!([{
            "label": "stop",
            "confidence": 0.87,
            "x": 30.0,
            "y": 40.0,
            "width": 40.0,
            "height": 40.0,
            "raw": item
        }])
    );
}

#[test]
fn test_alternate_aliases_scenario() {
    let output = normalized_json(json!({"preds": [{"name": "yield", "score": "0.5"}]}));

    assert_eq!(output[0]["label"], "yield");
    assert_eq!(output[0]["confidence"], 0.5);
    for key in ["x", "y", "width", "height"] {
        assert!(output[0][key].is_null(), "{} should be null", key);
    }
}

#[test]
fn test_empty_payload_scenario() {
    assert_eq!(normalized_json(json!({})), json!([]));
}

#[test]
fn test_generic_detector_payload() {
    let payload = json!({
        "objects": [
            {"label": "no parking", "confidence_score": 0.77,
             "bounding_box": {"left": 0, "top": 0, "right": 20, "bottom": 10}},
            {"label": "keep left", "confidence_score": 0.55,
             "center_x": 5, "center_y": 5, "w": 2, "h": 3}
        ]
    });

    let detections = normalize(&payload);
    assert_eq!(detections.len(), 2);

    assert_eq!(detections[0].corners(), Some([0.0, 0.0, 20.0, 10.0]));
    assert_eq!(detections[0].x, Some(10.0));
    assert_eq!(detections[0].y, Some(5.0));

    assert_eq!(detections[1].x, Some(5.0));
    assert_eq!(detections[1].width, Some(2.0));
    assert_eq!(detections[1].height, Some(3.0));
}

#[test]
fn test_every_field_nullable() {
    let detections = normalize(&json!({"predictions": [{"unrelated": true}]}));
    let expected = Detection {
        label: None,
        confidence: None,
        x: None,
        y: None,
        width: None,
        height: None,
        raw: json!({"unrelated": true}),
    };
    assert_eq!(detections, vec![expected]);
}

#[test]
fn test_mixed_quality_predictions_keep_order() {
    let payload = json!({"predictions": [
        {"class": "stop", "confidence": 0.9},
        "garbage",
        {"class": "yield", "confidence": "n/a"},
        {"class": "roundabout", "confidence": "0.61", "box": [1, 1, 3, 5]}
    ]});

    let detections = normalize(&payload);
    let labels: Vec<Option<&str>> = detections.iter().map(|d| d.label.as_deref()).collect();
    assert_eq!(
        labels,
        vec![Some("stop"), None, Some("yield"), Some("roundabout")]
    );

    assert_eq!(detections[1].raw, json!("garbage"));
    assert_eq!(detections[2].confidence, None);
    assert_eq!(detections[3].confidence, Some(0.61));
    assert_eq!(detections[3].x, Some(2.0));
    assert_eq!(detections[3].height, Some(4.0));
}

#[test]
fn test_normalization_is_repeatable() {
    let payload = json!({"predictions": [{"class": "stop", "bbox": [0, 0, 4, 4]}]});
    assert_eq!(normalize(&payload), normalize(&payload));
}
