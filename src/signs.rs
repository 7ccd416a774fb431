// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Human-readable descriptions for road sign labels
//!
//! Labels come from many community models, so the lookup is forgiving:
//! exact match on the lowercased, trimmed label first, then the first entry
//! where either string contains the other, then a generic message.

/// Known sign labels and what they mean, in match priority order
const SIGN_DESCRIPTIONS: &[(&str, &str)] = &[
    // Stop signs
    ("stop", "Come to a full stop and check for traffic."),
    ("stop sign", "Come to a full stop and check for traffic."),
    ("stop_sign", "Come to a full stop and proceed only when safe."),
    // Parking
    ("no parking", "Parking is not allowed in this area."),
    // Turns
    ("no u-turn", "U-turns are prohibited here."),
    ("no left turn", "Left turns are not permitted at this point."),
    ("no right turn", "Right turns are not permitted at this point."),
    ("turn left", "You are required to turn left."),
    ("turn right", "You are required to turn right."),
    ("turn left ahead", "Left turn ahead, slow down and prepare to turn."),
    ("turn right ahead", "Right turn ahead, slow down and prepare to turn."),
    // Directional
    ("one way street", "Traffic flows only in one direction."),
    ("one way", "Traffic flows only in one direction."),
    ("straight ahead only", "You may only go straight, no turns allowed."),
    (
        "go straight or turn right",
        "You may proceed straight or turn right, no left turn allowed.",
    ),
    (
        "go straight or turn left",
        "You may proceed straight or turn left, no right turn allowed.",
    ),
    // Yield / give way
    ("yield", "Slow down and let other vehicles go first."),
    (
        "give way",
        "Slow down and give priority to other vehicles before proceeding.",
    ),
    ("give way to oncoming", "Yield to oncoming traffic."),
    // Pedestrians
    ("pedestrian crossing", "Slow down and watch for people crossing."),
    ("children crossing", "Slow down; children may cross the road here."),
    (
        "beware of children",
        "Children may be crossing, slow down and stay alert.",
    ),
    ("bicycle crossing", "Bicycles crossing ahead, slow down and watch."),
    // Speed limits
    (
        "speed limit 20 kmph",
        "Maximum speed allowed is 20 km/h, drive slowly.",
    ),
    ("speed limit 30 kmph", "Maximum speed allowed is 30 km/h."),
    ("speed limit 30 km/h", "Maximum speed is 30 km/h in this area."),
    ("speed limit 40 km/h", "Maximum speed is 40 km/h in this area."),
    ("speed limit 50 kmph", "Maximum speed allowed is 50 km/h."),
    ("speed limit 50 km/h", "Maximum speed is 50 km/h in this area."),
    ("speed limit 60 km/h", "Maximum speed is 60 km/h in this area."),
    ("speed limit 70 km/h", "Maximum speed is 70 km/h in this area."),
    ("speed limit 80 km/h", "Maximum speed is 80 km/h in this area."),
    (
        "50 mph speed limit",
        "Maximum speed allowed is 50 mph, do not exceed.",
    ),
    (
        "end of all speed and passing limits",
        "Previous speed and passing limits are lifted, drive responsibly.",
    ),
    (
        "end of speed limit",
        "Previous speed limit ends, adjust accordingly.",
    ),
    // Road conditions
    ("roadworks ahead", "Construction work ahead, slow down."),
    (
        "slippery road",
        "Road may be slippery when wet, proceed carefully.",
    ),
    (
        "slippery road ahead",
        "Road may be slippery, reduce speed and avoid sudden turns or brakes.",
    ),
    ("bumpy road", "Uneven surface ahead, reduce your speed."),
    (
        "uneven road",
        "Road surface ahead is uneven, reduce speed to avoid bumps.",
    ),
    // Entry restrictions
    (
        "no entry",
        "Do not enter, road is closed or one-way against you.",
    ),
    (
        "no_over_taking",
        "Overtaking other vehicles is prohibited in this area.",
    ),
    ("no overtaking", "Overtaking is prohibited in this area."),
    (
        "overtaking by trucks is prohibited",
        "Trucks are not allowed to overtake here.",
    ),
    // Traffic control
    ("roundabout", "Approaching roundabout, yield and follow flow."),
    (
        "round-about",
        "Roundabout ahead, yield and follow circular flow of traffic.",
    ),
    ("traffic light ahead", "Traffic signal ahead, be ready to stop."),
    (
        "traffic_signal",
        "Traffic lights ahead, be prepared to stop or slow down.",
    ),
    // Keep direction
    ("keep left", "Stay on the left side of the road."),
    ("keep-left", "Stay on the left side of the road or obstacle."),
    ("keep right", "Stay on the right side of the road."),
    ("keep-right", "Stay on the right side of the road or obstacle."),
    // Road features
    ("road narrows", "Road ahead becomes narrower, drive cautiously."),
    (
        "road narrows on right",
        "Right side of the road becomes narrower, slow down and keep left.",
    ),
    (
        "two-way traffic ahead",
        "Be aware that traffic moves in both directions.",
    ),
    ("bridge ahead", "Bridge ahead, check speed and load restrictions."),
    ("tunnel ahead", "Tunnel coming up, turn on lights if needed."),
    // Warnings
    ("stop sign ahead", "Prepare to stop ahead."),
    (
        "attention please-",
        "Pay attention, potential danger or special instructions ahead.",
    ),
    (
        "dangerous left curve ahead",
        "Sharp left curve ahead, reduce speed and navigate carefully.",
    ),
    (
        "dangerous rright curve ahead",
        "Sharp right curve ahead, reduce speed and navigate carefully.",
    ),
    (
        "left zig zag traffic",
        "Road curves left and right ahead, reduce speed and stay alert.",
    ),
    // Restrictions
    ("no trucks", "Trucks are prohibited beyond this point."),
    (
        "truck traffic is prohibited",
        "Trucks are not allowed beyond this point.",
    ),
    // Crossings
    ("animal crossing", "Animals may cross the road, stay alert."),
    ("railway crossing", "Railroad tracks ahead, proceed with caution."),
    ("falling rocks", "Possible falling rocks, drive carefully."),
    // Zones
    ("school zone", "Slow down, children may be nearby."),
    ("no horns", "No use of horns in this area."),
    (
        "pedestrian zone",
        "Pedestrians only, vehicles must stop or park.",
    ),
    ("bus stop", "Bus stop ahead, watch for buses pulling out."),
    (
        "speed camera ahead",
        "Speed check zone ahead, keep within limits.",
    ),
    // Cycle routes
    (
        "cycle route ahead warning",
        "Cyclists may be on the road, share the road and slow down.",
    ),
];

/// Find the catalog description for a label, if any entry matches.
pub fn lookup(label: &str) -> Option<&'static str> {
    let needle = label.trim().to_lowercase();
    if needle.is_empty() {
        return None;
    }

    if let Some((_, description)) = SIGN_DESCRIPTIONS.iter().find(|(key, _)| *key == needle) {
        return Some(*description);
    }

    SIGN_DESCRIPTIONS
        .iter()
        .find(|(key, _)| needle.contains(key) || key.contains(needle.as_str()))
        .map(|(_, description)| *description)
}

/// Describe a label, falling back to a generic message for unknown signs.
pub fn describe_sign(label: &str) -> String {
    match lookup(label) {
        Some(description) => description.to_string(),
        None => format!(
            "Pay attention to this \"{}\" sign for important traffic information.",
            label
        ),
    }
}

/// Description for an optional label, as attached to detection responses.
pub fn describe_detection_label(label: Option<&str>) -> String {
    describe_sign(label.unwrap_or("unknown"))
}
