// Copyright (c) 2025 Fabstir
// SPDX-License-Identifier: BUSL-1.1
//! Rendering of detections for the terminal

use anyhow::Result;
use clap::{Args, ValueEnum};

use crate::detection::Detection;
use crate::signs::describe_detection_label;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Json,
    Text,
}

/// Output options shared by commands that print detections
#[derive(Args, Debug, Clone)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Drop detections below this confidence (and those without one)
    #[arg(long)]
    pub min_confidence: Option<f64>,
}

impl OutputArgs {
    pub fn print(&self, detections: Vec<Detection>) -> Result<()> {
        let detections = filter_by_confidence(detections, self.min_confidence);
        println!("{}", render(&detections, self.format)?);
        Ok(())
    }
}

pub fn filter_by_confidence(detections: Vec<Detection>, min: Option<f64>) -> Vec<Detection> {
    match min {
        Some(min) => detections
            .into_iter()
            .filter(|d| d.meets_confidence(min))
            .collect(),
        None => detections,
    }
}

pub fn render(detections: &[Detection], format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(detections)?),
        OutputFormat::Text => Ok(render_text(detections)),
    }
}

fn render_text(detections: &[Detection]) -> String {
    if detections.is_empty() {
        return "No road signs detected".to_string();
    }

    let mut out = format!("Detected {} road sign(s)\n", detections.len());
    for (i, d) in detections.iter().enumerate() {
        let label = d.label.as_deref().unwrap_or("unknown");
        let confidence = d
            .confidence
            .map(|c| format!("{:.1}%", c * 100.0))
            .unwrap_or_else(|| "n/a".to_string());

        out.push_str(&format!("{}. {} ({})", i + 1, label, confidence));
        if let (Some(x), Some(y)) = (d.x, d.y) {
            out.push_str(&format!(" at ({:.0}, {:.0})", x, y));
        }
        if let (Some(w), Some(h)) = (d.width, d.height) {
            out.push_str(&format!(" size {:.0}x{:.0}", w, h));
        }
        out.push('\n');
        out.push_str(&format!("   {}\n", describe_detection_label(d.label.as_deref())));
    }

    out.trim_end().to_string()
}
