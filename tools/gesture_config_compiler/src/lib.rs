//! Compiles `config/gestures.toml` into the Rust source that the
//! `letter_gestures` build script includes as its process-wide configuration.

use std::{fmt, fs, path::Path};

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct GesturesFile {
    pub tracking: TrackingSection,
    pub resample: ResampleSection,
    pub circularity: CircularitySection,
    pub trail: TrailSection,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrackingSection {
    pub drag_threshold_dp: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ResampleSection {
    pub segment_length_dp: f64,
    pub jitter_epsilon_px: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct CircularitySection {
    pub min_points: u16,
    pub max_closure_ratio: f64,
    pub min_dimension_dp: f64,
}

#[derive(Clone, Debug, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct TrailSection {
    pub stroke_width_px: u32,
}

#[derive(Debug)]
pub enum ConfigCompilerError {
    Io(String),
    Parse(String),
    Validation(String),
}

impl fmt::Display for ConfigCompilerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(msg) => write!(f, "io error: {msg}"),
            Self::Parse(msg) => write!(f, "parse error: {msg}"),
            Self::Validation(msg) => write!(f, "validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigCompilerError {}

pub fn generate_from_path(path: &Path) -> Result<String, ConfigCompilerError> {
    let gestures = parse_gestures_file(path)?;
    validate_config(&gestures)?;
    Ok(render_generated_config(&gestures))
}

pub fn parse_gestures_file(path: &Path) -> Result<GesturesFile, ConfigCompilerError> {
    let text = fs::read_to_string(path)
        .map_err(|e| ConfigCompilerError::Io(format!("failed to read {}: {e}", path.display())))?;
    parse_gestures_str(&text)
}

pub fn parse_gestures_str(text: &str) -> Result<GesturesFile, ConfigCompilerError> {
    toml::from_str(text).map_err(|e| ConfigCompilerError::Parse(e.to_string()))
}

pub fn validate_config(gestures: &GesturesFile) -> Result<(), ConfigCompilerError> {
    let mut problems: Vec<String> = Vec::new();

    if !is_positive_finite(gestures.tracking.drag_threshold_dp) {
        problems.push("tracking.drag_threshold_dp must be a positive finite number".into());
    }

    let resample = &gestures.resample;
    if !is_positive_finite(resample.segment_length_dp) {
        problems.push("resample.segment_length_dp must be a positive finite number".into());
    }
    if !resample.jitter_epsilon_px.is_finite() || resample.jitter_epsilon_px < 0.0 {
        problems.push("resample.jitter_epsilon_px must be a finite number >= 0".into());
    } else if resample.jitter_epsilon_px >= resample.segment_length_dp {
        problems.push(
            "resample.jitter_epsilon_px must be < resample.segment_length_dp".into(),
        );
    }

    let circularity = &gestures.circularity;
    if circularity.min_points < 3 {
        problems.push("circularity.min_points must be >= 3".into());
    }
    if !(circularity.max_closure_ratio > 0.0 && circularity.max_closure_ratio <= 1.0) {
        problems.push("circularity.max_closure_ratio must be in (0, 1]".into());
    }
    if !is_positive_finite(circularity.min_dimension_dp) {
        problems.push("circularity.min_dimension_dp must be a positive finite number".into());
    }

    if gestures.trail.stroke_width_px == 0 {
        problems.push("trail.stroke_width_px must be > 0".into());
    }

    if problems.is_empty() {
        Ok(())
    } else {
        Err(ConfigCompilerError::Validation(problems.join("; ")))
    }
}

pub fn render_generated_config(gestures: &GesturesFile) -> String {
    let mut out = String::new();
    out.push_str("// @generated by gesture_config_compiler. Do not edit by hand.\n");
    out.push_str("pub static GESTURE_CONFIG: GestureConfig = GestureConfig {\n");

    out.push_str("    tracking: TrackingConfig {\n");
    out.push_str(&format!(
        "        drag_threshold_dp: {},\n",
        render_f32(gestures.tracking.drag_threshold_dp)
    ));
    out.push_str("    },\n");

    out.push_str("    resample: ResampleConfig {\n");
    out.push_str(&format!(
        "        segment_length_dp: {},\n",
        render_f32(gestures.resample.segment_length_dp)
    ));
    out.push_str(&format!(
        "        jitter_epsilon_px: {},\n",
        render_f32(gestures.resample.jitter_epsilon_px)
    ));
    out.push_str("    },\n");

    out.push_str("    circularity: CircularityConfig {\n");
    out.push_str(&format!(
        "        min_points: {},\n",
        gestures.circularity.min_points
    ));
    out.push_str(&format!(
        "        max_closure_ratio: {},\n",
        render_f32(gestures.circularity.max_closure_ratio)
    ));
    out.push_str(&format!(
        "        min_dimension_dp: {},\n",
        render_f32(gestures.circularity.min_dimension_dp)
    ));
    out.push_str("    },\n");

    out.push_str("    trail: TrailConfig {\n");
    out.push_str(&format!(
        "        stroke_width_px: {},\n",
        gestures.trail.stroke_width_px
    ));
    out.push_str("    },\n");

    out.push_str("};\n");
    out
}

fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

// `{:?}` always keeps a decimal point or exponent, so the output stays a float literal.
fn render_f32(value: f64) -> String {
    format!("{:?}", value as f32)
}
