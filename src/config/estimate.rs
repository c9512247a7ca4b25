use crate::point::Point;
use crate::segment::LineSegment;
use crate::vp::{AngularSpread, DistanceCutoff, FinitenessPolicy};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Threshold used when the config selects the angular policy without one.
pub const DEFAULT_THRESHOLD_ANGLE_DEG: f64 = 1.0;

#[derive(Debug, Deserialize)]
pub struct EstimateToolConfig {
    /// Segments as drawn, each a pair of `{x, y}` points in pixels.
    pub segments: Vec<LineSegment>,
    #[serde(default)]
    pub estimator: EstimatorConfig,
    /// Endpoint drags replayed against the estimated shape, in order.
    #[serde(default)]
    pub drags: Vec<DragConfig>,
    pub output: EstimateOutputConfig,
}

/// Finite-vs-infinite decision used by the estimator.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq)]
#[serde(tag = "policy", rename_all = "snake_case")]
pub enum EstimatorConfig {
    AngularSpread {
        #[serde(default = "default_threshold_angle_deg")]
        threshold_angle_deg: Option<f64>,
    },
    DistanceCutoff {
        #[serde(default)]
        infinity_distance: Option<f64>,
    },
}

fn default_threshold_angle_deg() -> Option<f64> {
    Some(DEFAULT_THRESHOLD_ANGLE_DEG)
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::AngularSpread {
            threshold_angle_deg: default_threshold_angle_deg(),
        }
    }
}

impl EstimatorConfig {
    pub fn to_policy(&self) -> Box<dyn FinitenessPolicy> {
        match *self {
            Self::AngularSpread {
                threshold_angle_deg,
            } => Box::new(AngularSpread::new(
                threshold_angle_deg
                    .filter(|v| v.is_finite() && *v >= 0.0)
                    .map(f64::to_radians),
            )),
            Self::DistanceCutoff { infinity_distance } => {
                Box::new(DistanceCutoff::new(infinity_distance))
            }
        }
    }
}

/// Moves one endpoint of one segment to a new position.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct DragConfig {
    pub segment: usize,
    /// 0 for the anchor endpoint, 1 for the other one.
    pub endpoint: usize,
    pub to: Point,
}

#[derive(Debug, Deserialize)]
pub struct EstimateOutputConfig {
    #[serde(rename = "result_json")]
    pub result_json: PathBuf,
}

pub fn load_config(path: &Path) -> Result<EstimateToolConfig, String> {
    let data = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
    parse_config(&data).map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
}

pub fn parse_config(data: &str) -> Result<EstimateToolConfig, serde_json::Error> {
    serde_json::from_str(data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_angular_default() {
        let cfg = parse_config(
            r#"{
                "segments": [[{"x": 0, "y": 0}, {"x": 2010, "y": 970}]],
                "output": {"result_json": "out/vp.json"}
            }"#,
        )
        .expect("config");
        assert_eq!(cfg.segments.len(), 1);
        assert_eq!(cfg.segments[0].p1, Point::new(2010.0, 970.0));
        assert_eq!(cfg.estimator, EstimatorConfig::default());
        assert!(cfg.drags.is_empty());
        assert_eq!(cfg.output.result_json, PathBuf::from("out/vp.json"));
    }

    #[test]
    fn distance_policy_and_drags() {
        let cfg = parse_config(
            r#"{
                "segments": [],
                "estimator": {"policy": "distance_cutoff", "infinity_distance": 100000},
                "drags": [{"segment": 0, "endpoint": 1, "to": {"x": 1.5, "y": 2}}],
                "output": {"result_json": "vp.json"}
            }"#,
        )
        .expect("config");
        assert_eq!(
            cfg.estimator,
            EstimatorConfig::DistanceCutoff {
                infinity_distance: Some(100_000.0)
            }
        );
        assert_eq!(cfg.drags[0].endpoint, 1);
        assert_eq!(cfg.drags[0].to, Point::new(1.5, 2.0));
        let policy = cfg.estimator.to_policy();
        assert!(!policy.accepts(&Point::new(-599_000.0, 0.0), &[]));
    }

    #[test]
    fn angular_policy_without_threshold_accepts_everything() {
        let cfg: EstimatorConfig =
            serde_json::from_str(r#"{"policy": "angular_spread", "threshold_angle_deg": null}"#)
                .expect("config");
        let policy = cfg.to_policy();
        let anchors = [Point::new(1.0, 0.0), Point::new(1.0, 1e-9)];
        assert!(policy.accepts(&Point::new(0.0, 0.0), &anchors));
    }

    #[test]
    fn missing_output_is_an_error() {
        assert!(parse_config(r#"{"segments": []}"#).is_err());
    }
}
