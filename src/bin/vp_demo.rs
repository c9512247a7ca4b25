use serde::Serialize;
use std::env;
use std::fs;
use std::path::Path;
use vp_geometry::config::estimate::{self, DragConfig, EstimatorConfig};
use vp_geometry::vp::estimate_vanishing_point_with;
use vp_geometry::{update_segment, LineSegment, Point};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args().nth(1).ok_or_else(usage)?;
    let config = estimate::load_config(Path::new(&config_path))?;
    if config.segments.len() < 2 {
        return Err(format!(
            "Need at least two segments to estimate a vanishing point, got {}",
            config.segments.len()
        ));
    }

    let policy = config.estimator.to_policy();
    let estimate = estimate_vanishing_point_with(&config.segments, &*policy)
        .ok_or("Vanishing point estimation failed on degenerate geometry")?;

    let mut shape = estimate.segments.clone();
    let mut drags = Vec::with_capacity(config.drags.len());
    for drag in &config.drags {
        drags.push(apply_drag(&mut shape, drag, estimate.vanishing_point.as_ref())?);
    }

    let report = EstimateReport {
        estimator: PolicyOut::from(config.estimator),
        segment_count: config.segments.len(),
        candidate: estimate.candidate,
        angular_spread_deg: estimate.angular_spread.map(f64::to_degrees),
        vanishing_point: estimate.vanishing_point,
        segments: estimate.segments,
        drags,
    };
    write_report(&config.output.result_json, &report)?;

    match report.vanishing_point {
        Some(vp) => println!("Vanishing point at ({:.3}, {:.3})", vp.x, vp.y),
        None => println!("No finite vanishing point; segments made parallel"),
    }
    println!(
        "Saved result for {} segments to {}",
        report.segment_count,
        config.output.result_json.display()
    );
    Ok(())
}

fn apply_drag(
    shape: &mut [LineSegment],
    drag: &DragConfig,
    vanishing_point: Option<&Point>,
) -> Result<DragOut, String> {
    let previous = *shape
        .get(drag.segment)
        .ok_or_else(|| format!("Drag references missing segment {}", drag.segment))?;
    let next = match drag.endpoint {
        0 => LineSegment::new(drag.to, previous.p1),
        1 => LineSegment::new(previous.p0, drag.to),
        other => return Err(format!("Drag endpoint must be 0 or 1, got {other}")),
    };
    let updated = update_segment(&previous, &next, vanishing_point);
    if let Some(segment) = updated {
        shape[drag.segment] = segment;
    }
    Ok(DragOut {
        segment: drag.segment,
        endpoint: drag.endpoint,
        to: drag.to,
        result: updated,
    })
}

fn write_report(path: &Path, report: &EstimateReport) -> Result<(), String> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)
            .map_err(|e| format!("Failed to create report directory {}: {e}", dir.display()))?;
    }
    let json = serde_json::to_string_pretty(report)
        .map_err(|e| format!("Failed to serialize report: {e}"))?;
    fs::write(path, json).map_err(|e| format!("Failed to write report {}: {e}", path.display()))
}

fn usage() -> String {
    "Usage: vp_demo <config.json>".to_string()
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct EstimateReport {
    estimator: PolicyOut,
    segment_count: usize,
    candidate: Option<Point>,
    angular_spread_deg: Option<f64>,
    vanishing_point: Option<Point>,
    segments: Vec<LineSegment>,
    drags: Vec<DragOut>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PolicyOut {
    policy: &'static str,
    threshold_angle_deg: Option<f64>,
    infinity_distance: Option<f64>,
}

impl From<EstimatorConfig> for PolicyOut {
    fn from(cfg: EstimatorConfig) -> Self {
        match cfg {
            EstimatorConfig::AngularSpread {
                threshold_angle_deg,
            } => Self {
                policy: "angular_spread",
                threshold_angle_deg,
                infinity_distance: None,
            },
            EstimatorConfig::DistanceCutoff { infinity_distance } => Self {
                policy: "distance_cutoff",
                threshold_angle_deg: None,
                infinity_distance,
            },
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DragOut {
    segment: usize,
    endpoint: usize,
    to: Point,
    result: Option<LineSegment>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn report_is_written_into_a_fresh_directory() {
        let dir = env::temp_dir().join(format!("vp_demo_report_{}", std::process::id()));
        let path = dir.join("nested").join("vp.json");
        let segment = LineSegment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let report = EstimateReport {
            estimator: PolicyOut::from(EstimatorConfig::default()),
            segment_count: 1,
            candidate: None,
            angular_spread_deg: None,
            vanishing_point: None,
            segments: vec![segment],
            drags: Vec::new(),
        };
        write_report(&path, &report).expect("write report");

        let text = fs::read_to_string(&path).expect("read report");
        let json: serde_json::Value = serde_json::from_str(&text).expect("parse report");
        assert_eq!(json["segmentCount"], 1);
        assert_eq!(json["estimator"]["policy"], "angular_spread");
        assert!(json["vanishingPoint"].is_null());
        assert_eq!(json["segments"][0][1]["x"], 10.0);
        let _ = fs::remove_dir_all(&dir);
    }
}
