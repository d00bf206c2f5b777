//! Shape-accuracy estimation
//!
//! One estimation strategy per target shape, each scoring how well a pointer
//! trace matches the presented shape on a 0-100 scale. These are deliberately
//! coarse heuristics tuned for scoring parity, not geometric fitting.

use crate::motion::MIN_TRACE_SAMPLES;
use crate::types::{PointerSample, ShapeKind};

/// Divisor applied to radial-distance variance in the circle estimator
pub const CIRCLE_VARIANCE_SCALE: f64 = 10.0;

/// Number of anchor angles the triangle estimator expects to collect
pub const TRIANGLE_ANCHOR_TARGET: usize = 3;

/// Triangle accuracy when enough anchor angles were collected
pub const TRIANGLE_FULL_ACCURACY: f64 = 70.0;

/// Triangle accuracy when too few anchor angles were collected
pub const TRIANGLE_PARTIAL_ACCURACY: f64 = 30.0;

/// Estimate how accurately the trace matches the target shape (0-100).
///
/// Traces below the minimum sample count score 0; no variant fails.
pub fn estimate_accuracy(samples: &[PointerSample], target_shape: ShapeKind) -> f64 {
    if samples.len() < MIN_TRACE_SAMPLES {
        return 0.0;
    }

    let (center_x, center_y) = centroid(samples);

    match target_shape {
        ShapeKind::Circle => circle_accuracy(samples, center_x, center_y),
        ShapeKind::Square => square_accuracy(samples),
        ShapeKind::Triangle => triangle_accuracy(samples, center_x, center_y),
    }
}

/// Centroid (mean position) of a trace
fn centroid(samples: &[PointerSample]) -> (f64, f64) {
    let n = samples.len() as f64;
    let sum_x: f64 = samples.iter().map(|p| p.x).sum();
    let sum_y: f64 = samples.iter().map(|p| p.y).sum();
    (sum_x / n, sum_y / n)
}

/// Circle: low variance in radial distance from the centroid scores high.
fn circle_accuracy(samples: &[PointerSample], center_x: f64, center_y: f64) -> f64 {
    let distances: Vec<f64> = samples
        .iter()
        .map(|p| ((p.x - center_x).powi(2) + (p.y - center_y).powi(2)).sqrt())
        .collect();

    let n = distances.len() as f64;
    let mean_radius: f64 = distances.iter().sum::<f64>() / n;
    let variance: f64 = distances
        .iter()
        .map(|d| (d - mean_radius).powi(2))
        .sum::<f64>()
        / n;

    (100.0 - variance / CIRCLE_VARIANCE_SCALE).max(0.0)
}

/// Square: rewards a roughly square axis-aligned bounding box.
fn square_accuracy(samples: &[PointerSample]) -> f64 {
    let min_x = samples.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let max_x = samples.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let min_y = samples.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_y = samples.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    let width = max_x - min_x;
    let height = max_y - min_y;
    let longer_side = width.max(height);

    // Degenerate zero-extent trace scores 0
    if longer_side <= 0.0 {
        return 0.0;
    }

    width.min(height) / longer_side * 100.0
}

/// Triangle: sample every count/3-th point, collect each anchor's angle
/// relative to the centroid, and score on whether enough anchors were
/// gathered. A two-valued heuristic, not a geometric fit.
fn triangle_accuracy(samples: &[PointerSample], center_x: f64, center_y: f64) -> f64 {
    let step = samples.len() / TRIANGLE_ANCHOR_TARGET;

    let mut anchor_angles = Vec::new();
    let mut i = 0;
    while i < samples.len() {
        if i + 1 < samples.len() {
            let p = &samples[i + 1];
            anchor_angles.push((p.y - center_y).atan2(p.x - center_x));
        }
        i += step;
    }

    if anchor_angles.len() >= TRIANGLE_ANCHOR_TARGET {
        TRIANGLE_FULL_ACCURACY
    } else {
        TRIANGLE_PARTIAL_ACCURACY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn circle_trace(radius: f64, count: usize) -> Vec<PointerSample> {
        (0..count)
            .map(|i| {
                let theta = 2.0 * PI * i as f64 / count as f64;
                PointerSample {
                    x: 100.0 + radius * theta.cos(),
                    y: 100.0 + radius * theta.sin(),
                    timestamp_ms: i as u64 * 20,
                }
            })
            .collect()
    }

    fn square_trace(width: f64, height: f64, per_side: usize) -> Vec<PointerSample> {
        let mut samples = Vec::new();
        let mut t = 0;
        for i in 0..per_side {
            let frac = i as f64 / per_side as f64;
            samples.push(PointerSample {
                x: frac * width,
                y: 0.0,
                timestamp_ms: t,
            });
            t += 15;
        }
        for i in 0..per_side {
            let frac = i as f64 / per_side as f64;
            samples.push(PointerSample {
                x: width,
                y: frac * height,
                timestamp_ms: t,
            });
            t += 15;
        }
        for i in 0..per_side {
            let frac = i as f64 / per_side as f64;
            samples.push(PointerSample {
                x: width - frac * width,
                y: height,
                timestamp_ms: t,
            });
            t += 15;
        }
        for i in 0..per_side {
            let frac = i as f64 / per_side as f64;
            samples.push(PointerSample {
                x: 0.0,
                y: height - frac * height,
                timestamp_ms: t,
            });
            t += 15;
        }
        samples
    }

    #[test]
    fn test_perfect_circle_scores_100() {
        // Constant radius means zero variance
        let samples = circle_trace(50.0, 24);
        let accuracy = estimate_accuracy(&samples, ShapeKind::Circle);
        assert!((accuracy - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_wobbly_circle_scores_lower() {
        let mut samples = circle_trace(50.0, 24);
        // Push alternating samples well off the ring
        for (i, p) in samples.iter_mut().enumerate() {
            if i % 2 == 0 {
                p.x += 30.0;
            }
        }
        let accuracy = estimate_accuracy(&samples, ShapeKind::Circle);
        assert!(accuracy < 90.0);
    }

    #[test]
    fn test_perfect_square_scores_100() {
        let samples = square_trace(80.0, 80.0, 5);
        let accuracy = estimate_accuracy(&samples, ShapeKind::Square);
        assert!((accuracy - 100.0).abs() < 0.001);
    }

    #[test]
    fn test_rectangle_scores_aspect_ratio() {
        // 40x80 bounding box gives 50
        let samples = square_trace(40.0, 80.0, 5);
        let accuracy = estimate_accuracy(&samples, ShapeKind::Square);
        assert!((accuracy - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_degenerate_line_scores_zero() {
        // Horizontal line has zero height
        let samples: Vec<PointerSample> = (0..12)
            .map(|i| PointerSample {
                x: i as f64 * 10.0,
                y: 42.0,
                timestamp_ms: i as u64 * 20,
            })
            .collect();
        assert_eq!(estimate_accuracy(&samples, ShapeKind::Square), 0.0);
    }

    #[test]
    fn test_single_point_trace_scores_zero() {
        // Zero-extent bounding box
        let samples: Vec<PointerSample> = (0..12)
            .map(|i| PointerSample {
                x: 5.0,
                y: 5.0,
                timestamp_ms: i as u64 * 20,
            })
            .collect();
        assert_eq!(estimate_accuracy(&samples, ShapeKind::Square), 0.0);
    }

    #[test]
    fn test_triangle_with_enough_anchors() {
        // Any trace of >= 10 samples yields >= 3 anchor angles
        let samples = circle_trace(30.0, 12);
        let accuracy = estimate_accuracy(&samples, ShapeKind::Triangle);
        assert_eq!(accuracy, TRIANGLE_FULL_ACCURACY);
    }

    #[test]
    fn test_short_trace_scores_zero_for_all_shapes() {
        let samples = circle_trace(30.0, 9);
        assert_eq!(estimate_accuracy(&samples, ShapeKind::Circle), 0.0);
        assert_eq!(estimate_accuracy(&samples, ShapeKind::Square), 0.0);
        assert_eq!(estimate_accuracy(&samples, ShapeKind::Triangle), 0.0);
    }

    #[test]
    fn test_centroid_is_mean_position() {
        let samples = vec![
            PointerSample {
                x: 0.0,
                y: 0.0,
                timestamp_ms: 0,
            },
            PointerSample {
                x: 10.0,
                y: 20.0,
                timestamp_ms: 10,
            },
        ];
        let (cx, cy) = centroid(&samples);
        assert!((cx - 5.0).abs() < 0.001);
        assert!((cy - 10.0).abs() < 0.001);
    }
}
