// SPDX-License-Identifier: MIT OR Apache-2.0
//! Control-point curves and their sampled evaluator.
//!
//! A [`CurveValue`] is what the user edits: a handful of points in the unit
//! square plus an interpolation mode. A [`CurveEvaluator`] is the rendered
//! form: a dense table sorted by x that answers `eval(x)` with a binary
//! search and a linear blend between the two bracketing samples.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Default number of steps used when resampling a hermite curve
pub const DEFAULT_CURVE_STEPS: usize = 512;

/// Interpolation between control points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum CurveInterpolation {
    /// Straight segments between points
    #[default]
    Linear,
    /// Catmull-Rom style cubic hermite segments
    CubicHermite,
}

impl CurveInterpolation {
    /// Name used in the wire format
    pub fn name(&self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::CubicHermite => "hermite",
        }
    }

    /// Parse a wire-format name
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "linear" => Some(Self::Linear),
            "hermite" => Some(Self::CubicHermite),
            _ => None,
        }
    }
}

/// User-authored curve: control points sorted by x, no two sharing an x
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveValue {
    points: Vec<[f32; 2]>,
    interpolation: CurveInterpolation,
}

impl Default for CurveValue {
    fn default() -> Self {
        Self {
            points: vec![[0.0, 0.0], [1.0, 1.0]],
            interpolation: CurveInterpolation::Linear,
        }
    }
}

impl CurveValue {
    /// Create a curve from arbitrary points.
    ///
    /// Points are sorted by x; when several share an x only the first is kept.
    pub fn new(mut points: Vec<[f32; 2]>, interpolation: CurveInterpolation) -> Self {
        points.retain(|p| p[0].is_finite() && p[1].is_finite());
        points.sort_by(|a, b| a[0].total_cmp(&b[0]));
        points.dedup_by(|b, a| a[0] == b[0]);
        Self {
            points,
            interpolation,
        }
    }

    /// Control points in x order
    pub fn points(&self) -> &[[f32; 2]] {
        &self.points
    }

    /// Interpolation mode
    pub fn interpolation(&self) -> CurveInterpolation {
        self.interpolation
    }

    /// Change the interpolation mode
    pub fn set_interpolation(&mut self, interpolation: CurveInterpolation) {
        self.interpolation = interpolation;
    }

    /// Build the sampled evaluator for this curve
    pub fn evaluator(&self, steps: usize) -> CurveEvaluator {
        CurveEvaluator::new(&self.points, self.interpolation, steps)
    }

    /// Insert a point at `x`, on the curve as it is currently drawn.
    ///
    /// Returns the index of the new point. If a point already sits at that x
    /// its index is returned and nothing is inserted.
    pub fn create_point(&mut self, x: f32) -> usize {
        let x = if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) };
        if let Some(index) = self.points.iter().position(|p| p[0] == x) {
            return index;
        }
        let y = self.evaluator(DEFAULT_CURVE_STEPS).eval(x);
        let index = self.points.partition_point(|p| p[0] < x);
        self.points.insert(index, [x, y]);
        index
    }

    /// Remove the point at `index`.
    ///
    /// Refused when it would leave fewer than two points.
    pub fn delete_point(&mut self, index: usize) -> bool {
        if self.points.len() <= 2 || index >= self.points.len() {
            return false;
        }
        self.points.remove(index);
        true
    }

    /// Move the point at `index` to `position`, clamped to the unit square.
    ///
    /// The point may change places with its neighbours; the returned index is
    /// where it ended up. If another point already owns the target x, only the
    /// y coordinate moves.
    pub fn move_point(&mut self, index: usize, position: [f32; 2]) -> Option<usize> {
        let current = *self.points.get(index)?;
        let mut x = if position[0].is_nan() { current[0] } else { position[0].clamp(0.0, 1.0) };
        let y = if position[1].is_nan() { current[1] } else { position[1].clamp(0.0, 1.0) };

        let collides = self
            .points
            .iter()
            .enumerate()
            .any(|(i, p)| i != index && p[0] == x);
        if collides {
            x = current[0];
        }

        self.points.remove(index);
        let new_index = self.points.partition_point(|p| p[0] < x);
        self.points.insert(new_index, [x, y]);
        Some(new_index)
    }
}

/// Dense sample table built from a curve
#[derive(Debug, Clone, PartialEq)]
pub struct CurveEvaluator {
    samples: Vec<[f32; 2]>,
}

impl CurveEvaluator {
    /// Build the table.
    ///
    /// Non-finite points are dropped first.
    ///
    /// - no points: identity, `(0,0)` to `(1,1)`
    /// - one point: constant at that point's y
    /// - linear: the points themselves
    /// - hermite: `steps` uniform steps over `[0, 1]`, flat outside the points
    pub fn new(points: &[[f32; 2]], interpolation: CurveInterpolation, steps: usize) -> Self {
        let mut sorted: Vec<[f32; 2]> = points.to_vec();
        sorted.retain(|p| p[0].is_finite() && p[1].is_finite());
        sorted.sort_by(|a, b| a[0].total_cmp(&b[0]));

        let samples = match (sorted.as_slice(), interpolation) {
            ([], _) => vec![[0.0, 0.0], [1.0, 1.0]],
            ([only], _) => vec![[0.0, only[1]], [1.0, only[1]]],
            (_, CurveInterpolation::Linear) => sorted,
            (_, CurveInterpolation::CubicHermite) => resample_hermite(&sorted, steps.max(1)),
        };

        Self { samples }
    }

    /// The sample table, sorted by x
    pub fn samples(&self) -> &[[f32; 2]] {
        &self.samples
    }

    /// Where `x` falls relative to the table: before, inside or after it
    pub fn compare_to_range(&self, x: f32) -> Ordering {
        compare_to_range(&self.samples, x)
    }

    /// Evaluate at `x`. Outside the table the boundary sample's y is returned.
    pub fn eval(&self, x: f32) -> f32 {
        let first = self.samples[0];
        let last = self.samples[self.samples.len() - 1];
        if x.is_nan() || x <= first[0] {
            return first[1];
        }
        if x >= last[0] {
            return last[1];
        }

        let upper = self.samples.partition_point(|s| s[0] <= x);
        let a = self.samples[upper - 1];
        let b = self.samples[upper];
        let width = b[0] - a[0];
        if width <= 0.0 {
            return b[1];
        }
        lerp(a[1], b[1], (x - a[0]) / width)
    }
}

fn compare_to_range(samples: &[[f32; 2]], x: f32) -> Ordering {
    match (samples.first(), samples.last()) {
        (Some(first), _) if x < first[0] => Ordering::Less,
        (_, Some(last)) if x > last[0] => Ordering::Greater,
        _ => Ordering::Equal,
    }
}

fn resample_hermite(points: &[[f32; 2]], steps: usize) -> Vec<[f32; 2]> {
    let n = points.len();
    let segments: Vec<[[f32; 2]; 4]> = (0..n - 1)
        .map(|i| {
            let p1 = points[i];
            let p2 = points[i + 1];
            let p0 = if i == 0 { extrapolate(p1, p2) } else { points[i - 1] };
            let p3 = if i + 2 < n { points[i + 2] } else { extrapolate(p2, p1) };
            [p0, p1, p2, p3]
        })
        .collect();

    (0..=steps)
        .map(|step| {
            let x = step as f32 / steps as f32;
            let y = match compare_to_range(points, x) {
                Ordering::Less => points[0][1],
                Ordering::Greater => points[n - 1][1],
                Ordering::Equal => {
                    let segment = points.partition_point(|p| p[0] <= x).saturating_sub(1).min(n - 2);
                    eval_segment(&segments[segment], x)
                }
            };
            [x, y]
        })
        .collect()
}

/// Phantom stencil point past `near`, mirrored away from `next`
fn extrapolate(near: [f32; 2], next: [f32; 2]) -> [f32; 2] {
    [2.0 * near[0] - next[0], 2.0 * near[1] - next[1]]
}

fn eval_segment(segment: &[[f32; 2]; 4], x: f32) -> f32 {
    let [p0, p1, p2, p3] = *segment;
    let width = p2[0] - p1[0];
    if width <= 0.0 {
        return p1[1];
    }
    let t = ((x - p1[0]) / width).clamp(0.0, 1.0);
    let m1 = (p2[1] - p0[1]) * 0.5;
    let m2 = (p3[1] - p1[1]) * 0.5;
    hermite(p1[1], m1, p2[1], m2, t)
}

fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

fn hermite(p0: f32, m0: f32, p1: f32, m1: f32, t: f32) -> f32 {
    let t2 = t * t;
    let t3 = t2 * t;

    let h00 = 2.0 * t3 - 3.0 * t2 + 1.0;
    let h10 = t3 - 2.0 * t2 + t;
    let h01 = -2.0 * t3 + 3.0 * t2;
    let h11 = t3 - t2;

    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const EPS: f32 = 1e-5;

    #[test]
    fn test_empty_curve_is_identity() {
        let eval = CurveEvaluator::new(&[], CurveInterpolation::CubicHermite, 64);
        assert_eq!(eval.samples(), &[[0.0, 0.0], [1.0, 1.0]]);
        for x in [0.0, 0.25, 0.5, 0.9, 1.0] {
            assert!((eval.eval(x) - x).abs() < EPS);
        }
    }

    #[test]
    fn test_single_point_is_constant() {
        let eval = CurveEvaluator::new(&[[0.3, 0.7]], CurveInterpolation::Linear, 64);
        for x in [0.0, 0.3, 0.6, 1.0] {
            assert!((eval.eval(x) - 0.7).abs() < EPS);
        }
    }

    #[test]
    fn test_linear_hits_control_points() {
        let points = [[0.1, 0.2], [0.4, 0.9], [0.8, 0.3]];
        let eval = CurveEvaluator::new(&points, CurveInterpolation::Linear, 64);
        assert_eq!(eval.samples(), &points);
        for p in points {
            assert!((eval.eval(p[0]) - p[1]).abs() < EPS);
        }
        assert!((eval.eval(0.25) - 0.55).abs() < EPS);
    }

    #[test]
    fn test_out_of_range_clamps_flat() {
        let eval = CurveEvaluator::new(&[[0.2, 0.4], [0.6, 0.8]], CurveInterpolation::Linear, 64);
        assert_eq!(eval.eval(0.0), 0.4);
        assert_eq!(eval.eval(1.0), 0.8);
        assert_eq!(eval.eval(-10.0), 0.4);
        assert_eq!(eval.eval(f32::NAN), 0.4);
        assert_eq!(eval.compare_to_range(0.1), Ordering::Less);
        assert_eq!(eval.compare_to_range(0.4), Ordering::Equal);
        assert_eq!(eval.compare_to_range(0.7), Ordering::Greater);
    }

    #[test]
    fn test_hermite_peak() {
        let points = [[0.0, 0.0], [0.5, 1.0], [1.0, 0.0]];
        let eval = CurveEvaluator::new(&points, CurveInterpolation::CubicHermite, 128);
        assert_eq!(eval.samples().len(), 129);
        assert!(eval.samples().windows(2).all(|w| w[0][0] <= w[1][0]));
        assert!((eval.eval(0.5) - 1.0).abs() < 1e-3);
        assert!(eval.eval(0.25) > 0.5);
    }

    #[test]
    fn test_hermite_flat_outside_points() {
        let points = [[0.25, 0.1], [0.75, 0.9]];
        let eval = CurveEvaluator::new(&points, CurveInterpolation::CubicHermite, 100);
        assert_eq!(eval.samples().len(), 101);
        assert!((eval.eval(0.1) - 0.1).abs() < EPS);
        assert!((eval.eval(0.9) - 0.9).abs() < EPS);
    }

    #[test]
    fn test_create_point_uses_curve_y() {
        let mut curve = CurveValue::default();
        let index = curve.create_point(0.5);
        assert_eq!(index, 1);
        assert_eq!(curve.points().len(), 3);
        assert!((curve.points()[1][1] - 0.5).abs() < EPS);

        // same x again inserts nothing
        assert_eq!(curve.create_point(0.5), 1);
        assert_eq!(curve.points().len(), 3);
    }

    #[test]
    fn test_delete_point_keeps_two() {
        let mut curve = CurveValue::default();
        assert!(!curve.delete_point(0));
        curve.create_point(0.5);
        assert!(curve.delete_point(1));
        assert!(!curve.delete_point(1));
        assert_eq!(curve.points().len(), 2);
    }

    #[test]
    fn test_move_point_reorders() {
        let mut curve = CurveValue::new(
            vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]],
            CurveInterpolation::Linear,
        );
        let index = curve.move_point(0, [0.75, 0.2]);
        assert_eq!(index, Some(1));
        assert_eq!(curve.points()[1], [0.75, 0.2]);
        assert!(curve.points().windows(2).all(|w| w[0][0] < w[1][0]));
        assert_eq!(curve.move_point(9, [0.1, 0.1]), None);
    }

    #[test]
    fn test_move_point_onto_taken_x_keeps_x() {
        let mut curve = CurveValue::new(
            vec![[0.0, 0.0], [0.5, 0.5], [1.0, 1.0]],
            CurveInterpolation::Linear,
        );
        let index = curve.move_point(1, [1.0, 0.9]);
        assert_eq!(index, Some(1));
        assert_eq!(curve.points()[1], [0.5, 0.9]);
    }

    #[test]
    fn test_new_dedups_x() {
        let curve = CurveValue::new(
            vec![[0.5, 0.1], [0.0, 0.0], [0.5, 0.9]],
            CurveInterpolation::Linear,
        );
        assert_eq!(curve.points(), &[[0.0, 0.0], [0.5, 0.1]]);
    }

    #[test]
    fn test_interpolation_names() {
        for mode in [CurveInterpolation::Linear, CurveInterpolation::CubicHermite] {
            assert_eq!(CurveInterpolation::from_name(mode.name()), Some(mode));
        }
        assert_eq!(CurveInterpolation::from_name("bezier"), None);
    }

    proptest! {
        #[test]
        fn prop_hermite_table_is_sorted(
            ys in proptest::collection::vec(0.0f32..1.0, 2..8),
            steps in 1usize..300,
        ) {
            let n = ys.len();
            let points: Vec<[f32; 2]> = ys
                .iter()
                .enumerate()
                .map(|(i, y)| [i as f32 / (n - 1) as f32, *y])
                .collect();
            let eval = CurveEvaluator::new(&points, CurveInterpolation::CubicHermite, steps);
            prop_assert_eq!(eval.samples().len(), steps + 1);
            prop_assert!(eval.samples().windows(2).all(|w| w[0][0] <= w[1][0]));
        }

        #[test]
        fn prop_eval_outside_range_is_boundary(x in -100.0f32..100.0) {
            let points = [[0.2, 0.3], [0.5, 0.9], [0.7, 0.1]];
            let eval = CurveEvaluator::new(&points, CurveInterpolation::Linear, 16);
            let y = eval.eval(x);
            if x <= 0.2 {
                prop_assert_eq!(y, 0.3);
            } else if x >= 0.7 {
                prop_assert_eq!(y, 0.1);
            } else {
                prop_assert!((0.1 - EPS..=0.9 + EPS).contains(&y));
            }
        }
    }

    #[test]
    fn test_evaluator_drops_non_finite_points() {
        let evaluator = CurveEvaluator::new(
            &[[-f32::NAN, 0.0], [0.5, 0.5]],
            CurveInterpolation::Linear,
            8,
        );
        assert_eq!(evaluator.eval(0.3), 0.5);
        assert!(evaluator.samples().iter().all(|p| p[0].is_finite() && p[1].is_finite()));

        let identity = CurveEvaluator::new(
            &[[f32::INFINITY, 0.2], [0.4, f32::NAN]],
            CurveInterpolation::CubicHermite,
            8,
        );
        assert_eq!(identity.eval(0.25), 0.25);

        let hermite = CurveEvaluator::new(
            &[[-f32::NAN, 1.0], [0.0, 0.0], [1.0, 1.0]],
            CurveInterpolation::CubicHermite,
            16,
        );
        let y = hermite.eval(0.5);
        assert!(y.is_finite() && (0.0..=1.0).contains(&y));
    }
}
