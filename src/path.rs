use crate::curve::ControlPoint;
use crate::curve::Couple;
use crate::curve::Float;
use crate::curve::Slider;
use crate::curve::C_ZERO;

#[allow(unused_imports)]
use num_traits::real::Real;

use core::mem::replace;
use alloc::{vec, vec::Vec};

/// Control polygon of one Bezier curve, of any degree.
#[derive(Debug, Clone, PartialEq)]
pub struct BezierGroup {
    points: Vec<ControlPoint>,
}

/// Straight connector between two consecutive anchors.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct LinearSegment {
    pub start: ControlPoint,
    pub end: ControlPoint,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Segmentation {
    pub groups: Vec<BezierGroup>,
    pub segments: Vec<LinearSegment>,
}

/// Binomial coefficient; exact while it fits the f64 mantissa.
fn binomial(n: usize, k: usize) -> f64 {
    let k = k.min(n - k);
    (0..k).fold(1.0, |c, j| c * (n - j) as f64 / (j + 1) as f64)
}

/// Bernstein basis polynomial `C(n, i) * t^i * (1 - t)^(n - i)`.
pub fn bernstein(i: usize, n: usize, t: Float) -> Float {
    if i > n {
        return 0.0;
    }

    let c = binomial(n, i) as Float;
    c * t.powi(i as i32) * (1.0 - t).powi((n - i) as i32)
}

impl BezierGroup {
    pub fn new(points: Vec<ControlPoint>) -> Self {
        Self { points }
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn degree(&self) -> usize {
        self.points.len().saturating_sub(1)
    }

    pub fn point_at(&self, t: Float) -> Couple {
        let n = self.degree();
        self.points
            .iter()
            .enumerate()
            .fold(C_ZERO, |sum, (i, p)| sum + p.position() * bernstein(i, n, t))
    }

    /// Evaluates the curve at `samples` evenly spaced parameters,
    /// from t = 0 to t = 1 inclusive.
    pub fn evaluate(&self, samples: usize) -> Vec<Couple> {
        let last = samples.saturating_sub(1).max(1) as Float;
        (0..samples).map(|i| self.point_at(i as Float / last)).collect()
    }
}

impl LinearSegment {
    pub fn new(start: ControlPoint, end: ControlPoint) -> Self {
        Self { start, end }
    }

    /// Both ends coincide
    pub fn is_degenerate(&self) -> bool {
        self.start.position() == self.end.position()
    }

    /// `steps + 1` points from start to end, both included.
    pub fn sample(&self, steps: usize) -> Vec<Couple> {
        let (a, b) = (self.start.position(), self.end.position());
        let steps = steps.max(1);
        (0..=steps)
            .map(|i| {
                let t = i as Float / steps as Float;
                a * (1.0 - t) + b * t
            })
            .collect()
    }
}

/// Splits control points into curves and straight segments.
///
/// Two anchors in a row close the running group and open a new one at
/// the second anchor; the pair itself becomes a [`LinearSegment`].
/// Groups of two points or less never become curves.
pub fn segment(points: &[ControlPoint]) -> Segmentation {
    let mut groups = Vec::new();
    let mut segments = Vec::new();
    let mut current: Vec<ControlPoint> = Vec::new();

    for point in points {
        match current.last().copied() {
            Some(last) if last.anchor && point.anchor => {
                segments.push(LinearSegment::new(last, *point));
                let closed = replace(&mut current, vec![*point]);
                if closed.len() > 2 {
                    groups.push(BezierGroup::new(closed));
                }
            }
            _ => current.push(*point),
        }
    }

    if current.len() > 2 {
        groups.push(BezierGroup::new(current));
    }

    Segmentation { groups, segments }
}

impl Slider {
    pub fn segments(&self) -> Segmentation {
        segment(self.points())
    }
}
