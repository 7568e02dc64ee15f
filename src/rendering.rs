use crate::curve::ControlPoint;
use crate::curve::Couple;
use crate::curve::Float;
use crate::curve::Slider;
use crate::curve::C_ZERO;
use crate::path::Segmentation;
use crate::path::LinearSegment;

use rgb::RGB8;

use alloc::{vec::Vec, string::ToString};

const WHITE: RGB8 = RGB8 { r: 255, g: 255, b: 255 };
const BLACK: RGB8 = RGB8 { r: 0, g: 0, b: 0 };

// diagnostic overlay
const CURVE_OVERLAY_COLOR: RGB8 = RGB8 { r: 0, g: 0, b: 255 };
const SEGMENT_OVERLAY_COLOR: RGB8 = RGB8 { r: 0, g: 128, b: 0 };
const OVERLAY_WIDTH: Float = 2.0;
const ANCHOR_MARKER_COLOR: RGB8 = RGB8 { r: 255, g: 0, b: 0 };
const POINT_MARKER_COLOR: RGB8 = WHITE;
const MARKER_RADIUS: Float = 3.0;
const LABEL_COLOR: RGB8 = RGB8 { r: 128, g: 128, b: 128 };
const LABEL_SIZE: Float = 10.0;
const LABEL_OFFSET: Couple = Couple::new(5.0, -5.0);

/// Drawing surface the rasterizer emits shapes to.
///
/// Coordinates are in canvas space: `(0, 0)` is the top left corner and
/// the surface extends to the size given to [`Canvas::resize`].
pub trait Canvas {
    fn resize(&mut self, size: Couple);

    fn add_circle(&mut self, center: Couple, radius: Float, fill: RGB8, opacity: Float);

    fn add_line(&mut self, start: Couple, end: Couple, stroke: RGB8, width: Float);

    /// Open polyline through `points`
    fn add_path(&mut self, points: &[Couple], stroke: RGB8, width: Float);

    fn add_text(&mut self, position: Couple, label: &str, size: Float, color: RGB8);

    /// Hands the encoded canvas to `write_fn`; errors from `write_fn`
    /// are returned as they are.
    fn save<E, F: FnMut(&[u8]) -> Result<(), E>>(&mut self, write_fn: F) -> Result<(), E>;
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct RenderConfig {
    pub outer_radius: Float,
    /// should be smaller than `outer_radius`, or the body vanishes
    pub inner_radius: Float,
    pub outer_color: RGB8,
    pub inner_color: RGB8,
    pub samples_per_curve: usize,
    pub linear_segment_steps: usize,
    pub padding: Float,
    pub show_diagnostic_overlay: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            outer_radius: 32.0,
            inner_radius: 30.0,
            outer_color: WHITE,
            inner_color: BLACK,
            samples_per_curve: 50,
            linear_segment_steps: 50,
            padding: 50.0,
            show_diagnostic_overlay: false,
        }
    }
}

/// Maps path space to canvas space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Frame {
    min: Couple,
    size: Couple,
    padding: Float,
}

impl Frame {
    /// Bounding box of `points` grown by `padding` on every side.
    pub fn enclosing(points: &[ControlPoint], padding: Float) -> Self {
        let first = points.first().map(ControlPoint::position).unwrap_or(C_ZERO);
        let (min, max) = points.iter().fold((first, first), |(min, max), p| {
            let min = Couple::new(min.x.min(p.x), min.y.min(p.y));
            let max = Couple::new(max.x.max(p.x), max.y.max(p.y));
            (min, max)
        });

        let margin = Couple::new(2.0 * padding, 2.0 * padding);
        Self {
            min,
            size: max - min + margin,
            padding,
        }
    }

    pub fn size(&self) -> Couple {
        self.size
    }

    pub fn translate(&self, point: Couple) -> Couple {
        point - self.min + Couple::new(self.padding, self.padding)
    }
}

fn stamp<C: Canvas>(canvas: &mut C, stamps: &[Vec<Couple>], radius: Float, color: RGB8) {
    for center in stamps.iter().flatten() {
        canvas.add_circle(*center, radius, color, 1.0);
    }
}

/// Draws the slider body as discs stamped along its path, in two passes.
///
/// Every outer disc is emitted before any inner disc, so the inner pass
/// covers joins between curves and segments too.
pub fn render<C: Canvas>(slider: &Slider, config: &RenderConfig, canvas: &mut C) {
    if config.inner_radius >= config.outer_radius {
        log::warn!(
            "inner radius {} is not smaller than outer radius {}",
            config.inner_radius,
            config.outer_radius,
        );
    }

    let frame = Frame::enclosing(slider.points(), config.padding);
    canvas.resize(frame.size());

    let Segmentation { groups, segments } = slider.segments();

    let mut curves = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        if group.points().len() < 2 {
            log::debug!("skipping curve {}: {} control point(s)", i, group.points().len());
            continue;
        }

        let samples = group.evaluate(config.samples_per_curve);
        curves.push(samples.into_iter().map(|p| frame.translate(p)).collect::<Vec<_>>());
    }

    let mut lines = Vec::with_capacity(segments.len());
    let mut kept_segments: Vec<&LinearSegment> = Vec::with_capacity(segments.len());
    for (i, segment) in segments.iter().enumerate() {
        if segment.is_degenerate() {
            log::debug!("skipping segment {}: both ends at {:?}", i, segment.start.position());
            continue;
        }

        let samples = segment.sample(config.linear_segment_steps);
        lines.push(samples.into_iter().map(|p| frame.translate(p)).collect::<Vec<_>>());
        kept_segments.push(segment);
    }

    // body
    stamp(canvas, &curves, config.outer_radius, config.outer_color);
    stamp(canvas, &lines, config.outer_radius, config.outer_color);

    // highlight
    stamp(canvas, &curves, config.inner_radius, config.inner_color);
    stamp(canvas, &lines, config.inner_radius, config.inner_color);

    if config.show_diagnostic_overlay {
        for curve in &curves {
            canvas.add_path(curve, CURVE_OVERLAY_COLOR, OVERLAY_WIDTH);
        }

        for segment in kept_segments {
            let start = frame.translate(segment.start.position());
            let end = frame.translate(segment.end.position());
            canvas.add_line(start, end, SEGMENT_OVERLAY_COLOR, OVERLAY_WIDTH);
        }

        for (i, point) in slider.points().iter().enumerate() {
            let center = frame.translate(point.position());
            let color = match point.anchor {
                true => ANCHOR_MARKER_COLOR,
                false => POINT_MARKER_COLOR,
            };

            canvas.add_circle(center, MARKER_RADIUS, color, 1.0);
            canvas.add_text(center + LABEL_OFFSET, &i.to_string(), LABEL_SIZE, LABEL_COLOR);
        }
    }
}

impl Slider {
    pub fn render<C: Canvas>(&self, config: &RenderConfig, canvas: &mut C) {
        render(self, config, canvas)
    }

    /// Renders onto `canvas` then saves it through `write_fn`.
    pub fn render_and_save<C, E, F>(&self, config: &RenderConfig, canvas: &mut C, write_fn: F) -> Result<(), E>
    where
        C: Canvas,
        F: FnMut(&[u8]) -> Result<(), E>,
    {
        render(self, config, canvas);
        canvas.save(write_fn)
    }
}
