use crate::curve::Couple;
use crate::curve::Float;
use crate::rendering::Canvas;

use wizdraw::push_cubic_bezier_segments;
use wizdraw::stroke;
use wizdraw::fill;

use vek::bezier::CubicBezier2;
use vek::vec::Vec2;

#[allow(unused_imports)]
use num_traits::real::Real;

use rgb::{RGB8, RGBA8, ComponentBytes};

use alloc::{vec, vec::Vec};

const SSAA: usize = 4;
const SSAA_SQ: usize = SSAA * SSAA;

/// Control arm length of a unit quarter circle drawn as one cubic.
const KAPPA: Float = 0.552_284_8;

const QUARTER_AXES: [Couple; 4] = [
    Couple::new(1.0, 0.0),
    Couple::new(0.0, 1.0),
    Couple::new(-1.0, 0.0),
    Couple::new(0.0, -1.0),
];

/// Flattens a circle into a closed polygon, one cubic per quarter.
fn push_disc(center: Couple, radius: Float, flat: &mut Vec<Couple>) {
    let arm = radius * KAPPA;
    flat.push(center + QUARTER_AXES[0] * radius);

    for i in 0..QUARTER_AXES.len() {
        let from = QUARTER_AXES[i];
        let to = QUARTER_AXES[(i + 1) % QUARTER_AXES.len()];

        let curve = CubicBezier2 {
            start: center + from * radius,
            ctrl0: center + from * radius + to * arm,
            ctrl1: center + to * radius + from * arm,
            end: center + to * radius,
        };

        push_cubic_bezier_segments::<8>(&curve, 0.4, flat);
    }

    if let Some(first) = flat.first().copied() {
        flat.push(first);
    }
}

/// Canvas backed by an RGBA8 pixel buffer.
///
/// Shapes are rasterized with wizdraw as they are added. Labels are not
/// rasterized.
#[derive(Debug, Clone, Default)]
pub struct RasterCanvas {
    pixels: Vec<RGBA8>,
    mask: Vec<u8>,
    flat: Vec<Couple>,
    width: usize,
    height: usize,
}

impl RasterCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Row-major, `width` pixels per row
    pub fn pixels(&self) -> &[RGBA8] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<RGBA8> {
        match x < self.width {
            true => self.pixels.get(y * self.width + x).copied(),
            false => None,
        }
    }

    fn mask_size(&self) -> Vec2<usize> {
        Vec2::new(self.width, self.height)
    }

    fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    fn paint(&mut self, color: RGBA8) {
        for (pixel, coverage) in self.pixels.iter_mut().zip(self.mask.iter()) {
            if *coverage != 0 {
                blend_pixel(pixel, color, *coverage);
            }
        }
    }

    fn stroke_flat(&mut self, color: RGB8, width: Float) {
        if self.is_empty() || self.flat.len() < 2 {
            return;
        }

        let size = self.mask_size();
        self.mask.fill(0);
        stroke::<SSAA>(&self.flat, &mut self.mask, size, width);
        self.paint(with_opacity(color, 1.0));
    }
}

fn with_opacity(color: RGB8, opacity: Float) -> RGBA8 {
    let alpha = (opacity.max(0.0).min(1.0) * 255.0).round() as u8;
    RGBA8::new(color.r, color.g, color.b, alpha)
}

impl Canvas for RasterCanvas {
    fn resize(&mut self, size: Couple) {
        self.width = size.x.max(0.0).ceil() as usize;
        self.height = size.y.max(0.0).ceil() as usize;

        let length = self.width * self.height;
        self.pixels = vec![RGBA8::new(0, 0, 0, 0); length];
        self.mask = vec![0; length];
    }

    fn add_circle(&mut self, center: Couple, radius: Float, fill_color: RGB8, opacity: Float) {
        if self.is_empty() || radius <= 0.0 {
            return;
        }

        self.flat.clear();
        push_disc(center, radius, &mut self.flat);

        let size = self.mask_size();
        self.mask.fill(0);
        fill::<SSAA, SSAA_SQ>(&self.flat, &mut self.mask, size);
        self.paint(with_opacity(fill_color, opacity));
    }

    fn add_line(&mut self, start: Couple, end: Couple, color: RGB8, width: Float) {
        self.flat.clear();
        self.flat.extend_from_slice(&[start, end]);
        self.stroke_flat(color, width);
    }

    fn add_path(&mut self, points: &[Couple], color: RGB8, width: Float) {
        self.flat.clear();
        self.flat.extend_from_slice(points);
        self.stroke_flat(color, width);
    }

    fn add_text(&mut self, position: Couple, label: &str, _size: Float, _color: RGB8) {
        log::trace!("raster canvas drops label {:?} at {:?}", label, position);
    }

    /// Writes raw RGBA8 pixels, row after row.
    fn save<E, F: FnMut(&[u8]) -> Result<(), E>>(&mut self, mut write_fn: F) -> Result<(), E> {
        write_fn(self.pixels.as_bytes())
    }
}

#[inline(always)]
pub fn blend_pixel(dst_pixel: &mut RGBA8, src_pixel: RGBA8, mask_alpha: u8) {
    if src_pixel.a == 255 && mask_alpha == 255 {
        *dst_pixel = src_pixel;
        return;
    }

    let src_alpha = ((src_pixel.a as u32) * (mask_alpha as u32)) / 255;
    let u8_max = u8::MAX as u32;
    let dst_alpha = u8_max - src_alpha;

    let for_each = |src: u8, dst: &mut u8| {
        let src_scaled = (src as u32) * src_alpha;
        let dst_scaled = (*dst as u32) * dst_alpha;
        *dst = ((src_scaled + dst_scaled) / u8_max) as u8;
    };

    for_each(src_pixel.r, &mut dst_pixel.r);
    for_each(src_pixel.g, &mut dst_pixel.g);
    for_each(src_pixel.b, &mut dst_pixel.b);

    // coverage adds up: a pixel only gets more opaque
    dst_pixel.a = dst_pixel.a.max(src_alpha as u8);
}
