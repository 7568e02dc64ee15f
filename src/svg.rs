use crate::curve::Couple;
use crate::curve::Float;
use crate::curve::C_ZERO;
use crate::rendering::Canvas;

use rgb::RGB8;

use core::fmt::Write;
use alloc::{format, string::String, vec::Vec};

/// Canvas producing an SVG document.
#[derive(Debug, Clone)]
pub struct SvgCanvas {
    size: Couple,
    elements: Vec<String>,
}

fn css(color: RGB8) -> String {
    format!("rgb({},{},{})", color.r, color.g, color.b)
}

impl SvgCanvas {
    pub fn new() -> Self {
        Self {
            size: C_ZERO,
            elements: Vec::new(),
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn document(&self) -> String {
        let mut svg = String::new();
        let (w, h) = (self.size.x, self.size.y);

        svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            w, h, w, h
        ));
        svg.push('\n');

        for element in &self.elements {
            svg.push_str(element);
            svg.push('\n');
        }

        svg.push_str("</svg>\n");
        svg
    }
}

impl Default for SvgCanvas {
    fn default() -> Self {
        Self::new()
    }
}

impl Canvas for SvgCanvas {
    fn resize(&mut self, size: Couple) {
        self.size = size;
    }

    fn add_circle(&mut self, center: Couple, radius: Float, fill: RGB8, opacity: Float) {
        self.elements.push(format!(
            r#"<circle cx="{}" cy="{}" r="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
            center.x, center.y, radius, css(fill), opacity
        ));
    }

    fn add_line(&mut self, start: Couple, end: Couple, stroke: RGB8, width: Float) {
        self.elements.push(format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            start.x, start.y, end.x, end.y, css(stroke), width
        ));
    }

    fn add_path(&mut self, points: &[Couple], stroke: RGB8, width: Float) {
        let (first, rest) = match points.split_first() {
            Some(split) => split,
            None => return,
        };

        let mut d = format!("M {},{}", first.x, first.y);
        for p in rest {
            // writing to a String never fails
            let _ = write!(d, " L {},{}", p.x, p.y);
        }

        self.elements.push(format!(
            r#"<path d="{}" stroke="{}" stroke-width="{}" fill="none"/>"#,
            d, css(stroke), width
        ));
    }

    fn add_text(&mut self, position: Couple, label: &str, size: Float, color: RGB8) {
        let escaped = label
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");

        self.elements.push(format!(
            r#"<text x="{}" y="{}" font-size="{}px" fill="{}">{}</text>"#,
            position.x, position.y, size, css(color), escaped
        ));
    }

    fn save<E, F: FnMut(&[u8]) -> Result<(), E>>(&mut self, mut write_fn: F) -> Result<(), E> {
        write_fn(self.document().as_bytes())
    }
}
