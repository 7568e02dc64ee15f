#![no_std]
extern crate alloc;

pub mod curve;
pub mod path;
pub mod rendering;
pub mod raster;
pub mod svg;


#[doc(inline)]
pub use {
    curve::Slider,
    curve::ControlPoint,
    curve::CurveKind,
    curve::ParsingError,
    curve::ParsingResult,
    curve::Couple,
    curve::Float,
    path::segment,
    path::Segmentation,
    path::BezierGroup,
    path::LinearSegment,
    rendering::render,
    rendering::Canvas,
    rendering::Frame,
    rendering::RenderConfig,
    raster::RasterCanvas,
    svg::SvgCanvas,
};
