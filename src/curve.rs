use core::fmt;
use alloc::{vec, vec::Vec, string::{String, ToString}};

pub type Float = f32;
pub type Couple = vek::vec::repr_c::vec2::Vec2<Float>;
pub const C_ZERO: Couple = Couple::new(0.0, 0.0);

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ControlPoint {
    pub x: Float,
    pub y: Float,
    /// the point was emitted twice in a row: the curve breaks here
    pub anchor: bool,
}

impl ControlPoint {
    pub const fn new(x: Float, y: Float) -> Self {
        Self { x, y, anchor: false }
    }

    pub const fn anchor(x: Float, y: Float) -> Self {
        Self { x, y, anchor: true }
    }

    pub fn position(&self) -> Couple {
        Couple::new(self.x, self.y)
    }
}

/// Curve family announced by the encoding.
///
/// Purely informational: every slider goes through the same
/// segmentation, whatever its kind.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum CurveKind {
    Bezier,
    Catmull,
    Linear,
    PerfectCircle,
    Other(char),
}

impl CurveKind {
    pub fn from_token(token: &str) -> ParsingResult<Self> {
        let mut chars = token.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Err(MissingCurveKind),
            (Some(c), None) => Ok(match c {
                'B' => CurveKind::Bezier,
                'C' => CurveKind::Catmull,
                'L' => CurveKind::Linear,
                'P' => CurveKind::PerfectCircle,
                other => CurveKind::Other(other),
            }),
            _ => Err(InvalidCurveKind),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            CurveKind::Bezier => 'B',
            CurveKind::Catmull => 'C',
            CurveKind::Linear => 'L',
            CurveKind::PerfectCircle => 'P',
            CurveKind::Other(c) => c,
        }
    }

    pub fn as_text(self) -> &'static str {
        match self {
            CurveKind::Bezier => "Bezier",
            CurveKind::Catmull => "Catmull",
            CurveKind::Linear => "Linear",
            CurveKind::PerfectCircle => "PerfectCircle",
            CurveKind::Other(_) => "Other",
        }
    }
}

use ParsingError::*;

#[derive(Debug, Clone, PartialEq)]
pub enum ParsingError {
    /// the record has fewer comma-separated fields than needed
    MissingField(usize),
    InvalidBaseCoordinate(usize),
    MissingCurveKind,
    InvalidCurveKind,
    /// `index` is 1-based, counted from the first token after the curve kind
    MalformedCurveEncoding { index: usize, token: String },
}

pub type ParsingResult<T> = Result<T, ParsingError>;

impl fmt::Display for ParsingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingField(i) => write!(f, "record has no field {}", i),
            InvalidBaseCoordinate(i) => write!(f, "field {} is not an integer coordinate", i),
            MissingCurveKind => write!(f, "curve encoding has no curve kind"),
            InvalidCurveKind => write!(f, "curve kind must be a single character"),
            MalformedCurveEncoding { index, token } => {
                write!(f, "curve token {} ({:?}) is not an `x:y` integer pair", index, token)
            }
        }
    }
}

const BASE_X_FIELD: usize = 0;
const BASE_Y_FIELD: usize = 1;
const CURVE_FIELD: usize = 5;

fn parse_coordinate(index: usize, token: &str) -> ParsingResult<(i32, i32)> {
    let malformed = || MalformedCurveEncoding {
        index,
        token: token.to_string(),
    };

    let (x, y) = token.split_once(':').ok_or_else(malformed)?;
    let x = x.parse::<i32>().map_err(|_| malformed())?;
    let y = y.parse::<i32>().map_err(|_| malformed())?;
    Ok((x, y))
}

/// Fold state of [`parse_curve`]: last distinct token and points so far.
type CurveState<'a> = (Option<&'a str>, Vec<ControlPoint>);

fn fold_token<'a>(
    base: Couple,
    (last_distinct, mut points): CurveState<'a>,
    (i, token): (usize, &'a str),
) -> ParsingResult<CurveState<'a>> {
    let (x, y) = parse_coordinate(i + 1, token)?;

    if last_distinct == Some(token) {
        if let Some(point) = points.last_mut() {
            point.anchor = true;
        }
    } else {
        points.push(ControlPoint::new(x as Float - base.x, y as Float - base.y));
    }

    Ok((Some(token), points))
}

/// Parses `"<kind>|<x1>:<y1>|...|<xk>:<yk>"` into control points
/// relative to `base`.
///
/// The first point is always a synthetic origin. A token repeating the
/// previous distinct token verbatim is not appended: it flags the last
/// point as an anchor instead.
pub fn parse_curve(base: (i32, i32), field: &str) -> ParsingResult<(CurveKind, Vec<ControlPoint>)> {
    let mut tokens = field.trim().split('|');
    let kind = CurveKind::from_token(tokens.next().unwrap_or(""))?;

    let base = Couple::new(base.0 as Float, base.1 as Float);
    let init: CurveState = (None, vec![ControlPoint::new(0.0, 0.0)]);

    let (_, points) = tokens
        .enumerate()
        .try_fold(init, |state, token| fold_token(base, state, token))?;

    Ok((kind, points))
}

/// Shifts points so that no coordinate is negative; each axis is
/// handled on its own and left alone when already non-negative.
pub fn normalize(points: &mut [ControlPoint]) {
    let min_x = points.iter().map(|p| p.x).fold(Float::INFINITY, Float::min);
    let min_y = points.iter().map(|p| p.y).fold(Float::INFINITY, Float::min);

    if min_x < 0.0 {
        points.iter_mut().for_each(|p| p.x -= min_x);
    }

    if min_y < 0.0 {
        points.iter_mut().for_each(|p| p.y -= min_y);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    kind: CurveKind,
    /// never empty: index 0 is the synthetic origin
    points: Vec<ControlPoint>,
}

impl Slider {
    /// Parses a full comma-separated hit object record.
    ///
    /// Fields 0 and 1 hold the base position, field 5 the curve encoding;
    /// other fields are ignored.
    pub fn parse(record: &str) -> ParsingResult<Self> {
        let fields: Vec<&str> = record.split(',').collect();
        let field = |i: usize| fields.get(i).copied().ok_or(MissingField(i));

        let base_coordinate = |i: usize| -> ParsingResult<i32> {
            field(i)?.trim().parse::<i32>().map_err(|_| InvalidBaseCoordinate(i))
        };

        let base = (base_coordinate(BASE_X_FIELD)?, base_coordinate(BASE_Y_FIELD)?);
        Self::from_curve(base, field(CURVE_FIELD)?)
    }

    pub fn from_curve(base: (i32, i32), curve: &str) -> ParsingResult<Self> {
        let (kind, mut points) = parse_curve(base, curve)?;
        normalize(&mut points);

        log::debug!("{} slider with {} control points", kind.as_text(), points.len());

        Ok(Self { kind, points })
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn points(&self) -> &[ControlPoint] {
        &self.points
    }

    pub fn anchors(&self) -> impl Iterator<Item = (usize, &ControlPoint)> {
        self.points.iter().enumerate().filter(|(_, p)| p.anchor)
    }

    pub fn log_points(&self) {
        log::info!("slider kind: {} ({})", self.kind.as_text(), self.kind.as_char());
        log::info!(    "| INDEX |   X   |   Y   | ANCHOR |");

        for (i, point) in self.points.iter().enumerate() {
            log::info!("| {:^5} | {:^5} | {:^5} | {:^6} |", i, point.x, point.y, point.anchor);
        }
    }
}
