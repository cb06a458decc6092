//! Backend-neutral drawing description.
//!
//! Objects and plugins describe what they draw as [`Graphic`]s; the host turns
//! them into real drawing calls by implementing [`RenderSurface`].

use crate::constants::CURVE_SEGMENTS;
use crate::geometry::{Arc, Line, Point, Rect};
use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

/// RGBA colour with components in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const CLEAR: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);
    pub const LIGHT_GRAY: Color = Color::rgb(2.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0);
    pub const CYAN: Color = Color::rgb(0.0, 1.0, 1.0);
    pub const SYSTEM_BLUE: Color = Color::rgb(0.0, 122.0 / 255.0, 1.0);

    pub const fn rgb(red: f64, green: f64, blue: f64) -> Self {
        Self::rgba(red, green, blue, 1.0)
    }

    pub const fn rgba(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    pub const fn with_alpha(self, alpha: f64) -> Self {
        Self { alpha, ..self }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// 2D affine transform `[a b c d tx ty]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub tx: f64,
    pub ty: f64,
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        tx: 0.0,
        ty: 0.0,
    };

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            tx,
            ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// `self` followed by `next`.
    pub fn then(&self, next: &Transform) -> Transform {
        Transform {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            tx: self.tx * next.a + self.ty * next.c + next.tx,
            ty: self.tx * next.b + self.ty * next.d + next.ty,
        }
    }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.tx,
            self.b * p.x + self.d * p.y + self.ty,
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum LineJoin {
    Round,
    #[default]
    Bevel,
    Miter {
        limit: f64,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StrokeStyle {
    pub line_width: f64,
    pub dash: Vec<f64>,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl StrokeStyle {
    pub fn solid(line_width: f64) -> Self {
        Self {
            line_width,
            dash: Vec::new(),
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    pub fn dashed(line_width: f64, dash: Vec<f64>) -> Self {
        Self {
            dash,
            ..Self::solid(line_width)
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum PaintMethod {
    Stroke(StrokeStyle),
    Fill,
}

/// A polyline, optionally closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubPath {
    pub points: Vec<Point>,
    pub closed: bool,
}

impl SubPath {
    /// Consecutive segments, including the closing one when `closed`.
    pub fn segments(&self) -> impl Iterator<Item = Line> + '_ {
        let closing = match (self.closed, self.points.first(), self.points.last()) {
            (true, Some(first), Some(last)) if self.points.len() > 2 => {
                Some(Line::new(*last, *first))
            }
            _ => None,
        };
        self.points
            .windows(2)
            .map(|w| Line::new(w[0], w[1]))
            .chain(closing)
    }
}

/// A list of flattened sub-paths.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    subpaths: Vec<SubPath>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    pub fn is_empty(&self) -> bool {
        self.subpaths.iter().all(|s| s.points.is_empty())
    }

    /// Open polyline through `points`. A single point becomes a dot.
    pub fn add_lines(&mut self, points: &[Point]) {
        match points {
            [] => {}
            [single] => self.subpaths.push(SubPath {
                points: vec![*single, *single],
                closed: false,
            }),
            _ => self.subpaths.push(SubPath {
                points: points.to_vec(),
                closed: false,
            }),
        }
    }

    pub fn add_polygon(&mut self, points: &[Point]) {
        if points.is_empty() {
            return;
        }
        self.subpaths.push(SubPath {
            points: points.to_vec(),
            closed: true,
        });
    }

    pub fn add_rect(&mut self, rect: Rect) {
        let [tl, tr, bl, br] = rect.corners();
        self.add_polygon(&[tl, tr, br, bl]);
    }

    pub fn add_circle(&mut self, center: Point, radius: f64) {
        let points: Vec<Point> = (0..CURVE_SEGMENTS)
            .map(|i| center.extended(radius, TAU * i as f64 / CURVE_SEGMENTS as f64))
            .collect();
        self.add_polygon(&points);
    }

    /// Flattens `arc` at `radius` into an open polyline.
    pub fn add_arc(&mut self, arc: &Arc, radius: f64) {
        let sweep = arc.angle();
        // Clockwise arcs sweep towards decreasing angles.
        let direction = if arc.clockwise { -1.0 } else { 1.0 };
        let steps = ((CURVE_SEGMENTS as f64 * sweep / TAU).ceil() as usize).max(1);
        let points: Vec<Point> = (0..=steps)
            .map(|i| {
                let angle = arc.start + direction * sweep * i as f64 / steps as f64;
                arc.center.extended(radius, angle)
            })
            .collect();
        self.add_lines(&points);
    }

    pub fn append(&mut self, other: Path) {
        self.subpaths.extend(other.subpaths);
    }

    pub fn bounds(&self) -> Option<Rect> {
        Rect::from_points(self.subpaths.iter().flat_map(|s| s.points.iter().copied()))
    }

    pub fn transformed(&self, transform: &Transform) -> Path {
        Path {
            subpaths: self
                .subpaths
                .iter()
                .map(|s| SubPath {
                    points: s.points.iter().map(|p| transform.apply(*p)).collect(),
                    closed: s.closed,
                })
                .collect(),
        }
    }

    /// Distance from `point` to the nearest segment of any sub-path.
    pub fn distance_to(&self, point: Point) -> Option<f64> {
        self.subpaths
            .iter()
            .flat_map(SubPath::segments)
            .map(|line| line.distance_to(point))
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Even-odd containment over the closed sub-paths.
    pub fn contains_even_odd(&self, point: Point) -> bool {
        let mut inside = false;
        for subpath in self.subpaths.iter().filter(|s| s.points.len() > 2) {
            let points = &subpath.points;
            let mut j = points.len() - 1;
            for i in 0..points.len() {
                let (pi, pj) = (points[i], points[j]);
                if (pi.y > point.y) != (pj.y > point.y)
                    && point.x < (pj.x - pi.x) * (point.y - pi.y) / (pj.y - pi.y) + pi.x
                {
                    inside = !inside;
                }
                j = i;
            }
        }
        inside
    }
}

/// One paint operation: a path, how to paint it and in which colour.
#[derive(Debug, Clone, PartialEq)]
pub struct Graphic {
    pub path: Path,
    pub method: PaintMethod,
    pub color: Color,
}

impl Graphic {
    pub fn stroke(path: Path, style: StrokeStyle, color: Color) -> Self {
        Self {
            path,
            method: PaintMethod::Stroke(style),
            color,
        }
    }

    pub fn fill(path: Path, color: Color) -> Self {
        Self {
            path,
            method: PaintMethod::Fill,
            color,
        }
    }

    /// Hit test with a tolerance band of `range`.
    pub fn contains(&self, point: Point, range: f64) -> bool {
        match &self.method {
            PaintMethod::Stroke(style) => {
                let band = (style.line_width / 2.0).max(range);
                self.path.distance_to(point).is_some_and(|d| d <= band)
            }
            PaintMethod::Fill => self.path.contains_even_odd(point),
        }
    }

    pub fn bounds(&self) -> Option<Rect> {
        self.path.bounds()
    }
}

/// Drawing target supplied by the host.
///
/// Coordinates are in the space established by the current transform; the
/// canvas starts every pass in view space.
pub trait RenderSurface {
    fn save(&mut self);
    fn restore(&mut self);
    fn concat_transform(&mut self, transform: Transform);
    fn clip(&mut self, rect: Rect);
    fn fill_rect(&mut self, rect: Rect, color: Color);
    fn stroke_rect(&mut self, rect: Rect, color: Color, line_width: f64);
    fn fill_ellipse(&mut self, rect: Rect, color: Color);
    fn stroke_ellipse(&mut self, rect: Rect, color: Color, line_width: f64);
    fn draw_graphic(&mut self, graphic: &Graphic);
}
