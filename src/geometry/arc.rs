use super::circle::line_circle_intersections;
use super::{Line, Point};
use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};

/// A circular arc described by its center and start/end angles in radians.
/// The radius is supplied per query.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Arc {
    pub center: Point,
    pub start: f64,
    pub end: f64,
    pub clockwise: bool,
}

fn normalize(angle: f64) -> f64 {
    let angle = angle % TAU;
    if angle >= 0.0 { angle } else { TAU + angle }
}

impl Arc {
    pub const fn new(center: Point, start: f64, end: f64, clockwise: bool) -> Self {
        Self {
            center,
            start,
            end,
            clockwise,
        }
    }

    /// Clockwise arc from the direction of `start_point` to that of `end_point`.
    pub fn from_points(center: Point, start_point: Point, end_point: Point) -> Self {
        Self::new(
            center,
            Line::new(center, start_point).angle(),
            Line::new(center, end_point).angle(),
            true,
        )
    }

    /// Swept angle in radians, in `(0, 2π]`.
    pub fn angle(&self) -> f64 {
        let (mut start, mut end) = (normalize(self.start), normalize(self.end));
        if !self.clockwise {
            std::mem::swap(&mut start, &mut end);
        }
        if start >= end {
            start - end
        } else {
            TAU - (end - start)
        }
    }

    pub fn to_major_arc(&self) -> Arc {
        if self.angle() < PI {
            Arc {
                clockwise: !self.clockwise,
                ..*self
            }
        } else {
            *self
        }
    }

    pub fn to_minor_arc(&self) -> Arc {
        if self.angle() > PI {
            Arc {
                clockwise: !self.clockwise,
                ..*self
            }
        } else {
            *self
        }
    }

    /// True when the direction `angle` falls inside the swept range.
    pub fn contains_angle(&self, angle: f64) -> bool {
        let target = normalize(angle);
        let (mut start, mut end) = (normalize(self.start), normalize(self.end));
        let mut clockwise = self.clockwise;
        if start > end {
            std::mem::swap(&mut start, &mut end);
            clockwise = !clockwise;
        }
        if clockwise {
            target <= start || target >= end
        } else {
            (start..=end).contains(&target)
        }
    }

    /// True when `point` lies inside the sector of the given radius.
    pub fn contains(&self, point: Point, radius: f64) -> bool {
        let line = Line::new(self.center, point);
        line.length() <= radius && self.contains_angle(line.angle())
    }

    /// True when `point` lies within `range` of the arc's outline.
    pub fn outline_contains(&self, point: Point, radius: f64, range: f64) -> bool {
        let line = Line::new(self.center, point);
        (line.length() - radius).abs() <= range && self.contains_angle(line.angle())
    }

    /// Intersections of the arc (at `radius`) with a segment.
    pub fn intersection_points(&self, line: &Line, radius: f64) -> Vec<Point> {
        line_circle_intersections(self.center, radius, line)
            .into_iter()
            .filter(|p| {
                self.contains_angle(Line::new(self.center, *p).angle()) && line.contains(*p)
            })
            .collect()
    }
}
