// path.rs
// Append-only trail of the positions one particle has visited, with cumulative
// arc-length bookkeeping for dashed-trajectory queries.

use ultraviolet::Vec2;

#[derive(Clone, Debug, Default)]
pub struct Path {
    points: Vec<Vec2>,
    // cumulative[i] is the arc length from the first point to points[i];
    // always the same length as points.
    cumulative: Vec<f32>,
}

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a point unconditionally, extending the cumulative length table.
    pub fn push(&mut self, p: Vec2) {
        let total = match (self.points.last(), self.cumulative.last()) {
            (Some(last), Some(len)) => len + (p - *last).mag(),
            _ => 0.0,
        };
        self.points.push(p);
        self.cumulative.push(total);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    pub fn last(&self) -> Option<Vec2> {
        self.points.last().copied()
    }

    pub fn total_len(&self) -> f32 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    /// Point at arc length `d` along the trail, interpolating between the two
    /// bracketing samples. Returns None when fewer than two points exist (a
    /// freshly fired particle may be queried before its second tick); clamps
    /// to the endpoints otherwise.
    pub fn point_at(&self, d: f32) -> Option<Vec2> {
        if self.points.len() < 2 {
            return None;
        }
        if d <= 0.0 {
            return self.points.first().copied();
        }
        if d >= self.total_len() {
            return self.points.last().copied();
        }
        for i in 1..self.points.len() {
            if self.cumulative[i] >= d {
                let seg = self.cumulative[i] - self.cumulative[i - 1];
                if seg <= f32::EPSILON {
                    return Some(self.points[i]);
                }
                let t = (d - self.cumulative[i - 1]) / seg;
                return Some(self.points[i - 1] + (self.points[i] - self.points[i - 1]) * t);
            }
        }
        self.points.last().copied()
    }
}
