use crate::error::{GeometryError, Result};
use crate::geometry::curve::{Circle, Curve, CurveDomain};
use crate::math::{Point3, Vector3, TOLERANCE};

/// A directed edge between two points.
///
/// An edge without a basis is a straight segment. An edge whose basis is
/// a [`Circle`] is the arc of that circle running counter-clockwise about
/// the circle normal from `start` to `end`.
#[derive(Debug, Clone, PartialEq)]
pub struct Edge {
    start: Point3,
    end: Point3,
    basis: Option<Circle>,
}

impl Edge {
    /// Creates a straight edge.
    #[must_use]
    pub fn line(start: Point3, end: Point3) -> Self {
        Self {
            start,
            end,
            basis: None,
        }
    }

    /// Creates an arc edge supported by `circle`.
    #[must_use]
    pub fn arc(start: Point3, end: Point3, circle: Circle) -> Self {
        Self {
            start,
            end,
            basis: Some(circle),
        }
    }

    /// Returns the start point.
    #[must_use]
    pub fn start(&self) -> &Point3 {
        &self.start
    }

    /// Returns the end point.
    #[must_use]
    pub fn end(&self) -> &Point3 {
        &self.end
    }

    /// Returns the supporting circle, if this edge is an arc.
    #[must_use]
    pub fn basis(&self) -> Option<&Circle> {
        self.basis.as_ref()
    }

    /// Returns whether this edge is backed by a circle.
    #[must_use]
    pub fn is_arc(&self) -> bool {
        self.basis.is_some()
    }

    /// Returns the swept angle of an arc edge, or `None` for a straight edge.
    ///
    /// The angle lies in `(0, 2*pi]`; coinciding end points give a full turn.
    #[must_use]
    pub fn sweep_angle(&self) -> Option<f64> {
        self.basis.as_ref().map(|circle| {
            let sweep = circle.angle_of(&self.end) - circle.angle_of(&self.start);
            if sweep <= TOLERANCE {
                sweep + std::f64::consts::TAU
            } else {
                sweep
            }
        })
    }

    /// Returns the length of the edge: the chord for lines, `radius * sweep` for arcs.
    #[must_use]
    pub fn length(&self) -> f64 {
        match (&self.basis, self.sweep_angle()) {
            (Some(circle), Some(sweep)) => circle.radius() * sweep,
            _ => (self.end - self.start).norm(),
        }
    }

    /// Returns the point halfway along the edge.
    ///
    /// # Errors
    ///
    /// Returns an error if the edge cannot be evaluated.
    pub fn midpoint(&self) -> Result<Point3> {
        let domain = self.domain();
        self.evaluate(0.5 * (domain.t_min + domain.t_max))
    }
}

/// Lines are parameterized over `[0, 1]`; arcs over `[0, sweep]` starting at `start`.
impl Curve for Edge {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        match &self.basis {
            None => Ok(self.start + (self.end - self.start) * t),
            Some(circle) => circle.evaluate(circle.angle_of(&self.start) + t),
        }
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        match &self.basis {
            None => {
                let dir = self.end - self.start;
                let len = dir.norm();
                if len < TOLERANCE {
                    return Err(GeometryError::ZeroVector.into());
                }
                Ok(dir / len)
            }
            Some(circle) => circle.tangent(circle.angle_of(&self.start) + t),
        }
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, self.sweep_angle().unwrap_or(1.0))
    }

    fn is_closed(&self) -> bool {
        (self.end - self.start).norm() < TOLERANCE
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::f64::consts::{FRAC_PI_2, PI};

    fn quarter_arc() -> Edge {
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(0.5_f64.sqrt(), 0.5_f64.sqrt(), 0.0);
        let c = Point3::new(0.0, 1.0, 0.0);
        Edge::arc(a, c, Circle::from_three_points(&a, &b, &c).unwrap())
    }

    #[test]
    fn line_length_3_4_5() {
        let e = Edge::line(Point3::origin(), Point3::new(3.0, 4.0, 0.0));
        assert!(!e.is_arc());
        assert_relative_eq!(e.length(), 5.0, epsilon = 1e-12);
        assert!(e.sweep_angle().is_none());
    }

    #[test]
    fn line_midpoint() {
        let e = Edge::line(Point3::new(0.0, 0.0, 2.0), Point3::new(2.0, 0.0, 2.0));
        let m = e.midpoint().unwrap();
        assert!((m - Point3::new(1.0, 0.0, 2.0)).norm() < 1e-12);
    }

    #[test]
    fn quarter_arc_sweep_and_length() {
        let e = quarter_arc();
        assert!(e.is_arc());
        assert_relative_eq!(e.sweep_angle().unwrap(), FRAC_PI_2, epsilon = 1e-9);
        assert_relative_eq!(e.length(), FRAC_PI_2, epsilon = 1e-9);
    }

    #[test]
    fn arc_midpoint_lies_between_end_points() {
        let m = quarter_arc().midpoint().unwrap();
        let expected = Point3::new(0.5_f64.sqrt(), 0.5_f64.sqrt(), 0.0);
        assert!((m - expected).norm() < 1e-9, "m={m}");
    }

    #[test]
    fn arc_evaluates_end_points() {
        let e = quarter_arc();
        let d = e.domain();
        assert!((e.evaluate(d.t_min).unwrap() - e.start()).norm() < 1e-9);
        assert!((e.evaluate(d.t_max).unwrap() - e.end()).norm() < 1e-9);
    }

    #[test]
    fn major_arc_sweeps_past_pi() {
        // Start and end close together, mid point on the far side.
        let a = Point3::new(1.0, 0.0, 0.0);
        let b = Point3::new(-1.0, 0.0, 0.0);
        let c = Point3::new(0.0, -1.0, 0.0);
        let e = Edge::arc(a, c, Circle::from_three_points(&a, &b, &c).unwrap());
        assert_relative_eq!(e.sweep_angle().unwrap(), 1.5 * PI, epsilon = 1e-9);
    }
}
