use std::f64::consts::TAU;

use crate::error::{GeometryError, Result};
use crate::math::{Point3, Vector3, TOLERANCE};

use super::{Curve, CurveDomain};

/// Tolerances used when fitting a circle through three points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitTolerance {
    /// Upper bound on the sine of the angle between `b - a` and `c - a`
    /// below which the points count as collinear.
    pub collinearity: f64,
    /// Minimum distance between any two of the three points.
    pub coincidence: f64,
}

impl Default for FitTolerance {
    fn default() -> Self {
        Self {
            collinearity: 1e-9,
            coincidence: TOLERANCE,
        }
    }
}

/// A full circle in 3D space.
///
/// Defined by a center, radius, normal axis, and a reference direction
/// for the zero-angle. The parametric domain is `[0, 2*pi)` and the
/// curve is always closed.
///
/// `P(t) = center + radius * cos(t) * ref_dir + radius * sin(t) * binormal`
/// where `binormal = normal x ref_dir`, so increasing `t` runs
/// counter-clockwise about `normal`.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    center: Point3,
    radius: f64,
    normal: Vector3,
    ref_dir: Vector3,
}

impl Circle {
    /// Creates a new circle.
    ///
    /// # Arguments
    ///
    /// * `center` - Center of the circle
    /// * `radius` - Radius (must be positive)
    /// * `normal` - Normal vector defining the circle plane
    /// * `ref_dir` - Reference direction for angle = 0 (must be perpendicular to normal)
    ///
    /// # Errors
    ///
    /// Returns an error if the radius is non-positive, the normal is zero-length,
    /// or the reference direction is not perpendicular to the normal.
    pub fn new(center: Point3, radius: f64, normal: Vector3, ref_dir: Vector3) -> Result<Self> {
        if !radius.is_finite() || radius < TOLERANCE {
            return Err(
                GeometryError::Degenerate("circle radius must be positive".into()).into(),
            );
        }

        let normal_len = normal.norm();
        if normal_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let normal = normal / normal_len;

        let ref_len = ref_dir.norm();
        if ref_len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        let ref_dir = ref_dir / ref_len;

        if normal.dot(&ref_dir).abs() > 1e-9 {
            return Err(GeometryError::Degenerate(
                "reference direction must be perpendicular to normal".into(),
            )
            .into());
        }

        Ok(Self {
            center,
            radius,
            normal,
            ref_dir,
        })
    }

    /// Fits the unique circle through `a`, `b` and `c` using default tolerances.
    ///
    /// # Errors
    ///
    /// See [`Circle::from_three_points_with`].
    pub fn from_three_points(a: &Point3, b: &Point3, c: &Point3) -> Result<Self> {
        Self::from_three_points_with(a, b, c, FitTolerance::default())
    }

    /// Fits the unique circle through `a`, `b` and `c`.
    ///
    /// The normal is `(b - a) x (c - a)` normalized and the reference
    /// direction points from the center towards `a`. With this choice
    /// `a -> b -> c` runs counter-clockwise about the normal, so `a`
    /// sits at angle 0 and `b`, `c` at increasing angles in `(0, 2*pi)`.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::Coincident`] if two of the points are closer
    /// than `tolerance.coincidence`, and [`GeometryError::Collinear`] if the
    /// points do not span a plane within `tolerance.collinearity`.
    pub fn from_three_points_with(
        a: &Point3,
        b: &Point3,
        c: &Point3,
        tolerance: FitTolerance,
    ) -> Result<Self> {
        let u = b - a;
        let v = c - a;
        let u_len = u.norm();
        let v_len = v.norm();

        if u_len < tolerance.coincidence
            || v_len < tolerance.coincidence
            || (c - b).norm() < tolerance.coincidence
        {
            return Err(GeometryError::Coincident.into());
        }

        let w = u.cross(&v);
        let w_len = w.norm();
        // |w| = |u| |v| sin(angle), compared relative to the edge lengths.
        if !w_len.is_finite() || w_len <= tolerance.collinearity * u_len * v_len {
            return Err(GeometryError::Collinear.into());
        }

        let offset = (v * u.norm_squared() - u * v.norm_squared()).cross(&w)
            / (2.0 * w_len * w_len);
        let center = *a + offset;
        let radius = offset.norm();

        Self::new(center, radius, w, -offset)
    }

    /// Returns the center of the circle.
    #[must_use]
    pub fn center(&self) -> &Point3 {
        &self.center
    }

    /// Returns the radius of the circle.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Returns the normal vector of the circle plane.
    #[must_use]
    pub fn normal(&self) -> &Vector3 {
        &self.normal
    }

    /// Returns the reference direction (t=0 direction).
    #[must_use]
    pub fn ref_dir(&self) -> &Vector3 {
        &self.ref_dir
    }

    /// Returns the angle of `point` projected onto the circle plane,
    /// measured counter-clockwise about the normal from `ref_dir`, in `[0, 2*pi)`.
    #[must_use]
    pub fn angle_of(&self, point: &Point3) -> f64 {
        let d = point - self.center;
        let angle = d.dot(&self.binormal()).atan2(d.dot(&self.ref_dir));
        if angle < 0.0 {
            angle + TAU
        } else {
            angle
        }
    }

    /// Computes the binormal direction (`normal x ref_dir`).
    fn binormal(&self) -> Vector3 {
        self.normal.cross(&self.ref_dir)
    }
}

impl Curve for Circle {
    fn evaluate(&self, t: f64) -> Result<Point3> {
        let binormal = self.binormal();
        let x = self.radius * t.cos();
        let y = self.radius * t.sin();
        Ok(self.center + self.ref_dir * x + binormal * y)
    }

    fn tangent(&self, t: f64) -> Result<Vector3> {
        let binormal = self.binormal();
        let dx = -self.radius * t.sin();
        let dy = self.radius * t.cos();
        let tangent = self.ref_dir * dx + binormal * dy;
        let len = tangent.norm();
        if len < TOLERANCE {
            return Err(GeometryError::ZeroVector.into());
        }
        Ok(tangent / len)
    }

    fn domain(&self) -> CurveDomain {
        CurveDomain::new(0.0, TAU)
    }

    fn is_closed(&self) -> bool {
        true
    }
}
