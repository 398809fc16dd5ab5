use crate::math::Point3;

/// Coordinate rows of a point list, either two or three components each.
#[derive(Debug, Clone, PartialEq)]
pub enum PointList {
    /// Planar rows `(x, y)`.
    TwoD(Vec<[f64; 2]>),
    /// Spatial rows `(x, y, z)`.
    ThreeD(Vec<[f64; 3]>),
}

impl PointList {
    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::TwoD(rows) => rows.len(),
            Self::ThreeD(rows) => rows.len(),
        }
    }

    /// Returns whether the list has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the rows as coordinate slices.
    pub fn rows(&self) -> Box<dyn Iterator<Item = &[f64]> + '_> {
        match self {
            Self::TwoD(rows) => Box::new(rows.iter().map(<[f64; 2]>::as_slice)),
            Self::ThreeD(rows) => Box::new(rows.iter().map(<[f64; 3]>::as_slice)),
        }
    }

    /// Builds 3D points, scaling every component by `length_unit`.
    #[must_use]
    pub fn to_points(&self, length_unit: f64) -> Vec<Point3> {
        self.rows().map(|row| scaled_point(row, length_unit)).collect()
    }
}

/// Builds a point from up to three components; missing components are 0.
fn scaled_point(row: &[f64], length_unit: f64) -> Point3 {
    let component = |i: usize| row.get(i).map_or(0.0, |c| c * length_unit);
    Point3::new(component(0), component(1), component(2))
}
