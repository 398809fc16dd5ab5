//! Boundary types through which external schema data reaches the resolver.
//!
//! Schema records are classified once into the closed [`Segment`] variant;
//! the resolver itself never looks at schema names.

mod points;
mod segment;

pub use points::PointList;
pub use segment::{Segment, SegmentRecord, ARC_INDEX, LINE_INDEX};

use std::fmt;

/// Identifies the curve instance a diagnostic refers to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CurveId {
    /// Instance id in the source model (the `#123` of a STEP file), if known.
    pub instance: Option<u64>,
    /// Entity type name, e.g. `IfcIndexedPolyCurve`.
    pub entity: String,
}

impl CurveId {
    /// Creates an id for a known instance.
    #[must_use]
    pub fn new(instance: u64, entity: impl Into<String>) -> Self {
        Self {
            instance: Some(instance),
            entity: entity.into(),
        }
    }

    /// Creates an id for a curve that has no instance number.
    #[must_use]
    pub fn anonymous(entity: impl Into<String>) -> Self {
        Self {
            instance: None,
            entity: entity.into(),
        }
    }
}

impl Default for CurveId {
    fn default() -> Self {
        Self::anonymous("IfcIndexedPolyCurve")
    }
}

impl fmt::Display for CurveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.instance {
            Some(id) => write!(f, "#{id}={}", self.entity),
            None => f.write_str(&self.entity),
        }
    }
}

/// An indexed poly-curve: a shared point list plus optional index segments.
#[derive(Debug, Clone, PartialEq)]
pub struct IndexedPolyCurve {
    /// Originating instance, used in diagnostics.
    pub id: CurveId,
    /// Coordinate rows in authoring units.
    pub points: PointList,
    /// Segment list; `None` means one implicit line through all points.
    pub segments: Option<Vec<Segment>>,
}

impl IndexedPolyCurve {
    /// Creates a curve without explicit segments.
    #[must_use]
    pub fn new(points: PointList) -> Self {
        Self {
            id: CurveId::default(),
            points,
            segments: None,
        }
    }

    /// Sets the originating instance id.
    #[must_use]
    pub fn with_id(mut self, id: CurveId) -> Self {
        self.id = id;
        self
    }

    /// Sets the segment list.
    #[must_use]
    pub fn with_segments(mut self, segments: Vec<Segment>) -> Self {
        self.segments = Some(segments);
        self
    }

    /// Sets the segment list from raw schema records.
    #[must_use]
    pub fn with_records(self, records: Vec<SegmentRecord>) -> Self {
        self.with_segments(records.into_iter().map(Segment::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn curve_id_display() {
        assert_eq!(
            CurveId::new(42, "IfcIndexedPolyCurve").to_string(),
            "#42=IfcIndexedPolyCurve"
        );
        assert_eq!(CurveId::default().to_string(), "IfcIndexedPolyCurve");
    }

    #[test]
    fn records_are_classified() {
        let curve = IndexedPolyCurve::new(PointList::TwoD(vec![[0.0, 0.0], [1.0, 0.0]]))
            .with_records(vec![
                SegmentRecord::new(LINE_INDEX, vec![1, 2]),
                SegmentRecord::new("IfcFoo", vec![1]),
            ]);
        let segments = curve.segments.unwrap_or_default();
        assert_eq!(segments[0], Segment::Line(vec![1, 2]));
        assert_eq!(
            segments[1],
            Segment::Unknown {
                kind: "IfcFoo".into()
            }
        );
    }
}
