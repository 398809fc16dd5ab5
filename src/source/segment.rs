/// Schema name of a line index list.
pub const LINE_INDEX: &str = "IfcLineIndex";

/// Schema name of an arc index list.
pub const ARC_INDEX: &str = "IfcArcIndex";

/// A segment record as delivered by the schema layer: the entity type
/// name plus its raw one-based indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentRecord {
    pub kind: String,
    pub indices: Vec<i64>,
}

impl SegmentRecord {
    #[must_use]
    pub fn new(kind: impl Into<String>, indices: Vec<i64>) -> Self {
        Self {
            kind: kind.into(),
            indices,
        }
    }
}

/// One segment of an indexed poly-curve.
///
/// Indices are one-based and unvalidated; the resolver checks them
/// against the point count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// A polyline through the referenced points.
    Line(Vec<i64>),
    /// A circular arc through `[start, mid, end]`. Any other length is rejected.
    Arc(Vec<i64>),
    /// A record of a kind the resolver does not handle.
    Unknown { kind: String },
}

impl Segment {
    /// Returns the kind name, as used in diagnostics.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::Line(_) => LINE_INDEX,
            Self::Arc(_) => ARC_INDEX,
            Self::Unknown { kind } => kind,
        }
    }
}

impl From<SegmentRecord> for Segment {
    fn from(record: SegmentRecord) -> Self {
        match record.kind.as_str() {
            LINE_INDEX => Self::Line(record.indices),
            ARC_INDEX => Self::Arc(record.indices),
            _ => Self::Unknown { kind: record.kind },
        }
    }
}
