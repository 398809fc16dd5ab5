//! Resolution of indexed poly-curves into edge loops.
//!
//! An indexed poly-curve is a shared point list plus an ordered list of
//! segments that reference points by one-based index: straight line runs
//! or three-point circular arcs. [`operations::ResolvePolyCurve`] turns one
//! such curve into a [`topology::Loop`] of straight and circle-backed edges.

pub mod diagnostics;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod source;
pub mod topology;

pub use diagnostics::{CollectingSink, DiagnosticSink, TracingSink, Warning};
pub use error::{GeometryError, PolycurveError, ResolveError, Result};
pub use operations::{resolve, ResolveOptions, ResolvePolyCurve};
pub use source::{CurveId, IndexedPolyCurve, PointList, Segment, SegmentRecord};
pub use topology::{Edge, Loop};
