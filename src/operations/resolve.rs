use crate::diagnostics::DiagnosticSink;
use crate::error::{PolycurveError, ResolveError, Result};
use crate::geometry::curve::{Circle, FitTolerance};
use crate::math::Point3;
use crate::source::{CurveId, IndexedPolyCurve, PointList, Segment};
use crate::topology::{Edge, Loop};

/// Options controlling curve resolution.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ResolveOptions {
    /// Tolerances for fitting arc segments.
    pub fit_tolerance: FitTolerance,
}

/// Resolves an indexed poly-curve into a loop of edges.
///
/// Line segments contribute one straight edge per consecutive index pair.
/// Arc segments contribute one edge from the first to the third point,
/// backed by the circle through all three; arcs whose points admit no
/// unique circle are reported to the sink and skipped. Without a segment
/// list the points are joined in order.
pub struct ResolvePolyCurve<'a> {
    curve: &'a IndexedPolyCurve,
    length_unit: f64,
    options: ResolveOptions,
}

impl<'a> ResolvePolyCurve<'a> {
    /// Creates a new `ResolvePolyCurve` operation.
    #[must_use]
    pub fn new(curve: &'a IndexedPolyCurve, length_unit: f64) -> Self {
        Self {
            curve,
            length_unit,
            options: ResolveOptions::default(),
        }
    }

    /// Overrides the default options.
    #[must_use]
    pub fn with_options(mut self, options: ResolveOptions) -> Self {
        self.options = options;
        self
    }

    /// Executes the resolution.
    ///
    /// # Errors
    ///
    /// Returns a [`ResolveError`] if the length unit is not positive, an index
    /// lies outside `[1, point count]`, an arc segment does not carry exactly
    /// three indices, or a segment kind is unknown. No partial loop is returned.
    pub fn execute(&self, sink: &dyn DiagnosticSink) -> Result<Loop> {
        resolve_parts(
            &self.curve.id,
            &self.curve.points,
            self.curve.segments.as_deref(),
            self.length_unit,
            self.options,
            sink,
        )
    }
}

/// Resolves a point list and optional segments into a loop of edges.
///
/// Shorthand for [`ResolvePolyCurve`] with default options on an anonymous curve.
///
/// # Errors
///
/// See [`ResolvePolyCurve::execute`].
pub fn resolve(
    points: &PointList,
    length_unit: f64,
    segments: Option<&[Segment]>,
    sink: &dyn DiagnosticSink,
) -> Result<Loop> {
    resolve_parts(
        &CurveId::default(),
        points,
        segments,
        length_unit,
        ResolveOptions::default(),
        sink,
    )
}

fn resolve_parts(
    id: &CurveId,
    points: &PointList,
    segments: Option<&[Segment]>,
    length_unit: f64,
    options: ResolveOptions,
    sink: &dyn DiagnosticSink,
) -> Result<Loop> {
    if !length_unit.is_finite() || length_unit <= 0.0 {
        return Err(ResolveError::InvalidLengthUnit(length_unit).into());
    }

    let points = points.to_points(length_unit);

    let edges = match segments {
        Some(segments) => {
            let mut edges = Loop::new();
            for (position, segment) in segments.iter().enumerate() {
                match segment {
                    Segment::Line(indices) => push_line_run(&mut edges, &points, indices)?,
                    Segment::Arc(indices) => {
                        let [start, mid, end] = indices.as_slice() else {
                            return Err(ResolveError::InvalidArcIndex {
                                count: indices.len(),
                            }
                            .into());
                        };
                        let a = point_at(&points, *start)?;
                        let b = point_at(&points, *mid)?;
                        let c = point_at(&points, *end)?;

                        match Circle::from_three_points_with(a, b, c, options.fit_tolerance) {
                            Ok(circle) => edges.push(Edge::arc(*a, *c, circle)),
                            Err(PolycurveError::Geometry(err)) => sink.warning(
                                id,
                                &format!(
                                    "ignoring arc segment {} [{start}, {mid}, {end}]: {err}",
                                    position + 1
                                ),
                            ),
                            Err(err) => return Err(err),
                        }
                    }
                    Segment::Unknown { kind } => {
                        return Err(ResolveError::UnexpectedSegment { kind: kind.clone() }.into());
                    }
                }
            }
            edges
        }
        None => points
            .windows(2)
            .map(|pair| Edge::line(pair[0], pair[1]))
            .collect(),
    };

    tracing::debug!(
        curve = %id,
        points = points.len(),
        segments = segments.map(<[Segment]>::len),
        edges = edges.len(),
        "resolved indexed poly-curve"
    );

    Ok(edges)
}

/// Appends one straight edge per consecutive index pair. All indices are
/// validated before any edge is added.
fn push_line_run(edges: &mut Loop, points: &[Point3], indices: &[i64]) -> Result<()> {
    let run = indices
        .iter()
        .map(|&index| point_at(points, index))
        .collect::<Result<Vec<_>>>()?;
    for pair in run.windows(2) {
        edges.push(Edge::line(*pair[0], *pair[1]));
    }
    Ok(())
}

/// Looks up a one-based index.
fn point_at(points: &[Point3], index: i64) -> Result<&Point3> {
    usize::try_from(index)
        .ok()
        .and_then(|i| i.checked_sub(1))
        .and_then(|i| points.get(i))
        .ok_or_else(|| {
            ResolveError::IndexOutOfBounds {
                index,
                max: points.len(),
            }
            .into()
        })
}
