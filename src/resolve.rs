//! Point resolution: plane coordinates, domain coordinates, and element
//! references all normalize to a single [`Point`].
//!
//! The two external collaborators live here as narrow traits: a coordinate
//! system mapping domain (Q, P) pairs into the plane, and an element lookup
//! answering bounding-box queries for references like `"#my-dot"`. Both are
//! supplied by the caller through an [`Environment`] and never owned by the
//! engine.

use crate::errors::CalloutError;
use crate::measure::{CharTableMeasurer, TextMeasurer};
use crate::types::{BBox, Point};

/// A position input in one of three accepted forms.
#[derive(Debug, Clone, PartialEq)]
pub enum PointSpec {
    /// Plane coordinates, used verbatim
    Plane(Point),
    /// Domain coordinates, mapped through the environment's coordinate system
    Domain { q: f64, p: f64 },
    /// Reference to an external element; resolves to its bounding-box center
    Element(String),
}

impl From<Point> for PointSpec {
    fn from(p: Point) -> Self {
        PointSpec::Plane(p)
    }
}

impl From<(f64, f64)> for PointSpec {
    fn from(xy: (f64, f64)) -> Self {
        PointSpec::Plane(xy.into())
    }
}

impl From<&str> for PointSpec {
    fn from(reference: &str) -> Self {
        PointSpec::Element(reference.to_string())
    }
}

impl From<String> for PointSpec {
    fn from(reference: String) -> Self {
        PointSpec::Element(reference)
    }
}

/// Caller-supplied mapping from domain (Q, P) coordinates into the plane.
pub trait CoordSystem {
    fn to_x(&self, q: f64) -> f64;
    fn to_y(&self, p: f64) -> f64;
}

/// A coordinate system built from two axis transforms.
pub struct AxisTransforms<FX, FY> {
    pub to_x: FX,
    pub to_y: FY,
}

impl<FX, FY> CoordSystem for AxisTransforms<FX, FY>
where
    FX: Fn(f64) -> f64,
    FY: Fn(f64) -> f64,
{
    fn to_x(&self, q: f64) -> f64 {
        (self.to_x)(q)
    }

    fn to_y(&self, p: f64) -> f64 {
        (self.to_y)(p)
    }
}

/// Caller-supplied scene query: bounding box of a referenced element, or
/// `None` when the reference resolves to nothing.
pub trait ElementLookup {
    fn bounding_box(&self, reference: &str) -> Option<BBox>;
}

/// External collaborators for a construction call.
///
/// Bundles the optional coordinate system, the optional element lookup, and
/// the text measurer (defaulting to [`CharTableMeasurer`]).
pub struct Environment {
    coord_system: Option<Box<dyn CoordSystem>>,
    lookup: Option<Box<dyn ElementLookup>>,
    measurer: Box<dyn TextMeasurer>,
}

impl Default for Environment {
    fn default() -> Self {
        Environment {
            coord_system: None,
            lookup: None,
            measurer: Box::new(CharTableMeasurer::default()),
        }
    }
}

impl Environment {
    pub fn new() -> Self {
        Environment::default()
    }

    pub fn with_coord_system(mut self, cs: impl CoordSystem + 'static) -> Self {
        self.coord_system = Some(Box::new(cs));
        self
    }

    pub fn with_lookup(mut self, lookup: impl ElementLookup + 'static) -> Self {
        self.lookup = Some(Box::new(lookup));
        self
    }

    pub fn with_measurer(mut self, measurer: impl TextMeasurer + 'static) -> Self {
        self.measurer = Box::new(measurer);
        self
    }

    pub fn coord_system(&self) -> Option<&dyn CoordSystem> {
        self.coord_system.as_deref()
    }

    pub fn lookup(&self) -> Option<&dyn ElementLookup> {
        self.lookup.as_deref()
    }

    pub fn measurer(&self) -> &dyn TextMeasurer {
        self.measurer.as_ref()
    }
}

/// Resolve a point specification against the environment.
pub fn resolve(spec: &PointSpec, env: &Environment) -> Result<Point, CalloutError> {
    match spec {
        PointSpec::Plane(p) => finite(p.x, p.y),
        PointSpec::Domain { q, p } => {
            let cs = env.coord_system().ok_or(CalloutError::CoordSystemRequired)?;
            finite(cs.to_x(*q), cs.to_y(*p))
        }
        PointSpec::Element(reference) => {
            let bbox = env
                .lookup()
                .and_then(|l| l.bounding_box(reference))
                .ok_or_else(|| CalloutError::ElementNotFound {
                    reference: reference.clone(),
                })?;
            let center = bbox.center();
            crate::log::debug!(
                reference = %reference,
                x = center.x,
                y = center.y,
                "resolved element reference"
            );
            finite(center.x, center.y)
        }
    }
}

fn finite(x: f64, y: f64) -> Result<Point, CalloutError> {
    Point::try_new(x, y).map_err(|e| CalloutError::InvalidPoint {
        reason: e.to_string(),
    })
}
