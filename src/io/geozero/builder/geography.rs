use geozero::{FeatureProcessor, GeomProcessor, PropertyProcessor};

use crate::error::{GeographyError, Result};
use crate::geography::Geography;
use crate::io::geozero::builder::{
    fail, reject_geometry_types, GeographyBuilderTrait, PointBuilder, PolygonBuilder,
    PolygonBuilderOptions, PolylineBuilder,
};

#[derive(Debug, Default)]
enum Inner {
    /// No geometry event seen yet.
    #[default]
    Pending,
    Point(PointBuilder),
    Polyline(PolylineBuilder),
    Polygon(PolygonBuilder),
}

/// A builder for any supported geometry type. The kind of geography is chosen by the first
/// geometry event of the feature.
#[derive(Debug, Default)]
pub struct GeographyBuilder {
    options: PolygonBuilderOptions,
    inner: Inner,
    error: Option<GeographyError>,
}

impl GeographyBuilder {
    pub fn new(options: PolygonBuilderOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    fn start_point(&mut self) {
        if let Inner::Pending = self.inner {
            self.inner = Inner::Point(PointBuilder::new());
        }
    }

    fn start_polyline(&mut self) {
        if let Inner::Pending = self.inner {
            self.inner = Inner::Polyline(PolylineBuilder::new());
        }
    }

    fn start_polygon(&mut self) {
        if let Inner::Pending = self.inner {
            self.inner = Inner::Polygon(PolygonBuilder::new(self.options));
        }
    }
}

/// Forward one event to whichever builder is active.
macro_rules! forward {
    ($self:ident, $inner:expr, $method:ident($($arg:expr),*)) => {
        match $inner {
            Inner::Point(builder) => builder.$method($($arg),*),
            Inner::Polyline(builder) => builder.$method($($arg),*),
            Inner::Polygon(builder) => builder.$method($($arg),*),
            Inner::Pending => fail(
                &mut $self.error,
                GeographyError::InvalidGeometry(format!(
                    "`{}` received before any geometry started",
                    stringify!($method)
                )),
            ),
        }
    };
}

impl GeographyBuilderTrait for GeographyBuilder {
    fn build(mut self) -> Result<Geography> {
        if let Some(err) = self.error.take() {
            return Err(err);
        }
        match self.inner {
            Inner::Point(builder) => builder.build(),
            Inner::Polyline(builder) => builder.build(),
            Inner::Polygon(builder) => builder.build(),
            Inner::Pending => Err(GeographyError::MissingInput(
                "No geometry was processed".into(),
            )),
        }
    }

    fn take_error(&mut self) -> Option<GeographyError> {
        self.error.take().or_else(|| match &mut self.inner {
            Inner::Point(builder) => builder.take_error(),
            Inner::Polyline(builder) => builder.take_error(),
            Inner::Polygon(builder) => builder.take_error(),
            Inner::Pending => None,
        })
    }
}

#[allow(unused_variables)]
impl GeomProcessor for GeographyBuilder {
    fn xy(&mut self, x: f64, y: f64, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, xy(x, y, idx))
    }

    fn empty_point(&mut self, idx: usize) -> geozero::error::Result<()> {
        self.start_point();
        forward!(self, &mut self.inner, empty_point(idx))
    }

    fn point_begin(&mut self, idx: usize) -> geozero::error::Result<()> {
        self.start_point();
        forward!(self, &mut self.inner, point_begin(idx))
    }

    fn point_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, point_end(idx))
    }

    fn multipoint_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.start_point();
        forward!(self, &mut self.inner, multipoint_begin(size, idx))
    }

    fn multipoint_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, multipoint_end(idx))
    }

    fn linestring_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        self.start_polyline();
        forward!(self, &mut self.inner, linestring_begin(tagged, size, idx))
    }

    fn linestring_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, linestring_end(tagged, idx))
    }

    fn multilinestring_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.start_polyline();
        forward!(self, &mut self.inner, multilinestring_begin(size, idx))
    }

    fn multilinestring_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, multilinestring_end(idx))
    }

    fn polygon_begin(
        &mut self,
        tagged: bool,
        size: usize,
        idx: usize,
    ) -> geozero::error::Result<()> {
        self.start_polygon();
        forward!(self, &mut self.inner, polygon_begin(tagged, size, idx))
    }

    fn polygon_end(&mut self, tagged: bool, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, polygon_end(tagged, idx))
    }

    fn multipolygon_begin(&mut self, size: usize, idx: usize) -> geozero::error::Result<()> {
        self.start_polygon();
        forward!(self, &mut self.inner, multipolygon_begin(size, idx))
    }

    fn multipolygon_end(&mut self, idx: usize) -> geozero::error::Result<()> {
        forward!(self, &mut self.inner, multipolygon_end(idx))
    }

    reject_geometry_types! {
        "Geometry collections and curved geometries are not supported";
        geometrycollection_begin(size: usize, idx: usize),
        circularstring_begin(size: usize, idx: usize),
        compoundcurve_begin(size: usize, idx: usize),
        curvepolygon_begin(size: usize, idx: usize),
        multicurve_begin(size: usize, idx: usize),
        multisurface_begin(size: usize, idx: usize),
        triangle_begin(tagged: bool, size: usize, idx: usize),
        polyhedralsurface_begin(size: usize, idx: usize),
        tin_begin(size: usize, idx: usize),
    }
}

impl PropertyProcessor for GeographyBuilder {}

#[allow(unused_variables)]
impl FeatureProcessor for GeographyBuilder {
    fn feature_begin(&mut self, idx: u64) -> geozero::error::Result<()> {
        self.inner = Inner::Pending;
        Ok(())
    }

    fn feature_end(&mut self, idx: u64) -> geozero::error::Result<()> {
        match &mut self.inner {
            Inner::Polygon(builder) => builder.feature_end(idx),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::geography::GeographyTrait;
    use crate::test::{geometrycollection, linestring, multipoint, point_wkb, polygon_with_hole};

    fn build(wkb: &[u8]) -> Result<Geography> {
        GeographyBuilder::new(Default::default()).build_from_wkb(wkb, 0)
    }

    #[test]
    fn dispatches_on_first_event() {
        assert!(matches!(
            build(&point_wkb(0.0, 0.0)).unwrap(),
            Geography::Point(_)
        ));
        assert!(matches!(build(&multipoint()).unwrap(), Geography::Point(_)));
        assert!(matches!(
            build(&linestring()).unwrap(),
            Geography::Polyline(_)
        ));
        let polygon = build(&polygon_with_hole()).unwrap();
        assert!(matches!(polygon, Geography::Polygon(_)));
        assert_eq!(polygon.dimension(), 2);
    }

    #[test]
    fn geometry_collection_is_rejected() {
        assert!(matches!(
            build(&geometrycollection()),
            Err(GeographyError::IncorrectType(_))
        ));
    }
}
