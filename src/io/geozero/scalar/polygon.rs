use geozero::{GeomProcessor, GeozeroGeometry};

use crate::geography::PolygonGeography;
use crate::io::geozero::scalar::process_coord;
use crate::s2::{Loop, Polygon, S2Point};

/// Emit a loop as a closed ring, counter-clockwise or (if `reverse`) clockwise.
fn process_ring<P: GeomProcessor>(
    ring: &Loop,
    reverse: bool,
    ring_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let mut ordered = ring.vertices().iter().collect::<Vec<&S2Point>>();
    if reverse {
        ordered.reverse();
    }
    if let Some(first) = ordered.first().copied() {
        ordered.push(first);
    }

    processor.linestring_begin(false, ordered.len(), ring_idx)?;
    for (coord_idx, vertex) in ordered.into_iter().enumerate() {
        process_coord(vertex, coord_idx, processor)?;
    }
    processor.linestring_end(false, ring_idx)?;
    Ok(())
}

/// One exterior ring with its holes, as loop indices. Holes are emitted clockwise.
struct RingGroup {
    exterior: usize,
    exterior_reversed: bool,
    interiors: Vec<usize>,
}

/// Group each shell with the holes directly inside it. A hole without a shell (only possible in
/// a polygon covering the rest of the sphere) becomes a clockwise exterior of its own.
fn ring_groups(polygon: &Polygon) -> Vec<RingGroup> {
    let mut groups = Vec::new();
    let mut orphans = Vec::new();

    for i in 0..polygon.num_loops() {
        if !polygon.is_hole(i) {
            groups.push(RingGroup {
                exterior: i,
                exterior_reversed: false,
                interiors: vec![],
            });
        }
    }

    for i in (0..polygon.num_loops()).filter(|&i| polygon.is_hole(i)) {
        let group = polygon
            .parent_shell(i)
            .and_then(|parent| groups.iter_mut().find(|g| g.exterior == parent));
        match group {
            Some(group) => group.interiors.push(i),
            None => orphans.push(i),
        }
    }

    groups.extend(orphans.into_iter().map(|i| RingGroup {
        exterior: i,
        exterior_reversed: true,
        interiors: vec![],
    }));
    groups
}

fn process_ring_group<P: GeomProcessor>(
    polygon: &Polygon,
    group: &RingGroup,
    tagged: bool,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let loops = polygon.loops();
    processor.polygon_begin(tagged, group.interiors.len() + 1, geom_idx)?;
    process_ring(&loops[group.exterior], group.exterior_reversed, 0, processor)?;
    for (interior_idx, i) in group.interiors.iter().enumerate() {
        process_ring(&loops[*i], true, interior_idx + 1, processor)?;
    }
    processor.polygon_end(tagged, geom_idx)?;
    Ok(())
}

/// An empty geography is an empty `POLYGON`, a single shell is a `POLYGON` and more are a
/// `MULTIPOLYGON`.
pub(crate) fn process_polygon_geography<P: GeomProcessor>(
    geog: &PolygonGeography,
    geom_idx: usize,
    processor: &mut P,
) -> geozero::error::Result<()> {
    let polygon = geog.polygon();
    let groups = ring_groups(polygon);
    match groups.as_slice() {
        [] => {
            processor.polygon_begin(true, 0, geom_idx)?;
            processor.polygon_end(true, geom_idx)?;
        }
        [group] => process_ring_group(polygon, group, true, geom_idx, processor)?,
        groups => {
            processor.multipolygon_begin(groups.len(), geom_idx)?;
            for (polygon_idx, group) in groups.iter().enumerate() {
                process_ring_group(polygon, group, false, polygon_idx, processor)?;
            }
            processor.multipolygon_end(geom_idx)?;
        }
    }
    Ok(())
}

impl GeozeroGeometry for PolygonGeography {
    fn process_geom<P: GeomProcessor>(&self, processor: &mut P) -> geozero::error::Result<()>
    where
        Self: Sized,
    {
        process_polygon_geography(self, 0, processor)
    }
}
