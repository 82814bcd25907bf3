use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use log::debug;

use crate::index::MutableShapeIndex;

/// A shape index built on first access and kept for the lifetime of its owner.
///
/// The build closure runs at most once, even when several threads race on the first access.
/// Callers only ever get a shared reference to the built index.
#[derive(Default)]
pub struct LazyShapeIndex {
    index: OnceLock<MutableShapeIndex>,
    builds: AtomicUsize,
}

impl LazyShapeIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the index, running `build` against a fresh index if this is the first call.
    pub fn get_or_build<F>(&self, build: F) -> &MutableShapeIndex
    where
        F: FnOnce(&mut MutableShapeIndex),
    {
        self.index.get_or_init(|| {
            let mut index = MutableShapeIndex::new();
            build(&mut index);
            self.builds.fetch_add(1, Ordering::Relaxed);
            debug!(
                "built shape index with {} shapes and {} edges",
                index.num_shapes(),
                index.num_edges()
            );
            index
        })
    }

    pub fn is_built(&self) -> bool {
        self.index.get().is_some()
    }

    /// How many times the build closure has run. Never more than one.
    pub fn build_count(&self) -> usize {
        self.builds.load(Ordering::Relaxed)
    }
}

// A clone describes the same immutable geometry, so it starts unbuilt and builds its own index
// on demand.
impl Clone for LazyShapeIndex {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl fmt::Debug for LazyShapeIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LazyShapeIndex")
            .field("built", &self.is_built())
            .finish()
    }
}
