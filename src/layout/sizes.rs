//! Width/height lookup functions indexed by column/row.

use std::rc::Rc;

/// Default column width in pixels
pub const DEFAULT_COLUMN_WIDTH: f32 = 100.0;

/// Default row height in pixels
pub const DEFAULT_ROW_HEIGHT: f32 = 36.0;

/// Pixel size of the row or column at `index`.
///
/// Must be a pure function of the index for the duration of one render.
pub trait SizeLookup {
    fn size_at(&self, index: u32) -> f32;
}

impl<F> SizeLookup for F
where
    F: Fn(u32) -> f32,
{
    fn size_at(&self, index: u32) -> f32 {
        self(index)
    }
}

/// Shared size function; identity (pointer equality) keys the compositor cache.
pub type SharedSize = Rc<dyn SizeLookup>;

/// Size with non-finite or negative values treated as 0.
pub fn size_or_zero(lookup: &dyn SizeLookup, index: u32) -> f32 {
    let size = lookup.size_at(index);
    if size.is_finite() && size > 0.0 {
        size
    } else {
        0.0
    }
}

/// Explicit per-index sizes with a fallback for indices past the end.
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    sizes: Vec<f32>,
    fallback: f32,
}

impl SizeTable {
    pub fn new(sizes: Vec<f32>, fallback: f32) -> Self {
        Self { sizes, fallback }
    }

    /// Same size for every index
    pub fn uniform(size: f32) -> Self {
        Self::new(Vec::new(), size)
    }

    pub fn into_shared(self) -> SharedSize {
        Rc::new(self)
    }
}

impl SizeLookup for SizeTable {
    fn size_at(&self, index: u32) -> f32 {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.sizes.get(i))
            .copied()
            .unwrap_or(self.fallback)
    }
}
