//! Identity-keyed memo for the compositor.
//!
//! A compositor is rebuilt only when one of the callbacks it captures
//! (cell renderer, header renderer, width function, height function) changes
//! identity, or the pinned column count changes. Identity is pointer
//! equality on the shared `Rc`s, so re-wrapping the same closure in a new
//! `Rc` counts as a change.

use std::rc::Rc;

use super::compositor::{ComposeMetrics, ComposedGrid, Compositor, HostProps};
use super::renderer::SharedRenderer;
use crate::error::Result;
use crate::layout::{MountOrder, SharedSize};
use crate::types::{GridData, GridTheme, MountedCell, StickyColumns};

fn same_rc<T: ?Sized>(a: &Rc<T>, b: &Rc<T>) -> bool {
    std::ptr::eq(Rc::as_ptr(a).cast::<()>(), Rc::as_ptr(b).cast::<()>())
}

/// Everything a compositor captures. Two keys are equal when every callback
/// is the same allocation and the sticky count matches.
pub struct CompositorKey<D: ?Sized> {
    pub cell_renderer: SharedRenderer<D>,
    pub header_renderer: SharedRenderer<D>,
    pub column_width: SharedSize,
    pub row_height: SharedSize,
    pub sticky_columns: StickyColumns,
}

impl<D: ?Sized> Clone for CompositorKey<D> {
    fn clone(&self) -> Self {
        Self {
            cell_renderer: Rc::clone(&self.cell_renderer),
            header_renderer: Rc::clone(&self.header_renderer),
            column_width: Rc::clone(&self.column_width),
            row_height: Rc::clone(&self.row_height),
            sticky_columns: self.sticky_columns,
        }
    }
}

impl<D: ?Sized> PartialEq for CompositorKey<D> {
    fn eq(&self, other: &Self) -> bool {
        same_rc(&self.cell_renderer, &other.cell_renderer)
            && same_rc(&self.header_renderer, &other.header_renderer)
            && same_rc(&self.column_width, &other.column_width)
            && same_rc(&self.row_height, &other.row_height)
            && self.sticky_columns == other.sticky_columns
    }
}

impl<D: ?Sized> Eq for CompositorKey<D> {}

impl<D: ?Sized> CompositorKey<D> {
    /// Key describing an existing compositor
    pub fn of(compositor: &Compositor<D>) -> Self {
        Self {
            cell_renderer: Rc::clone(&compositor.cell_renderer),
            header_renderer: Rc::clone(&compositor.header_renderer),
            column_width: Rc::clone(&compositor.column_width),
            row_height: Rc::clone(&compositor.row_height),
            sticky_columns: compositor.sticky_columns,
        }
    }
}

/// Single-slot memo holding the most recent compositor.
pub struct CompositorCache<D: ?Sized> {
    slot: Option<(CompositorKey<D>, Rc<Compositor<D>>)>,
    mount_order: MountOrder,
    theme: GridTheme,
    hits: u64,
    misses: u64,
}

impl<D: GridData + ?Sized> Default for CompositorCache<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: GridData + ?Sized> CompositorCache<D> {
    pub fn new() -> Self {
        Self {
            slot: None,
            mount_order: MountOrder::default(),
            theme: GridTheme::default(),
            hits: 0,
            misses: 0,
        }
    }

    /// Mount order applied to every compositor this cache builds.
    /// Changing it drops the cached compositor.
    pub fn set_mount_order(&mut self, mount_order: MountOrder) {
        if self.mount_order != mount_order {
            self.mount_order = mount_order;
            self.slot = None;
        }
    }

    /// Theme applied to every compositor this cache builds.
    /// Changing it drops the cached compositor.
    pub fn set_theme(&mut self, theme: GridTheme) {
        if self.theme != theme {
            self.theme = theme;
            self.slot = None;
        }
    }

    /// Return the cached compositor if `key` matches, otherwise build and
    /// cache a new one. The flag is `true` on a hit.
    pub fn get_or_build(&mut self, key: &CompositorKey<D>) -> (Rc<Compositor<D>>, bool) {
        if let Some((cached_key, compositor)) = &self.slot {
            if cached_key == key {
                self.hits += 1;
                return (Rc::clone(compositor), true);
            }
        }
        self.misses += 1;
        let key = key.clone();
        let compositor = Rc::new(
            Compositor::new(
                Rc::clone(&key.cell_renderer),
                Rc::clone(&key.header_renderer),
                Rc::clone(&key.column_width),
                Rc::clone(&key.row_height),
                key.sticky_columns,
            )
            .with_mount_order(self.mount_order)
            .with_theme(self.theme.clone()),
        );
        self.slot = Some((key, Rc::clone(&compositor)));
        (compositor, false)
    }

    /// Compose through the cached compositor, reporting whether it was reused.
    pub fn compose_with_metrics(
        &mut self,
        key: &CompositorKey<D>,
        children: &[MountedCell],
        host: &HostProps,
        data: &D,
    ) -> Result<(ComposedGrid, ComposeMetrics)> {
        let (compositor, hit) = self.get_or_build(key);
        let (grid, mut metrics) = compositor.compose_with_metrics(children, host, data)?;
        metrics.cache_hit = hit;
        Ok((grid, metrics))
    }

    pub fn hits(&self) -> u64 {
        self.hits
    }

    pub fn misses(&self) -> u64 {
        self.misses
    }

    /// Drop the cached compositor.
    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }
}
