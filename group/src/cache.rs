//! Flattened renderer apply cache.

use overrides_core::RendererId;

/// One (renderer, material slot) pair with at least one bound override list.
///
/// List fields index into the owning group's shader-level and material-level
/// list sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplyCacheEntry {
    pub renderer: RendererId,
    /// Material slot on the renderer.
    pub slot: usize,
    pub shader_list: Option<usize>,
    pub material_list: Option<usize>,
}

/// Derived, never persisted. Rebuilt whenever discovery or bindings change.
#[derive(Debug, Clone, Default)]
pub struct ApplyCache {
    entries: Vec<ApplyCacheEntry>,
}

impl ApplyCache {
    pub fn entries(&self) -> &[ApplyCacheEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries of one renderer, in slot order.
    pub fn entries_for(&self, renderer: RendererId) -> impl Iterator<Item = &ApplyCacheEntry> {
        self.entries.iter().filter(move |e| e.renderer == renderer)
    }

    pub(crate) fn clear(&mut self) {
        self.entries.clear();
    }

    pub(crate) fn push(&mut self, entry: ApplyCacheEntry) {
        self.entries.push(entry);
    }
}
