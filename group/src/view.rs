//! Inspector listing filter.
//!
//! Decides which overrides an editor lists for a given [`OverrideView`]. No
//! drawing happens here; the GUI layer iterates the result.

use overrides_core::{OverrideList, PropertyOverride};
use serde::Deserialize;

/// Listing options of one override list panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct OverrideView {
    /// List every property, not only enabled overrides.
    pub show_all: bool,
    /// Include properties flagged as hidden in the inspector.
    pub show_hidden: bool,
}

impl OverrideView {
    /// Only enabled, non-hidden overrides (plus pinned ones).
    pub const ACTIVE: Self = Self {
        show_all: false,
        show_hidden: false,
    };

    /// Every non-hidden property (plus pinned ones).
    pub const ALL: Self = Self {
        show_all: true,
        show_hidden: false,
    };

    /// Whether `property_override` is listed under this view.
    ///
    /// Pinned overrides are always listed.
    pub fn is_visible(&self, property_override: &PropertyOverride) -> bool {
        if property_override.pinned_state() {
            return true;
        }
        let shown_by_state = self.show_all || property_override.override_state();
        let shown_by_flags = self.show_hidden || !property_override.property_info().is_hidden();
        shown_by_state && shown_by_flags
    }
}

/// Overrides of `list` listed under `view`, in list order.
pub fn visible_overrides<'a>(
    list: &'a OverrideList,
    view: OverrideView,
) -> impl Iterator<Item = &'a PropertyOverride> + 'a {
    list.overrides().iter().filter(move |o| view.is_visible(o))
}
