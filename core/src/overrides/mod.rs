//! Property overrides and override lists.
//!
//! - [`PropertyOverride`] - Toggleable typed value for one shader property
//! - [`OverrideList`] - Overrides bound to a shader or a single material

mod list;
mod property_override;

pub use list::{ListId, OverrideBinding, OverrideList};
pub use property_override::PropertyOverride;
