//! # Material Overrides Core
//!
//! Per-renderer shader property overrides, independent of any engine.
//!
//! A host engine exposes shader reflection through [`ShaderReflection`].
//! Reflected [`PropertyInfo`] lists are memoized by [`PropertyInfoCache`] and
//! turned into [`PropertyOverride`]s grouped in [`OverrideList`]s. Applying a
//! list writes enabled values into a [`PropertySink`], typically a
//! [`PropertyBlock`] the host attaches to a renderer.

pub mod error;
pub mod handle;
pub mod overrides;
pub mod pool;
pub mod property;
pub mod sink;

pub use error::OverrideError;
pub use handle::{MaterialId, NodeId, PropertyId, RendererId, ShaderId, TextureHandle};
pub use overrides::{ListId, OverrideBinding, OverrideList, PropertyOverride};
pub use property::{
    BuiltinTexture, PropertyDesc, PropertyFlags, PropertyInfo, PropertyInfoCache,
    PropertyInfoList, PropertyType, PropertyValue, ShaderDesc, ShaderReflection,
    TextureDimension, TextureValue, create_overrides,
};
pub use sink::{BlockValue, PropertyBlock, PropertySink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
