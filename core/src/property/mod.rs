//! Shader property metadata.
//!
//! - [`ShaderReflection`] - Host interface for enumerating a shader's properties
//! - [`PropertyInfo`] - Immutable descriptor of one reflected property
//! - [`PropertyInfoCache`] - Per-shader memo of reflected descriptor lists
//! - [`ShaderDesc`] / [`PropertyDesc`] - Plain-data shader declarations

mod cache;
mod desc;
mod info;
mod types;

pub use cache::{PropertyInfoCache, PropertyInfoList, create_overrides};
pub use desc::{PropertyDesc, ShaderDesc};
pub use info::{PropertyInfo, ShaderReflection};
pub use types::{
    BuiltinTexture, PropertyFlags, PropertyType, PropertyValue, TextureDimension, TextureValue,
};
