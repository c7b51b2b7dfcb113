//! Shader property value types.
//!
//! Colors and vectors use plain `[f32; 4]` arrays to keep the crate free of
//! math library types.

use crate::handle::TextureHandle;

/// Declared type of a shader property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    /// RGBA color.
    Color,
    /// Four-component float vector.
    Vector,
    /// Single float.
    Float,
    /// Single float constrained to a `[min, max]` range.
    Range,
    /// Texture reference.
    Texture,
    /// Integer.
    Int,
}

impl PropertyType {
    /// Whether values of this type are stored as a single float.
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float | Self::Range)
    }

    /// Whether values of this type are stored as a four-component vector.
    pub fn is_vector(self) -> bool {
        matches!(self, Self::Color | Self::Vector)
    }
}

bitflags::bitflags! {
    /// Shader property attribute flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct PropertyFlags: u32 {
        /// Not shown in the default inspector listing.
        const HIDE_IN_INSPECTOR = 1 << 0;
        /// Value is expected to come from per-renderer data.
        const PER_RENDERER_DATA = 1 << 1;
        /// Texture has no tiling/offset fields.
        const NO_SCALE_OFFSET = 1 << 2;
        /// Texture is expected to be a normal map.
        const NORMAL = 1 << 3;
        /// Color is high dynamic range.
        const HDR = 1 << 4;
        /// Value is in gamma space.
        const GAMMA = 1 << 5;
        /// Texture data cannot be modified from the material.
        const NON_MODIFIABLE_TEXTURE_DATA = 1 << 6;
        /// The shader's main texture.
        const MAIN_TEXTURE = 1 << 7;
        /// The shader's main color.
        const MAIN_COLOR = 1 << 8;
    }
}

/// Dimensionality of a texture property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextureDimension {
    /// Dimension unknown or not applicable.
    #[default]
    None,
    /// Any dimension accepted.
    Any,
    Tex2D,
    Tex3D,
    Cube,
    Tex2DArray,
    CubeArray,
}

/// Engine-provided fallback textures used as shader defaults.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltinTexture {
    White,
    Black,
    Gray,
    /// Flat normal map.
    Bump,
    BlackVolume,
    BlackCube,
    MagentaCubeArray,
}

impl BuiltinTexture {
    /// Resolve a shader's declared default texture.
    ///
    /// Returns `None` when the dimension has no engine fallback or the 2D
    /// default name is not one of `white`, `black`, `gray` or `bump`.
    pub fn for_default(dimension: TextureDimension, default_name: &str) -> Option<Self> {
        match dimension {
            TextureDimension::Tex2D => match default_name {
                "white" => Some(Self::White),
                "black" => Some(Self::Black),
                "gray" => Some(Self::Gray),
                "bump" => Some(Self::Bump),
                _ => None,
            },
            TextureDimension::Tex3D => Some(Self::BlackVolume),
            TextureDimension::Cube => Some(Self::BlackCube),
            TextureDimension::CubeArray => Some(Self::MagentaCubeArray),
            _ => None,
        }
    }
}

/// A texture value written into a property block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextureValue {
    /// One of the engine's builtin textures.
    Builtin(BuiltinTexture),
    /// A host texture.
    Handle(TextureHandle),
}

impl From<TextureHandle> for TextureValue {
    fn from(handle: TextureHandle) -> Self {
        Self::Handle(handle)
    }
}

impl From<BuiltinTexture> for TextureValue {
    fn from(builtin: BuiltinTexture) -> Self {
        Self::Builtin(builtin)
    }
}

/// A typed property value held by an override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// RGBA color.
    Color([f32; 4]),
    /// Four-component vector.
    Vector([f32; 4]),
    /// Float (used by both `Float` and `Range` properties).
    Float(f32),
    /// Integer.
    Int(i32),
    /// Texture, or `None` for an unassigned slot.
    Texture(Option<TextureValue>),
}

impl PropertyValue {
    /// Whether this value can be stored in a property of the given type.
    pub fn matches(&self, property_type: PropertyType) -> bool {
        matches!(
            (self, property_type),
            (Self::Color(_), PropertyType::Color)
                | (Self::Vector(_), PropertyType::Vector)
                | (Self::Float(_), PropertyType::Float | PropertyType::Range)
                | (Self::Int(_), PropertyType::Int)
                | (Self::Texture(_), PropertyType::Texture)
        )
    }

    /// Short type name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Vector(_) => "vector",
            Self::Float(_) => "float",
            Self::Int(_) => "int",
            Self::Texture(_) => "texture",
        }
    }
}
