//! Reflected shader property descriptors.

use crate::handle::PropertyId;

use super::types::{
    BuiltinTexture, PropertyFlags, PropertyType, PropertyValue, TextureDimension, TextureValue,
};

/// Shader reflection interface provided by the host engine.
///
/// Properties are addressed by their declaration index in `0..property_count()`.
/// Type-specific queries are only called for properties of the matching type.
pub trait ShaderReflection {
    /// Number of declared properties.
    fn property_count(&self) -> usize;
    /// Identifier used for lookup (e.g. `_BaseColor`).
    fn property_name(&self, index: usize) -> &str;
    /// Human-readable description.
    fn property_description(&self, index: usize) -> &str;
    fn property_type(&self, index: usize) -> PropertyType;
    fn property_flags(&self, index: usize) -> PropertyFlags;
    /// `[min, max]` of a `Range` property.
    fn property_range_limits(&self, index: usize) -> [f32; 2];
    /// Default of a `Float` or `Range` property.
    fn property_default_float(&self, index: usize) -> f32;
    /// Default of a `Color` or `Vector` property.
    fn property_default_vector(&self, index: usize) -> [f32; 4];
    /// Default of an `Int` property.
    fn property_default_int(&self, index: usize) -> i32;
    fn property_texture_dimension(&self, index: usize) -> TextureDimension;
    /// Declared default texture name of a `Texture` property (e.g. `white`).
    fn property_texture_default_name(&self, index: usize) -> &str;
}

#[derive(Debug, Clone, PartialEq)]
enum PropertyDefault {
    Float(f32),
    Vector([f32; 4]),
    Int(i32),
    Texture {
        dimension: TextureDimension,
        name: String,
        value: Option<TextureValue>,
    },
}

/// Immutable descriptor of one shader property.
///
/// Type-specific accessors ([`range`](Self::range),
/// [`texture_dimension`](Self::texture_dimension), the `default_*` family)
/// panic when called on a property of a different type.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyInfo {
    display_name: String,
    name: String,
    id: PropertyId,
    property_type: PropertyType,
    flags: PropertyFlags,
    range: [f32; 2],
    default: PropertyDefault,
}

impl PropertyInfo {
    /// Reflect the property at `index` of a shader.
    pub fn from_reflection(shader: &dyn ShaderReflection, index: usize) -> Self {
        let name = shader.property_name(index).to_owned();
        let property_type = shader.property_type(index);

        let range = if property_type == PropertyType::Range {
            shader.property_range_limits(index)
        } else {
            [0.0, 0.0]
        };

        let default = match property_type {
            PropertyType::Color | PropertyType::Vector => {
                PropertyDefault::Vector(shader.property_default_vector(index))
            }
            PropertyType::Float | PropertyType::Range => {
                PropertyDefault::Float(shader.property_default_float(index))
            }
            PropertyType::Int => PropertyDefault::Int(shader.property_default_int(index)),
            PropertyType::Texture => {
                let dimension = shader.property_texture_dimension(index);
                let default_name = shader.property_texture_default_name(index).to_owned();
                let value = BuiltinTexture::for_default(dimension, &default_name)
                    .map(TextureValue::Builtin);
                PropertyDefault::Texture {
                    dimension,
                    name: default_name,
                    value,
                }
            }
        };

        Self {
            display_name: shader.property_description(index).to_owned(),
            id: PropertyId::from_name(&name),
            name,
            property_type,
            flags: shader.property_flags(index),
            range,
            default,
        }
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> PropertyId {
        self.id
    }

    pub fn property_type(&self) -> PropertyType {
        self.property_type
    }

    pub fn flags(&self) -> PropertyFlags {
        self.flags
    }

    /// Whether the property is hidden from the default inspector listing.
    pub fn is_hidden(&self) -> bool {
        self.flags.contains(PropertyFlags::HIDE_IN_INSPECTOR)
    }

    /// Whether a color property is high dynamic range.
    pub fn is_hdr(&self) -> bool {
        self.flags.contains(PropertyFlags::HDR)
    }

    /// `[min, max]` limits. Only valid for `Range` properties.
    pub fn range(&self) -> [f32; 2] {
        assert_eq!(
            self.property_type,
            PropertyType::Range,
            "range() called on {} property '{}'",
            type_label(self.property_type),
            self.name
        );
        self.range
    }

    /// Only valid for `Texture` properties.
    pub fn texture_dimension(&self) -> TextureDimension {
        match &self.default {
            PropertyDefault::Texture { dimension, .. } => *dimension,
            _ => self.mismatch("texture_dimension"),
        }
    }

    /// Only valid for `Float` and `Range` properties.
    pub fn default_float_value(&self) -> f32 {
        match self.default {
            PropertyDefault::Float(v) => v,
            _ => self.mismatch("default_float_value"),
        }
    }

    /// Only valid for `Color` and `Vector` properties.
    pub fn default_vector_value(&self) -> [f32; 4] {
        match self.default {
            PropertyDefault::Vector(v) => v,
            _ => self.mismatch("default_vector_value"),
        }
    }

    /// Only valid for `Int` properties.
    pub fn default_int_value(&self) -> i32 {
        match self.default {
            PropertyDefault::Int(v) => v,
            _ => self.mismatch("default_int_value"),
        }
    }

    /// Declared default texture name. Only valid for `Texture` properties.
    pub fn default_texture_name(&self) -> &str {
        match &self.default {
            PropertyDefault::Texture { name, .. } => name,
            _ => self.mismatch("default_texture_name"),
        }
    }

    /// Resolved default texture. Only valid for `Texture` properties.
    pub fn default_texture_value(&self) -> Option<TextureValue> {
        match &self.default {
            PropertyDefault::Texture { value, .. } => *value,
            _ => self.mismatch("default_texture_value"),
        }
    }

    /// The default as a typed value matching [`property_type`](Self::property_type).
    pub fn default_value(&self) -> PropertyValue {
        match (&self.default, self.property_type) {
            (PropertyDefault::Vector(v), PropertyType::Color) => PropertyValue::Color(*v),
            (PropertyDefault::Vector(v), _) => PropertyValue::Vector(*v),
            (PropertyDefault::Float(v), _) => PropertyValue::Float(*v),
            (PropertyDefault::Int(v), _) => PropertyValue::Int(*v),
            (PropertyDefault::Texture { value, .. }, _) => PropertyValue::Texture(*value),
        }
    }

    fn mismatch(&self, accessor: &str) -> ! {
        panic!(
            "{accessor}() called on {} property '{}'",
            type_label(self.property_type),
            self.name
        )
    }
}

fn type_label(property_type: PropertyType) -> &'static str {
    match property_type {
        PropertyType::Color => "color",
        PropertyType::Vector => "vector",
        PropertyType::Float => "float",
        PropertyType::Range => "range",
        PropertyType::Texture => "texture",
        PropertyType::Int => "int",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyDesc, ShaderDesc};

    fn shader() -> ShaderDesc {
        ShaderDesc::new("Lit")
            .with_property(
                PropertyDesc::color("_BaseColor", [1.0, 0.5, 0.25, 1.0])
                    .with_flags(PropertyFlags::HDR),
            )
            .with_property(
                PropertyDesc::range("_Smoothness", 0.5, [0.0, 1.0])
                    .with_description("Smoothness"),
            )
            .with_property(PropertyDesc::texture("_BaseMap", TextureDimension::Tex2D, "white"))
            .with_property(
                PropertyDesc::texture("_Lut", TextureDimension::Tex2D, "")
                    .with_flags(PropertyFlags::HIDE_IN_INSPECTOR),
            )
            .with_property(PropertyDesc::int("_Mode", 2))
    }

    #[test]
    fn reflects_color() {
        let info = PropertyInfo::from_reflection(&shader(), 0);
        assert_eq!(info.name(), "_BaseColor");
        assert_eq!(info.display_name(), "_BaseColor");
        assert_eq!(info.id(), PropertyId::from_name("_BaseColor"));
        assert_eq!(info.property_type(), PropertyType::Color);
        assert!(info.is_hdr());
        assert_eq!(info.default_vector_value(), [1.0, 0.5, 0.25, 1.0]);
        assert_eq!(info.default_value(), PropertyValue::Color([1.0, 0.5, 0.25, 1.0]));
    }

    #[test]
    fn reflects_range() {
        let info = PropertyInfo::from_reflection(&shader(), 1);
        assert_eq!(info.display_name(), "Smoothness");
        assert_eq!(info.range(), [0.0, 1.0]);
        assert_eq!(info.default_float_value(), 0.5);
        assert_eq!(info.default_value(), PropertyValue::Float(0.5));
    }

    #[test]
    fn reflects_texture_defaults() {
        let base = PropertyInfo::from_reflection(&shader(), 2);
        assert_eq!(base.texture_dimension(), TextureDimension::Tex2D);
        assert_eq!(base.default_texture_name(), "white");
        assert_eq!(
            base.default_texture_value(),
            Some(TextureValue::Builtin(BuiltinTexture::White))
        );

        let lut = PropertyInfo::from_reflection(&shader(), 3);
        assert!(lut.is_hidden());
        assert_eq!(lut.default_texture_value(), None);
        assert_eq!(lut.default_value(), PropertyValue::Texture(None));
    }

    #[test]
    fn reflects_int() {
        let info = PropertyInfo::from_reflection(&shader(), 4);
        assert_eq!(info.default_int_value(), 2);
    }

    #[test]
    #[should_panic(expected = "range() called on color property '_BaseColor'")]
    fn range_on_color_panics() {
        PropertyInfo::from_reflection(&shader(), 0).range();
    }

    #[test]
    #[should_panic(expected = "default_float_value() called on texture property")]
    fn float_default_on_texture_panics() {
        PropertyInfo::from_reflection(&shader(), 2).default_float_value();
    }

    #[test]
    #[should_panic(expected = "texture_dimension()")]
    fn dimension_on_int_panics() {
        PropertyInfo::from_reflection(&shader(), 4).texture_dimension();
    }
}
