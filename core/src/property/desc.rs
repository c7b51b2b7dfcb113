//! Plain-data shader declarations.
//!
//! [`ShaderDesc`] implements [`ShaderReflection`] over a list of
//! [`PropertyDesc`] entries. Hosts without a reflection API of their own can
//! declare shaders this way.

use super::info::ShaderReflection;
use super::types::{PropertyFlags, PropertyType, TextureDimension};

/// Declaration of one shader property.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyDesc {
    pub name: String,
    pub description: String,
    pub property_type: PropertyType,
    pub flags: PropertyFlags,
    pub range: [f32; 2],
    pub default_float: f32,
    pub default_vector: [f32; 4],
    pub default_int: i32,
    pub texture_dimension: TextureDimension,
    pub texture_default_name: String,
}

impl PropertyDesc {
    fn base(name: &str, property_type: PropertyType) -> Self {
        Self {
            name: name.to_owned(),
            description: name.to_owned(),
            property_type,
            flags: PropertyFlags::empty(),
            range: [0.0, 0.0],
            default_float: 0.0,
            default_vector: [0.0; 4],
            default_int: 0,
            texture_dimension: TextureDimension::None,
            texture_default_name: String::new(),
        }
    }

    pub fn color(name: &str, default: [f32; 4]) -> Self {
        Self {
            default_vector: default,
            ..Self::base(name, PropertyType::Color)
        }
    }

    pub fn vector(name: &str, default: [f32; 4]) -> Self {
        Self {
            default_vector: default,
            ..Self::base(name, PropertyType::Vector)
        }
    }

    pub fn float(name: &str, default: f32) -> Self {
        Self {
            default_float: default,
            ..Self::base(name, PropertyType::Float)
        }
    }

    pub fn range(name: &str, default: f32, limits: [f32; 2]) -> Self {
        Self {
            default_float: default,
            range: limits,
            ..Self::base(name, PropertyType::Range)
        }
    }

    pub fn int(name: &str, default: i32) -> Self {
        Self {
            default_int: default,
            ..Self::base(name, PropertyType::Int)
        }
    }

    pub fn texture(name: &str, dimension: TextureDimension, default_name: &str) -> Self {
        Self {
            texture_dimension: dimension,
            texture_default_name: default_name.to_owned(),
            ..Self::base(name, PropertyType::Texture)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_flags(mut self, flags: PropertyFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A named shader declared as plain data.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ShaderDesc {
    pub name: String,
    pub properties: Vec<PropertyDesc>,
}

impl ShaderDesc {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_property(mut self, property: PropertyDesc) -> Self {
        self.properties.push(property);
        self
    }
}

impl ShaderReflection for ShaderDesc {
    fn property_count(&self) -> usize {
        self.properties.len()
    }

    fn property_name(&self, index: usize) -> &str {
        &self.properties[index].name
    }

    fn property_description(&self, index: usize) -> &str {
        &self.properties[index].description
    }

    fn property_type(&self, index: usize) -> PropertyType {
        self.properties[index].property_type
    }

    fn property_flags(&self, index: usize) -> PropertyFlags {
        self.properties[index].flags
    }

    fn property_range_limits(&self, index: usize) -> [f32; 2] {
        self.properties[index].range
    }

    fn property_default_float(&self, index: usize) -> f32 {
        self.properties[index].default_float
    }

    fn property_default_vector(&self, index: usize) -> [f32; 4] {
        self.properties[index].default_vector
    }

    fn property_default_int(&self, index: usize) -> i32 {
        self.properties[index].default_int
    }

    fn property_texture_dimension(&self, index: usize) -> TextureDimension {
        self.properties[index].texture_dimension
    }

    fn property_texture_default_name(&self, index: usize) -> &str {
        &self.properties[index].texture_default_name
    }
}
