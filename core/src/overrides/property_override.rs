//! A single overridable shader property.

use std::sync::Arc;

use crate::error::OverrideError;
use crate::handle::PropertyId;
use crate::property::{PropertyInfo, PropertyType, PropertyValue, TextureValue};
use crate::sink::PropertySink;

/// Toggleable replacement value for one shader property.
///
/// The value always matches the descriptor's type. Typed accessors
/// ([`float`](Self::float), [`set_color`](Self::set_color), ...) panic on a
/// type mismatch; [`set_value`](Self::set_value) reports it as an error.
#[derive(Debug, Clone, PartialEq)]
pub struct PropertyOverride {
    info: Arc<PropertyInfo>,
    override_state: bool,
    pinned_state: bool,
    value: PropertyValue,
}

impl PropertyOverride {
    /// Create a disabled override holding the property's default.
    pub fn new(info: Arc<PropertyInfo>) -> Self {
        let value = info.default_value();
        Self {
            info,
            override_state: false,
            pinned_state: false,
            value,
        }
    }

    pub fn property_info(&self) -> &PropertyInfo {
        &self.info
    }

    pub fn id(&self) -> PropertyId {
        self.info.id()
    }

    /// Whether this override is written on apply.
    pub fn override_state(&self) -> bool {
        self.override_state
    }

    pub fn set_override_state(&mut self, state: bool) {
        self.override_state = state;
    }

    /// Whether the property stays visible in filtered listings. No effect on apply.
    pub fn pinned_state(&self) -> bool {
        self.pinned_state
    }

    pub fn set_pinned_state(&mut self, state: bool) {
        self.pinned_state = state;
    }

    pub fn value(&self) -> PropertyValue {
        self.value
    }

    /// Replace the value, rejecting values of the wrong type.
    pub fn set_value(&mut self, value: PropertyValue) -> Result<(), OverrideError> {
        if !value.matches(self.info.property_type()) {
            return Err(OverrideError::TypeMismatch {
                property: self.info.name().to_owned(),
                expected: self.info.property_type(),
                found: value.type_name(),
            });
        }
        self.value = value;
        Ok(())
    }

    /// Restore the shader default. Override and pinned states are kept.
    pub fn reset(&mut self) {
        self.value = self.info.default_value();
    }

    pub fn color(&self) -> [f32; 4] {
        match self.value {
            PropertyValue::Color(v) => v,
            _ => self.mismatch("color"),
        }
    }

    pub fn set_color(&mut self, value: [f32; 4]) {
        self.expect_type("set_color", self.info.property_type() == PropertyType::Color);
        self.value = PropertyValue::Color(value);
    }

    pub fn vector(&self) -> [f32; 4] {
        match self.value {
            PropertyValue::Vector(v) => v,
            _ => self.mismatch("vector"),
        }
    }

    pub fn set_vector(&mut self, value: [f32; 4]) {
        self.expect_type("set_vector", self.info.property_type() == PropertyType::Vector);
        self.value = PropertyValue::Vector(value);
    }

    /// Value of a `Float` or `Range` property.
    pub fn float(&self) -> f32 {
        match self.value {
            PropertyValue::Float(v) => v,
            _ => self.mismatch("float"),
        }
    }

    pub fn set_float(&mut self, value: f32) {
        self.expect_type("set_float", self.info.property_type().is_float());
        self.value = PropertyValue::Float(value);
    }

    pub fn int(&self) -> i32 {
        match self.value {
            PropertyValue::Int(v) => v,
            _ => self.mismatch("int"),
        }
    }

    pub fn set_int(&mut self, value: i32) {
        self.expect_type("set_int", self.info.property_type() == PropertyType::Int);
        self.value = PropertyValue::Int(value);
    }

    /// Explicitly assigned texture, if any.
    pub fn texture(&self) -> Option<TextureValue> {
        match self.value {
            PropertyValue::Texture(v) => v,
            _ => self.mismatch("texture"),
        }
    }

    pub fn set_texture(&mut self, value: Option<TextureValue>) {
        self.expect_type("set_texture", self.info.property_type() == PropertyType::Texture);
        self.value = PropertyValue::Texture(value);
    }

    /// Write the value into `sink` when the override is enabled.
    ///
    /// A texture override without an explicit texture falls back to the
    /// shader default, and writes nothing when there is none.
    pub fn apply_to(&self, sink: &mut dyn PropertySink) {
        if !self.override_state {
            return;
        }

        let id = self.info.id();
        match self.value {
            PropertyValue::Color(v) => sink.set_color(id, v),
            PropertyValue::Vector(v) => sink.set_vector(id, v),
            PropertyValue::Float(v) => sink.set_float(id, v),
            PropertyValue::Int(v) => sink.set_int(id, v),
            PropertyValue::Texture(explicit) => {
                if let Some(texture) = explicit.or_else(|| self.info.default_texture_value()) {
                    sink.set_texture(id, texture);
                }
            }
        }
    }

    fn expect_type(&self, accessor: &str, matches: bool) {
        assert!(
            matches,
            "{accessor}() called on {:?} property '{}'",
            self.info.property_type(),
            self.info.name()
        );
    }

    fn mismatch(&self, accessor: &str) -> ! {
        panic!(
            "{accessor}() called on {:?} property '{}'",
            self.info.property_type(),
            self.info.name()
        )
    }
}
