//! Property override sinks.
//!
//! A sink receives typed values keyed by [`PropertyId`]. The host engine
//! attaches the filled [`PropertyBlock`] to a renderer so that draw calls use
//! the overridden values without touching the shared material.

use crate::handle::PropertyId;
use crate::pool::Poolable;
use crate::property::TextureValue;

/// Destination for overridden property values.
pub trait PropertySink {
    fn set_color(&mut self, id: PropertyId, value: [f32; 4]);
    fn set_vector(&mut self, id: PropertyId, value: [f32; 4]);
    fn set_float(&mut self, id: PropertyId, value: f32);
    fn set_int(&mut self, id: PropertyId, value: i32);
    fn set_texture(&mut self, id: PropertyId, value: TextureValue);
    /// Remove every written value.
    fn clear(&mut self);
}

/// A value stored in a [`PropertyBlock`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BlockValue {
    Color([f32; 4]),
    Vector([f32; 4]),
    Float(f32),
    Int(i32),
    Texture(TextureValue),
}

/// Transient per-draw-call property overrides.
///
/// Entries keep first-write order; writing an id again replaces its value in
/// place, so the last write for an id wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyBlock {
    entries: Vec<(PropertyId, BlockValue)>,
}

impl PropertyBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: PropertyId) -> Option<&BlockValue> {
        self.entries
            .iter()
            .find(|(entry_id, _)| *entry_id == id)
            .map(|(_, value)| value)
    }

    pub fn get_float(&self, id: PropertyId) -> Option<f32> {
        match self.get(id)? {
            BlockValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_color(&self, id: PropertyId) -> Option<[f32; 4]> {
        match self.get(id)? {
            BlockValue::Color(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_vector(&self, id: PropertyId) -> Option<[f32; 4]> {
        match self.get(id)? {
            BlockValue::Vector(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_int(&self, id: PropertyId) -> Option<i32> {
        match self.get(id)? {
            BlockValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub fn get_texture(&self, id: PropertyId) -> Option<TextureValue> {
        match self.get(id)? {
            BlockValue::Texture(v) => Some(*v),
            _ => None,
        }
    }

    /// Entries in first-write order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyId, &BlockValue)> {
        self.entries.iter().map(|(id, value)| (*id, value))
    }

    fn write(&mut self, id: PropertyId, value: BlockValue) {
        match self.entries.iter_mut().find(|(entry_id, _)| *entry_id == id) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((id, value)),
        }
    }
}

impl PropertySink for PropertyBlock {
    fn set_color(&mut self, id: PropertyId, value: [f32; 4]) {
        self.write(id, BlockValue::Color(value));
    }

    fn set_vector(&mut self, id: PropertyId, value: [f32; 4]) {
        self.write(id, BlockValue::Vector(value));
    }

    fn set_float(&mut self, id: PropertyId, value: f32) {
        self.write(id, BlockValue::Float(value));
    }

    fn set_int(&mut self, id: PropertyId, value: i32) {
        self.write(id, BlockValue::Int(value));
    }

    fn set_texture(&mut self, id: PropertyId, value: TextureValue) {
        self.write(id, BlockValue::Texture(value));
    }

    fn clear(&mut self) {
        self.entries.clear();
    }
}

impl Poolable for PropertyBlock {
    fn new_empty() -> Self {
        Self::default()
    }

    fn reset(&mut self) {
        self.entries.clear();
    }
}
