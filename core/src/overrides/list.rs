//! Named collections of property overrides bound to a shader or material.

use std::collections::HashMap;

use crate::error::OverrideError;
use crate::handle::{MaterialId, PropertyId, ShaderId};
use crate::property::PropertyValue;
use crate::sink::PropertySink;

use super::property_override::PropertyOverride;

/// What an [`OverrideList`] applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideBinding {
    /// Every material using the shader.
    Shader(ShaderId),
    /// One material. `shader` is the material's shader, which supplies the
    /// property metadata.
    Material {
        material: MaterialId,
        shader: ShaderId,
    },
}

impl OverrideBinding {
    /// Shader providing the property metadata.
    pub fn shader(&self) -> ShaderId {
        match *self {
            Self::Shader(shader) | Self::Material { shader, .. } => shader,
        }
    }

    pub fn material(&self) -> Option<MaterialId> {
        match *self {
            Self::Shader(_) => None,
            Self::Material { material, .. } => Some(material),
        }
    }
}

/// Stable identity of an override list within its owning group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListId(pub u64);

/// Ordered overrides with an id index.
///
/// Each property id maps to at most one override; when the sequence contains
/// duplicates the first one is indexed and the rest are unreachable by
/// lookup.
#[derive(Debug, Clone)]
pub struct OverrideList {
    id: ListId,
    active: bool,
    binding: OverrideBinding,
    overrides: Vec<PropertyOverride>,
    index: HashMap<PropertyId, usize>,
}

impl OverrideList {
    /// Create an active list.
    pub fn new(id: ListId, binding: OverrideBinding, overrides: Vec<PropertyOverride>) -> Self {
        let mut list = Self {
            id,
            active: true,
            binding,
            overrides: Vec::new(),
            index: HashMap::new(),
        };
        list.initialize(binding, overrides);
        list
    }

    /// Rebind the list and replace its overrides.
    pub fn initialize(&mut self, binding: OverrideBinding, overrides: Vec<PropertyOverride>) {
        self.binding = binding;
        self.set_overrides(overrides);
    }

    pub fn id(&self) -> ListId {
        self.id
    }

    pub fn binding(&self) -> OverrideBinding {
        self.binding
    }

    pub fn shader(&self) -> ShaderId {
        self.binding.shader()
    }

    pub fn material(&self) -> Option<MaterialId> {
        self.binding.material()
    }

    /// Whether any override in the list is applied.
    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }

    pub fn overrides(&self) -> &[PropertyOverride] {
        &self.overrides
    }

    /// Mutable access to individual overrides. The sequence itself can only be
    /// replaced through [`set_overrides`](Self::set_overrides).
    pub fn overrides_mut(&mut self) -> &mut [PropertyOverride] {
        &mut self.overrides
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }

    /// Replace every override and rebuild the id index.
    pub fn set_overrides(&mut self, overrides: Vec<PropertyOverride>) {
        self.overrides = overrides;
        self.rebuild_index();
    }

    fn rebuild_index(&mut self) {
        self.index.clear();
        for (position, property_override) in self.overrides.iter().enumerate() {
            self.index.entry(property_override.id()).or_insert(position);
        }
    }

    pub fn try_get_override(&self, id: PropertyId) -> Option<&PropertyOverride> {
        self.index.get(&id).map(|&position| &self.overrides[position])
    }

    pub fn try_get_override_mut(&mut self, id: PropertyId) -> Option<&mut PropertyOverride> {
        let position = *self.index.get(&id)?;
        self.overrides.get_mut(position)
    }

    pub fn try_get_override_by_name(&self, name: &str) -> Option<&PropertyOverride> {
        self.try_get_override(PropertyId::from_name(name))
    }

    pub fn try_get_override_by_name_mut(&mut self, name: &str) -> Option<&mut PropertyOverride> {
        self.try_get_override_mut(PropertyId::from_name(name))
    }

    /// Set a value by property name and enable its override.
    pub fn set_override(&mut self, name: &str, value: PropertyValue) -> Result<(), OverrideError> {
        let property_override = self
            .try_get_override_by_name_mut(name)
            .ok_or_else(|| OverrideError::UnknownProperty(name.to_owned()))?;
        property_override.set_value(value)?;
        property_override.set_override_state(true);
        Ok(())
    }

    /// Reset every override's value to its shader default.
    pub fn reset_values(&mut self) {
        for property_override in &mut self.overrides {
            property_override.reset();
        }
    }

    /// Number of overrides currently enabled.
    pub fn enabled_count(&self) -> usize {
        self.overrides.iter().filter(|o| o.override_state()).count()
    }

    /// Apply every override in order. Does nothing while inactive.
    pub fn apply_to(&self, sink: &mut dyn PropertySink) {
        if !self.active {
            return;
        }
        for property_override in &self.overrides {
            property_override.apply_to(sink);
        }
    }
}
