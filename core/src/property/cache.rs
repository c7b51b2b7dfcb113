//! Memoized shader reflection.

use std::collections::HashMap;
use std::sync::Arc;

use crate::handle::{PropertyId, ShaderId};
use crate::overrides::PropertyOverride;

use super::info::{PropertyInfo, ShaderReflection};

/// Ordered, shared list of a shader's property descriptors.
pub type PropertyInfoList = Arc<[Arc<PropertyInfo>]>;

/// Per-shader cache of reflected [`PropertyInfo`] lists.
///
/// Each shader is reflected once and the resulting list is shared by every
/// override list bound to it. The cache is an explicit object: whoever
/// assembles the override system owns it and decides when to invalidate.
#[derive(Debug, Default)]
pub struct PropertyInfoCache {
    lists: HashMap<ShaderId, PropertyInfoList>,
}

impl PropertyInfoCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Property descriptors of `shader` in declaration order.
    ///
    /// Reflects the shader on first use and returns the memoized list after.
    /// When two properties share an id only the first is kept.
    pub fn property_infos(
        &mut self,
        shader: ShaderId,
        reflection: &dyn ShaderReflection,
    ) -> PropertyInfoList {
        if let Some(list) = self.lists.get(&shader) {
            return Arc::clone(list);
        }

        let count = reflection.property_count();
        let mut seen: Vec<PropertyId> = Vec::with_capacity(count);
        let mut infos = Vec::with_capacity(count);
        for index in 0..count {
            let info = PropertyInfo::from_reflection(reflection, index);
            if seen.contains(&info.id()) {
                log::debug!(
                    "{shader}: skipping duplicate property '{}' at index {index}",
                    info.name()
                );
                continue;
            }
            seen.push(info.id());
            infos.push(Arc::new(info));
        }

        log::debug!("{shader}: reflected {} properties", infos.len());
        let list: PropertyInfoList = infos.into();
        self.lists.insert(shader, Arc::clone(&list));
        list
    }

    /// Whether `shader` has been reflected.
    pub fn contains(&self, shader: ShaderId) -> bool {
        self.lists.contains_key(&shader)
    }

    /// Number of cached shaders.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Drop the cached list of one shader, e.g. after it was recompiled.
    pub fn invalidate(&mut self, shader: ShaderId) {
        self.lists.remove(&shader);
    }

    /// Drop every cached list.
    pub fn clear(&mut self) {
        self.lists.clear();
    }
}

/// One fresh override per descriptor, initialized to the shader defaults.
pub fn create_overrides(infos: &[Arc<PropertyInfo>]) -> Vec<PropertyOverride> {
    infos
        .iter()
        .map(|info| PropertyOverride::new(Arc::clone(info)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::{PropertyDesc, PropertyValue, ShaderDesc};

    fn lit() -> ShaderDesc {
        ShaderDesc::new("Lit")
            .with_property(PropertyDesc::float("_Metallic", 0.0))
            .with_property(PropertyDesc::float("_Smoothness", 0.5))
            .with_property(PropertyDesc::color("_BaseColor", [1.0; 4]))
    }

    #[test]
    fn memoizes_per_shader() {
        let mut cache = PropertyInfoCache::new();
        let first = cache.property_infos(ShaderId(1), &lit());
        // A different declaration under the same id still hits the memo.
        let second = cache.property_infos(ShaderId(1), &ShaderDesc::new("Other"));
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(first.len(), 3);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn preserves_declaration_order() {
        let mut cache = PropertyInfoCache::new();
        let names: Vec<_> = cache
            .property_infos(ShaderId(1), &lit())
            .iter()
            .map(|info| info.name().to_owned())
            .collect();
        assert_eq!(names, ["_Metallic", "_Smoothness", "_BaseColor"]);
    }

    #[test]
    fn drops_duplicate_ids() {
        let shader = lit().with_property(PropertyDesc::float("_Metallic", 1.0));
        let mut cache = PropertyInfoCache::new();
        let infos = cache.property_infos(ShaderId(2), &shader);
        assert_eq!(infos.len(), 3);
        assert_eq!(infos[0].default_float_value(), 0.0);
    }

    #[test]
    fn empty_shader_yields_empty_list() {
        let mut cache = PropertyInfoCache::new();
        let infos = cache.property_infos(ShaderId(3), &ShaderDesc::new("Empty"));
        assert!(infos.is_empty());
        assert!(create_overrides(&infos).is_empty());
    }

    #[test]
    fn invalidate_forces_reflection() {
        let mut cache = PropertyInfoCache::new();
        cache.property_infos(ShaderId(1), &lit());
        cache.invalidate(ShaderId(1));
        assert!(!cache.contains(ShaderId(1)));

        let infos = cache.property_infos(ShaderId(1), &ShaderDesc::new("Empty"));
        assert!(infos.is_empty());

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn created_overrides_start_at_defaults() {
        let mut cache = PropertyInfoCache::new();
        let overrides = create_overrides(&cache.property_infos(ShaderId(1), &lit()));
        assert_eq!(overrides.len(), 3);
        assert!(overrides.iter().all(|o| !o.override_state() && !o.pinned_state()));
        assert_eq!(overrides[1].value(), PropertyValue::Float(0.5));
        assert_eq!(overrides[2].value(), PropertyValue::Color([1.0; 4]));
    }
}
