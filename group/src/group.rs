//! The override group orchestrator.
//!
//! An [`OverrideGroup`] is attached to a scene node. It discovers the
//! renderers below that node, binds one [`OverrideList`] per distinct shader
//! and per distinct material, and writes the resolved overrides into each
//! renderer's property block.
//!
//! # Lifecycle
//!
//! ```text
//! Disabled --enable--> Enabled (populated + applied)
//! Enabled --on_hierarchy_changed--> Enabled (re-populated + re-applied)
//! Enabled --disable--> Disabled (overrides cleared)
//! ```
//!
//! [`reset`](OverrideGroup::reset) discards every bound list, losing all
//! authored values, before populating again.
//!
//! # Precedence
//!
//! For each cache entry the shader-level list is applied first and the
//! material-level list second, into one shared scratch block. A property
//! present in both therefore takes the material-level value.

use std::collections::{BTreeSet, HashMap, HashSet};

use overrides_core::pool::Pooled;
use overrides_core::{
    ListId, MaterialId, NodeId, OverrideBinding, OverrideList, PropertyBlock, PropertyId,
    PropertyInfoCache, PropertyInfoList, PropertyOverride, RendererId, ShaderId,
    create_overrides,
};

use crate::cache::{ApplyCache, ApplyCacheEntry};
use crate::config::{ApplyMode, GroupConfig};
use crate::host::OverrideHost;

/// Lifecycle state of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GroupState {
    #[default]
    Disabled,
    Enabled,
}

/// Per-subtree override orchestrator.
#[derive(Debug)]
pub struct OverrideGroup {
    root: NodeId,
    config: GroupConfig,
    state: GroupState,

    renderers: Vec<RendererId>,
    /// Sorted by name for display.
    shaders: Vec<ShaderId>,
    /// Sorted by name for display.
    materials: Vec<MaterialId>,

    shader_lists: Vec<OverrideList>,
    material_lists: Vec<OverrideList>,
    shader_index: HashMap<ShaderId, usize>,
    material_index: HashMap<MaterialId, usize>,

    apply_cache: ApplyCache,
    /// Slots that received a block since the last clear.
    pushed_slots: BTreeSet<(RendererId, usize)>,
    info_cache: PropertyInfoCache,
    scratch: Pooled<PropertyBlock>,
    next_list_id: u64,
}

impl OverrideGroup {
    /// Create a disabled, unpopulated group rooted at `root`.
    pub fn new(root: NodeId) -> Self {
        Self::with_config(root, GroupConfig::default())
    }

    pub fn with_config(root: NodeId, config: GroupConfig) -> Self {
        Self {
            root,
            config,
            state: GroupState::Disabled,
            renderers: Vec::new(),
            shaders: Vec::new(),
            materials: Vec::new(),
            shader_lists: Vec::new(),
            material_lists: Vec::new(),
            shader_index: HashMap::new(),
            material_index: HashMap::new(),
            apply_cache: ApplyCache::default(),
            pushed_slots: BTreeSet::new(),
            info_cache: PropertyInfoCache::new(),
            scratch: Pooled::default(),
            next_list_id: 0,
        }
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn config(&self) -> &GroupConfig {
        &self.config
    }

    pub fn state(&self) -> GroupState {
        self.state
    }

    pub fn is_enabled(&self) -> bool {
        self.state == GroupState::Enabled
    }

    /// Renderers found by the last populate, including disabled ones.
    pub fn renderers(&self) -> &[RendererId] {
        &self.renderers
    }

    pub fn shaders(&self) -> &[ShaderId] {
        &self.shaders
    }

    pub fn materials(&self) -> &[MaterialId] {
        &self.materials
    }

    pub fn shader_lists(&self) -> &[OverrideList] {
        &self.shader_lists
    }

    pub fn material_lists(&self) -> &[OverrideList] {
        &self.material_lists
    }

    pub fn apply_cache(&self) -> &ApplyCache {
        &self.apply_cache
    }

    pub fn info_cache(&self) -> &PropertyInfoCache {
        &self.info_cache
    }

    /// Whether the subtree contains no renderers. A valid, informational state.
    pub fn is_empty_state(&self) -> bool {
        self.renderers.is_empty()
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    pub fn shader_overrides(&self, shader: ShaderId) -> Option<&OverrideList> {
        let &index = self.shader_index.get(&shader)?;
        self.shader_lists.get(index)
    }

    pub fn shader_overrides_mut(&mut self, shader: ShaderId) -> Option<&mut OverrideList> {
        let &index = self.shader_index.get(&shader)?;
        self.shader_lists.get_mut(index)
    }

    pub fn material_overrides(&self, material: MaterialId) -> Option<&OverrideList> {
        let &index = self.material_index.get(&material)?;
        self.material_lists.get(index)
    }

    pub fn material_overrides_mut(&mut self, material: MaterialId) -> Option<&mut OverrideList> {
        let &index = self.material_index.get(&material)?;
        self.material_lists.get_mut(index)
    }

    pub fn shader_lists_mut(&mut self) -> impl Iterator<Item = &mut OverrideList> {
        self.shader_lists.iter_mut()
    }

    pub fn material_lists_mut(&mut self) -> impl Iterator<Item = &mut OverrideList> {
        self.material_lists.iter_mut()
    }

    pub fn try_get_shader_property(
        &self,
        shader: ShaderId,
        id: PropertyId,
    ) -> Option<&PropertyOverride> {
        self.shader_overrides(shader)?.try_get_override(id)
    }

    pub fn try_get_shader_property_by_name(
        &self,
        shader: ShaderId,
        name: &str,
    ) -> Option<&PropertyOverride> {
        self.try_get_shader_property(shader, PropertyId::from_name(name))
    }

    pub fn try_get_material_property(
        &self,
        material: MaterialId,
        id: PropertyId,
    ) -> Option<&PropertyOverride> {
        self.material_overrides(material)?.try_get_override(id)
    }

    pub fn try_get_material_property_by_name(
        &self,
        material: MaterialId,
        name: &str,
    ) -> Option<&PropertyOverride> {
        self.try_get_material_property(material, PropertyId::from_name(name))
    }

    // ------------------------------------------------------------------
    // Lifecycle
    // ------------------------------------------------------------------

    /// Populate and apply. Calling it on an enabled group re-runs both.
    pub fn enable<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        self.state = GroupState::Enabled;
        self.populate(host);
        self.apply(host);
    }

    /// Remove every override this group pushed.
    pub fn disable<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        self.clear(host);
        self.state = GroupState::Disabled;
    }

    /// React to a structural change of the watched subtree.
    pub fn on_hierarchy_changed<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        if !self.is_enabled() {
            return;
        }
        self.populate(host);
        self.apply(host);
    }

    /// Discard every bound list and the reflection cache, then populate again.
    ///
    /// Destructive: all authored override values are lost.
    pub fn reset<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        self.clear(host);
        self.shader_lists.clear();
        self.material_lists.clear();
        self.shader_index.clear();
        self.material_index.clear();
        self.info_cache.clear();
        log::debug!("{}: override lists reset", self.root);

        self.populate(host);
        if self.is_enabled() {
            self.apply(host);
        }
    }

    /// Switch where blocks are attached, moving already pushed overrides.
    pub fn set_apply_mode<H: OverrideHost + ?Sized>(&mut self, host: &mut H, mode: ApplyMode) {
        if self.config.apply_mode == mode {
            return;
        }
        self.clear(host);
        self.config.apply_mode = mode;
        if self.is_enabled() {
            self.apply(host);
        }
    }

    // ------------------------------------------------------------------
    // Populate
    // ------------------------------------------------------------------

    /// Rediscover renderers, shaders and materials and rebind override lists.
    ///
    /// Existing lists are kept when their shader or material is still in use,
    /// preserving authored values. Lists for shaders or materials no longer
    /// present are dropped. Ends by rebuilding the apply cache.
    pub fn populate<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        self.clear(host);

        let renderers = host.renderers_in_subtree(self.root);

        let mut shaders: Vec<ShaderId> = Vec::new();
        let mut materials: Vec<(MaterialId, ShaderId)> = Vec::new();
        let mut seen_shaders = HashSet::new();
        let mut seen_materials = HashSet::new();
        for &renderer in &renderers {
            for material in host.shared_materials(renderer).into_iter().flatten() {
                let Some(shader) = host.material_shader(material) else {
                    continue;
                };
                if seen_shaders.insert(shader) {
                    shaders.push(shader);
                }
                if seen_materials.insert(material) {
                    materials.push((material, shader));
                }
            }
        }

        self.renderers = renderers;

        // Shader-level lists
        let mut previous = std::mem::take(&mut self.shader_lists);
        let mut shader_lists = Vec::with_capacity(shaders.len());
        for &shader in &shaders {
            let binding = OverrideBinding::Shader(shader);
            let list = match previous.iter().position(|l| l.binding() == binding) {
                Some(position) => previous.swap_remove(position),
                None => self.create_list(&*host, binding),
            };
            shader_lists.push(list);
        }
        if !previous.is_empty() {
            log::debug!(
                "{}: dropped {} stale shader override lists",
                self.root,
                previous.len()
            );
        }

        // Material-level lists
        let mut previous = std::mem::take(&mut self.material_lists);
        let mut material_lists = Vec::with_capacity(materials.len());
        for &(material, shader) in &materials {
            let binding = OverrideBinding::Material { material, shader };
            let existing = previous.iter().position(|l| l.material() == Some(material));
            let list = match existing {
                Some(position) if previous[position].shader() == shader => {
                    previous.swap_remove(position)
                }
                Some(position) => {
                    log::debug!(
                        "{}: {material} changed shader, rebuilding its override list",
                        self.root
                    );
                    previous.swap_remove(position);
                    self.create_list(&*host, binding)
                }
                None => self.create_list(&*host, binding),
            };
            material_lists.push(list);
        }
        if !previous.is_empty() {
            log::debug!(
                "{}: dropped {} stale material override lists",
                self.root,
                previous.len()
            );
        }

        self.shaders = sort_by_name(shaders, |&s| host.shader_name(s));
        self.materials = sort_by_name(
            materials.into_iter().map(|(m, _)| m).collect(),
            |&m| host.material_name(m),
        );

        self.shader_lists = shader_lists;
        self.material_lists = material_lists;
        self.refresh_cache(&*host);

        log::debug!(
            "{}: populated {} renderers, {} shaders, {} materials, {} cache entries",
            self.root,
            self.renderers.len(),
            self.shaders.len(),
            self.materials.len(),
            self.apply_cache.len()
        );
    }

    fn create_list<H: OverrideHost + ?Sized>(
        &mut self,
        host: &H,
        binding: OverrideBinding,
    ) -> OverrideList {
        let shader = binding.shader();
        let infos: PropertyInfoList = match host.shader_reflection(shader) {
            Some(reflection) => self.info_cache.property_infos(shader, reflection),
            None => {
                log::warn!("{shader}: no reflection available, binding an empty override list");
                Vec::new().into()
            }
        };

        let id = ListId(self.next_list_id);
        self.next_list_id += 1;
        OverrideList::new(id, binding, create_overrides(&infos))
    }

    /// Map bindings to list positions. The first list bound to a shader or
    /// material wins.
    fn rebuild_index(&mut self) {
        self.shader_index.clear();
        for (index, list) in self.shader_lists.iter().enumerate() {
            self.shader_index.entry(list.shader()).or_insert(index);
        }
        self.material_index.clear();
        for (index, list) in self.material_lists.iter().enumerate() {
            if let Some(material) = list.material() {
                self.material_index.entry(material).or_insert(index);
            }
        }
    }

    // ------------------------------------------------------------------
    // Apply cache
    // ------------------------------------------------------------------

    /// Rebuild the binding index and the apply cache from the current
    /// renderers and lists.
    ///
    /// Call after rebinding lists through [`shader_lists_mut`](Self::shader_lists_mut)
    /// or [`material_lists_mut`](Self::material_lists_mut). Disabled or
    /// inactive renderers are skipped, as are empty material slots and
    /// materials without a shader.
    pub fn refresh_cache<H: OverrideHost + ?Sized>(&mut self, host: &H) {
        self.rebuild_index();
        self.apply_cache.clear();

        for &renderer in &self.renderers {
            if !host.is_renderer_alive(renderer) || !host.is_renderer_enabled(renderer) {
                continue;
            }

            for (slot, material) in host.shared_materials(renderer).into_iter().enumerate() {
                let Some(material) = material else {
                    continue;
                };
                let Some(shader) = host.material_shader(material) else {
                    continue;
                };

                let shader_list = self.shader_index.get(&shader).copied();
                let material_list = self.material_index.get(&material).copied();
                if shader_list.is_none() && material_list.is_none() {
                    continue;
                }

                self.apply_cache.push(ApplyCacheEntry {
                    renderer,
                    slot,
                    shader_list,
                    material_list,
                });
            }
        }
    }

    // ------------------------------------------------------------------
    // Apply / clear
    // ------------------------------------------------------------------

    /// Write resolved overrides to every cached renderer.
    ///
    /// Not reentrant: a single scratch block is reused for every entry.
    pub fn apply<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        for entry in self.apply_cache.entries() {
            if !host.is_renderer_alive(entry.renderer) {
                log::trace!("{}: skipping destroyed {}", self.root, entry.renderer);
                continue;
            }

            let block = self.scratch.activate();
            if let Some(list) = entry.shader_list.and_then(|i| self.shader_lists.get(i)) {
                list.apply_to(&mut *block);
            }
            if let Some(list) = entry.material_list.and_then(|i| self.material_lists.get(i)) {
                list.apply_to(&mut *block);
            }

            log::trace!(
                "{}: {} slot {} <- {} values",
                self.root,
                entry.renderer,
                entry.slot,
                block.len()
            );

            match self.config.apply_mode {
                ApplyMode::Renderer => host.set_property_block(entry.renderer, Some(&*block)),
                ApplyMode::MaterialSlot => {
                    host.set_slot_property_block(entry.renderer, entry.slot, Some(&*block));
                    self.pushed_slots.insert((entry.renderer, entry.slot));
                }
            }
        }
        self.scratch.release();
    }

    /// Remove whole-renderer and per-slot blocks from every live renderer.
    ///
    /// Slots written by an earlier apply are cleared too, even when the
    /// renderer has fewer material slots by now.
    pub fn clear<H: OverrideHost + ?Sized>(&mut self, host: &mut H) {
        for &renderer in &self.renderers {
            if !host.is_renderer_alive(renderer) {
                continue;
            }
            host.set_property_block(renderer, None);
            for slot in 0..host.shared_materials(renderer).len() {
                host.set_slot_property_block(renderer, slot, None);
            }
        }
        for (renderer, slot) in std::mem::take(&mut self.pushed_slots) {
            if host.is_renderer_alive(renderer) {
                host.set_slot_property_block(renderer, slot, None);
            }
        }
    }
}

/// Sort handles by display name, ordinal byte-wise, keeping discovery order on ties.
fn sort_by_name<T, F>(items: Vec<T>, mut name: F) -> Vec<T>
where
    F: FnMut(&T) -> String,
{
    let mut named: Vec<(String, T)> = items.into_iter().map(|item| (name(&item), item)).collect();
    named.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    named.into_iter().map(|(_, item)| item).collect()
}
