//! In-memory host for testing and development.
//!
//! [`MemoryScene`] implements [`OverrideHost`] over plain vectors: a node
//! tree, renderers attached to nodes, materials and [`ShaderDesc`] shaders.
//! Property blocks pushed by a group are stored per renderer so they can be
//! inspected afterwards.

use std::collections::BTreeMap;

use overrides_core::{
    MaterialId, NodeId, PropertyBlock, RendererId, ShaderDesc, ShaderId, ShaderReflection,
};

use crate::host::OverrideHost;

#[derive(Debug)]
struct MemoryNode {
    parent: Option<NodeId>,
    active: bool,
}

#[derive(Debug)]
struct MemoryRenderer {
    node: NodeId,
    alive: bool,
    enabled: bool,
    materials: Vec<Option<MaterialId>>,
    block: Option<PropertyBlock>,
    slot_blocks: BTreeMap<usize, PropertyBlock>,
    block_writes: usize,
}

#[derive(Debug)]
struct MemoryMaterial {
    name: String,
    shader: Option<ShaderId>,
    alive: bool,
}

/// Scene held entirely in memory.
#[derive(Debug, Default)]
pub struct MemoryScene {
    nodes: Vec<MemoryNode>,
    renderers: Vec<MemoryRenderer>,
    materials: Vec<MemoryMaterial>,
    shaders: Vec<ShaderDesc>,
}

impl MemoryScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active node.
    ///
    /// # Panics
    ///
    /// Panics if `parent` is not a node of this scene. Parents always exist
    /// before their children, so the tree has no cycles.
    pub fn add_node(&mut self, parent: Option<NodeId>) -> NodeId {
        if let Some(parent) = parent {
            assert!(
                (parent.0 as usize) < self.nodes.len(),
                "add_node() called with unknown parent {parent}"
            );
        }
        self.nodes.push(MemoryNode {
            parent,
            active: true,
        });
        NodeId(self.nodes.len() as u64 - 1)
    }

    pub fn set_node_active(&mut self, node: NodeId, active: bool) {
        if let Some(n) = self.nodes.get_mut(node.0 as usize) {
            n.active = active;
        }
    }

    pub fn add_shader(&mut self, shader: ShaderDesc) -> ShaderId {
        self.shaders.push(shader);
        ShaderId(self.shaders.len() as u64 - 1)
    }

    /// Replace a shader's declaration, e.g. to simulate a recompile.
    pub fn replace_shader(&mut self, shader: ShaderId, desc: ShaderDesc) {
        if let Some(s) = self.shaders.get_mut(shader.0 as usize) {
            *s = desc;
        }
    }

    pub fn add_material(&mut self, name: &str, shader: Option<ShaderId>) -> MaterialId {
        self.materials.push(MemoryMaterial {
            name: name.to_owned(),
            shader,
            alive: true,
        });
        MaterialId(self.materials.len() as u64 - 1)
    }

    pub fn set_material_shader(&mut self, material: MaterialId, shader: Option<ShaderId>) {
        if let Some(m) = self.materials.get_mut(material.0 as usize) {
            m.shader = shader;
        }
    }

    pub fn destroy_material(&mut self, material: MaterialId) {
        if let Some(m) = self.materials.get_mut(material.0 as usize) {
            m.alive = false;
        }
    }

    /// Add an enabled renderer to `node`.
    pub fn add_renderer(&mut self, node: NodeId, materials: Vec<Option<MaterialId>>) -> RendererId {
        self.renderers.push(MemoryRenderer {
            node,
            alive: true,
            enabled: true,
            materials,
            block: None,
            slot_blocks: BTreeMap::new(),
            block_writes: 0,
        });
        RendererId(self.renderers.len() as u64 - 1)
    }

    pub fn set_renderer_enabled(&mut self, renderer: RendererId, enabled: bool) {
        if let Some(r) = self.renderer_mut(renderer) {
            r.enabled = enabled;
        }
    }

    pub fn set_renderer_materials(
        &mut self,
        renderer: RendererId,
        materials: Vec<Option<MaterialId>>,
    ) {
        if let Some(r) = self.renderer_mut(renderer) {
            r.materials = materials;
        }
    }

    pub fn destroy_renderer(&mut self, renderer: RendererId) {
        if let Some(r) = self.renderers.get_mut(renderer.0 as usize) {
            r.alive = false;
            r.block = None;
            r.slot_blocks.clear();
        }
    }

    /// Whole-renderer block currently attached.
    pub fn property_block(&self, renderer: RendererId) -> Option<&PropertyBlock> {
        self.renderer(renderer)?.block.as_ref()
    }

    /// Per-slot block currently attached.
    pub fn slot_property_block(&self, renderer: RendererId, slot: usize) -> Option<&PropertyBlock> {
        self.renderer(renderer)?.slot_blocks.get(&slot)
    }

    /// Whether any block, whole or per slot, is attached.
    pub fn has_any_block(&self, renderer: RendererId) -> bool {
        self.renderer(renderer)
            .is_some_and(|r| r.block.is_some() || !r.slot_blocks.is_empty())
    }

    /// Number of non-empty block assignments the renderer received.
    pub fn block_writes(&self, renderer: RendererId) -> usize {
        self.renderer(renderer).map_or(0, |r| r.block_writes)
    }

    fn renderer(&self, renderer: RendererId) -> Option<&MemoryRenderer> {
        self.renderers.get(renderer.0 as usize).filter(|r| r.alive)
    }

    fn renderer_mut(&mut self, renderer: RendererId) -> Option<&mut MemoryRenderer> {
        self.renderers
            .get_mut(renderer.0 as usize)
            .filter(|r| r.alive)
    }

    fn material(&self, material: MaterialId) -> Option<&MemoryMaterial> {
        self.materials.get(material.0 as usize).filter(|m| m.alive)
    }

    fn is_descendant(&self, node: NodeId, root: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            if n == root {
                return true;
            }
            current = self.nodes.get(n.0 as usize).and_then(|n| n.parent);
        }
        false
    }

    fn is_active_in_hierarchy(&self, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(n) = current {
            match self.nodes.get(n.0 as usize) {
                Some(entry) if entry.active => current = entry.parent,
                _ => return false,
            }
        }
        true
    }
}

impl OverrideHost for MemoryScene {
    fn renderers_in_subtree(&self, root: NodeId) -> Vec<RendererId> {
        self.renderers
            .iter()
            .enumerate()
            .filter(|(_, r)| r.alive && self.is_descendant(r.node, root))
            .map(|(index, _)| RendererId(index as u64))
            .collect()
    }

    fn is_renderer_alive(&self, renderer: RendererId) -> bool {
        self.renderer(renderer).is_some()
    }

    fn is_renderer_enabled(&self, renderer: RendererId) -> bool {
        self.renderer(renderer)
            .is_some_and(|r| r.enabled && self.is_active_in_hierarchy(r.node))
    }

    fn shared_materials(&self, renderer: RendererId) -> Vec<Option<MaterialId>> {
        self.renderer(renderer)
            .map(|r| r.materials.clone())
            .unwrap_or_default()
    }

    fn material_shader(&self, material: MaterialId) -> Option<ShaderId> {
        self.material(material)?.shader
    }

    fn material_name(&self, material: MaterialId) -> String {
        self.material(material)
            .map(|m| m.name.clone())
            .unwrap_or_default()
    }

    fn shader_name(&self, shader: ShaderId) -> String {
        self.shaders
            .get(shader.0 as usize)
            .map(|s| s.name.clone())
            .unwrap_or_default()
    }

    fn shader_reflection(&self, shader: ShaderId) -> Option<&dyn ShaderReflection> {
        self.shaders
            .get(shader.0 as usize)
            .map(|s| s as &dyn ShaderReflection)
    }

    fn set_property_block(&mut self, renderer: RendererId, block: Option<&PropertyBlock>) {
        if let Some(r) = self.renderer_mut(renderer) {
            r.block = block.cloned();
            if block.is_some() {
                r.block_writes += 1;
            }
        }
    }

    fn set_slot_property_block(
        &mut self,
        renderer: RendererId,
        slot: usize,
        block: Option<&PropertyBlock>,
    ) {
        if let Some(r) = self.renderer_mut(renderer) {
            match block {
                Some(block) => {
                    r.slot_blocks.insert(slot, block.clone());
                    r.block_writes += 1;
                }
                None => {
                    r.slot_blocks.remove(&slot);
                }
            }
        }
    }
}
