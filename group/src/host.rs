//! Host engine interface.

use overrides_core::{MaterialId, NodeId, PropertyBlock, RendererId, ShaderId, ShaderReflection};

/// What an override group needs from the engine it runs in.
///
/// Query methods must tolerate handles of destroyed objects: liveness is
/// reported through [`is_renderer_alive`](Self::is_renderer_alive) and
/// [`material_shader`](Self::material_shader) returning `None`.
pub trait OverrideHost {
    /// Every renderer under `root` (inclusive), enabled or not.
    fn renderers_in_subtree(&self, root: NodeId) -> Vec<RendererId>;

    fn is_renderer_alive(&self, renderer: RendererId) -> bool;

    /// Whether the renderer is enabled and its node is active in the hierarchy.
    fn is_renderer_enabled(&self, renderer: RendererId) -> bool;

    /// Material slots of a renderer in order. Empty slots are `None`.
    fn shared_materials(&self, renderer: RendererId) -> Vec<Option<MaterialId>>;

    /// Shader of a live material, or `None` if the material is gone or has no shader.
    fn material_shader(&self, material: MaterialId) -> Option<ShaderId>;

    fn material_name(&self, material: MaterialId) -> String;

    fn shader_name(&self, shader: ShaderId) -> String;

    fn shader_reflection(&self, shader: ShaderId) -> Option<&dyn ShaderReflection>;

    /// Attach `block` to the whole renderer, or remove it with `None`.
    fn set_property_block(&mut self, renderer: RendererId, block: Option<&PropertyBlock>);

    /// Attach `block` to one material slot, or remove it with `None`.
    fn set_slot_property_block(
        &mut self,
        renderer: RendererId,
        slot: usize,
        block: Option<&PropertyBlock>,
    );
}
