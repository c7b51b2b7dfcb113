//! # Override Group Demos
//!
//! Demo scenes showcasing material override groups.
//!
//! ## Available Demos
//!
//! - `override_demo` - Authoring, applying and clearing overrides on an in-memory scene

use overrides_core::{
    MaterialId, NodeId, PropertyDesc, PropertyFlags, RendererId, ShaderDesc, ShaderId,
    TextureDimension,
};
use overrides_group::MemoryScene;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// A small furnished room: a lit and a glass shader, four materials and a
/// handful of renderers under one root, one of them in a hidden corner.
pub struct Showroom {
    pub scene: MemoryScene,
    pub root: NodeId,
    pub corner: NodeId,
    pub lit: ShaderId,
    pub glass: ShaderId,
    pub wood: MaterialId,
    pub metal: MaterialId,
    pub window_pane: MaterialId,
    pub lamp: RendererId,
    pub table: RendererId,
    pub window: RendererId,
}

pub fn lit_shader() -> ShaderDesc {
    ShaderDesc::new("Standard/Lit")
        .with_property(
            PropertyDesc::color("_BaseColor", [1.0, 1.0, 1.0, 1.0])
                .with_description("Base Color")
                .with_flags(PropertyFlags::MAIN_COLOR),
        )
        .with_property(
            PropertyDesc::texture("_BaseMap", TextureDimension::Tex2D, "white")
                .with_description("Albedo")
                .with_flags(PropertyFlags::MAIN_TEXTURE),
        )
        .with_property(
            PropertyDesc::range("_Metallic", 0.0, [0.0, 1.0]).with_description("Metallic"),
        )
        .with_property(
            PropertyDesc::range("_Smoothness", 0.5, [0.0, 1.0]).with_description("Smoothness"),
        )
        .with_property(
            PropertyDesc::color("_EmissionColor", [0.0, 0.0, 0.0, 1.0])
                .with_description("Emission")
                .with_flags(PropertyFlags::HDR),
        )
        .with_property(
            PropertyDesc::float("_QueueOffset", 0.0).with_flags(PropertyFlags::HIDE_IN_INSPECTOR),
        )
}

pub fn glass_shader() -> ShaderDesc {
    ShaderDesc::new("Standard/Glass")
        .with_property(PropertyDesc::color("_Tint", [0.8, 0.9, 1.0, 0.3]).with_description("Tint"))
        .with_property(PropertyDesc::float("_Refraction", 1.33).with_description("Refraction"))
        .with_property(
            PropertyDesc::texture("_Reflection", TextureDimension::Cube, "")
                .with_description("Reflection"),
        )
}

pub fn showroom() -> Showroom {
    let mut scene = MemoryScene::new();
    let root = scene.add_node(None);
    let corner = scene.add_node(Some(root));

    let lit = scene.add_shader(lit_shader());
    let glass = scene.add_shader(glass_shader());

    let wood = scene.add_material("Wood", Some(lit));
    let metal = scene.add_material("Metal", Some(lit));
    let window_pane = scene.add_material("WindowPane", Some(glass));
    let dust = scene.add_material("Dust", Some(lit));

    let lamp = scene.add_renderer(root, vec![Some(metal)]);
    let table = scene.add_renderer(root, vec![Some(wood), Some(metal)]);
    let window = scene.add_renderer(root, vec![Some(wood), Some(window_pane)]);
    scene.add_renderer(corner, vec![Some(dust)]);
    scene.set_node_active(corner, false);

    Showroom {
        scene,
        root,
        corner,
        lit,
        glass,
        wood,
        metal,
        window_pane,
        lamp,
        table,
        window,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use overrides_group::OverrideGroup;

    #[test]
    fn showroom_discovery() {
        let mut room = showroom();
        let mut group = OverrideGroup::new(room.root);
        group.enable(&mut room.scene);

        assert_eq!(group.renderers().len(), 4);
        assert_eq!(group.shaders(), [room.glass, room.lit]);
        // The inactive corner is discovered but never written to.
        assert_eq!(group.apply_cache().len(), 5);
        assert!(group.material_overrides(room.wood).is_some());
    }
}
