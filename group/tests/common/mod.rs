//! Shared scene fixtures for override group integration tests.

#![allow(dead_code)]

use overrides_core::{
    MaterialId, NodeId, PropertyDesc, PropertyFlags, RendererId, ShaderDesc, ShaderId,
    TextureDimension,
};
use overrides_group::MemoryScene;

/// Initialize logging once; later calls are no-ops.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Shader "S" with a single float property "P" (default 0.5).
pub fn shader_s() -> ShaderDesc {
    ShaderDesc::new("S").with_property(PropertyDesc::float("P", 0.5))
}

/// A lit shader with one property of every type.
pub fn lit_shader() -> ShaderDesc {
    ShaderDesc::new("Lit")
        .with_property(
            PropertyDesc::color("_BaseColor", [1.0, 1.0, 1.0, 1.0])
                .with_flags(PropertyFlags::MAIN_COLOR),
        )
        .with_property(PropertyDesc::vector("_Tiling", [1.0, 1.0, 0.0, 0.0]))
        .with_property(PropertyDesc::float("_Metallic", 0.0))
        .with_property(PropertyDesc::range("_Smoothness", 0.5, [0.0, 1.0]))
        .with_property(PropertyDesc::int("_Mode", 0))
        .with_property(PropertyDesc::texture("_BaseMap", TextureDimension::Tex2D, "white"))
        .with_property(PropertyDesc::texture("_DetailMap", TextureDimension::Tex2D, ""))
        .with_property(
            PropertyDesc::float("_QueueOffset", 0.0).with_flags(PropertyFlags::HIDE_IN_INSPECTOR),
        )
}

/// One renderer using one material with shader "S".
pub struct SingleScene {
    pub scene: MemoryScene,
    pub root: NodeId,
    pub shader: ShaderId,
    pub material: MaterialId,
    pub renderer: RendererId,
}

pub fn single_scene() -> SingleScene {
    init_logging();
    let mut scene = MemoryScene::new();
    let root = scene.add_node(None);
    let shader = scene.add_shader(shader_s());
    let material = scene.add_material("M", Some(shader));
    let renderer = scene.add_renderer(root, vec![Some(material)]);
    SingleScene {
        scene,
        root,
        shader,
        material,
        renderer,
    }
}

/// Two shaders, three materials and three renderers below one root, plus a
/// renderer outside the root.
pub struct MixedScene {
    pub scene: MemoryScene,
    pub root: NodeId,
    pub child: NodeId,
    pub lit: ShaderId,
    pub unlit: ShaderId,
    pub brick: MaterialId,
    pub stone: MaterialId,
    pub glass: MaterialId,
    pub wall: RendererId,
    pub window: RendererId,
    pub pillar: RendererId,
    pub outside: RendererId,
}

pub fn mixed_scene() -> MixedScene {
    init_logging();
    let mut scene = MemoryScene::new();
    let root = scene.add_node(None);
    let child = scene.add_node(Some(root));
    let elsewhere = scene.add_node(None);

    let lit = scene.add_shader(lit_shader());
    let unlit = scene.add_shader(
        ShaderDesc::new("Unlit").with_property(PropertyDesc::color("_Color", [0.0, 0.0, 0.0, 1.0])),
    );

    let stone = scene.add_material("stone", Some(lit));
    let brick = scene.add_material("brick", Some(lit));
    let glass = scene.add_material("Glass", Some(unlit));
    let orphan = scene.add_material("orphan", Some(lit));

    let wall = scene.add_renderer(root, vec![Some(brick), None, Some(glass)]);
    let window = scene.add_renderer(child, vec![Some(glass)]);
    let pillar = scene.add_renderer(child, vec![Some(stone)]);
    let outside = scene.add_renderer(elsewhere, vec![Some(orphan)]);

    MixedScene {
        scene,
        root,
        child,
        lit,
        unlit,
        brick,
        stone,
        glass,
        wall,
        window,
        pillar,
        outside,
    }
}
