use criterion::{Criterion, black_box, criterion_group, criterion_main};

use overrides_core::{NodeId, PropertyDesc, PropertyValue, ShaderDesc, TextureDimension};
use overrides_group::{ApplyMode, GroupConfig, MemoryScene, OverrideGroup};

const RENDERERS: usize = 128;
const MATERIALS: usize = 16;

fn lit_shader(name: &str) -> ShaderDesc {
    ShaderDesc::new(name)
        .with_property(PropertyDesc::color("_BaseColor", [1.0; 4]))
        .with_property(PropertyDesc::float("_Metallic", 0.0))
        .with_property(PropertyDesc::range("_Smoothness", 0.5, [0.0, 1.0]))
        .with_property(PropertyDesc::texture("_BaseMap", TextureDimension::Tex2D, "white"))
}

/// Two shaders, [`MATERIALS`] materials and [`RENDERERS`] two-slot renderers.
fn build_scene() -> (MemoryScene, NodeId) {
    let mut scene = MemoryScene::new();
    let root = scene.add_node(None);
    let shaders = [
        scene.add_shader(lit_shader("Lit")),
        scene.add_shader(lit_shader("Foliage")),
    ];
    let materials: Vec<_> = (0..MATERIALS)
        .map(|i| scene.add_material(&format!("mat_{i:02}"), Some(shaders[i % 2])))
        .collect();

    for i in 0..RENDERERS {
        let node = scene.add_node(Some(root));
        scene.add_renderer(
            node,
            vec![
                Some(materials[i % MATERIALS]),
                Some(materials[(i + 1) % MATERIALS]),
            ],
        );
    }
    (scene, root)
}

fn enabled_group(scene: &mut MemoryScene, root: NodeId, mode: ApplyMode) -> OverrideGroup {
    let mut group = OverrideGroup::with_config(
        root,
        GroupConfig {
            apply_mode: mode,
            ..GroupConfig::default()
        },
    );
    group.enable(scene);
    for list in group.shader_lists_mut() {
        list.set_override("_Metallic", PropertyValue::Float(0.75)).unwrap();
        list.set_override("_BaseMap", PropertyValue::Texture(None)).unwrap();
    }
    for list in group.material_lists_mut() {
        list.set_override("_BaseColor", PropertyValue::Color([0.5, 0.5, 0.5, 1.0]))
            .unwrap();
    }
    group
}

// ---------------------------------------------------------------------------
// Discovery
// ---------------------------------------------------------------------------

fn bench_populate(c: &mut Criterion) {
    let (mut scene, root) = build_scene();
    let mut group = OverrideGroup::new(root);
    group.populate(&mut scene);

    c.bench_function("populate_128_renderers", |b| {
        b.iter(|| group.populate(black_box(&mut scene)));
    });
}

fn bench_refresh_cache(c: &mut Criterion) {
    let (mut scene, root) = build_scene();
    let mut group = OverrideGroup::new(root);
    group.populate(&mut scene);

    c.bench_function("refresh_cache_128_renderers", |b| {
        b.iter(|| group.refresh_cache(black_box(&scene)));
    });
}

// ---------------------------------------------------------------------------
// Apply
// ---------------------------------------------------------------------------

fn bench_apply_renderer(c: &mut Criterion) {
    let (mut scene, root) = build_scene();
    let mut group = enabled_group(&mut scene, root, ApplyMode::Renderer);

    c.bench_function("apply_renderer_mode", |b| {
        b.iter(|| group.apply(black_box(&mut scene)));
    });
}

fn bench_apply_material_slot(c: &mut Criterion) {
    let (mut scene, root) = build_scene();
    let mut group = enabled_group(&mut scene, root, ApplyMode::MaterialSlot);

    c.bench_function("apply_material_slot_mode", |b| {
        b.iter(|| group.apply(black_box(&mut scene)));
    });
}

criterion_group!(discovery_benches, bench_populate, bench_refresh_cache);
criterion_group!(apply_benches, bench_apply_renderer, bench_apply_material_slot);

criterion_main!(discovery_benches, apply_benches);
