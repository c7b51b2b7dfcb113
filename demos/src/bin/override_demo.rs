//! Override group walkthrough on an in-memory scene.
//!
//! ```bash
//! cargo run -p overrides-demos --bin override_demo -- --config demos/overrides.toml --frames 3
//! RUST_LOG=debug cargo run -p overrides-demos --bin override_demo
//! ```

use std::path::PathBuf;

use clap::Parser;
use overrides_core::{PropertyValue, RendererId, TextureHandle};
use overrides_demos::{Showroom, showroom};
use overrides_group::{
    ApplyMode, GroupConfig, MemoryScene, OverrideGroup, load_or_default, visible_overrides,
};

/// Material override group demo.
#[derive(Parser, Debug)]
#[command(
    name = "override_demo",
    about = "Author, apply and clear material overrides on a demo scene"
)]
struct Args {
    /// Group configuration file (TOML). Defaults are used when missing.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of simulated frames to apply overrides for.
    #[arg(long, default_value = "3")]
    frames: u32,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    log::info!("Starting override group demo");
    log::info!("Core version: {}", overrides_core::VERSION);
    log::info!("Group version: {}", overrides_group::VERSION);

    let config = match &args.config {
        Some(path) => load_or_default(path),
        None => GroupConfig::default(),
    };

    let Showroom {
        mut scene,
        root,
        lit,
        glass,
        metal,
        window_pane,
        lamp,
        table,
        window,
        ..
    } = showroom();

    let mut group = OverrideGroup::with_config(root, config);
    group.enable(&mut scene);
    log::info!(
        "Enabled group on {root}: {} renderers, {} shaders, {} materials",
        group.renderers().len(),
        group.shaders().len(),
        group.materials().len()
    );

    // Shader-wide: darker, shinier lit surfaces with the engine default albedo.
    if let Some(list) = group.shader_overrides_mut(lit) {
        edit(list.set_override("_Smoothness", PropertyValue::Float(0.9)));
        edit(list.set_override("_BaseColor", PropertyValue::Color([0.6, 0.6, 0.6, 1.0])));
        edit(list.set_override("_BaseMap", PropertyValue::Texture(None)));
    }
    // Material-specific: metal stays bright and fully metallic.
    if let Some(list) = group.material_overrides_mut(metal) {
        edit(list.set_override("_BaseColor", PropertyValue::Color([0.9, 0.9, 0.95, 1.0])));
        edit(list.set_override("_Metallic", PropertyValue::Float(1.0)));
    }
    if let Some(list) = group.material_overrides_mut(window_pane) {
        edit(list.set_override(
            "_Reflection",
            PropertyValue::Texture(Some(TextureHandle(42).into())),
        ));
    }
    if let Some(list) = group.shader_overrides(lit) {
        let view = group.config().view;
        let names: Vec<_> = visible_overrides(list, view)
            .map(|o| o.property_info().display_name().to_owned())
            .collect();
        log::info!("Inspector lists {} lit overrides: {names:?}", names.len());
    }

    for frame in 0..args.frames {
        group.apply(&mut scene);
        log::info!("Frame {frame}: applied {} cache entries", group.apply_cache().len());
    }
    for renderer in [lamp, table, window] {
        report(&scene, &group, renderer);
    }

    // Touch the hierarchy: the glass shader disappears from the scene.
    scene.set_renderer_materials(window, vec![Some(metal)]);
    group.on_hierarchy_changed(&mut scene);
    log::info!(
        "After hierarchy change: glass overrides bound = {}",
        group.shader_overrides(glass).is_some()
    );

    let other = match group.config().apply_mode {
        ApplyMode::Renderer => ApplyMode::MaterialSlot,
        ApplyMode::MaterialSlot => ApplyMode::Renderer,
    };
    group.set_apply_mode(&mut scene, other);
    log::info!("Switched apply mode to {other:?}");
    report(&scene, &group, table);

    group.disable(&mut scene);
    let leftover = [lamp, table, window]
        .iter()
        .filter(|&&r| scene.has_any_block(r))
        .count();
    log::info!("Disabled group, {leftover} renderers still carry overrides");
}

fn edit(result: Result<(), overrides_core::OverrideError>) {
    if let Err(e) = result {
        log::warn!("Override edit rejected: {e}");
    }
}

fn report(scene: &MemoryScene, group: &OverrideGroup, renderer: RendererId) {
    match group.config().apply_mode {
        ApplyMode::Renderer => {
            let count = scene.property_block(renderer).map_or(0, |b| b.len());
            log::info!("{renderer}: {count} overridden properties");
        }
        ApplyMode::MaterialSlot => {
            for entry in group.apply_cache().entries_for(renderer) {
                let count = scene
                    .slot_property_block(renderer, entry.slot)
                    .map_or(0, |b| b.len());
                log::info!("{renderer} slot {}: {count} overridden properties", entry.slot);
            }
        }
    }
}
