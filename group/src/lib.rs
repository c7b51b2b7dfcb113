//! # Material Override Groups
//!
//! Binds override lists to the renderers of a scene subtree and pushes the
//! resolved values into their property blocks.
//!
//! - [`OverrideHost`] - What the engine must provide
//! - [`OverrideGroup`] - Discovery, apply cache, apply and clear
//! - [`GroupConfig`] - TOML-loadable settings
//! - [`OverrideView`] - Inspector listing filter
//! - `MemoryScene` - In-memory host (`memory` feature)
//!
//! # Example
//!
//! ```
//! use overrides_core::{PropertyDesc, PropertyValue, ShaderDesc};
//! use overrides_group::{MemoryScene, OverrideGroup};
//!
//! let mut scene = MemoryScene::new();
//! let root = scene.add_node(None);
//! let shader = scene.add_shader(
//!     ShaderDesc::new("S").with_property(PropertyDesc::float("P", 0.5)),
//! );
//! let material = scene.add_material("M", Some(shader));
//! let renderer = scene.add_renderer(root, vec![Some(material)]);
//!
//! let mut group = OverrideGroup::new(root);
//! group.enable(&mut scene);
//!
//! group
//!     .shader_overrides_mut(shader)
//!     .unwrap()
//!     .set_override("P", PropertyValue::Float(1.2))
//!     .unwrap();
//! group.apply(&mut scene);
//!
//! let block = scene.property_block(renderer).unwrap();
//! assert_eq!(block.get_float("P".into()), Some(1.2));
//! ```

pub mod cache;
pub mod config;
pub mod group;
pub mod host;
#[cfg(feature = "memory")]
pub mod memory;
pub mod view;

pub use cache::{ApplyCache, ApplyCacheEntry};
pub use config::{ApplyMode, ConfigError, GroupConfig, load_config, load_or_default, parse_config};
pub use group::{GroupState, OverrideGroup};
pub use host::OverrideHost;
#[cfg(feature = "memory")]
pub use memory::MemoryScene;
pub use view::{OverrideView, visible_overrides};

/// Group library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
