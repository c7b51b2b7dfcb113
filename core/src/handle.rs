//! Opaque identity handles for host engine objects.
//!
//! Shaders, materials, renderers and textures live in the host engine. The
//! override system only ever refers to them through these handles, which are
//! used as map keys for deduplication and binding.

use std::fmt;

macro_rules! define_handle {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(pub u64);

        impl $name {
            /// Raw handle value.
            pub const fn raw(self) -> u64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

define_handle!(
    /// Identity of a shader in the host engine.
    ShaderId
);
define_handle!(
    /// Identity of a material asset in the host engine.
    MaterialId
);
define_handle!(
    /// Identity of a renderer component in the host engine.
    RendererId
);
define_handle!(
    /// Identity of a scene node that roots an override group.
    NodeId
);
define_handle!(
    /// Host texture handle.
    TextureHandle
);

/// Numeric key of a shader property, derived from its name.
///
/// Uses 32-bit FNV-1a so the same name maps to the same id in every run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PropertyId(pub u32);

impl PropertyId {
    const FNV_OFFSET: u32 = 0x811c_9dc5;
    const FNV_PRIME: u32 = 0x0100_0193;

    /// Derive the id of a property name.
    pub fn from_name(name: &str) -> Self {
        let hash = name.bytes().fold(Self::FNV_OFFSET, |hash, byte| {
            (hash ^ u32::from(byte)).wrapping_mul(Self::FNV_PRIME)
        });
        Self(hash)
    }
}

impl From<&str> for PropertyId {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:08x}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_id_is_deterministic() {
        assert_eq!(PropertyId::from_name("_Color"), PropertyId::from_name("_Color"));
        assert_ne!(PropertyId::from_name("_Color"), PropertyId::from_name("_color"));
    }

    #[test]
    fn property_id_matches_fnv1a() {
        // Reference values for 32-bit FNV-1a.
        assert_eq!(PropertyId::from_name("").0, 0x811c_9dc5);
        assert_eq!(PropertyId::from_name("a").0, 0xe40c_292c);
    }

    #[test]
    fn handle_display() {
        assert_eq!(ShaderId(7).to_string(), "ShaderId(7)");
        assert_eq!(MaterialId(3).raw(), 3);
    }
}
