//! Type descriptors for configuration types.
//!
//! Configuration metadata is reconstructed purely from declarations: no instance of the
//! described type is ever needed. This module defines the introspection capability the
//! extraction engine consumes, and a concrete in-memory implementation of it.
//!
//! # Key Components
//!
//! - [`TypeDescriptor`]: Capability trait exposing declared members, parents and flags
//! - [`ConfigType`]: In-memory descriptor built with [`TypeBuilder`]
//! - [`TypeAttributes`]: Visibility and abstractness flags of a type
//! - [`TypeSignature`]: Parameter and return shapes
//!
//! # Hierarchy Model
//!
//! - **Base chain**: a single optional base type per type, ending at a root with no base
//! - **Interfaces**: any number of implemented interfaces, which may extend interfaces
//! - **Declared members**: methods and constructors declared directly on the type
//!
//! Any other introspection source (a compile-time registry, generated code, a parsed
//! schema) can back the engine by implementing [`TypeDescriptor`].
//!
//! # Examples
//!
//! ```rust
//! use confscope::metadata::method::MethodBuilder;
//! use confscope::metadata::typesystem::{TypeBuilder, TypeSignature};
//!
//! let config = TypeBuilder::class("com.example", "ServerConfig")
//!     .default_constructor()
//!     .method(MethodBuilder::getter("Port", TypeSignature::I4).config("port"))
//!     .method(MethodBuilder::setter("Port", TypeSignature::I4))
//!     .build()?;
//!
//! assert_eq!(config.fullname(), "com.example.ServerConfig");
//! assert!(config.default_constructor().is_some());
//! # Ok::<(), confscope::Error>(())
//! ```

mod base;
mod builder;

use std::{fmt, sync::Arc};

use bitflags::bitflags;

pub use base::TypeSignature;
pub use builder::TypeBuilder;

use crate::metadata::method::MethodRc;

/// Reference to a type descriptor
pub type TypeRc = Arc<dyn TypeDescriptor>;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Type attribute flags
    pub struct TypeAttributes: u32 {
        /// Type is visible outside its package
        const PUBLIC = 0x0001;
        /// Type is an interface
        const INTERFACE = 0x0020;
        /// Type cannot be instantiated
        const ABSTRACT = 0x0080;
        /// Type cannot be extended
        const SEALED = 0x0100;
    }
}

/// Introspection capability over a configuration type.
///
/// Implementations expose only what is declared directly on the type; walking the base
/// chain and interfaces is left to the callers.
pub trait TypeDescriptor: Send + Sync + fmt::Debug {
    /// Namespace (can be empty)
    fn namespace(&self) -> &str;

    /// Simple name
    fn name(&self) -> &str;

    /// Type attribute flags
    fn flags(&self) -> TypeAttributes;

    /// Base type, if any
    fn base(&self) -> Option<TypeRc>;

    /// Directly implemented (or, for interfaces, extended) interfaces
    fn interfaces(&self) -> &[TypeRc];

    /// Methods declared directly on this type, in declaration order
    fn methods(&self) -> &[MethodRc];

    /// Constructors declared directly on this type
    fn constructors(&self) -> &[MethodRc];

    /// Returns the full name (Namespace.Name) of the type
    fn fullname(&self) -> String {
        if self.namespace().is_empty() {
            self.name().to_string()
        } else {
            format!("{}.{}", self.namespace(), self.name())
        }
    }

    /// True if the type is publicly accessible
    fn is_public(&self) -> bool {
        self.flags().contains(TypeAttributes::PUBLIC)
    }

    /// True if the type cannot be instantiated
    fn is_abstract(&self) -> bool {
        self.flags()
            .intersects(TypeAttributes::ABSTRACT | TypeAttributes::INTERFACE)
    }

    /// True if the type is an interface
    fn is_interface(&self) -> bool {
        self.flags().contains(TypeAttributes::INTERFACE)
    }

    /// The constructor without parameters, regardless of its visibility
    fn default_constructor(&self) -> Option<MethodRc> {
        self.constructors()
            .iter()
            .find(|ctor| ctor.params.is_empty())
            .cloned()
    }

    /// The method declared on this type with the given name and parameters
    fn declared_method(&self, name: &str, params: &[TypeSignature]) -> Option<MethodRc> {
        self.methods()
            .iter()
            .find(|method| method.matches_signature(name, params))
            .cloned()
    }
}

/// In-memory type descriptor
#[derive(Debug)]
pub struct ConfigType {
    /// Namespace (can be empty)
    pub namespace: String,
    /// Simple name
    pub name: String,
    /// Visibility and abstractness
    pub flags: TypeAttributes,
    base: Option<TypeRc>,
    interfaces: Vec<TypeRc>,
    methods: Vec<MethodRc>,
    constructors: Vec<MethodRc>,
}

impl TypeDescriptor for ConfigType {
    fn namespace(&self) -> &str {
        &self.namespace
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn flags(&self) -> TypeAttributes {
        self.flags
    }

    fn base(&self) -> Option<TypeRc> {
        self.base.clone()
    }

    fn interfaces(&self) -> &[TypeRc] {
        &self.interfaces
    }

    fn methods(&self) -> &[MethodRc] {
        &self.methods
    }

    fn constructors(&self) -> &[MethodRc] {
        &self.constructors
    }
}

impl fmt::Display for ConfigType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.fullname())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::method::{MethodAccessFlags, MethodBuilder};

    #[test]
    fn test_fullname() {
        let named = TypeBuilder::class("com.example", "Config").build().unwrap();
        assert_eq!(named.fullname(), "com.example.Config");

        let global = TypeBuilder::class("", "Config").build().unwrap();
        assert_eq!(global.fullname(), "Config");
    }

    #[test]
    fn test_flags() {
        let interface = TypeBuilder::interface("com.example", "Settings")
            .build()
            .unwrap();
        assert!(interface.is_interface());
        assert!(interface.is_abstract());
        assert!(interface.is_public());

        let hidden = TypeBuilder::class("com.example", "Hidden")
            .not_public()
            .build()
            .unwrap();
        assert!(!hidden.is_public());
        assert!(!hidden.is_abstract());
    }

    #[test]
    fn test_default_constructor_ignores_visibility() {
        let config = TypeBuilder::class("com.example", "Config")
            .constructor(MethodBuilder::constructor().with_param(TypeSignature::I4))
            .constructor(MethodBuilder::constructor().with_access(MethodAccessFlags::PRIVATE))
            .build()
            .unwrap();

        let ctor = config.default_constructor().unwrap();
        assert!(ctor.params.is_empty());
        assert!(!ctor.is_public());
    }

    #[test]
    fn test_declared_method_lookup() {
        let config = TypeBuilder::class("com.example", "Config")
            .method(MethodBuilder::setter("X", TypeSignature::I4))
            .method(MethodBuilder::setter("X", TypeSignature::boxed(TypeSignature::I4)))
            .build()
            .unwrap();

        let boxed = config
            .declared_method("setX", &[TypeSignature::boxed(TypeSignature::I4)])
            .unwrap();
        assert_eq!(boxed.declaring_type, "com.example.Config");
        assert!(config.declared_method("setX", &[]).is_none());
    }
}
