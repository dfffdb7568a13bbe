//! Builder for configuration type descriptors.
//!
//! This module provides the [`TypeBuilder`] struct, which offers a fluent API for
//! constructing [`ConfigType`] descriptors: classes and interfaces, their base type,
//! implemented interfaces, declared methods and constructors.
//!
//! # Example
//!
//! ```rust
//! use confscope::metadata::method::MethodBuilder;
//! use confscope::metadata::typesystem::{TypeBuilder, TypeSignature};
//!
//! let base = TypeBuilder::class("com.example", "BaseConfig")
//!     .abstract_type()
//!     .method(MethodBuilder::setter("Name", TypeSignature::String).config("name"))
//!     .build()?;
//!
//! let config = TypeBuilder::class("com.example", "ServerConfig")
//!     .extends(base)
//!     .default_constructor()
//!     .build()?;
//!
//! assert!(config.base().is_some());
//! # Ok::<(), confscope::Error>(())
//! ```

use std::sync::Arc;

use crate::{
    metadata::{
        method::{MethodBuilder, MethodRc},
        typesystem::{ConfigType, TypeAttributes, TypeRc},
    },
    Result,
};

/// Provides a fluent API for building type descriptors
#[derive(Debug)]
pub struct TypeBuilder {
    namespace: String,
    name: String,
    flags: TypeAttributes,
    base: Option<TypeRc>,
    interfaces: Vec<TypeRc>,
    methods: Vec<MethodBuilder>,
    constructors: Vec<MethodBuilder>,
}

impl TypeBuilder {
    fn new(namespace: &str, name: &str, flags: TypeAttributes) -> Self {
        TypeBuilder {
            namespace: namespace.to_string(),
            name: name.to_string(),
            flags,
            base: None,
            interfaces: Vec::new(),
            methods: Vec::new(),
            constructors: Vec::new(),
        }
    }

    /// Start building a public, concrete class
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for a class type
    /// * 'name'      - Name for a class type
    pub fn class(namespace: &str, name: &str) -> Self {
        Self::new(namespace, name, TypeAttributes::PUBLIC)
    }

    /// Start building a public interface
    ///
    /// ## Arguments
    /// * 'namespace' - Namespace for an interface type
    /// * 'name'      - Name for an interface type
    pub fn interface(namespace: &str, name: &str) -> Self {
        Self::new(
            namespace,
            name,
            TypeAttributes::PUBLIC | TypeAttributes::INTERFACE | TypeAttributes::ABSTRACT,
        )
    }

    /// Replace the type attribute flags
    #[must_use]
    pub fn with_flags(mut self, flags: TypeAttributes) -> Self {
        self.flags = flags;
        self
    }

    /// Mark the type abstract
    #[must_use]
    pub fn abstract_type(mut self) -> Self {
        self.flags |= TypeAttributes::ABSTRACT;
        self
    }

    /// Remove public visibility
    #[must_use]
    pub fn not_public(mut self) -> Self {
        self.flags.remove(TypeAttributes::PUBLIC);
        self
    }

    /// Set the base type
    #[must_use]
    pub fn extends(mut self, base: TypeRc) -> Self {
        self.base = Some(base);
        self
    }

    /// Add an implemented interface
    #[must_use]
    pub fn implements(mut self, interface: TypeRc) -> Self {
        self.interfaces.push(interface);
        self
    }

    /// Declare a method
    #[must_use]
    pub fn method(mut self, method: MethodBuilder) -> Self {
        self.methods.push(method);
        self
    }

    /// Declare a constructor
    #[must_use]
    pub fn constructor(mut self, constructor: MethodBuilder) -> Self {
        self.constructors.push(constructor);
        self
    }

    /// Declare a public no-argument constructor
    #[must_use]
    pub fn default_constructor(self) -> Self {
        self.constructor(MethodBuilder::constructor())
    }

    /// Finish the type
    ///
    /// # Errors
    /// Returns an error if the type or one of its methods has an empty name, or if a
    /// declared constructor does not use the constructor name.
    pub fn build(self) -> Result<TypeRc> {
        if self.name.is_empty() {
            return Err(type_error!("Type in namespace '{}' has empty name", self.namespace));
        }

        let fullname = if self.namespace.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.namespace, self.name)
        };

        let attach = |builder: MethodBuilder| -> MethodRc {
            let mut method = builder.build();
            method.declaring_type.clone_from(&fullname);
            Arc::new(method)
        };

        let methods: Vec<MethodRc> = self.methods.into_iter().map(attach).collect();
        if methods.iter().any(|m| m.name.is_empty()) {
            return Err(type_error!("Method in type '{}' has empty name", fullname));
        }

        let constructors: Vec<MethodRc> = self.constructors.into_iter().map(attach).collect();
        if let Some(ctor) = constructors.iter().find(|c| !c.is_constructor()) {
            return Err(type_error!(
                "Constructor '{}' in type '{}' must be named .ctor",
                ctor.name,
                fullname
            ));
        }

        Ok(Arc::new(ConfigType {
            namespace: self.namespace,
            name: self.name,
            flags: self.flags,
            base: self.base,
            interfaces: self.interfaces,
            methods,
            constructors,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::typesystem::{TypeDescriptor, TypeSignature},
        Error,
    };

    #[test]
    fn test_methods_get_declaring_type() {
        let config = TypeBuilder::class("com.example", "Config")
            .method(MethodBuilder::setter("Port", TypeSignature::I4))
            .default_constructor()
            .build()
            .unwrap();

        assert_eq!(config.methods()[0].declaring_type, "com.example.Config");
        assert_eq!(config.constructors()[0].declaring_type, "com.example.Config");
    }

    #[test]
    fn test_empty_type_name() {
        let result = TypeBuilder::class("com.example", "").build();
        assert!(matches!(result, Err(Error::TypeError(_))));
    }

    #[test]
    fn test_empty_method_name() {
        let result = TypeBuilder::class("com.example", "Config")
            .method(MethodBuilder::new(""))
            .build();
        assert!(matches!(result, Err(Error::TypeError(_))));
    }

    #[test]
    fn test_misnamed_constructor() {
        let result = TypeBuilder::class("com.example", "Config")
            .constructor(MethodBuilder::new("init"))
            .build();
        assert!(matches!(result, Err(Error::TypeError(_))));
    }

    #[test]
    fn test_hierarchy() {
        let iface = TypeBuilder::interface("com.example", "Settings")
            .build()
            .unwrap();
        let base = TypeBuilder::class("com.example", "Base")
            .abstract_type()
            .build()
            .unwrap();
        let config = TypeBuilder::class("com.example", "Config")
            .extends(base)
            .implements(iface)
            .build()
            .unwrap();

        assert_eq!(config.base().unwrap().name(), "Base");
        assert_eq!(config.interfaces().len(), 1);
        assert!(config.base().unwrap().is_abstract());
    }
}
