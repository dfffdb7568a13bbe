//! Method descriptors for configuration types.
//!
//! A [`Method`] is the declaration-level view of an accessor: its name, visibility,
//! modifiers, parameter and return shapes, and the configuration annotations placed on
//! that exact declaration. Overriding declarations in sub-types are separate [`Method`]
//! values; the inspector decides which of them is authoritative.
//!
//! # Key Types
//! - [`Method`]: A single method declaration
//! - [`MethodRc`]: Shared handle used by descriptors and attribute metadata
//! - [`MethodBuilder`]: Fluent construction of method declarations
//! - [`MethodAccessFlags`], [`MethodModifiers`]: Visibility and modifier flags
//!
//! # Example
//!
//! ```rust
//! use confscope::metadata::method::MethodBuilder;
//! use confscope::metadata::typesystem::TypeSignature;
//!
//! let getter = MethodBuilder::getter("Port", TypeSignature::I4)
//!     .config("port")
//!     .build();
//! assert_eq!(getter.name, "getPort");
//! assert!(getter.is_public());
//! ```

mod builder;
mod types;

use std::{fmt, sync::Arc};

pub use builder::MethodBuilder;
pub use types::{MethodAccessFlags, MethodModifiers};

use crate::metadata::{
    annotations::{AnnotationQuery, ConfigAnnotation},
    typesystem::TypeSignature,
};

/// Name used for constructor declarations
pub const CONSTRUCTOR_NAME: &str = ".ctor";

/// Reference to a `Method`
pub type MethodRc = Arc<Method>;

/// A method declaration on a configuration type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    /// Method name, `.ctor` for constructors
    pub name: String,
    /// Full name of the type declaring this method
    pub declaring_type: String,
    /// Visibility
    pub flags_access: MethodAccessFlags,
    /// Static, abstract, final, synthetic and bridge markers
    pub flags_modifiers: MethodModifiers,
    /// Parameter shapes, in declaration order
    pub params: Vec<TypeSignature>,
    /// Return shape
    pub return_type: TypeSignature,
    /// Configuration annotations on this declaration
    pub annotations: Vec<ConfigAnnotation>,
}

impl Method {
    /// True if the method is publicly accessible
    pub fn is_public(&self) -> bool {
        self.flags_access.contains(MethodAccessFlags::PUBLIC)
    }

    /// True if the method is static
    pub fn is_static(&self) -> bool {
        self.flags_modifiers.contains(MethodModifiers::STATIC)
    }

    /// True if the method was generated by the compiler
    pub fn is_synthetic(&self) -> bool {
        self.flags_modifiers.contains(MethodModifiers::SYNTHETIC)
    }

    /// True if the method is a covariance bridge
    pub fn is_bridge(&self) -> bool {
        self.flags_modifiers.contains(MethodModifiers::BRIDGE)
    }

    /// True if the method is a constructor
    pub fn is_constructor(&self) -> bool {
        self.name == CONSTRUCTOR_NAME
    }

    /// Number of declared parameters
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// True if name and parameter shapes both match
    pub fn matches_signature(&self, name: &str, params: &[TypeSignature]) -> bool {
        self.name == name && self.params == params
    }

    /// True if `other` has the same name and parameter shapes
    pub fn same_signature(&self, other: &Method) -> bool {
        self.matches_signature(&other.name, &other.params)
    }

    /// Full rendering of the declaration, e.g. `public int com.example.Config.getPort()`
    pub fn generic_string(&self) -> String {
        self.to_string()
    }
}

impl AnnotationQuery for Method {
    fn annotations(&self) -> &[ConfigAnnotation] {
        &self.annotations
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(keyword) = self.flags_access.keyword() {
            write!(f, "{keyword} ")?;
        }
        if self.flags_modifiers.contains(MethodModifiers::ABSTRACT) {
            write!(f, "abstract ")?;
        }
        if self.is_static() {
            write!(f, "static ")?;
        }
        if self.flags_modifiers.contains(MethodModifiers::FINAL) {
            write!(f, "final ")?;
        }

        if self.is_constructor() {
            write!(f, "{}(", self.declaring_type)?;
        } else {
            write!(f, "{} {}.{}(", self.return_type, self.declaring_type, self.name)?;
        }
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ")")
    }
}
