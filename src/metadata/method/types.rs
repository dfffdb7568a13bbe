//! Method flags for configuration accessor descriptors.
//!
//! # Key Types
//! - [`MethodAccessFlags`]: Visibility of a method
//! - [`MethodModifiers`]: Static, abstract, final and compiler-generated markers

use bitflags::bitflags;

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method access flags
    pub struct MethodAccessFlags: u32 {
        /// Accessible only by the declaring type
        const PRIVATE = 0x0001;
        /// Accessible by anyone in the declaring package
        const PACKAGE = 0x0002;
        /// Accessible by the declaring type and sub-types
        const PROTECTED = 0x0004;
        /// Accessible by anyone who has visibility to the declaring type
        const PUBLIC = 0x0008;
    }
}

impl MethodAccessFlags {
    /// Keyword used when rendering a method signature
    #[must_use]
    pub fn keyword(&self) -> Option<&'static str> {
        if self.contains(Self::PUBLIC) {
            Some("public")
        } else if self.contains(Self::PROTECTED) {
            Some("protected")
        } else if self.contains(Self::PRIVATE) {
            Some("private")
        } else {
            None
        }
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    /// Method modifiers and properties
    pub struct MethodModifiers: u32 {
        /// Defined on type, else per instance
        const STATIC = 0x0010;
        /// Method cannot be overridden
        const FINAL = 0x0020;
        /// Method does not provide an implementation
        const ABSTRACT = 0x0400;
        /// Bridge method generated to implement covariant overrides
        const BRIDGE = 0x0040;
        /// Method was generated by the compiler and has no source declaration
        const SYNTHETIC = 0x1000;
    }
}

impl MethodModifiers {
    /// True for methods that never carry user intent: static, synthetic or bridge
    #[must_use]
    pub fn is_artifact(&self) -> bool {
        self.intersects(Self::STATIC | Self::SYNTHETIC | Self::BRIDGE)
    }
}
