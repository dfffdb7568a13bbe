//! # confscope Prelude
//!
//! This module provides a convenient prelude for the most commonly used types and traits
//! from the confscope library. Import this module to get quick access to everything needed
//! to declare a configuration type and describe it.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all confscope operations
pub use crate::Error;

/// The result type used throughout confscope
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Describe operations
pub use crate::metadata::configuration::{
    describe, describe_all, describe_configurable, describe_or_fail, describe_or_fail_with,
    describe_with, Configurable,
};

/// Descriptions and their cache
pub use crate::metadata::configuration::{AttributeMetadata, MetadataCache, TypeMetadata};

/// Validation behaviour
pub use crate::metadata::validation::ValidationConfig;

// ================================================================================================
// Type Model
// ================================================================================================

/// Types and their construction
pub use crate::metadata::typesystem::{
    ConfigType, TypeAttributes, TypeBuilder, TypeDescriptor, TypeRc, TypeSignature,
};

/// Methods and their construction
pub use crate::metadata::method::{
    Method, MethodAccessFlags, MethodBuilder, MethodModifiers, MethodRc,
};

/// Configuration markers
pub use crate::metadata::annotations::{AnnotationQuery, ConfigAnnotation};

// ================================================================================================
// Diagnostics
// ================================================================================================

/// Problems and monitors
pub use crate::metadata::diagnostics::{
    Monitor, NullMonitor, Problem, ProblemKind, ProblemSeverity, Problems, Subject,
};
