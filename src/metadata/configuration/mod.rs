//! # Configuration Metadata
//!
//! The public face of the crate: describing a configuration type yields a [`TypeMetadata`]
//! listing every bindable [`AttributeMetadata`] together with every problem found on the
//! way.
//!
//! ## Entry Points
//!
//! - [`describe`] / [`describe_with`] - Never fail; inspect [`TypeMetadata::is_valid`]
//! - [`describe_or_fail`] / [`describe_or_fail_with`] - Fail with every error at once
//! - [`describe_configurable`] - For types carrying their own [`Configurable`] descriptor
//! - [`describe_all`] - Many types in parallel
//! - [`MetadataCache`] - Shared memoised descriptions keyed by type name
//!
//! # Examples
//!
//! ```rust
//! use confscope::prelude::*;
//!
//! let server = TypeBuilder::class("com.example", "ServerConfig")
//!     .default_constructor()
//!     .method(MethodBuilder::getter("Port", TypeSignature::I4))
//!     .method(
//!         MethodBuilder::setter("Port", TypeSignature::I4)
//!             .config("server.port")
//!             .deprecated_config(["http.port"]),
//!     )
//!     .build()?;
//!
//! let metadata = describe(&server);
//! assert!(metadata.is_valid());
//!
//! let port = metadata.attribute("Port").unwrap();
//! assert_eq!(port.property_names().collect::<Vec<_>>(), ["server.port", "http.port"]);
//! # Ok::<(), confscope::Error>(())
//! ```

mod attribute;
mod cache;

pub use attribute::AttributeMetadata;
pub use cache::{describe_all, MetadataCache};

use std::{collections::BTreeMap, fmt};

use crate::{
    metadata::{
        diagnostics::{Monitor, NullMonitor, Problems},
        method::MethodRc,
        typesystem::TypeRc,
        validation::{MetadataAssembler, ValidationConfig},
    },
    Result,
};

/// Everything known about one configuration type.
///
/// Built once per describe call and never modified afterwards. Two values are equal when
/// they describe the same type.
#[derive(Debug, Clone)]
pub struct TypeMetadata {
    target_type: TypeRc,
    constructor: Option<MethodRc>,
    attributes: BTreeMap<String, AttributeMetadata>,
    problems: Problems,
}

impl TypeMetadata {
    pub(crate) fn new(
        target_type: TypeRc,
        constructor: Option<MethodRc>,
        attributes: BTreeMap<String, AttributeMetadata>,
        problems: Problems,
    ) -> Self {
        TypeMetadata {
            target_type,
            constructor,
            attributes,
            problems,
        }
    }

    /// The described type
    pub fn target_type(&self) -> &TypeRc {
        &self.target_type
    }

    /// Public no-argument constructor, if the type has one
    pub fn constructor(&self) -> Option<&MethodRc> {
        self.constructor.as_ref()
    }

    /// Attributes keyed by name, in name order
    pub fn attributes(&self) -> &BTreeMap<String, AttributeMetadata> {
        &self.attributes
    }

    /// Looks up one attribute by name (case-sensitive)
    pub fn attribute(&self, name: &str) -> Option<&AttributeMetadata> {
        self.attributes.get(name)
    }

    /// Problems recorded while describing the type, in recording order
    pub fn problems(&self) -> &Problems {
        &self.problems
    }

    /// True if no error-level problem was recorded.
    ///
    /// Invalid metadata must not be used for binding. Warnings do not affect validity.
    pub fn is_valid(&self) -> bool {
        !self.problems.has_errors()
    }
}

impl PartialEq for TypeMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.target_type.fullname() == other.target_type.fullname()
    }
}

impl Eq for TypeMetadata {}

impl fmt::Display for TypeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeMetadata {{ type: {} }}", self.target_type.fullname())
    }
}

/// A type that supplies its own configuration descriptor.
///
/// Implemented by application config structs that declare their accessors up front
/// instead of relying on runtime type inspection.
pub trait Configurable {
    /// Builds the descriptor of the implementing type.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::TypeError`] if the descriptor is inconsistent.
    fn descriptor() -> Result<TypeRc>;
}

/// Describes `target` with the default configuration.
///
/// Never fails; check [`TypeMetadata::is_valid`] before binding.
pub fn describe(target: &TypeRc) -> TypeMetadata {
    describe_with(target, &ValidationConfig::default(), &NullMonitor)
}

/// Describes `target` with an explicit configuration and monitor.
///
/// `monitor` is notified once per problem at the moment it is recorded.
pub fn describe_with(
    target: &TypeRc,
    config: &ValidationConfig,
    monitor: &dyn Monitor,
) -> TypeMetadata {
    MetadataAssembler::assemble(target, config, monitor)
}

/// Describes `target`, failing if any error was recorded.
///
/// # Errors
///
/// Returns [`crate::Error::ConfigurationDescription`] listing every error-level problem.
pub fn describe_or_fail(target: &TypeRc) -> Result<TypeMetadata> {
    describe_or_fail_with(target, &ValidationConfig::default(), &NullMonitor)
}

/// Describes `target` with an explicit configuration and monitor, failing on errors.
///
/// # Errors
///
/// Returns [`crate::Error::ConfigurationDescription`] listing every error-level problem.
pub fn describe_or_fail_with(
    target: &TypeRc,
    config: &ValidationConfig,
    monitor: &dyn Monitor,
) -> Result<TypeMetadata> {
    let metadata = describe_with(target, config, monitor);
    metadata
        .problems
        .throw_if_has_errors(&metadata.target_type.fullname())?;
    Ok(metadata)
}

/// Describes a [`Configurable`] type from its own descriptor.
///
/// # Errors
///
/// Returns the descriptor's error if it cannot be built.
pub fn describe_configurable<T: Configurable>() -> Result<TypeMetadata> {
    let descriptor = T::descriptor()?;
    Ok(describe(&descriptor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            diagnostics::ProblemKind,
            method::MethodBuilder,
            typesystem::{TypeBuilder, TypeSignature},
        },
        test::factories::{port_accessors, server_config},
        Error,
    };

    struct DatabaseConfig;

    impl Configurable for DatabaseConfig {
        fn descriptor() -> Result<TypeRc> {
            TypeBuilder::class("app", "DatabaseConfig")
                .default_constructor()
                .method(MethodBuilder::getter("Url", TypeSignature::String))
                .method(MethodBuilder::setter("Url", TypeSignature::String).config("db.url"))
                .build()
        }
    }

    #[test]
    fn test_describe_valid_type() {
        let metadata = describe(&server_config());

        assert!(metadata.is_valid());
        assert!(metadata.constructor().is_some());
        let names: Vec<&String> = metadata.attributes().keys().collect();
        assert_eq!(names, vec!["Host", "Port"]);
        assert_eq!(metadata.to_string(), "TypeMetadata { type: com.example.ServerConfig }");
    }

    #[test]
    fn test_equality_by_type_name() {
        let first = describe(&server_config());
        let second = describe(&server_config());
        assert_eq!(first, second);

        let other = describe(
            &port_accessors(TypeBuilder::class("com.example", "Other"))
                .default_constructor()
                .build()
                .unwrap(),
        );
        assert_ne!(first, other);
    }

    #[test]
    fn test_describe_or_fail_reports_all_errors() {
        let target = TypeBuilder::class("test", "Broken")
            .abstract_type()
            .method(MethodBuilder::new("port").config("port"))
            .build()
            .unwrap();

        match describe_or_fail(&target) {
            Err(Error::ConfigurationDescription {
                type_name,
                report,
                problems,
            }) => {
                assert_eq!(type_name, "test.Broken");
                assert_eq!(problems.len(), 3);
                assert_eq!(report.lines().count(), 3);
                assert!(report.starts_with("  1) [ERROR] Structural: "));
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_describe_or_fail_accepts_warnings() {
        let target = TypeBuilder::class("test", "Legacy")
            .default_constructor()
            .method(
                MethodBuilder::setter("Port", TypeSignature::I4).deprecated_config(["old.port"]),
            )
            .build()
            .unwrap();

        let metadata =
            describe_or_fail_with(&target, &ValidationConfig::strict(), &NullMonitor).unwrap();
        assert_eq!(metadata.problems().by_kind(ProblemKind::Deprecation).len(), 1);
    }

    #[test]
    fn test_describe_configurable() {
        let metadata = describe_configurable::<DatabaseConfig>().unwrap();
        assert!(metadata.is_valid());
        assert_eq!(
            metadata.attribute("Url").unwrap().property_name(),
            Some("db.url")
        );
    }
}
