//! # Metadata Assembly
//!
//! Drives the validators over one configuration type and assembles the resulting
//! [`TypeMetadata`].
//!
//! ## Phases
//!
//! 1. **Structural**: instantiability of the type, see [`StructuralValidator`]
//! 2. **Discovery**: authoritative annotated declarations, see [`TypeInspector`]
//! 3. **Classification**: one attribute per annotated method, see [`AttributeClassifier`]
//! 4. **Merge**: attributes are keyed by name; a second method for the same name is either
//!    the other half of the same binding (getter and setter both annotated identically)
//!    and merged, or a duplicate and reported
//! 5. **Visibility scan**: annotations on non-public or static members (optional)
//! 6. **Deprecation warnings**: attributes only reachable through deprecated names (optional)
//! 7. **Emptiness**: a type with no attributes and no other errors is reported
//!
//! Every phase records into the same [`ValidationContext`], so one run surfaces every
//! problem of the type. Nothing here fails; the caller decides what to do with errors.
//!
//! [`TypeMetadata`]: crate::metadata::configuration::TypeMetadata

use std::collections::{btree_map::Entry, BTreeMap};

use crate::metadata::{
    configuration::{AttributeMetadata, TypeMetadata},
    diagnostics::{Monitor, ProblemKind},
    method::Method,
    typesystem::TypeRc,
    validation::{
        classifier::AttributeClassifier, config::ValidationConfig, context::ValidationContext,
        inspector::TypeInspector, structural::StructuralValidator,
    },
};

/// Builds [`TypeMetadata`] for a single type.
///
/// Stateless; every call gets its own [`ValidationContext`].
///
/// [`TypeMetadata`]: crate::metadata::configuration::TypeMetadata
pub struct MetadataAssembler;

impl MetadataAssembler {
    /// Describes `target`, reporting every problem through `monitor` as it is found.
    ///
    /// # Arguments
    ///
    /// * `target` - The configuration type to describe
    /// * `config` - Which optional phases run, and the hierarchy bound
    /// * `monitor` - Observer notified once per recorded problem
    pub fn assemble(
        target: &TypeRc,
        config: &ValidationConfig,
        monitor: &dyn Monitor,
    ) -> TypeMetadata {
        let ctx = ValidationContext::new(target, config, monitor);
        let span = tracing::debug_span!("describe", type_name = %ctx.type_name);
        let _guard = span.enter();

        let constructor = StructuralValidator::validate(&ctx);

        let (config_methods, public_methods) = TypeInspector::find_config_methods(&ctx);
        let mut attributes: BTreeMap<String, AttributeMetadata> = BTreeMap::new();
        for method in &config_methods {
            if let Some(attribute) = AttributeClassifier::classify(&ctx, method, &public_methods)
            {
                Self::insert(&ctx, &mut attributes, attribute, method);
            }
        }

        if config.enable_visibility_scan {
            TypeInspector::validate_visibility(&ctx);
        }

        if config.warn_deprecated_only {
            Self::warn_deprecated_only(&ctx, &attributes);
        }

        if attributes.is_empty() && !ctx.has_errors() {
            ctx.type_error(
                ProblemKind::EmptyType,
                format!(
                    "Configuration class [{}] does not have any @Config annotations",
                    ctx.type_name
                ),
            );
        }

        let problems = ctx.into_problems();
        tracing::debug!(
            attributes = attributes.len(),
            errors = problems.error_count(),
            warnings = problems.warning_count(),
            "described configuration type"
        );

        TypeMetadata::new(target.clone(), constructor, attributes, problems)
    }

    /// Keys `attribute` by name; `config_method` is the annotated declaration it came from.
    fn insert(
        ctx: &ValidationContext,
        attributes: &mut BTreeMap<String, AttributeMetadata>,
        attribute: AttributeMetadata,
        config_method: &Method,
    ) {
        match attributes.entry(attribute.name().to_string()) {
            Entry::Vacant(slot) => {
                slot.insert(attribute);
            }
            Entry::Occupied(mut slot) if slot.get().is_same_binding(&attribute) => {
                slot.get_mut().merge(attribute);
            }
            Entry::Occupied(slot) => {
                ctx.method_error(
                    ProblemKind::DuplicateAttribute,
                    config_method,
                    format!(
                        "Configuration class [{}] Multiple methods are annotated for \
                         @Config attribute [{}]",
                        ctx.type_name,
                        slot.key()
                    ),
                );
            }
        }
    }

    fn warn_deprecated_only(
        ctx: &ValidationContext,
        attributes: &BTreeMap<String, AttributeMetadata>,
    ) {
        for attribute in attributes.values() {
            if attribute.property_name().is_some() {
                continue;
            }
            ctx.method_warning(
                ProblemKind::Deprecation,
                attribute.setter(),
                format!(
                    "@Config attribute [{}] is only reachable through deprecated property names",
                    attribute.name()
                ),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        metadata::{
            diagnostics::{NullMonitor, Subject},
            method::MethodBuilder,
            typesystem::{TypeBuilder, TypeSignature},
        },
        test::factories::{cyclic_pair, diamond_ladder, port_accessors, RecordingMonitor},
    };
    use tracing_test::traced_test;

    fn describe(target: &TypeRc) -> TypeMetadata {
        MetadataAssembler::assemble(target, &ValidationConfig::default(), &NullMonitor)
    }

    #[test]
    fn test_annotated_getter_and_setter_merge() {
        let target = port_accessors(TypeBuilder::class("test", "Config"))
            .default_constructor()
            .build()
            .unwrap();

        let metadata = describe(&target);
        assert!(metadata.problems().is_empty());
        assert_eq!(metadata.attributes().len(), 1);

        let port = metadata.attribute("Port").unwrap();
        assert_eq!(port.getter().unwrap().name, "getPort");
        assert_eq!(port.setter().name, "setPort");
    }

    #[test]
    fn test_conflicting_bindings_reported() {
        let target = TypeBuilder::class("test", "Config")
            .default_constructor()
            .method(MethodBuilder::getter("Port", TypeSignature::I4).config("port"))
            .method(MethodBuilder::setter("Port", TypeSignature::I4).config("server.port"))
            .build()
            .unwrap();

        let metadata = describe(&target);
        let duplicates = metadata.problems().by_kind(ProblemKind::DuplicateAttribute);
        assert_eq!(duplicates.len(), 1);
        assert_eq!(
            duplicates[0].message,
            "Configuration class [test.Config] Multiple methods are annotated for \
             @Config attribute [Port]"
        );
        assert_eq!(
            duplicates[0].subject,
            Subject::Method("public void test.Config.setPort(int)".into())
        );
        assert_eq!(metadata.attribute("Port").unwrap().property_name(), Some("port"));
    }

    #[test]
    fn test_diamond_ladder_described() {
        let metadata = describe(&diamond_ladder(40));

        assert!(metadata.is_valid());
        let port = metadata.attribute("Port").unwrap();
        assert_eq!(port.property_name(), Some("port"));
        assert_eq!(port.setter().declaring_type, "test.Left39");
    }

    #[test]
    fn test_cyclic_hierarchy_reported() {
        let metadata = describe(&cyclic_pair());

        let structural = metadata.problems().by_kind(ProblemKind::Structural);
        assert_eq!(structural.len(), 1);
        assert!(structural[0].message.contains("deeper than 64 levels"));
        assert!(metadata.attribute("Port").is_some());
    }

    #[test]
    fn test_empty_type() {
        let target = TypeBuilder::class("test", "Config")
            .default_constructor()
            .build()
            .unwrap();

        let metadata = describe(&target);
        assert_eq!(metadata.problems().by_kind(ProblemKind::EmptyType).len(), 1);
        assert!(!metadata.is_valid());
    }

    #[test]
    fn test_empty_check_skipped_when_other_errors() {
        let target = TypeBuilder::class("test", "Config").build().unwrap();

        let metadata = describe(&target);
        assert!(metadata.problems().by_kind(ProblemKind::EmptyType).is_empty());
        assert_eq!(metadata.problems().error_count(), 1);
    }

    #[test]
    fn test_visibility_scan_toggle() {
        let target = port_accessors(TypeBuilder::class("test", "Config"))
            .default_constructor()
            .method(
                MethodBuilder::setter("Host", TypeSignature::String)
                    .static_method()
                    .config("host"),
            )
            .build()
            .unwrap();

        let metadata = describe(&target);
        assert_eq!(metadata.problems().by_kind(ProblemKind::Visibility).len(), 1);

        let metadata =
            MetadataAssembler::assemble(&target, &ValidationConfig::minimal(), &NullMonitor);
        assert!(metadata.problems().is_empty());
    }

    #[test]
    fn test_deprecated_only_warning() {
        let target = TypeBuilder::class("test", "Config")
            .default_constructor()
            .method(
                MethodBuilder::setter("Port", TypeSignature::I4).deprecated_config(["http.port"]),
            )
            .build()
            .unwrap();

        let metadata = describe(&target);
        assert!(metadata.problems().is_empty());

        let monitor = RecordingMonitor::default();
        let metadata = MetadataAssembler::assemble(&target, &ValidationConfig::strict(), &monitor);
        assert_eq!(metadata.problems().warning_count(), 1);
        assert_eq!(monitor.warnings().len(), 1);
        assert!(monitor.errors().is_empty());
        assert!(metadata.is_valid());
    }

    #[test]
    fn test_monitor_sees_every_problem() {
        let target = TypeBuilder::class("test", "Config")
            .abstract_type()
            .method(MethodBuilder::getter("Port", TypeSignature::I4).config("port"))
            .build()
            .unwrap();
        let monitor = RecordingMonitor::default();

        let metadata = MetadataAssembler::assemble(&target, &ValidationConfig::default(), &monitor);
        assert_eq!(monitor.errors().len(), metadata.problems().error_count());
        assert_eq!(metadata.problems().error_count(), 3);
    }

    #[test]
    #[traced_test]
    fn test_summary_logged() {
        let target = port_accessors(TypeBuilder::class("test", "Config"))
            .default_constructor()
            .build()
            .unwrap();

        describe(&target);
        assert!(logs_contain("described configuration type"));
    }
}
