//! Annotation validation for configuration methods.
//!
//! A configuration method must carry a current-name marker, a deprecated-names marker,
//! or both, and their values must be usable as property names:
//!
//! - the current name is non-empty
//! - the deprecated list is non-empty and has no empty entries
//! - no deprecated entry repeats the current name of the same method
//!
//! Every violation is recorded; a method with any violation is excluded from attribute
//! classification.

use crate::metadata::{
    annotations::AnnotationQuery, diagnostics::ProblemKind, method::Method,
    validation::context::ValidationContext,
};

/// Checks the annotation data on a single configuration method.
pub struct AnnotationValidator;

impl AnnotationValidator {
    /// Validates the annotations of `method`.
    ///
    /// # Returns
    ///
    /// `true` if the method may be classified, `false` if any violation was recorded.
    pub(crate) fn validate(ctx: &ValidationContext, method: &Method) -> bool {
        let config = method.config();
        let deprecated = method.deprecated_config();

        if config.is_none() && deprecated.is_none() {
            ctx.method_error(
                ProblemKind::Annotation,
                method,
                format!(
                    "Method [{}] must have either @Config or @DeprecatedConfig annotations",
                    method.generic_string()
                ),
            );
            return false;
        }

        let mut is_valid = true;

        if config.is_some_and(str::is_empty) {
            ctx.method_error(
                ProblemKind::Annotation,
                method,
                format!(
                    "@Config method [{}] annotation has an empty value",
                    method.generic_string()
                ),
            );
            is_valid = false;
        }

        if let Some(names) = deprecated {
            if names.is_empty() {
                ctx.method_error(
                    ProblemKind::Annotation,
                    method,
                    format!(
                        "@DeprecatedConfig method [{}] annotation has an empty list",
                        method.generic_string()
                    ),
                );
                is_valid = false;
            }

            for name in names {
                if name.is_empty() {
                    ctx.method_error(
                        ProblemKind::Annotation,
                        method,
                        format!(
                            "@DeprecatedConfig method [{}] annotation contains an empty value",
                            method.generic_string()
                        ),
                    );
                    is_valid = false;
                } else if config == Some(name.as_str()) {
                    ctx.method_error(
                        ProblemKind::Annotation,
                        method,
                        format!(
                            "@Config property name '{}' appears in @DeprecatedConfig \
                             annotation for method [{}]",
                            name,
                            method.generic_string()
                        ),
                    );
                    is_valid = false;
                }
            }
        }

        is_valid
    }
}
