//! # Structural Validation of Configuration Types
//!
//! A configuration type must be instantiable by the binder: concrete, publicly visible
//! and with a public constructor taking no arguments. Each violated rule is recorded as a
//! separate structural error and processing continues, so every structural issue of a
//! type surfaces in the same report.
//!
//! ## Validation Rules
//!
//! 1. **Concrete**: abstract types and interfaces cannot be instantiated
//! 2. **Visibility**: the type itself must be public
//! 3. **Constructor**: a no-argument constructor must exist and be public
//! 4. **Depth**: the hierarchy must not be deeper than the configured bound

use crate::metadata::{
    diagnostics::ProblemKind,
    method::MethodRc,
    validation::{context::ValidationContext, inspector::TypeInspector},
};

/// Checks that a configuration type can be instantiated.
pub struct StructuralValidator;

impl StructuralValidator {
    /// Validates the target type of `ctx`.
    ///
    /// # Returns
    ///
    /// The public no-argument constructor, or `None` if the type has no usable one.
    pub(crate) fn validate(ctx: &ValidationContext) -> Option<MethodRc> {
        let target = ctx.target;

        if target.is_abstract() {
            ctx.type_error(
                ProblemKind::Structural,
                format!("Config class [{}] is abstract", ctx.type_name),
            );
        }

        if !target.is_public() {
            ctx.type_error(
                ProblemKind::Structural,
                format!("Config class [{}] is not public", ctx.type_name),
            );
        }

        if TypeInspector::exceeds_depth(target, ctx.config.max_hierarchy_depth) {
            ctx.type_error(
                ProblemKind::Structural,
                format!(
                    "Config class [{}] has a type hierarchy deeper than {} levels",
                    ctx.type_name, ctx.config.max_hierarchy_depth
                ),
            );
        }

        match target.default_constructor() {
            Some(constructor) if constructor.is_public() => Some(constructor),
            Some(constructor) => {
                ctx.method_error(
                    ProblemKind::Structural,
                    &constructor,
                    format!("Constructor [{}] is not public", constructor.generic_string()),
                );
                None
            }
            None => {
                ctx.type_error(
                    ProblemKind::Structural,
                    format!(
                        "Configuration class [{}] does not have a public no-arg constructor",
                        ctx.type_name
                    ),
                );
                None
            }
        }
    }
}
