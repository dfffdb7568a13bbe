//! Setter resolution for getter-annotated attributes.
//!
//! When the annotation sits on a getter, the matching setter has to be found by name:
//! `set<Attribute>` with exactly one parameter, public, instance and not compiler
//! generated, declared on the type or anywhere in its base chain. Every declaration
//! counts, so an override and the declaration it overrides are two candidates.
//!
//! | Candidates | Outcome |
//! |------------|---------|
//! | 0 | Binding error, attribute dropped |
//! | 1 | Paired as the setter |
//! | 2+ | Binding error (ambiguous), attribute dropped |

use crate::metadata::{
    diagnostics::ProblemKind,
    method::{Method, MethodRc},
    validation::{context::ValidationContext, inspector::TypeInspector},
};

/// Finds the single setter for a getter-derived attribute.
pub struct SetterMatcher;

impl SetterMatcher {
    /// Resolves the setter of `attribute_name` for the annotated getter `config_method`.
    ///
    /// # Returns
    ///
    /// The setter, or `None` after recording a binding error.
    pub(crate) fn find_setter(
        ctx: &ValidationContext,
        config_method: &Method,
        attribute_name: &str,
    ) -> Option<MethodRc> {
        let setters = Self::candidates(ctx, attribute_name);

        match setters.as_slice() {
            [] => {
                ctx.method_error(
                    ProblemKind::Binding,
                    config_method,
                    format!(
                        "No setter for @Config method [{}]",
                        config_method.generic_string()
                    ),
                );
                None
            }
            [setter] => Some(setter.clone()),
            _ => {
                let listed: Vec<String> = setters.iter().map(|s| s.generic_string()).collect();
                ctx.method_error(
                    ProblemKind::Binding,
                    config_method,
                    format!(
                        "Multiple setters found for @Config getter [{}]; \
                         Move annotation to setter instead: [{}]",
                        config_method.generic_string(),
                        listed.join(", ")
                    ),
                );
                None
            }
        }
    }

    fn candidates(ctx: &ValidationContext, attribute_name: &str) -> Vec<MethodRc> {
        let setter_name = format!("set{attribute_name}");
        let mut setters: Vec<MethodRc> = Vec::new();

        for class in TypeInspector::class_chain(ctx.target, ctx.config.max_hierarchy_depth) {
            for method in class.methods() {
                if method.name != setter_name || method.param_count() != 1 {
                    continue;
                }
                if !method.is_public() || method.flags_modifiers.is_artifact() {
                    continue;
                }
                setters.push(method.clone());
            }
        }

        setters
    }
}
