//! Attribute classification of annotated methods.
//!
//! An annotated method is either the setter or a getter of a logical attribute, decided by
//! its name prefix. The attribute name is the method name with the prefix stripped.
//!
//! | Prefix | Role | Shape | Partner |
//! |--------|------|-------|---------|
//! | `set` | setter | exactly one parameter | `get<Name>()` or `is<Name>()`, optional |
//! | `get` | getter | no parameters, non-void return | setter, required |
//! | `is` | boolean getter | no parameters, boolean return | setter, required |
//!
//! Shape violations are recorded as signature errors but do not stop the attribute from
//! being built; any other prefix excludes the method. A getter-annotated attribute without
//! a resolvable setter is dropped, while a setter-annotated attribute without a getter is
//! a valid write-only attribute.

use crate::metadata::{
    annotations::AnnotationQuery,
    configuration::AttributeMetadata,
    diagnostics::ProblemKind,
    method::{Method, MethodRc},
    validation::{
        annotation::AnnotationValidator, context::ValidationContext, setter::SetterMatcher,
    },
};

/// Turns an annotated method into attribute metadata.
pub struct AttributeClassifier;

impl AttributeClassifier {
    /// Classifies `method` and builds its attribute.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Validation context receiving any problems
    /// * `method` - The authoritative annotated declaration
    /// * `public_methods` - Publicly reachable methods of the target, used to pair getters
    ///
    /// # Returns
    ///
    /// The attribute, or `None` if the method was rejected.
    pub(crate) fn classify(
        ctx: &ValidationContext,
        method: &MethodRc,
        public_methods: &[MethodRc],
    ) -> Option<AttributeMetadata> {
        if !AnnotationValidator::validate(ctx, method) {
            return None;
        }

        let name = method.name.as_str();
        if let Some(attribute_name) = non_empty_suffix(name, "set") {
            if method.param_count() != 1 {
                ctx.method_error(
                    ProblemKind::Signature,
                    method,
                    format!(
                        "@Config setter [{}] does not have exactly one parameter",
                        method.generic_string()
                    ),
                );
            }

            let getter = Self::find_getter(public_methods, attribute_name);
            Self::build(ctx, method, attribute_name, getter, method.clone())
        } else if let Some(attribute_name) = non_empty_suffix(name, "get") {
            if method.param_count() != 0 {
                ctx.method_error(
                    ProblemKind::Signature,
                    method,
                    format!("@Config getter [{}] has parameters", method.generic_string()),
                );
            }
            if method.return_type.is_void() {
                ctx.method_error(
                    ProblemKind::Signature,
                    method,
                    format!(
                        "@Config getter [{}] does not return anything",
                        method.generic_string()
                    ),
                );
            }

            let setter = SetterMatcher::find_setter(ctx, method, attribute_name)?;
            Self::build(ctx, method, attribute_name, Some(method.clone()), setter)
        } else if let Some(attribute_name) = non_empty_suffix(name, "is") {
            if method.param_count() != 0 {
                ctx.method_error(
                    ProblemKind::Signature,
                    method,
                    format!("@Config is method [{}] has parameters", method.generic_string()),
                );
            }
            if !method.return_type.is_boolean() {
                ctx.method_error(
                    ProblemKind::Signature,
                    method,
                    format!(
                        "@Config is method [{}] does not return boolean",
                        method.generic_string()
                    ),
                );
            }

            let setter = SetterMatcher::find_setter(ctx, method, attribute_name)?;
            Self::build(ctx, method, attribute_name, Some(method.clone()), setter)
        } else {
            ctx.method_error(
                ProblemKind::Signature,
                method,
                format!(
                    "@Config method [{}] is not a valid getter or setter",
                    method.generic_string()
                ),
            );
            None
        }
    }

    /// Public zero-argument `get<Name>`, falling back to `is<Name>`.
    fn find_getter(public_methods: &[MethodRc], attribute_name: &str) -> Option<MethodRc> {
        ["get", "is"].iter().find_map(|prefix| {
            let getter_name = format!("{prefix}{attribute_name}");
            public_methods
                .iter()
                .find(|m| m.name == getter_name && m.param_count() == 0)
                .cloned()
        })
    }

    fn build(
        ctx: &ValidationContext,
        annotated: &Method,
        attribute_name: &str,
        getter: Option<MethodRc>,
        setter: MethodRc,
    ) -> Option<AttributeMetadata> {
        let built = AttributeMetadata::new(
            &ctx.type_name,
            attribute_name,
            annotated.description(),
            annotated.config(),
            annotated.deprecated_config().unwrap_or_default(),
            getter,
            setter,
        );

        match built {
            Ok(attribute) => Some(attribute),
            Err(error) => {
                ctx.method_error(ProblemKind::Annotation, annotated, error.to_string());
                None
            }
        }
    }
}

fn non_empty_suffix<'a>(name: &'a str, prefix: &str) -> Option<&'a str> {
    name.strip_prefix(prefix).filter(|rest| !rest.is_empty())
}
