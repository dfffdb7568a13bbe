//! # Configuration Method Discovery
//!
//! Finds the methods of a type that take part in configuration, and the declaration in
//! the hierarchy that actually carries their annotations.
//!
//! ## Overview
//!
//! A type's publicly reachable methods form a flattened view: overriding hides the
//! overridden declaration, and the flattened list does not say where an annotation lives.
//! The inspector rebuilds that information in two steps:
//!
//! 1. **Public scan**: every public instance method reachable from the type (own
//!    declarations, then the base chain, then interfaces, most-derived signature wins).
//!    Static, synthetic and bridge methods never carry user intent and are skipped.
//! 2. **Annotation lookup**: for each signature, search the type itself, then its base
//!    chain, then its interfaces depth-first; the first declaration with a current-name or
//!    deprecated-names marker is the authoritative one.
//!
//! Methods with no annotated declaration anywhere are simply not configuration methods.
//!
//! A separate visibility scan walks every method declared in the class chain, public or
//! not, and flags annotations placed on members the public scan would never see.
//!
//! ## Hierarchy Bounds
//!
//! All walks are bounded by [`ValidationConfig::max_hierarchy_depth`] and track the types
//! they have already visited by full name. An interface reachable along many paths is
//! inspected once per walk, and a self-referencing descriptor terminates.
//!
//! [`ValidationConfig::max_hierarchy_depth`]:
//!     crate::metadata::validation::ValidationConfig::max_hierarchy_depth

use std::collections::{HashMap, HashSet};

use crate::metadata::{
    annotations::AnnotationQuery,
    diagnostics::ProblemKind,
    method::{Method, MethodRc},
    typesystem::{TypeRc, TypeSignature},
    validation::{config::DEFAULT_MAX_HIERARCHY_DEPTH, context::ValidationContext},
};

/// Discovery of configuration methods across a type hierarchy.
pub struct TypeInspector;

impl TypeInspector {
    /// The type followed by its base chain, at most `max_depth` entries long.
    pub fn class_chain(target: &TypeRc, max_depth: usize) -> Vec<TypeRc> {
        let mut chain = Vec::new();
        let mut current = Some(target.clone());
        while let Some(class) = current {
            if chain.len() >= max_depth {
                break;
            }
            current = class.base();
            chain.push(class);
        }
        chain
    }

    /// True if the base chain or interface nesting is deeper than `max_depth`.
    ///
    /// A cycle in the hierarchy counts as too deep.
    pub fn exceeds_depth(target: &TypeRc, max_depth: usize) -> bool {
        // Height of `ty` in types, or `None` once a path crosses `max_depth`.
        fn height(
            ty: &TypeRc,
            depth: usize,
            max_depth: usize,
            heights: &mut HashMap<String, usize>,
            active: &mut HashSet<String>,
        ) -> Option<usize> {
            if depth >= max_depth {
                return None;
            }

            let name = ty.fullname();
            if let Some(&known) = heights.get(&name) {
                return (depth + known <= max_depth).then_some(known);
            }
            if !active.insert(name.clone()) {
                return None;
            }

            let base = ty.base();
            let mut own = 1;
            for parent in base.iter().chain(ty.interfaces()) {
                own = own.max(1 + height(parent, depth + 1, max_depth, heights, active)?);
            }

            active.remove(&name);
            heights.insert(name, own);
            Some(own)
        }

        height(target, 0, max_depth, &mut HashMap::new(), &mut HashSet::new()).is_none()
    }

    /// All public instance methods reachable from `target`, one per signature.
    ///
    /// Own declarations come first, then the base chain, then interfaces depth-first. A
    /// signature already seen on a more derived type hides later declarations.
    pub fn public_methods(target: &TypeRc, max_depth: usize) -> Vec<MethodRc> {
        fn collect(
            ty: &TypeRc,
            remaining: usize,
            visited: &mut HashMap<String, usize>,
            out: &mut Vec<MethodRc>,
        ) {
            if !first_visit(visited, ty, remaining) {
                return;
            }

            for method in ty.methods() {
                if !method.is_public() || method.flags_modifiers.is_artifact() {
                    continue;
                }
                if out.iter().any(|seen| seen.same_signature(method)) {
                    continue;
                }
                out.push(method.clone());
            }

            if let Some(base) = ty.base() {
                collect(&base, remaining - 1, visited, out);
            }
            for iface in ty.interfaces() {
                collect(iface, remaining - 1, visited, out);
            }
        }

        let mut methods = Vec::new();
        collect(target, max_depth, &mut HashMap::new(), &mut methods);
        methods
    }

    /// Find the annotated declaration of a method somewhere in the hierarchy.
    ///
    /// Searches `target` itself, then its base chain, then each implemented interface,
    /// depth-first, and returns the first declaration carrying a current-name or
    /// deprecated-names marker.
    ///
    /// # Arguments
    ///
    /// * `target` - The type to start searching from
    /// * `name` - Method name
    /// * `params` - Parameter shapes of the method
    pub fn find_config_method(
        target: &TypeRc,
        name: &str,
        params: &[TypeSignature],
    ) -> Option<MethodRc> {
        Self::find_config_method_bounded(
            target,
            name,
            params,
            DEFAULT_MAX_HIERARCHY_DEPTH,
            &mut HashMap::new(),
        )
    }

    fn find_config_method_bounded(
        ty: &TypeRc,
        name: &str,
        params: &[TypeSignature],
        remaining: usize,
        visited: &mut HashMap<String, usize>,
    ) -> Option<MethodRc> {
        if !first_visit(visited, ty, remaining) {
            return None;
        }

        if let Some(method) = ty.declared_method(name, params) {
            if method.is_config_method() {
                return Some(method);
            }
        }

        if let Some(base) = ty.base() {
            let found =
                Self::find_config_method_bounded(&base, name, params, remaining - 1, visited);
            if found.is_some() {
                return found;
            }
        }

        ty.interfaces().iter().find_map(|iface| {
            Self::find_config_method_bounded(iface, name, params, remaining - 1, visited)
        })
    }

    /// The authoritative annotated declaration for every publicly reachable method.
    ///
    /// # Returns
    ///
    /// A tuple of the annotated declarations, in public-scan order, and the full public
    /// method list used for accessor pairing.
    pub(crate) fn find_config_methods(ctx: &ValidationContext) -> (Vec<MethodRc>, Vec<MethodRc>) {
        let max_depth = ctx.config.max_hierarchy_depth;
        let public = Self::public_methods(ctx.target, max_depth);

        let config_methods = public
            .iter()
            .filter_map(|method| {
                let found = Self::find_config_method_bounded(
                    ctx.target,
                    &method.name,
                    &method.params,
                    max_depth,
                    &mut HashMap::new(),
                );
                if found.is_none() {
                    tracing::trace!(method = %method, "not a configuration method");
                }
                found
            })
            .collect();

        (config_methods, public)
    }

    /// Flag annotated methods in the class chain that are not public or are static.
    pub(crate) fn validate_visibility(ctx: &ValidationContext) {
        for class in Self::class_chain(ctx.target, ctx.config.max_hierarchy_depth) {
            for method in class.methods() {
                if method.is_config_method() {
                    Self::validate_method_visibility(ctx, method);
                }
            }
        }
    }

    fn validate_method_visibility(ctx: &ValidationContext, method: &Method) {
        if !method.is_public() {
            ctx.method_error(
                ProblemKind::Visibility,
                method,
                format!("@Config method [{}] is not public", method.generic_string()),
            );
        }
        if method.is_static() {
            ctx.method_error(
                ProblemKind::Visibility,
                method,
                format!("@Config method [{}] is static", method.generic_string()),
            );
        }
    }
}

/// Marks `ty` visited with `remaining` depth left.
///
/// False if the depth is exhausted or `ty` was already visited with at least as much depth
/// left, in which case a repeat visit cannot reach anything new.
fn first_visit(visited: &mut HashMap<String, usize>, ty: &TypeRc, remaining: usize) -> bool {
    if remaining == 0 {
        return false;
    }
    let seen = visited.entry(ty.fullname()).or_insert(0);
    if *seen >= remaining {
        return false;
    }
    *seen = remaining;
    true
}
