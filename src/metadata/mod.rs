//! Configuration type model and its description.
//!
//! This module contains everything needed to describe a configuration type: the type
//! and method model, the configuration markers, the validators and the resulting
//! descriptions.
//!
//! # Key Components
//!
//! - [`typesystem`] - Type descriptors, hierarchy and type shapes
//! - [`method`] - Method declarations, access flags and modifiers
//! - [`annotations`] - Current-name, deprecated-names and description markers
//! - [`validation`] - Structural, annotation, signature and binding checks
//! - [`diagnostics`] - Problem collection and monitors
//! - [`configuration`] - [`configuration::TypeMetadata`] and the describe entry points
//!
//! # Examples
//!
//! ```rust
//! use confscope::metadata::{
//!     configuration::describe,
//!     method::MethodBuilder,
//!     typesystem::{TypeBuilder, TypeSignature},
//! };
//!
//! let config = TypeBuilder::class("com.example", "CacheConfig")
//!     .default_constructor()
//!     .method(MethodBuilder::setter("Size", TypeSignature::I8).config("cache.size"))
//!     .build()?;
//!
//! let metadata = describe(&config);
//! println!("{metadata}: {} attribute(s)", metadata.attributes().len());
//! # Ok::<(), confscope::Error>(())
//! ```

/// Configuration markers carried by methods
pub mod annotations;
/// Descriptions of configuration types
pub mod configuration;
/// Problem collection and monitors
pub mod diagnostics;
/// Method declarations
pub mod method;
/// Type descriptors
pub mod typesystem;
/// Configuration type validation
pub mod validation;
