// Copyright 2025 Johann Kempter
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]
#![allow(clippy::too_many_arguments)]

//! # confscope
//!
//! Describes configuration types: which attributes a type exposes for binding, under which
//! property names, through which accessors, and everything that is wrong with it.
//!
//! A configuration type is a class whose setters (or getters) carry a current property
//! name, a list of deprecated aliases, and an optional description. Describing it walks the
//! type hierarchy, pairs accessors into attributes and records every problem it finds
//! instead of stopping at the first one. The result is an immutable [`TypeMetadata`] that
//! is either valid for binding or carries the complete list of errors.
//!
//! ## Features
//!
//! - **Hierarchy aware** - Annotations are found on overridden declarations, base classes
//!   and interfaces
//! - **Complete reports** - Every structural, annotation, signature and binding problem
//!   of a type surfaces in one pass
//! - **Live diagnostics** - A [`Monitor`](metadata::diagnostics::Monitor) sees each problem
//!   the moment it is recorded
//! - **Shareable results** - Descriptions are `Send + Sync`, can be computed in parallel
//!   and memoised in a [`MetadataCache`](metadata::configuration::MetadataCache)
//!
//! ## Quick Start
//!
//! ```rust
//! use confscope::prelude::*;
//!
//! let config = TypeBuilder::class("com.example", "ServerConfig")
//!     .default_constructor()
//!     .method(MethodBuilder::getter("Port", TypeSignature::I4).config("server.port"))
//!     .method(MethodBuilder::setter("Port", TypeSignature::I4).config("server.port"))
//!     .build()?;
//!
//! let metadata = describe(&config);
//! assert!(metadata.is_valid());
//! assert_eq!(metadata.attribute("Port").unwrap().property_name(), Some("server.port"));
//! # Ok::<(), confscope::Error>(())
//! ```
//!
//! ### Failing Fast
//!
//! ```rust
//! use confscope::prelude::*;
//!
//! let broken = TypeBuilder::class("com.example", "BrokenConfig")
//!     .abstract_type()
//!     .build()?;
//!
//! let error = describe_or_fail(&broken).unwrap_err();
//! assert!(error.to_string().starts_with("Configuration errors in [com.example.BrokenConfig]"));
//! # Ok::<(), confscope::Error>(())
//! ```
//!
//! ## Architecture
//!
//! - [`metadata::typesystem`] and [`metadata::method`] - The type model being described
//! - [`metadata::annotations`] - Configuration markers on methods
//! - [`metadata::validation`] - The individual checks and the assembler driving them
//! - [`metadata::diagnostics`] - Problem collection and monitors
//! - [`metadata::configuration`] - Descriptions and the describe entry points
//! - [`Error`] and [`Result`] - Error handling
//!
//! [`TypeMetadata`]: metadata::configuration::TypeMetadata

#[macro_use]
pub(crate) mod error;

/// Shared functionality which is used in unit tests
#[cfg(test)]
pub(crate) mod test;

/// Convenient re-exports of the most commonly used types and traits.
///
/// # Example
///
/// ```rust
/// use confscope::prelude::*;
///
/// let metadata = describe(&TypeBuilder::class("app", "Empty").default_constructor().build()?);
/// assert!(!metadata.is_valid());
/// # Ok::<(), confscope::Error>(())
/// ```
pub mod prelude;

/// Type model, validation and configuration descriptions
pub mod metadata;

/// `confscope` Result type
///
/// A type alias for `std::result::Result<T, Error>` where the error type is always
/// [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// `confscope` Error type
///
/// The main error type for all operations in this crate.
pub use error::Error;
