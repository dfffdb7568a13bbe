use thiserror::Error;

use crate::metadata::diagnostics::Problem;

macro_rules! type_error {
    // Single string version
    ($msg:expr) => {
        crate::Error::TypeError($msg.to_string())
    };

    // Format string with arguments version
    ($fmt:expr, $($arg:tt)*) => {
        crate::Error::TypeError(format!($fmt, $($arg)*))
    };
}

/// The generic Error type, which provides coverage for all errors this library can potentially
/// return.
///
/// Describing a configuration type never fails by itself: every violation found while
/// building [`crate::metadata::configuration::TypeMetadata`] is recorded as a
/// [`Problem`]. Errors of this type only surface at the boundary operations that are asked
/// to turn those problems into a hard failure, or when a type descriptor is built from
/// inconsistent input.
///
/// # Error Categories
///
/// ## Description Errors
/// - [`Error::ConfigurationDescription`] - The described type has error-level problems
/// - [`Error::InvalidAttribute`] - An attribute was built without any property name
///
/// ## Type Model Errors
/// - [`Error::TypeError`] - A type or method descriptor could not be built
///
/// # Examples
///
/// ```rust
/// use confscope::{Error, metadata::configuration::describe_or_fail};
/// use confscope::metadata::typesystem::TypeBuilder;
///
/// let empty = TypeBuilder::class("com.example", "EmptyConfig")
///     .default_constructor()
///     .build()?;
///
/// match describe_or_fail(&empty) {
///     Ok(_) => unreachable!(),
///     Err(Error::ConfigurationDescription { problems, .. }) => {
///         assert_eq!(problems.len(), 1);
///     }
///     Err(e) => panic!("unexpected error: {e}"),
/// }
/// # Ok::<(), confscope::Error>(())
/// ```
#[derive(Error, Debug)]
pub enum Error {
    /// The configuration type could not be described without errors.
    ///
    /// Raised by [`crate::metadata::configuration::describe_or_fail`] when at least one
    /// error-level problem was recorded. The report lists every error, one per line, so
    /// callers see all violations at once instead of only the first.
    ///
    /// # Fields
    ///
    /// * `type_name` - Full name of the described type
    /// * `report` - Human-readable listing of all errors
    /// * `problems` - The error-level problems themselves
    #[error("Configuration errors in [{type_name}]:\n{report}")]
    ConfigurationDescription {
        /// Full name of the type that failed to describe
        type_name: String,
        /// One line per error-level problem
        report: String,
        /// All error-level problems recorded while describing the type
        problems: Vec<Problem>,
    },

    /// An attribute must answer to at least one property name.
    ///
    /// Occurs when an [`crate::metadata::configuration::AttributeMetadata`] is built
    /// with neither a current property name nor any deprecated alias.
    #[error("Attribute [{0}] has neither a property name nor deprecated names")]
    InvalidAttribute(String),

    /// A type or method descriptor could not be built.
    ///
    /// Covers builder misuse such as empty type or method names.
    #[error("{0}")]
    TypeError(String),
}
