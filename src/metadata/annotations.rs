//! Configuration annotations attached to method declarations.
//!
//! Annotations are opaque, read-only markers. This module does not care how they were
//! declared (native attributes, a generated registry or a hand-written schema), only that
//! each marker kind can be queried per method.
//!
//! # Marker Kinds
//!
//! | Marker | Payload | Meaning |
//! |--------|---------|---------|
//! | [`ConfigAnnotation::Config`] | one name | Current property name |
//! | [`ConfigAnnotation::DeprecatedConfig`] | list of names | Deprecated aliases |
//! | [`ConfigAnnotation::ConfigDescription`] | free text | Human-readable description |

use std::fmt;

/// A single annotation on a method declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ConfigAnnotation {
    /// Current property name the attribute binds to
    Config(String),
    /// Deprecated property names still accepted
    DeprecatedConfig(Vec<String>),
    /// Description of the attribute
    ConfigDescription(String),
}

impl ConfigAnnotation {
    /// Returns true for the two markers that make a method a configuration method
    pub fn is_recognized(&self) -> bool {
        matches!(
            self,
            ConfigAnnotation::Config(_) | ConfigAnnotation::DeprecatedConfig(_)
        )
    }
}

impl fmt::Display for ConfigAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigAnnotation::Config(name) => write!(f, "@Config(\"{name}\")"),
            ConfigAnnotation::DeprecatedConfig(names) => {
                write!(f, "@DeprecatedConfig({{")?;
                for (i, name) in names.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "\"{name}\"")?;
                }
                write!(f, "}})")
            }
            ConfigAnnotation::ConfigDescription(text) => {
                write!(f, "@ConfigDescription(\"{text}\")")
            }
        }
    }
}

/// Per-method annotation queries
pub trait AnnotationQuery {
    /// All annotations on the declaration
    fn annotations(&self) -> &[ConfigAnnotation];

    /// Value of the current-name marker, if present
    fn config(&self) -> Option<&str> {
        self.annotations().iter().find_map(|a| match a {
            ConfigAnnotation::Config(name) => Some(name.as_str()),
            _ => None,
        })
    }

    /// Values of the deprecated-names marker, if present
    fn deprecated_config(&self) -> Option<&[String]> {
        self.annotations().iter().find_map(|a| match a {
            ConfigAnnotation::DeprecatedConfig(names) => Some(names.as_slice()),
            _ => None,
        })
    }

    /// Value of the description marker, if present
    fn description(&self) -> Option<&str> {
        self.annotations().iter().find_map(|a| match a {
            ConfigAnnotation::ConfigDescription(text) => Some(text.as_str()),
            _ => None,
        })
    }

    /// True if the declaration carries a current-name or deprecated-names marker
    fn is_config_method(&self) -> bool {
        self.annotations().iter().any(ConfigAnnotation::is_recognized)
    }
}
