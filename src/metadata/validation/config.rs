//! Validation configuration for configuration type descriptions
//!
//! The checks that decide whether a type can be bound at all (structure, annotations,
//! accessor signatures, setter resolution, duplicate names) always run. The switches
//! here only control the additional scans around them.

/// Default bound on base-chain and interface nesting depth
pub const DEFAULT_MAX_HIERARCHY_DEPTH: usize = 64;

/// Configuration for describing configuration types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Scan every declared method in the class chain for annotations on non-public or
    /// static methods, which the public-method scan never sees
    pub enable_visibility_scan: bool,

    /// Record a warning for attributes reachable only through deprecated property names
    pub warn_deprecated_only: bool,

    /// Maximum depth of the base chain and of interface nesting (default: 64)
    /// Deeper hierarchies are reported as structural errors and are not walked further
    pub max_hierarchy_depth: usize,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            enable_visibility_scan: true,
            warn_deprecated_only: false,
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }
}

impl ValidationConfig {
    /// Creates a minimal configuration
    ///
    /// Skips the visibility scan, only the checks required for binding run.
    #[must_use]
    pub fn minimal() -> Self {
        Self {
            enable_visibility_scan: false,
            warn_deprecated_only: false,
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }

    /// Creates a configuration with all checks enabled
    ///
    /// Adds deprecation warnings on top of the default checks.
    #[must_use]
    pub fn strict() -> Self {
        Self {
            enable_visibility_scan: true,
            warn_deprecated_only: true,
            max_hierarchy_depth: DEFAULT_MAX_HIERARCHY_DEPTH,
        }
    }

    /// Override the hierarchy depth bound
    #[must_use]
    pub fn with_max_hierarchy_depth(mut self, depth: usize) -> Self {
        self.max_hierarchy_depth = depth;
        self
    }
}
