use std::{collections::BTreeSet, fmt};

use crate::{metadata::method::MethodRc, Error, Result};

/// One configurable attribute of a configuration type.
///
/// An attribute is a setter, optionally paired with a getter, exposed under a current
/// property name, a set of deprecated aliases, or both. It is never constructed without at
/// least one external key.
///
/// Two attributes are equal when they have the same owning type and name.
#[derive(Debug, Clone)]
pub struct AttributeMetadata {
    owning_type: String,
    name: String,
    description: Option<String>,
    property_name: Option<String>,
    deprecated_names: BTreeSet<String>,
    getter: Option<MethodRc>,
    setter: MethodRc,
}

impl AttributeMetadata {
    /// Creates a new attribute.
    ///
    /// # Arguments
    ///
    /// * `owning_type` - Full name of the type the accessors are reached through
    /// * `name` - Attribute name, the accessor name without its prefix
    /// * `description` - Optional human readable description
    /// * `property_name` - Current external key
    /// * `deprecated_names` - Deprecated external keys
    /// * `getter` - Optional read accessor
    /// * `setter` - Write accessor
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidAttribute`] if there is neither a property name nor any
    /// deprecated name.
    pub fn new(
        owning_type: &str,
        name: &str,
        description: Option<&str>,
        property_name: Option<&str>,
        deprecated_names: &[String],
        getter: Option<MethodRc>,
        setter: MethodRc,
    ) -> Result<Self> {
        if property_name.is_none() && deprecated_names.is_empty() {
            return Err(Error::InvalidAttribute(name.to_string()));
        }

        Ok(AttributeMetadata {
            owning_type: owning_type.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            property_name: property_name.map(str::to_string),
            deprecated_names: deprecated_names.iter().cloned().collect(),
            getter,
            setter,
        })
    }

    /// Full name of the owning type
    pub fn owning_type(&self) -> &str {
        &self.owning_type
    }

    /// Attribute name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Description text, if any
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Current property name, absent when only deprecated names exist
    pub fn property_name(&self) -> Option<&str> {
        self.property_name.as_deref()
    }

    /// Deprecated aliases, sorted
    pub fn deprecated_names(&self) -> &BTreeSet<String> {
        &self.deprecated_names
    }

    /// Read accessor
    pub fn getter(&self) -> Option<&MethodRc> {
        self.getter.as_ref()
    }

    /// Write accessor
    pub fn setter(&self) -> &MethodRc {
        &self.setter
    }

    /// Every external key of this attribute: the current name first, then the aliases.
    pub fn property_names(&self) -> impl Iterator<Item = &str> {
        self.property_name
            .as_deref()
            .into_iter()
            .chain(self.deprecated_names.iter().map(String::as_str))
    }

    /// True if `other` describes the same binding seen from another accessor.
    pub(crate) fn is_same_binding(&self, other: &AttributeMetadata) -> bool {
        self.owning_type == other.owning_type
            && self.name == other.name
            && self.setter.same_signature(&other.setter)
            && self.property_name == other.property_name
            && self.deprecated_names == other.deprecated_names
    }

    /// Fills in the getter and description from `other` where missing.
    pub(crate) fn merge(&mut self, other: AttributeMetadata) {
        if self.getter.is_none() {
            self.getter = other.getter;
        }
        if self.description.is_none() {
            self.description = other.description;
        }
    }
}

impl PartialEq for AttributeMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.owning_type == other.owning_type && self.name == other.name
    }
}

impl Eq for AttributeMetadata {}

impl fmt::Display for AttributeMetadata {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.owning_type, self.name)?;

        let names: Vec<&str> = self.property_names().collect();
        write!(f, " [{}]", names.join(", "))?;

        if self.getter.is_none() {
            write!(f, " (write-only)")?;
        }
        Ok(())
    }
}
