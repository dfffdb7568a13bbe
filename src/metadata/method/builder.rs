use crate::metadata::{
    annotations::ConfigAnnotation,
    method::{Method, MethodAccessFlags, MethodModifiers, CONSTRUCTOR_NAME},
    typesystem::TypeSignature,
};

/// Provides a fluent API for building method declarations
///
/// Methods start out public, non-static, returning `void` and without parameters. The
/// declaring type is filled in when the method is attached through
/// [`crate::metadata::typesystem::TypeBuilder::method`].
#[derive(Debug, Clone)]
pub struct MethodBuilder {
    method: Method,
}

impl MethodBuilder {
    /// Start building a method with the given name
    ///
    /// ## Arguments
    /// * 'name' - Method name
    pub fn new(name: &str) -> Self {
        MethodBuilder {
            method: Method {
                name: name.to_string(),
                declaring_type: String::new(),
                flags_access: MethodAccessFlags::PUBLIC,
                flags_modifiers: MethodModifiers::empty(),
                params: Vec::new(),
                return_type: TypeSignature::Void,
                annotations: Vec::new(),
            },
        }
    }

    /// A public no-argument constructor
    pub fn constructor() -> Self {
        Self::new(CONSTRUCTOR_NAME)
    }

    /// `get<attribute>()` returning `value`
    ///
    /// ## Arguments
    /// * 'attribute' - Attribute name without prefix, e.g. `Port`
    /// * 'value'     - Return type of the getter
    pub fn getter(attribute: &str, value: TypeSignature) -> Self {
        Self::new(&format!("get{attribute}")).returns(value)
    }

    /// `is<attribute>()` returning `boolean`
    ///
    /// ## Arguments
    /// * 'attribute' - Attribute name without prefix, e.g. `Enabled`
    pub fn boolean_getter(attribute: &str) -> Self {
        Self::new(&format!("is{attribute}")).returns(TypeSignature::Boolean)
    }

    /// `set<attribute>(value)` returning `void`
    ///
    /// ## Arguments
    /// * 'attribute' - Attribute name without prefix, e.g. `Port`
    /// * 'value'     - Parameter type of the setter
    pub fn setter(attribute: &str, value: TypeSignature) -> Self {
        Self::new(&format!("set{attribute}")).with_param(value)
    }

    /// Append a parameter
    #[must_use]
    pub fn with_param(mut self, param: TypeSignature) -> Self {
        self.method.params.push(param);
        self
    }

    /// Set the return type
    #[must_use]
    pub fn returns(mut self, return_type: TypeSignature) -> Self {
        self.method.return_type = return_type;
        self
    }

    /// Replace the access flags
    #[must_use]
    pub fn with_access(mut self, access: MethodAccessFlags) -> Self {
        self.method.flags_access = access;
        self
    }

    /// Add modifier flags
    #[must_use]
    pub fn with_modifiers(mut self, modifiers: MethodModifiers) -> Self {
        self.method.flags_modifiers |= modifiers;
        self
    }

    /// Mark as static
    #[must_use]
    pub fn static_method(self) -> Self {
        self.with_modifiers(MethodModifiers::STATIC)
    }

    /// Mark as abstract
    #[must_use]
    pub fn abstract_method(self) -> Self {
        self.with_modifiers(MethodModifiers::ABSTRACT)
    }

    /// Mark as compiler generated
    #[must_use]
    pub fn synthetic(self) -> Self {
        self.with_modifiers(MethodModifiers::SYNTHETIC)
    }

    /// Mark as a covariance bridge
    #[must_use]
    pub fn bridge(self) -> Self {
        self.with_modifiers(MethodModifiers::BRIDGE | MethodModifiers::SYNTHETIC)
    }

    /// Add an arbitrary annotation
    #[must_use]
    pub fn annotate(mut self, annotation: ConfigAnnotation) -> Self {
        self.method.annotations.push(annotation);
        self
    }

    /// Add a current-name marker
    #[must_use]
    pub fn config(self, property_name: &str) -> Self {
        self.annotate(ConfigAnnotation::Config(property_name.to_string()))
    }

    /// Add a deprecated-names marker
    #[must_use]
    pub fn deprecated_config<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.annotate(ConfigAnnotation::DeprecatedConfig(
            names.into_iter().map(Into::into).collect(),
        ))
    }

    /// Add a description marker
    #[must_use]
    pub fn description(self, text: &str) -> Self {
        self.annotate(ConfigAnnotation::ConfigDescription(text.to_string()))
    }

    /// Finish the declaration
    pub fn build(self) -> Method {
        self.method
    }
}
