use std::fmt;

/// Shape of a method parameter or return value.
///
/// Only as much of a type is modelled as attribute classification needs: arity and
/// return-type checks, and telling overloads of the same setter apart.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeSignature {
    /// No value
    Void,
    /// Boolean
    Boolean,
    /// 32-bit signed integer
    I4,
    /// 64-bit signed integer
    I8,
    /// 64-bit floating point
    R8,
    /// String
    String,
    /// Reference to another type, by full name
    Class(String),
    /// Nullable (boxed) form of the inner type
    Boxed(Box<TypeSignature>),
    /// Single-dimensional array of the inner type
    Array(Box<TypeSignature>),
}

impl TypeSignature {
    /// Nullable form of `inner`
    pub fn boxed(inner: TypeSignature) -> Self {
        TypeSignature::Boxed(Box::new(inner))
    }

    /// Array of `inner`
    pub fn array(inner: TypeSignature) -> Self {
        TypeSignature::Array(Box::new(inner))
    }

    /// Reference to the type named `fullname`
    pub fn class(fullname: &str) -> Self {
        TypeSignature::Class(fullname.to_string())
    }

    /// Returns true for `void`
    pub fn is_void(&self) -> bool {
        matches!(self, TypeSignature::Void)
    }

    /// Returns true for `boolean` and its boxed form
    pub fn is_boolean(&self) -> bool {
        match self {
            TypeSignature::Boolean => true,
            TypeSignature::Boxed(inner) => matches!(**inner, TypeSignature::Boolean),
            _ => false,
        }
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Void => write!(f, "void"),
            TypeSignature::Boolean => write!(f, "boolean"),
            TypeSignature::I4 => write!(f, "int"),
            TypeSignature::I8 => write!(f, "long"),
            TypeSignature::R8 => write!(f, "double"),
            TypeSignature::String => write!(f, "string"),
            TypeSignature::Class(name) => write!(f, "{name}"),
            TypeSignature::Boxed(inner) => write!(f, "{inner}?"),
            TypeSignature::Array(inner) => write!(f, "{inner}[]"),
        }
    }
}
