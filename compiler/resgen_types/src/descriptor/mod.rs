//! Resolved types.

use std::borrow::Cow;
use std::fmt;

use resgen_ir::Keyword;

/// How values of a type are held.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeCategory {
    Reference,
    Value,
    /// Type parameter constrained to neither `class` nor `struct`.
    Unconstrained,
}

/// A type after resolution.
///
/// `display` is the fully qualified form used in generated code:
/// `global::`-qualified names, keyword spellings for predefined types,
/// `@`-escaped keyword identifiers.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeDescriptor {
    display: String,
    category: TypeCategory,
    nullable_underlying: Option<Box<TypeDescriptor>>,
}

impl TypeDescriptor {
    pub fn new(display: impl Into<String>, category: TypeCategory) -> Self {
        TypeDescriptor {
            display: display.into(),
            category,
            nullable_underlying: None,
        }
    }

    /// `System.Nullable<T>` over the value type `inner`, displayed `T?`.
    pub fn nullable_of(inner: TypeDescriptor) -> Self {
        TypeDescriptor {
            display: format!("{}?", inner.display),
            category: TypeCategory::Value,
            nullable_underlying: Some(Box::new(inner)),
        }
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    pub fn category(&self) -> TypeCategory {
        self.category
    }

    #[inline]
    pub fn is_reference_type(&self) -> bool {
        self.category == TypeCategory::Reference
    }

    #[inline]
    pub fn is_value_type(&self) -> bool {
        self.category == TypeCategory::Value
    }

    /// `T` when this is `System.Nullable<T>`.
    pub fn nullable_underlying(&self) -> Option<&TypeDescriptor> {
        self.nullable_underlying.as_deref()
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Prefix `@` to identifiers spelled like a reserved keyword.
pub fn escape_identifier(name: &str) -> Cow<'_, str> {
    if Keyword::from_text(name).is_some() {
        Cow::Owned(format!("@{name}"))
    } else {
        Cow::Borrowed(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn nullable_wraps_value_type() {
        let int = TypeDescriptor::new("int", TypeCategory::Value);
        let nullable = TypeDescriptor::nullable_of(int.clone());
        assert_eq!(nullable.display(), "int?");
        assert!(nullable.is_value_type());
        assert_eq!(nullable.nullable_underlying(), Some(&int));
        assert_eq!(int.nullable_underlying(), None);
    }

    #[test]
    fn categories() {
        let person = TypeDescriptor::new("global::App.Person", TypeCategory::Reference);
        assert!(person.is_reference_type());
        assert!(!person.is_value_type());

        let t = TypeDescriptor::new("T", TypeCategory::Unconstrained);
        assert!(!t.is_reference_type());
        assert!(!t.is_value_type());
        assert_eq!(t.to_string(), "T");
    }

    #[test]
    fn escapes_reserved_keywords_only() {
        assert_eq!(escape_identifier("class"), "@class");
        assert_eq!(escape_identifier("Person"), "Person");
        assert_eq!(escape_identifier("record"), "record");
    }
}
