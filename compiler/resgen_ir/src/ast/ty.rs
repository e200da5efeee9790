//! Names and type syntax.

use super::Ident;
use crate::{PredefinedType, Span};

/// A possibly qualified, possibly generic name: `A`, `A<T>`, `N.A<T>`,
/// `global::N.A`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NameSyntax {
    pub kind: NameKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NameKind {
    Simple(Ident),
    Generic {
        ident: Ident,
        type_args: TypeArgumentList,
    },
    /// `left.right`, where `right` is simple or generic.
    Qualified {
        left: Box<NameSyntax>,
        right: Box<NameSyntax>,
    },
    /// `alias::name`, including `global::name`.
    AliasQualified {
        alias: Ident,
        name: Box<NameSyntax>,
    },
}

impl NameSyntax {
    pub fn simple(ident: Ident) -> Self {
        NameSyntax {
            span: ident.span,
            kind: NameKind::Simple(ident),
        }
    }

    /// Rightmost identifier: `C` for `A.B.C<T>`.
    pub fn last_ident(&self) -> Ident {
        match &self.kind {
            NameKind::Simple(ident) | NameKind::Generic { ident, .. } => *ident,
            NameKind::Qualified { right, .. } => right.last_ident(),
            NameKind::AliasQualified { name, .. } => name.last_ident(),
        }
    }

    /// The identifier when this is a plain, unqualified, non-generic name.
    pub fn as_simple(&self) -> Option<Ident> {
        match &self.kind {
            NameKind::Simple(ident) => Some(*ident),
            _ => None,
        }
    }

    /// Type arguments of the rightmost segment.
    pub fn type_args(&self) -> Option<&TypeArgumentList> {
        match &self.kind {
            NameKind::Simple(_) => None,
            NameKind::Generic { type_args, .. } => Some(type_args),
            NameKind::Qualified { right, .. } => right.type_args(),
            NameKind::AliasQualified { name, .. } => name.type_args(),
        }
    }
}

/// `<T1, T2>`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeArgumentList {
    pub args: Vec<TypeSyntax>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeSyntax {
    pub kind: TypeKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeKind {
    Predefined(PredefinedType),
    Named(NameSyntax),
    /// `T?`
    Nullable(Box<TypeSyntax>),
    /// `T[]`, `T[,]`; `rank` counts dimensions.
    Array { element: Box<TypeSyntax>, rank: u32 },
    Tuple(Vec<TupleElement>),
    /// `T*`
    Pointer(Box<TypeSyntax>),
}

impl TypeSyntax {
    /// Whether the outermost type constructor is the `?` annotation.
    #[inline]
    pub fn is_nullable(&self) -> bool {
        matches!(self.kind, TypeKind::Nullable(_))
    }
}

/// Element of a tuple type, optionally named: `(int Id, string)`.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TupleElement {
    pub ty: TypeSyntax,
    pub name: Option<Ident>,
}
