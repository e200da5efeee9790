//! Syntax tree for the C# subset the generator reads.
//!
//! The tree covers declarations and attributes in full. Method and accessor
//! bodies, enum bodies and top-level statements are skipped by the parser and
//! only their spans are kept.

mod expr;
mod ty;

#[cfg(test)]
mod tests;

pub use expr::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
pub use ty::{NameKind, NameSyntax, TupleElement, TypeArgumentList, TypeKind, TypeSyntax};

use super::{Name, Span};
use bitflags::bitflags;

/// Identifier token with its value text.
///
/// `verbatim` records an `@` prefix; `name` never includes it.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Ident {
    pub name: Name,
    pub span: Span,
    pub verbatim: bool,
}

impl Ident {
    #[inline]
    pub const fn new(name: Name, span: Span) -> Self {
        Ident {
            name,
            span,
            verbatim: false,
        }
    }
}

/// One parsed source file.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct CompilationUnit {
    pub usings: Vec<UsingDirective>,
    /// Assembly- and module-level attribute lists.
    pub attributes: Vec<AttributeList>,
    pub members: Vec<NamespaceMember>,
    pub span: Span,
}

/// Member of a compilation unit or namespace.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum NamespaceMember {
    Namespace(NamespaceDecl),
    Type(TypeDecl),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct NamespaceDecl {
    pub name: NameSyntax,
    pub usings: Vec<UsingDirective>,
    pub members: Vec<NamespaceMember>,
    /// `namespace N;` rather than `namespace N { ... }`.
    pub file_scoped: bool,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct UsingDirective {
    /// `global using ...;`
    pub is_global: bool,
    pub kind: UsingKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum UsingKind {
    /// `using N.M;`
    Namespace(NameSyntax),
    /// `using static N.T;`
    Static(NameSyntax),
    /// `using A = N.T;`
    Alias { alias: Ident, target: TypeSyntax },
}

bitflags! {
    /// Declaration modifiers, reserved and contextual.
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Modifiers: u32 {
        const PUBLIC = 1 << 0;
        const PRIVATE = 1 << 1;
        const PROTECTED = 1 << 2;
        const INTERNAL = 1 << 3;
        const FILE = 1 << 4;
        const STATIC = 1 << 5;
        const PARTIAL = 1 << 6;
        const SEALED = 1 << 7;
        const ABSTRACT = 1 << 8;
        const VIRTUAL = 1 << 9;
        const OVERRIDE = 1 << 10;
        const READONLY = 1 << 11;
        const ASYNC = 1 << 12;
        const EXTERN = 1 << 13;
        const NEW = 1 << 14;
        const UNSAFE = 1 << 15;
        const CONST = 1 << 16;
        const VOLATILE = 1 << 17;
        const REQUIRED = 1 << 18;
        const FIXED = 1 << 19;
        const REF = 1 << 20;
    }
}

/// Type declaration: class, struct, interface, enum, record or delegate.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeDecl {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub kind: TypeDeclKind,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub constraints: Vec<ConstraintClause>,
    pub members: Vec<MemberDecl>,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum TypeDeclKind {
    Class,
    Struct,
    Interface,
    Enum,
    /// `record` or `record class`.
    Record,
    RecordStruct,
    Delegate,
}

impl TypeDeclKind {
    /// Instances of classes, interfaces, records and delegates are
    /// references; structs, enums and record structs are values.
    pub const fn is_reference_type(self) -> bool {
        matches!(
            self,
            TypeDeclKind::Class
                | TypeDeclKind::Interface
                | TypeDeclKind::Record
                | TypeDeclKind::Delegate
        )
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct TypeParam {
    pub attributes: Vec<AttributeList>,
    pub name: Ident,
}

/// `where T : constraint, ...`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct ConstraintClause {
    pub param: Ident,
    pub constraints: Vec<Constraint>,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum Constraint {
    /// `class` or `class?`
    Class,
    Struct,
    Unmanaged,
    NotNull,
    /// `new()`
    New,
    Default,
    Type(TypeSyntax),
}

/// Member of a type declaration.
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MemberDecl {
    pub attributes: Vec<AttributeList>,
    pub modifiers: Modifiers,
    pub kind: MemberKind,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum MemberKind {
    /// Ordinary method.
    Method(MethodDecl),
    Constructor(Ident),
    Destructor(Ident),
    Operator,
    /// `implicit operator` / `explicit operator`.
    Conversion,
    Property(Ident),
    Indexer,
    Field(Vec<Ident>),
    Event(Vec<Ident>),
    /// Enum member.
    EnumMember(Ident),
    Type(TypeDecl),
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct MethodDecl {
    pub return_type: TypeSyntax,
    /// `I.M` in explicit interface implementations.
    pub explicit_interface: Option<NameSyntax>,
    pub name: Ident,
    pub type_params: Vec<TypeParam>,
    pub params: Vec<Parameter>,
    pub constraints: Vec<ConstraintClause>,
    pub body: MethodBody,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum MethodBody {
    /// Declaration ends in `;`.
    None,
    Block(Span),
    Expression(Span),
}

impl MethodBody {
    #[inline]
    pub const fn is_none(self) -> bool {
        matches!(self, MethodBody::None)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Parameter {
    pub attributes: Vec<AttributeList>,
    pub ref_kind: RefKind,
    pub is_params: bool,
    /// First parameter of an extension method.
    pub is_this: bool,
    pub ty: TypeSyntax,
    pub name: Ident,
    pub has_default: bool,
    pub span: Span,
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum RefKind {
    #[default]
    None,
    Ref,
    Out,
    In,
    RefReadonly,
}

/// `[target: attribute, attribute(args)]`
#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttributeList {
    pub target: Option<AttributeTarget>,
    pub attributes: Vec<Attribute>,
    pub span: Span,
}

impl AttributeList {
    /// Whether the list's target specifier is `target`.
    pub fn has_target(&self, target: Name) -> bool {
        self.target.is_some_and(|t| t.name == target)
    }
}

/// Target specifier of an attribute list, such as `return:` or `result:`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttributeTarget {
    pub name: Name,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Attribute {
    pub name: NameSyntax,
    pub args: Option<AttributeArgumentList>,
    pub span: Span,
}

impl Attribute {
    /// Arguments, or an empty slice when there is no argument list.
    pub fn arguments(&self) -> &[AttributeArgument] {
        self.args.as_ref().map_or(&[], |list| list.args.as_slice())
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttributeArgumentList {
    pub args: Vec<AttributeArgument>,
    pub span: Span,
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct AttributeArgument {
    /// `name: expr`
    pub name_colon: Option<Ident>,
    /// `Name = expr`
    pub name_equals: Option<Ident>,
    pub expr: Expr,
    pub span: Span,
}

impl AttributeArgument {
    /// Constructor arguments are the ones without `Name =`.
    #[inline]
    pub fn is_positional(&self) -> bool {
        self.name_equals.is_none()
    }
}
