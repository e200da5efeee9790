//! Expressions that can appear as attribute arguments.

use super::{NameSyntax, TypeSyntax};
use crate::{Name, PredefinedType, Span};

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    #[inline]
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }

    /// The name when the expression is a bare (possibly generic) name.
    pub fn as_name(&self) -> Option<&NameSyntax> {
        match &self.kind {
            ExprKind::Name(name) => Some(name),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Hash)]
pub enum ExprKind {
    Literal(Literal),
    /// Simple, generic, qualified or alias-qualified name.
    Name(NameSyntax),
    /// `int.MaxValue` and friends.
    Predefined(PredefinedType),
    /// `target.name`
    MemberAccess {
        target: Box<Expr>,
        name: NameSyntax,
    },
    /// `callee(args)`; `nameof(x)` is an invocation of `nameof`.
    Invocation {
        callee: Box<Expr>,
        args: Vec<Expr>,
    },
    Typeof(Box<TypeSyntax>),
    /// `default` or `default(T)`.
    Default(Option<Box<TypeSyntax>>),
    Parenthesized(Box<Expr>),
    Unary {
        op: UnaryOp,
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
    Conditional {
        condition: Box<Expr>,
        when_true: Box<Expr>,
        when_false: Box<Expr>,
    },
    /// `new T[] { ... }`, `new[] { ... }` or `[ ... ]`.
    ArrayCreation {
        ty: Option<Box<TypeSyntax>>,
        elements: Vec<Expr>,
    },
    /// Expression the generator does not model (casts, tuples, object
    /// creation), or a placeholder after a parse error.
    Error,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Literal {
    /// Cooked string value.
    String(Name),
    InterpolatedString,
    Char(char),
    /// Source text of the number.
    Number(Name),
    True,
    False,
    Null,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum UnaryOp {
    Plus,
    Minus,
    Not,
    BitNot,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
    Shl,
    Lt,
    LtEq,
    Gt,
    GtEq,
    Eq,
    NotEq,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Coalesce,
}

impl BinaryOp {
    /// Binding power; higher binds tighter.
    pub const fn precedence(self) -> u8 {
        match self {
            BinaryOp::Coalesce => 1,
            BinaryOp::Or => 2,
            BinaryOp::And => 3,
            BinaryOp::BitOr => 4,
            BinaryOp::BitXor => 5,
            BinaryOp::BitAnd => 6,
            BinaryOp::Eq | BinaryOp::NotEq => 7,
            BinaryOp::Lt | BinaryOp::LtEq | BinaryOp::Gt | BinaryOp::GtEq => 8,
            BinaryOp::Shl => 9,
            BinaryOp::Add | BinaryOp::Sub => 10,
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Rem => 11,
        }
    }

    /// `??` groups to the right; everything else to the left.
    pub const fn is_right_assoc(self) -> bool {
        matches!(self, BinaryOp::Coalesce)
    }
}
