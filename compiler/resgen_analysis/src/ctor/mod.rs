//! Classify the marker attribute's constructor arguments.
//!
//! The marker has two constructors: `()` and `(string typeName)`. Anything
//! that fits neither is reported by the caller.

use resgen_ir::ast::{Attribute, BinaryOp, Expr, ExprKind, Literal};
use resgen_ir::StringInterner;

/// Which marker constructor an application binds to.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum CtorArgs {
    /// `[ReturnsResult]` or `[ReturnsResult()]`.
    NoExplicitName,
    /// `[ReturnsResult("Name")]`, holding the constant value.
    ExplicitName(String),
    /// Binds to no constructor.
    Invalid,
}

impl CtorArgs {
    /// Type name this application asks for; `None` for `Invalid`.
    pub fn type_name(&self, default_name: impl FnOnce() -> String) -> Option<String> {
        match self {
            CtorArgs::NoExplicitName => Some(default_name()),
            CtorArgs::ExplicitName(name) => Some(name.clone()),
            CtorArgs::Invalid => None,
        }
    }
}

/// Classify the arguments of a marker application.
///
/// Named properties (`Name = ...`) do not exist on the marker, so any of them
/// makes the application invalid.
pub fn classify_ctor_args(attribute: &Attribute, interner: &StringInterner) -> CtorArgs {
    let args = attribute.arguments();
    if args.iter().any(|arg| !arg.is_positional()) {
        return CtorArgs::Invalid;
    }
    match args {
        [] => CtorArgs::NoExplicitName,
        [arg] => constant_string(&arg.expr, interner).map_or(CtorArgs::Invalid, CtorArgs::ExplicitName),
        _ => CtorArgs::Invalid,
    }
}

/// Value of a compile-time constant string expression.
///
/// Covers literals, parentheses, `+` between constants and `nameof`.
/// References to `const` fields would need member lookup and are not
/// followed.
fn constant_string(expr: &Expr, interner: &StringInterner) -> Option<String> {
    match &expr.kind {
        ExprKind::Literal(Literal::String(value)) => Some(interner.lookup(*value).to_owned()),
        ExprKind::Parenthesized(inner) => constant_string(inner, interner),
        ExprKind::Binary {
            op: BinaryOp::Add,
            left,
            right,
        } => {
            let mut text = constant_string(left, interner)?;
            text.push_str(&constant_string(right, interner)?);
            Some(text)
        }
        ExprKind::Invocation { callee, args } => nameof(callee, args, interner),
        _ => None,
    }
}

/// `nameof(x)`: the last identifier of `x`.
fn nameof(callee: &Expr, args: &[Expr], interner: &StringInterner) -> Option<String> {
    let is_nameof = callee
        .as_name()
        .and_then(|name| name.as_simple())
        .is_some_and(|ident| !ident.verbatim && interner.lookup(ident.name) == "nameof");
    let [arg] = args else {
        return None;
    };
    if !is_nameof {
        return None;
    }
    let ident = match &arg.kind {
        ExprKind::Name(name) => name.last_ident(),
        ExprKind::MemberAccess { name, .. } => name.last_ident(),
        _ => return None,
    };
    Some(interner.lookup(ident.name).to_owned())
}
