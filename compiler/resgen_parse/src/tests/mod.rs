//! Parser tests.
//!
//! Tests are organized into modules by category:
//! - `declarations`: namespaces, usings, type declarations and members
//! - `recovery`: malformed input, error reporting and resynchronization
//!
//! Grammar modules carry their own unit tests next to the productions.

mod declarations;

use resgen_ir::ast::{MemberDecl, MethodDecl, NamespaceMember, TypeDecl};
use resgen_ir::{Name, Span, StringInterner, TokenList};

use crate::{ParseOutput, Parser};

/// Owns source, tokens and interner so a `Parser` can borrow them.
pub(crate) struct TestCtx {
    pub source: &'static str,
    pub interner: StringInterner,
    tokens: TokenList,
}

impl TestCtx {
    pub fn new(source: &'static str) -> Self {
        let interner = StringInterner::new();
        let tokens = resgen_lexer::lex(source, &interner).tokens;
        TestCtx {
            source,
            interner,
            tokens,
        }
    }

    /// Run `f` against a fresh parser positioned at the first token.
    pub fn run<T>(&self, f: impl FnOnce(&mut Parser<'_>) -> T) -> T {
        let mut parser = Parser::new(&self.tokens, self.source, &self.interner);
        f(&mut parser)
    }

    pub fn parse(&self) -> ParseOutput {
        crate::parse(&self.tokens, self.source, &self.interner)
    }

    pub fn text(&self, span: Span) -> &str {
        span.text(self.source)
    }

    pub fn name(&self, name: Name) -> &str {
        self.interner.lookup(name)
    }
}

/// Every type declaration in the unit, outermost first.
pub(crate) fn all_types(members: &[NamespaceMember]) -> Vec<&TypeDecl> {
    fn walk_type<'a>(decl: &'a TypeDecl, out: &mut Vec<&'a TypeDecl>) {
        out.push(decl);
        for member in &decl.members {
            if let resgen_ir::ast::MemberKind::Type(nested) = &member.kind {
                walk_type(nested, out);
            }
        }
    }

    let mut out = Vec::new();
    for member in members {
        match member {
            NamespaceMember::Namespace(ns) => out.extend(all_types(&ns.members)),
            NamespaceMember::Type(decl) => walk_type(decl, &mut out),
        }
    }
    out
}

/// The method declaration of `member`, panicking otherwise.
pub(crate) fn method(member: &MemberDecl) -> &MethodDecl {
    match &member.kind {
        resgen_ir::ast::MemberKind::Method(method) => method,
        other => panic!("expected method, got {other:?}"),
    }
}
