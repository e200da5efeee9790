//! Compilation units, using directives and namespaces.

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{
    AttributeList, CompilationUnit, NamespaceDecl, NamespaceMember, UsingDirective, UsingKind,
};
use resgen_ir::{Keyword, Span, TokenKind};

use super::ty::GenericMode;
use crate::recovery::{self, BlockEnd};
use crate::{ParseError, Parser};

/// Where a run of namespace members lives.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum Scope {
    /// File level: global attributes and top-level statements allowed.
    CompilationUnit,
    /// `namespace N { ... }`, ends at `}`.
    Block,
    /// `namespace N;`, runs to end of file.
    FileScoped,
}

#[derive(Default)]
struct NamespaceBody {
    usings: Vec<UsingDirective>,
    members: Vec<NamespaceMember>,
    global_attributes: Vec<AttributeList>,
}

impl Parser<'_> {
    pub(crate) fn compilation_unit(&mut self) -> CompilationUnit {
        let body = self.parse_namespace_body(Scope::CompilationUnit);
        CompilationUnit {
            usings: body.usings,
            attributes: body.global_attributes,
            members: body.members,
            span: Span::new(0, self.cursor.current_span().end),
        }
    }

    fn parse_namespace_body(&mut self, scope: Scope) -> NamespaceBody {
        let mut body = NamespaceBody::default();
        loop {
            if self.cursor.is_at_end()
                || (scope == Scope::Block && self.cursor.check(TokenKind::RBrace))
            {
                break;
            }
            let before = self.cursor.position();
            let errors_before = self.errors.len();

            if self.cursor.check_keyword(Keyword::Extern)
                && self.cursor.is_contextual_at(1, self.names.alias)
            {
                recovery::skip_until_end(&mut self.cursor, BlockEnd::Terminates);
                continue;
            }
            if self.at_using_directive() {
                match self.parse_using() {
                    Ok(using) => body.usings.push(using),
                    Err(err) => {
                        self.error(err.with_context("using directive"));
                        self.recover_to_member_end();
                    }
                }
                continue;
            }
            if self.cursor.check_keyword(Keyword::Namespace) {
                match self.parse_namespace() {
                    Ok(ns) => body.members.push(NamespaceMember::Namespace(ns)),
                    Err(err) => {
                        self.error(err.with_context("namespace declaration"));
                        self.recover_to_member_end();
                    }
                }
                continue;
            }

            let start = self.cursor.current_span();
            let mut attributes = self.parse_attribute_lists();
            if scope == Scope::CompilationUnit {
                let (global, local): (Vec<_>, Vec<_>) = attributes.into_iter().partition(|list| {
                    list.has_target(self.names.assembly) || list.has_target(self.names.module)
                });
                body.global_attributes.extend(global);
                attributes = local;
            }
            let modifiers = self.parse_modifiers();

            if self.at_type_decl_keyword() {
                match self.parse_type_decl(attributes, modifiers, start) {
                    Ok(decl) => body.members.push(NamespaceMember::Type(decl)),
                    Err(err) => {
                        self.error(err);
                        self.recover_to_member_end();
                    }
                }
            } else if attributes.is_empty()
                && modifiers.is_empty()
                && self.cursor.position() != before
            {
                // only global attributes; the next token starts over
            } else if scope == Scope::CompilationUnit {
                recovery::skip_until_end(&mut self.cursor, BlockEnd::Terminates);
            } else {
                self.error(ParseError::expected(
                    ErrorCode::ExpectedDeclaration,
                    "type or namespace declaration",
                    self.cursor.current(),
                ));
                self.recover_to_member_end();
            }

            if self.cursor.position() == before {
                if self.errors.len() == errors_before {
                    self.error(ParseError::unexpected(
                        "type or namespace declaration",
                        self.cursor.current(),
                    ));
                }
                self.cursor.advance();
            }
        }
        body
    }

    /// `using N;`, `using static N.T;`, `using A = T;`, each optionally
    /// `global`. `using (...)` and `using var x = ...;` are statements.
    fn at_using_directive(&self) -> bool {
        let offset = usize::from(
            self.cursor.check_contextual(self.names.global)
                && self.cursor.peek_kind_at(1).is_keyword(Keyword::Using),
        );
        if !self.cursor.peek_kind_at(offset).is_keyword(Keyword::Using) {
            return false;
        }
        match self.cursor.peek_kind_at(offset + 1) {
            TokenKind::Ident(_) => !matches!(
                self.cursor.peek_kind_at(offset + 2),
                TokenKind::Ident(_)
            ),
            TokenKind::Keyword(Keyword::Static | Keyword::Unsafe) => true,
            _ => false,
        }
    }

    fn parse_using(&mut self) -> Result<UsingDirective, ParseError> {
        let start = self.cursor.current_span();
        let is_global = self.cursor.check_contextual(self.names.global);
        if is_global {
            self.cursor.advance();
        }
        self.expect(TokenKind::Keyword(Keyword::Using), "`using`")?;
        self.cursor.eat_keyword(Keyword::Unsafe);

        let kind = if self.cursor.eat_keyword(Keyword::Static) {
            UsingKind::Static(self.parse_name(GenericMode::Type)?)
        } else if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && self.cursor.peek_kind_at(1) == TokenKind::Eq
        {
            let alias = self.expect_ident()?;
            self.cursor.advance();
            UsingKind::Alias {
                alias,
                target: self.parse_type()?,
            }
        } else {
            UsingKind::Namespace(self.parse_name(GenericMode::Type)?)
        };
        let end = self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(UsingDirective {
            is_global,
            kind,
            span: start.merge(end),
        })
    }

    /// `namespace N.M { ... }` or `namespace N.M;`
    fn parse_namespace(&mut self) -> Result<NamespaceDecl, ParseError> {
        let start = self.cursor.advance().span;
        let name = self.parse_name(GenericMode::Type)?;
        let (body, file_scoped) = if self.cursor.eat(TokenKind::Semicolon) {
            (self.parse_namespace_body(Scope::FileScoped), true)
        } else {
            let open = self.expect(TokenKind::LBrace, "`{` or `;`")?;
            let body = self.parse_namespace_body(Scope::Block);
            if !self.cursor.eat(TokenKind::RBrace) {
                self.error(ParseError::unclosed("{", open).with_context("namespace body"));
            }
            self.cursor.eat(TokenKind::Semicolon);
            (body, false)
        };
        Ok(NamespaceDecl {
            name,
            usings: body.usings,
            members: body.members,
            file_scoped,
            span: start.merge(self.cursor.previous_span()),
        })
    }
}
