//! Type declarations.
//!
//! Classes, structs, interfaces, records, enums and delegates, with their
//! modifiers, type parameters and constraint clauses. Base lists and primary
//! constructor parameter lists are read past; enum members keep only their
//! names.

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{
    AttributeList, Constraint, ConstraintClause, MemberDecl, MemberKind, Modifiers, TypeDecl,
    TypeDeclKind, TypeParam,
};
use resgen_ir::{Keyword, Span, TokenKind};

use crate::recovery;
use crate::{ParseError, Parser};

fn keyword_modifier(kw: Keyword) -> Option<Modifiers> {
    Some(match kw {
        Keyword::Public => Modifiers::PUBLIC,
        Keyword::Private => Modifiers::PRIVATE,
        Keyword::Protected => Modifiers::PROTECTED,
        Keyword::Internal => Modifiers::INTERNAL,
        Keyword::Static => Modifiers::STATIC,
        Keyword::Sealed => Modifiers::SEALED,
        Keyword::Abstract => Modifiers::ABSTRACT,
        Keyword::Virtual => Modifiers::VIRTUAL,
        Keyword::Override => Modifiers::OVERRIDE,
        Keyword::Readonly => Modifiers::READONLY,
        Keyword::Extern => Modifiers::EXTERN,
        Keyword::New => Modifiers::NEW,
        Keyword::Unsafe => Modifiers::UNSAFE,
        Keyword::Const => Modifiers::CONST,
        Keyword::Volatile => Modifiers::VOLATILE,
        Keyword::Fixed => Modifiers::FIXED,
        Keyword::Ref => Modifiers::REF,
        _ => return None,
    })
}

impl Parser<'_> {
    /// Reserved and contextual modifiers in any order.
    pub(crate) fn parse_modifiers(&mut self) -> Modifiers {
        let mut modifiers = Modifiers::empty();
        loop {
            let flag = match self.cursor.current_kind() {
                TokenKind::Keyword(kw) => match keyword_modifier(kw) {
                    Some(flag) => flag,
                    None => break,
                },
                TokenKind::Ident(_) => match self.contextual_modifier() {
                    Some(flag) => flag,
                    None => break,
                },
                _ => break,
            };
            self.cursor.advance();
            modifiers |= flag;
        }
        modifiers
    }

    /// `partial`, `async`, `file` and `required` act as modifiers only when
    /// a declaration continues after them.
    fn contextual_modifier(&self) -> Option<Modifiers> {
        let names = &self.names;
        let flag = if self.cursor.check_contextual(names.partial) {
            Modifiers::PARTIAL
        } else if self.cursor.check_contextual(names.async_) {
            Modifiers::ASYNC
        } else if self.cursor.check_contextual(names.file) {
            Modifiers::FILE
        } else if self.cursor.check_contextual(names.required) {
            Modifiers::REQUIRED
        } else {
            return None;
        };
        self.starts_declaration_after(1).then_some(flag)
    }

    /// Whether a type declaration keyword is next (after attributes and
    /// modifiers).
    pub(crate) fn at_type_decl_keyword(&self) -> bool {
        match self.cursor.current_kind() {
            TokenKind::Keyword(
                Keyword::Class
                | Keyword::Struct
                | Keyword::Interface
                | Keyword::Enum
                | Keyword::Delegate,
            ) => true,
            TokenKind::Ident(_) => {
                self.cursor.check_contextual(self.names.record)
                    && matches!(
                        self.cursor.peek_kind_at(1),
                        TokenKind::Ident(_)
                            | TokenKind::Keyword(Keyword::Class | Keyword::Struct)
                    )
            }
            _ => false,
        }
    }

    /// Type declaration from its keyword on; `start` is where its
    /// attributes or modifiers began.
    pub(crate) fn parse_type_decl(
        &mut self,
        attributes: Vec<AttributeList>,
        modifiers: Modifiers,
        start: Span,
    ) -> Result<TypeDecl, ParseError> {
        let keyword = self.cursor.advance();
        let kind = match keyword.kind {
            TokenKind::Keyword(Keyword::Class) => TypeDeclKind::Class,
            TokenKind::Keyword(Keyword::Struct) => TypeDeclKind::Struct,
            TokenKind::Keyword(Keyword::Interface) => TypeDeclKind::Interface,
            TokenKind::Keyword(Keyword::Enum) => TypeDeclKind::Enum,
            TokenKind::Keyword(Keyword::Delegate) => {
                return self.parse_delegate(attributes, modifiers, start);
            }
            _ => {
                if self.cursor.eat_keyword(Keyword::Struct) {
                    TypeDeclKind::RecordStruct
                } else {
                    self.cursor.eat_keyword(Keyword::Class);
                    TypeDeclKind::Record
                }
            }
        };

        let name = self.expect_ident()?;
        let type_params = if self.cursor.check(TokenKind::Lt) {
            self.parse_type_parameter_list()?
        } else {
            Vec::new()
        };
        if self.cursor.check(TokenKind::LParen) {
            recovery::skip_balanced(&mut self.cursor)?;
        }
        if self.cursor.eat(TokenKind::Colon) {
            self.parse_base_list()?;
        }
        let constraints = self.parse_constraint_clauses()?;

        let members = match self.cursor.current_kind() {
            TokenKind::LBrace if kind == TypeDeclKind::Enum => self.parse_enum_body(),
            TokenKind::LBrace => self.parse_type_body(),
            TokenKind::Semicolon => {
                self.cursor.advance();
                Vec::new()
            }
            _ => {
                return Err(ParseError::unexpected("`{`", self.cursor.current())
                    .with_context("type declaration"));
            }
        };
        self.cursor.eat(TokenKind::Semicolon);

        Ok(TypeDecl {
            attributes,
            modifiers,
            kind,
            name,
            type_params,
            constraints,
            members,
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `delegate R Name<T>(params) where ...;`
    fn parse_delegate(
        &mut self,
        attributes: Vec<AttributeList>,
        modifiers: Modifiers,
        start: Span,
    ) -> Result<TypeDecl, ParseError> {
        self.parse_type()?;
        let name = self.expect_ident()?;
        let type_params = if self.cursor.check(TokenKind::Lt) {
            self.parse_type_parameter_list()?
        } else {
            Vec::new()
        };
        self.parse_parameter_list()?;
        let constraints = self.parse_constraint_clauses()?;
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(TypeDecl {
            attributes,
            modifiers,
            kind: TypeDeclKind::Delegate,
            name,
            type_params,
            constraints,
            members: Vec::new(),
            span: start.merge(self.cursor.previous_span()),
        })
    }

    /// `: Base(args), IFoo<T>`
    fn parse_base_list(&mut self) -> Result<(), ParseError> {
        loop {
            self.parse_type()?;
            if self.cursor.check(TokenKind::LParen) {
                recovery::skip_balanced(&mut self.cursor)?;
            }
            if !self.cursor.eat(TokenKind::Comma) {
                return Ok(());
            }
        }
    }

    /// `<[A] in T, out U>`
    pub(crate) fn parse_type_parameter_list(&mut self) -> Result<Vec<TypeParam>, ParseError> {
        self.expect(TokenKind::Lt, "`<`")?;
        let mut params = Vec::new();
        loop {
            let attributes = self.parse_attribute_lists();
            if !self.cursor.eat_keyword(Keyword::In) {
                self.cursor.eat_keyword(Keyword::Out);
            }
            let name = self.expect_ident()?;
            params.push(TypeParam { attributes, name });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::Gt, "`>`")?;
        Ok(params)
    }

    /// `where T : class, new() where U : IFoo`
    pub(crate) fn parse_constraint_clauses(&mut self) -> Result<Vec<ConstraintClause>, ParseError> {
        let mut clauses = Vec::new();
        while self.cursor.check_contextual(self.names.where_)
            && matches!(self.cursor.peek_kind_at(1), TokenKind::Ident(_))
            && self.cursor.peek_kind_at(2) == TokenKind::Colon
        {
            self.cursor.advance();
            let param = self.expect_ident()?;
            self.cursor.advance();
            let mut constraints = Vec::new();
            loop {
                constraints.push(self.parse_constraint()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
            clauses.push(ConstraintClause { param, constraints });
        }
        Ok(clauses)
    }

    fn parse_constraint(&mut self) -> Result<Constraint, ParseError> {
        let is_bare_word = !matches!(
            self.cursor.peek_kind_at(1),
            TokenKind::Dot | TokenKind::Lt | TokenKind::ColonColon | TokenKind::Question
        );
        match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Class) => {
                self.cursor.advance();
                self.cursor.eat(TokenKind::Question);
                Ok(Constraint::Class)
            }
            TokenKind::Keyword(Keyword::Struct) => {
                self.cursor.advance();
                Ok(Constraint::Struct)
            }
            TokenKind::Keyword(Keyword::Default) => {
                self.cursor.advance();
                Ok(Constraint::Default)
            }
            TokenKind::Keyword(Keyword::New) => {
                self.cursor.advance();
                self.expect(TokenKind::LParen, "`(`")?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(Constraint::New)
            }
            _ if is_bare_word && self.cursor.check_contextual(self.names.unmanaged) => {
                self.cursor.advance();
                Ok(Constraint::Unmanaged)
            }
            _ if is_bare_word && self.cursor.check_contextual(self.names.notnull) => {
                self.cursor.advance();
                Ok(Constraint::NotNull)
            }
            _ => Ok(Constraint::Type(self.parse_type()?)),
        }
    }

    /// `{ member* }`; errors inside are recorded and skipped member by
    /// member.
    pub(crate) fn parse_type_body(&mut self) -> Vec<MemberDecl> {
        let open = self.cursor.advance().span;
        let mut members = Vec::new();
        loop {
            if self.cursor.eat(TokenKind::RBrace) {
                break;
            }
            if self.cursor.is_at_end() {
                self.error(ParseError::unclosed("{", open).with_context("type body"));
                break;
            }
            let before = self.cursor.position();
            match self.parse_member() {
                Ok(Some(member)) => members.push(member),
                Ok(None) => {}
                Err(err) => {
                    self.error(err);
                    self.recover_to_member_end();
                }
            }
            if self.cursor.position() == before && !self.cursor.check(TokenKind::RBrace) {
                self.cursor.advance();
            }
        }
        members
    }

    /// `{ [A] Red = 1, Green, }`; values are skipped.
    fn parse_enum_body(&mut self) -> Vec<MemberDecl> {
        let open = self.cursor.advance().span;
        let mut members = Vec::new();
        loop {
            if self.cursor.eat(TokenKind::RBrace) {
                break;
            }
            if self.cursor.is_at_end() {
                self.error(ParseError::unclosed("{", open).with_context("enum body"));
                break;
            }
            let start = self.cursor.current_span();
            let attributes = self.parse_attribute_lists();
            let Some(name) = self.cursor.eat_ident() else {
                self.error(ParseError::expected(
                    ErrorCode::ExpectedIdentifier,
                    "enum member",
                    self.cursor.current(),
                ));
                recovery::synchronize(&mut self.cursor, |kind| {
                    matches!(kind, TokenKind::Comma | TokenKind::RBrace)
                });
                self.cursor.eat(TokenKind::Comma);
                continue;
            };
            if self.cursor.eat(TokenKind::Eq) {
                recovery::skip_until_separator(&mut self.cursor);
            }
            members.push(MemberDecl {
                attributes,
                modifiers: Modifiers::empty(),
                kind: MemberKind::EnumMember(name),
                span: start.merge(self.cursor.previous_span()),
            });
            if !self.cursor.eat(TokenKind::Comma) && !self.cursor.check(TokenKind::RBrace) {
                self.error(ParseError::unexpected("`,` or `}`", self.cursor.current()));
                recovery::synchronize(&mut self.cursor, |kind| {
                    matches!(kind, TokenKind::Comma | TokenKind::RBrace)
                });
                self.cursor.eat(TokenKind::Comma);
            }
        }
        members
    }
}
