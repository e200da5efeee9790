//! Members of a type body.
//!
//! Methods are read in full except for their bodies, which are skipped and
//! kept as spans. Other members keep only what identifies them: names for
//! fields, properties and events, nothing for operators and indexers.

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{
    Ident, MemberDecl, MemberKind, MethodBody, MethodDecl, NameKind, NameSyntax, Parameter,
    RefKind, TypeParam,
};
use resgen_ir::{Keyword, TokenKind};

use crate::recovery::{self, BlockEnd};
use crate::{ParseError, Parser};

/// Interface qualifier, member name and method type parameters.
struct MemberName {
    explicit_interface: Option<NameSyntax>,
    name: Ident,
    type_params: Vec<TypeParam>,
}

/// Append `segment` to a dotted qualifier.
fn qualify(left: Option<NameSyntax>, segment: NameSyntax) -> NameSyntax {
    match left {
        None => segment,
        Some(left) => NameSyntax {
            span: left.span.merge(segment.span),
            kind: NameKind::Qualified {
                left: Box::new(left),
                right: Box::new(segment),
            },
        },
    }
}

impl Parser<'_> {
    /// Parse one member. `Ok(None)` for a stray `;`.
    pub(crate) fn parse_member(&mut self) -> Result<Option<MemberDecl>, ParseError> {
        let start = self.cursor.current_span();
        let attributes = self.parse_attribute_lists();
        let modifiers = self.parse_modifiers();

        if self.at_type_decl_keyword() {
            let decl = self.parse_type_decl(attributes.clone(), modifiers, start)?;
            let span = decl.span;
            return Ok(Some(MemberDecl {
                attributes,
                modifiers,
                kind: MemberKind::Type(decl),
                span,
            }));
        }

        let kind = match self.cursor.current_kind() {
            TokenKind::Semicolon if attributes.is_empty() && modifiers.is_empty() => {
                self.cursor.advance();
                return Ok(None);
            }
            TokenKind::RBrace | TokenKind::Eof => {
                return Err(ParseError::expected(
                    ErrorCode::ExpectedDeclaration,
                    "member declaration",
                    self.cursor.current(),
                ));
            }
            TokenKind::Tilde => self.parse_destructor()?,
            TokenKind::Keyword(Keyword::Event) => self.parse_event()?,
            TokenKind::Keyword(Keyword::Implicit | Keyword::Explicit) => {
                self.parse_conversion()?
            }
            TokenKind::Ident(_) if self.cursor.peek_kind_at(1) == TokenKind::LParen => {
                self.parse_constructor()?
            }
            _ => self.parse_typed_member()?,
        };

        Ok(Some(MemberDecl {
            attributes,
            modifiers,
            kind,
            span: start.merge(self.cursor.previous_span()),
        }))
    }

    /// Members that start with a type: methods, properties, fields,
    /// indexers and operators.
    fn parse_typed_member(&mut self) -> Result<MemberKind, ParseError> {
        let ty = self.parse_type()?;
        match self.cursor.current_kind() {
            TokenKind::Keyword(Keyword::Operator) => {
                self.cursor.advance();
                recovery::synchronize(&mut self.cursor, |kind| {
                    matches!(kind, TokenKind::LParen | TokenKind::LBrace | TokenKind::Semicolon)
                });
                self.parse_parameter_list()?;
                self.parse_method_body()?;
                Ok(MemberKind::Operator)
            }
            TokenKind::Keyword(Keyword::This) => {
                self.cursor.advance();
                if !self.cursor.check(TokenKind::LBracket) {
                    return Err(ParseError::unexpected("`[`", self.cursor.current()));
                }
                recovery::skip_balanced(&mut self.cursor)?;
                self.skip_property_body()?;
                Ok(MemberKind::Indexer)
            }
            TokenKind::Ident(_) => {
                let member = self.parse_member_name()?;
                match self.cursor.current_kind() {
                    TokenKind::LParen => {
                        let params = self.parse_parameter_list()?;
                        let constraints = self.parse_constraint_clauses()?;
                        let body = self.parse_method_body()?;
                        Ok(MemberKind::Method(MethodDecl {
                            return_type: ty,
                            explicit_interface: member.explicit_interface,
                            name: member.name,
                            type_params: member.type_params,
                            params,
                            constraints,
                            body,
                        }))
                    }
                    TokenKind::LBrace | TokenKind::FatArrow => {
                        self.skip_property_body()?;
                        Ok(MemberKind::Property(member.name))
                    }
                    _ => Ok(MemberKind::Field(self.parse_declarators(member.name)?)),
                }
            }
            _ => Err(ParseError::expected(
                ErrorCode::ExpectedIdentifier,
                "member name",
                self.cursor.current(),
            )),
        }
    }

    /// `Name`, `I.Name`, `I<T>.Name<U>`, `global::N.I.Name`.
    ///
    /// A `<...>` group followed by `.` is a type argument list of an
    /// interface segment; anywhere else it declares method type parameters.
    fn parse_member_name(&mut self) -> Result<MemberName, ParseError> {
        let mut qualifier: Option<NameSyntax> = None;
        let mut alias: Option<Ident> = None;
        loop {
            let ident = self.expect_ident()?;
            let mut segment = NameSyntax::simple(ident);

            match self.cursor.current_kind() {
                TokenKind::ColonColon => {
                    self.cursor.advance();
                    alias = Some(ident);
                    continue;
                }
                TokenKind::Lt if self.kind_after_angle_group() == TokenKind::Dot => {
                    let type_args = self.parse_type_argument_list()?;
                    segment = NameSyntax {
                        span: ident.span.merge(type_args.span),
                        kind: NameKind::Generic { ident, type_args },
                    };
                }
                TokenKind::Lt => {
                    let type_params = self.parse_type_parameter_list()?;
                    return Ok(MemberName {
                        explicit_interface: qualifier,
                        name: ident,
                        type_params,
                    });
                }
                TokenKind::Dot => {}
                _ => {
                    return Ok(MemberName {
                        explicit_interface: qualifier,
                        name: ident,
                        type_params: Vec::new(),
                    });
                }
            }

            self.expect(TokenKind::Dot, "`.`")?;
            if let Some(alias) = alias.take() {
                segment = NameSyntax {
                    span: alias.span.merge(segment.span),
                    kind: NameKind::AliasQualified {
                        alias,
                        name: Box::new(segment),
                    },
                };
            }
            qualifier = Some(qualify(qualifier, segment));
        }
    }

    /// `;`, `{ ... }` or `=> expr;`
    fn parse_method_body(&mut self) -> Result<MethodBody, ParseError> {
        match self.cursor.current_kind() {
            TokenKind::Semicolon => {
                self.cursor.advance();
                Ok(MethodBody::None)
            }
            TokenKind::LBrace => Ok(MethodBody::Block(recovery::skip_balanced(
                &mut self.cursor,
            )?)),
            TokenKind::FatArrow => {
                self.cursor.advance();
                Ok(MethodBody::Expression(recovery::skip_until_end(
                    &mut self.cursor,
                    BlockEnd::Continues,
                )))
            }
            _ => Err(ParseError::unexpected(
                "`;`, `{` or `=>`",
                self.cursor.current(),
            )),
        }
    }

    /// Accessor list with optional initializer, or `=> expr;`.
    fn skip_property_body(&mut self) -> Result<(), ParseError> {
        if self.cursor.eat(TokenKind::FatArrow) {
            recovery::skip_until_end(&mut self.cursor, BlockEnd::Continues);
            return Ok(());
        }
        if !self.cursor.check(TokenKind::LBrace) {
            return Err(ParseError::unexpected("`{` or `=>`", self.cursor.current()));
        }
        recovery::skip_balanced(&mut self.cursor)?;
        if self.cursor.eat(TokenKind::Eq) {
            recovery::skip_until_end(&mut self.cursor, BlockEnd::Continues);
        }
        Ok(())
    }

    /// Declarators after the first field or event name: `= init, b, c[4];`
    fn parse_declarators(&mut self, first: Ident) -> Result<Vec<Ident>, ParseError> {
        let mut names = vec![first];
        loop {
            if self.cursor.check(TokenKind::LBracket) {
                recovery::skip_balanced(&mut self.cursor)?;
            }
            if self.cursor.eat(TokenKind::Eq) {
                recovery::skip_until_separator(&mut self.cursor);
            }
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
            names.push(self.expect_ident()?);
        }
        self.expect(TokenKind::Semicolon, "`;`")?;
        Ok(names)
    }

    /// `Name(params) : base(args) body`
    fn parse_constructor(&mut self) -> Result<MemberKind, ParseError> {
        let name = self.expect_ident()?;
        self.parse_parameter_list()?;
        if self.cursor.eat(TokenKind::Colon) {
            if !matches!(
                self.cursor.current_kind().keyword(),
                Some(Keyword::Base | Keyword::This)
            ) {
                return Err(ParseError::unexpected(
                    "`base` or `this`",
                    self.cursor.current(),
                ));
            }
            self.cursor.advance();
            if !self.cursor.check(TokenKind::LParen) {
                return Err(ParseError::unexpected("`(`", self.cursor.current()));
            }
            recovery::skip_balanced(&mut self.cursor)?;
        }
        self.parse_method_body()?;
        Ok(MemberKind::Constructor(name))
    }

    fn parse_destructor(&mut self) -> Result<MemberKind, ParseError> {
        self.cursor.advance();
        let name = self.expect_ident()?;
        self.parse_parameter_list()?;
        self.parse_method_body()?;
        Ok(MemberKind::Destructor(name))
    }

    /// `implicit operator T(S value) body`
    fn parse_conversion(&mut self) -> Result<MemberKind, ParseError> {
        self.cursor.advance();
        self.expect(TokenKind::Keyword(Keyword::Operator), "`operator`")?;
        self.cursor.eat_keyword(Keyword::Checked);
        self.parse_type()?;
        self.parse_parameter_list()?;
        self.parse_method_body()?;
        Ok(MemberKind::Conversion)
    }

    /// `event T A, B;` or `event T A { add {} remove {} }`
    fn parse_event(&mut self) -> Result<MemberKind, ParseError> {
        self.cursor.advance();
        self.parse_type()?;
        let first = self.parse_member_name()?.name;
        if self.cursor.check(TokenKind::LBrace) {
            recovery::skip_balanced(&mut self.cursor)?;
            return Ok(MemberKind::Event(vec![first]));
        }
        Ok(MemberKind::Event(self.parse_declarators(first)?))
    }

    /// `(params)`
    pub(crate) fn parse_parameter_list(&mut self) -> Result<Vec<Parameter>, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut params = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            if self.cursor.is_at_end() {
                return Err(ParseError::unclosed("(", open).with_context("parameter list"));
            }
            params.push(self.parse_parameter()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RParen, "`)`")?;
        Ok(params)
    }

    /// `[A] this ref readonly scoped T name = default`
    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let start = self.cursor.current_span();
        let attributes = self.parse_attribute_lists();
        let mut ref_kind = RefKind::None;
        let mut is_params = false;
        let mut is_this = false;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Keyword(Keyword::This) => is_this = true,
                TokenKind::Keyword(Keyword::Params) => is_params = true,
                TokenKind::Keyword(Keyword::Ref) => ref_kind = RefKind::Ref,
                TokenKind::Keyword(Keyword::Out) => ref_kind = RefKind::Out,
                TokenKind::Keyword(Keyword::In) => ref_kind = RefKind::In,
                TokenKind::Keyword(Keyword::Readonly) if ref_kind == RefKind::Ref => {
                    ref_kind = RefKind::RefReadonly;
                }
                TokenKind::Ident(_)
                    if self.cursor.check_contextual(self.names.scoped)
                        && self.starts_declaration_after(1) => {}
                _ => break,
            }
            self.cursor.advance();
        }

        let ty = self.parse_type()?;
        let name = self.expect_ident()?;
        let has_default = self.cursor.eat(TokenKind::Eq);
        if has_default {
            recovery::skip_until_separator(&mut self.cursor);
        }
        Ok(Parameter {
            attributes,
            ref_kind,
            is_params,
            is_this,
            ty,
            name,
            has_default,
            span: start.merge(self.cursor.previous_span()),
        })
    }
}
