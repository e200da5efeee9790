//! Types and names.
//!
//! In type positions `<` always opens a type argument list. In expressions
//! it may be a comparison, so generic arguments are parsed speculatively and
//! kept only when the token after the closing `>` is one that can follow a
//! generic name (`(`, `)`, `,`, `.`, ...).

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{NameKind, NameSyntax, TupleElement, TypeArgumentList, TypeKind, TypeSyntax};
use resgen_ir::TokenKind;

use crate::{ParseError, Parser};

/// How `<` after an identifier is read.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub(crate) enum GenericMode {
    /// Always a type argument list.
    Type,
    /// A type argument list only when the disambiguation check passes.
    Expression,
}

/// Tokens that may follow a generic name in an expression.
fn can_follow_type_arguments(kind: TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::LParen
            | TokenKind::RParen
            | TokenKind::RBracket
            | TokenKind::RBrace
            | TokenKind::Colon
            | TokenKind::Semicolon
            | TokenKind::Comma
            | TokenKind::Dot
            | TokenKind::Question
            | TokenKind::EqEq
            | TokenKind::NotEq
            | TokenKind::Pipe
            | TokenKind::Caret
            | TokenKind::AmpAmp
            | TokenKind::PipePipe
            | TokenKind::Amp
            | TokenKind::LBracket
            | TokenKind::Gt
            | TokenKind::Eof
    )
}

impl Parser<'_> {
    /// Parse a type: base type followed by `?`, `[]` and `*` suffixes.
    pub(crate) fn parse_type(&mut self) -> Result<TypeSyntax, ParseError> {
        let mut ty = self.parse_base_type()?;
        loop {
            match self.cursor.current_kind() {
                TokenKind::Question => {
                    let end = self.cursor.advance().span;
                    ty = TypeSyntax {
                        span: ty.span.merge(end),
                        kind: TypeKind::Nullable(Box::new(ty)),
                    };
                }
                TokenKind::LBracket
                    if matches!(
                        self.cursor.peek_kind_at(1),
                        TokenKind::RBracket | TokenKind::Comma
                    ) =>
                {
                    self.cursor.advance();
                    let mut rank = 1;
                    while self.cursor.eat(TokenKind::Comma) {
                        rank += 1;
                    }
                    let end = self.expect(TokenKind::RBracket, "`]`")?;
                    ty = TypeSyntax {
                        span: ty.span.merge(end),
                        kind: TypeKind::Array {
                            element: Box::new(ty),
                            rank,
                        },
                    };
                }
                TokenKind::Star => {
                    let end = self.cursor.advance().span;
                    ty = TypeSyntax {
                        span: ty.span.merge(end),
                        kind: TypeKind::Pointer(Box::new(ty)),
                    };
                }
                _ => break,
            }
        }
        Ok(ty)
    }

    fn parse_base_type(&mut self) -> Result<TypeSyntax, ParseError> {
        let token = self.cursor.current();
        match token.kind {
            TokenKind::Keyword(kw) => match kw.predefined_type() {
                Some(predefined) => {
                    self.cursor.advance();
                    Ok(TypeSyntax {
                        kind: TypeKind::Predefined(predefined),
                        span: token.span,
                    })
                }
                None => Err(ParseError::expected(ErrorCode::ExpectedType, "type", token)),
            },
            TokenKind::Ident(_) => {
                let name = self.parse_name(GenericMode::Type)?;
                Ok(TypeSyntax {
                    span: name.span,
                    kind: TypeKind::Named(name),
                })
            }
            TokenKind::LParen => self.parse_tuple_type(),
            _ => Err(ParseError::expected(ErrorCode::ExpectedType, "type", token)),
        }
    }

    /// `(int Id, string)`
    fn parse_tuple_type(&mut self) -> Result<TypeSyntax, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut elements = Vec::new();
        loop {
            let ty = self.parse_type()?;
            let name = self.cursor.eat_ident();
            elements.push(TupleElement { ty, name });
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RParen, "`)`")?;
        Ok(TypeSyntax {
            kind: TypeKind::Tuple(elements),
            span: open.merge(close),
        })
    }

    /// Parse a possibly qualified name: `A`, `N.A<T>`, `global::N.A`.
    pub(crate) fn parse_name(&mut self, mode: GenericMode) -> Result<NameSyntax, ParseError> {
        let mut name = self.parse_unqualified_name(mode)?;
        while self.cursor.check(TokenKind::Dot)
            && matches!(self.cursor.peek_kind_at(1), TokenKind::Ident(_))
        {
            self.cursor.advance();
            let right = self.parse_name_segment(mode)?;
            name = NameSyntax {
                span: name.span.merge(right.span),
                kind: NameKind::Qualified {
                    left: Box::new(name),
                    right: Box::new(right),
                },
            };
        }
        Ok(name)
    }

    /// A single segment, or `alias::segment`.
    pub(crate) fn parse_unqualified_name(
        &mut self,
        mode: GenericMode,
    ) -> Result<NameSyntax, ParseError> {
        if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
            && self.cursor.peek_kind_at(1) == TokenKind::ColonColon
        {
            let alias = self.expect_ident()?;
            self.cursor.advance();
            let name = self.parse_name_segment(mode)?;
            return Ok(NameSyntax {
                span: alias.span.merge(name.span),
                kind: NameKind::AliasQualified {
                    alias,
                    name: Box::new(name),
                },
            });
        }
        self.parse_name_segment(mode)
    }

    /// `Ident` or `Ident<T, ...>`.
    pub(crate) fn parse_name_segment(&mut self, mode: GenericMode) -> Result<NameSyntax, ParseError> {
        let ident = self.expect_ident()?;
        if !self.cursor.check(TokenKind::Lt) {
            return Ok(NameSyntax::simple(ident));
        }
        let type_args = match mode {
            GenericMode::Type => Some(self.parse_type_argument_list()?),
            GenericMode::Expression => self.try_parse_type_arguments(),
        };
        Ok(match type_args {
            Some(type_args) => NameSyntax {
                span: ident.span.merge(type_args.span),
                kind: NameKind::Generic { ident, type_args },
            },
            None => NameSyntax::simple(ident),
        })
    }

    /// `<T1, T2>`; `<,>` for unbound generics in `typeof`.
    pub(crate) fn parse_type_argument_list(&mut self) -> Result<TypeArgumentList, ParseError> {
        let open = self.expect(TokenKind::Lt, "`<`")?;
        let mut args = Vec::new();
        if matches!(
            self.cursor.current_kind(),
            TokenKind::Gt | TokenKind::Comma
        ) {
            while self.cursor.eat(TokenKind::Comma) {}
        } else {
            loop {
                args.push(self.parse_type()?);
                if !self.cursor.eat(TokenKind::Comma) {
                    break;
                }
            }
        }
        let close = self.expect(TokenKind::Gt, "`>`")?;
        Ok(TypeArgumentList {
            args,
            span: open.merge(close),
        })
    }

    /// Speculatively parse type arguments in an expression.
    ///
    /// On failure the cursor is restored to the `<`.
    fn try_parse_type_arguments(&mut self) -> Option<TypeArgumentList> {
        let start = self.cursor.position();
        match self.parse_type_argument_list() {
            Ok(list) if can_follow_type_arguments(self.cursor.current_kind()) => Some(list),
            _ => {
                self.cursor.set_position(start);
                None
            }
        }
    }

    /// Kind of the token after the `<...>` group starting at the cursor.
    ///
    /// Used to tell `I<T>.M` (interface type arguments) from `M<T>(`
    /// (method type parameters) without consuming anything.
    pub(crate) fn kind_after_angle_group(&self) -> TokenKind {
        let mut depth = 0usize;
        let mut offset = 0;
        loop {
            match self.cursor.peek_kind_at(offset) {
                TokenKind::Lt => depth += 1,
                TokenKind::Gt => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        return self.cursor.peek_kind_at(offset + 1);
                    }
                }
                kind @ (TokenKind::Eof
                | TokenKind::Semicolon
                | TokenKind::LBrace
                | TokenKind::RBrace) => return kind,
                _ => {}
            }
            offset += 1;
        }
    }
}
