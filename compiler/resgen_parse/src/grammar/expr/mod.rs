//! Expressions.
//!
//! Covers what can appear in attribute arguments: literals, names (with
//! speculative generic arguments), member access, invocations such as
//! `nameof(x)`, `typeof`, `default`, array creation, casts and the usual
//! unary, binary and conditional operators. Binary operators use precedence
//! climbing over `BinaryOp::precedence`.

use resgen_diagnostic::ErrorCode;
use resgen_ir::ast::{BinaryOp, Expr, ExprKind, Literal, UnaryOp};
use resgen_ir::{Keyword, Span, TokenKind};

use super::ty::GenericMode;
use crate::recovery;
use crate::{ParseError, Parser};

fn binary_op(kind: TokenKind) -> Option<BinaryOp> {
    Some(match kind {
        TokenKind::QuestionQuestion => BinaryOp::Coalesce,
        TokenKind::PipePipe => BinaryOp::Or,
        TokenKind::AmpAmp => BinaryOp::And,
        TokenKind::Pipe => BinaryOp::BitOr,
        TokenKind::Caret => BinaryOp::BitXor,
        TokenKind::Amp => BinaryOp::BitAnd,
        TokenKind::EqEq => BinaryOp::Eq,
        TokenKind::NotEq => BinaryOp::NotEq,
        TokenKind::Lt => BinaryOp::Lt,
        TokenKind::LtEq => BinaryOp::LtEq,
        TokenKind::Gt => BinaryOp::Gt,
        TokenKind::GtEq => BinaryOp::GtEq,
        TokenKind::Shl => BinaryOp::Shl,
        TokenKind::Plus => BinaryOp::Add,
        TokenKind::Minus => BinaryOp::Sub,
        TokenKind::Star => BinaryOp::Mul,
        TokenKind::Slash => BinaryOp::Div,
        TokenKind::Percent => BinaryOp::Rem,
        _ => return None,
    })
}

fn unary_op(kind: TokenKind) -> Option<UnaryOp> {
    Some(match kind {
        TokenKind::Plus => UnaryOp::Plus,
        TokenKind::Minus => UnaryOp::Minus,
        TokenKind::Bang => UnaryOp::Not,
        TokenKind::Tilde => UnaryOp::BitNot,
        _ => return None,
    })
}

/// Tokens that can start the operand of a cast `(T)x`.
fn starts_cast_operand(kind: TokenKind) -> bool {
    match kind {
        TokenKind::Ident(_)
        | TokenKind::String(_)
        | TokenKind::InterpolatedString
        | TokenKind::Char(_)
        | TokenKind::Number(_)
        | TokenKind::LParen
        | TokenKind::Tilde
        | TokenKind::Bang => true,
        TokenKind::Keyword(kw) => matches!(
            kw,
            Keyword::True
                | Keyword::False
                | Keyword::Null
                | Keyword::Typeof
                | Keyword::Default
                | Keyword::This
                | Keyword::Base
                | Keyword::New
        ) || kw.predefined_type().is_some(),
        _ => false,
    }
}

impl Parser<'_> {
    /// Parse an expression.
    pub(crate) fn parse_expr(&mut self) -> Result<Expr, ParseError> {
        let condition = self.parse_binary(0)?;
        if !self.cursor.check(TokenKind::Question) {
            return Ok(condition);
        }
        self.cursor.advance();
        let when_true = self.parse_expr()?;
        self.expect(TokenKind::Colon, "`:`")?;
        let when_false = self.parse_expr()?;
        let span = condition.span.merge(when_false.span);
        Ok(Expr::new(
            ExprKind::Conditional {
                condition: Box::new(condition),
                when_true: Box::new(when_true),
                when_false: Box::new(when_false),
            },
            span,
        ))
    }

    /// Precedence climbing over binary operators binding at least
    /// `min_prec`.
    fn parse_binary(&mut self, min_prec: u8) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;
        while let Some(op) = binary_op(self.cursor.current_kind()) {
            let prec = op.precedence();
            if prec < min_prec {
                break;
            }
            self.cursor.advance();
            let next_min = if op.is_right_assoc() { prec } else { prec + 1 };
            let right = self.parse_binary(next_min)?;
            let span = left.span.merge(right.span);
            left = Expr::new(
                ExprKind::Binary {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                },
                span,
            );
        }
        Ok(left)
    }

    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        match unary_op(self.cursor.current_kind()) {
            Some(op) => {
                let start = self.cursor.advance().span;
                let operand = self.parse_unary()?;
                let span = start.merge(operand.span);
                Ok(Expr::new(
                    ExprKind::Unary {
                        op,
                        operand: Box::new(operand),
                    },
                    span,
                ))
            }
            None => {
                let primary = self.parse_primary()?;
                self.parse_postfix(primary)
            }
        }
    }

    /// Member access, invocation and the null-forgiving `!`.
    fn parse_postfix(&mut self, mut expr: Expr) -> Result<Expr, ParseError> {
        loop {
            match self.cursor.current_kind() {
                TokenKind::Dot => {
                    self.cursor.advance();
                    let name = self.parse_name_segment(GenericMode::Expression)?;
                    let span = expr.span.merge(name.span);
                    expr = Expr::new(
                        ExprKind::MemberAccess {
                            target: Box::new(expr),
                            name,
                        },
                        span,
                    );
                }
                TokenKind::LParen => {
                    let (args, close) = self.parse_invocation_args()?;
                    let span = expr.span.merge(close);
                    expr = Expr::new(
                        ExprKind::Invocation {
                            callee: Box::new(expr),
                            args,
                        },
                        span,
                    );
                }
                TokenKind::Bang => {
                    let end = self.cursor.advance().span;
                    expr.span = expr.span.merge(end);
                }
                _ => return Ok(expr),
            }
        }
    }

    /// `(a, name: b, ref c)`; returns the arguments and the `)` span.
    fn parse_invocation_args(&mut self) -> Result<(Vec<Expr>, Span), ParseError> {
        self.expect(TokenKind::LParen, "`(`")?;
        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            if matches!(self.cursor.current_kind(), TokenKind::Ident(_))
                && self.cursor.peek_kind_at(1) == TokenKind::Colon
            {
                self.cursor.advance();
                self.cursor.advance();
            }
            if matches!(
                self.cursor.current_kind().keyword(),
                Some(Keyword::Ref | Keyword::Out | Keyword::In)
            ) {
                self.cursor.advance();
            }
            args.push(self.parse_expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RParen, "`)`")?;
        Ok((args, close))
    }

    fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        let token = self.cursor.current();
        let literal = match token.kind {
            TokenKind::String(value) => Some(Literal::String(value)),
            TokenKind::InterpolatedString => Some(Literal::InterpolatedString),
            TokenKind::Char(c) => Some(Literal::Char(c)),
            TokenKind::Number(text) => Some(Literal::Number(text)),
            TokenKind::Keyword(Keyword::True) => Some(Literal::True),
            TokenKind::Keyword(Keyword::False) => Some(Literal::False),
            TokenKind::Keyword(Keyword::Null) => Some(Literal::Null),
            _ => None,
        };
        if let Some(literal) = literal {
            self.cursor.advance();
            return Ok(Expr::new(ExprKind::Literal(literal), token.span));
        }

        match token.kind {
            TokenKind::Ident(_) => {
                let name = self.parse_unqualified_name(GenericMode::Expression)?;
                let span = name.span;
                Ok(Expr::new(ExprKind::Name(name), span))
            }
            TokenKind::Keyword(Keyword::Typeof) => {
                self.cursor.advance();
                self.expect(TokenKind::LParen, "`(`")?;
                let ty = self.parse_type()?;
                let close = self.expect(TokenKind::RParen, "`)`")?;
                Ok(Expr::new(
                    ExprKind::Typeof(Box::new(ty)),
                    token.span.merge(close),
                ))
            }
            TokenKind::Keyword(Keyword::Default) => {
                self.cursor.advance();
                if self.cursor.eat(TokenKind::LParen) {
                    let ty = self.parse_type()?;
                    let close = self.expect(TokenKind::RParen, "`)`")?;
                    Ok(Expr::new(
                        ExprKind::Default(Some(Box::new(ty))),
                        token.span.merge(close),
                    ))
                } else {
                    Ok(Expr::new(ExprKind::Default(None), token.span))
                }
            }
            TokenKind::Keyword(Keyword::New) => self.parse_new(),
            TokenKind::Keyword(kw) => match kw.predefined_type() {
                Some(predefined) => {
                    self.cursor.advance();
                    Ok(Expr::new(ExprKind::Predefined(predefined), token.span))
                }
                None => Err(ParseError::expected(
                    ErrorCode::ExpectedExpression,
                    "expression",
                    token,
                )),
            },
            TokenKind::LParen => self.parse_parenthesized(),
            TokenKind::LBracket => {
                let (elements, close) =
                    self.parse_element_list(TokenKind::LBracket, TokenKind::RBracket, "`]`")?;
                Ok(Expr::new(
                    ExprKind::ArrayCreation { ty: None, elements },
                    token.span.merge(close),
                ))
            }
            _ => Err(ParseError::expected(
                ErrorCode::ExpectedExpression,
                "expression",
                token,
            )),
        }
    }

    /// `(expr)`, or a cast `(T)operand`.
    ///
    /// Casts and tuple literals are never constant strings, so both parse
    /// to `ExprKind::Error` spanning the whole construct.
    fn parse_parenthesized(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.position();
        let open = self.cursor.current_span();
        self.cursor.advance();
        let inner = self.parse_expr()?;
        if self.cursor.check(TokenKind::Comma) {
            self.cursor.set_position(start);
            let span = recovery::skip_balanced(&mut self.cursor)?;
            return Ok(Expr::new(ExprKind::Error, span));
        }
        let close = self.expect(TokenKind::RParen, "`)`")?;
        let is_type_like = matches!(
            inner.kind,
            ExprKind::Name(_) | ExprKind::Predefined(_) | ExprKind::MemberAccess { .. }
        );
        if is_type_like && starts_cast_operand(self.cursor.current_kind()) {
            let operand = self.parse_unary()?;
            return Ok(Expr::new(ExprKind::Error, open.merge(operand.span)));
        }
        Ok(Expr::new(
            ExprKind::Parenthesized(Box::new(inner)),
            open.merge(close),
        ))
    }

    /// `new T[] { ... }`, `new[] { ... }`, `new T[n]`, or object creation.
    fn parse_new(&mut self) -> Result<Expr, ParseError> {
        let start = self.cursor.advance().span;
        let ty = if self.cursor.check(TokenKind::LBracket) {
            self.cursor.advance();
            self.expect(TokenKind::RBracket, "`]`")?;
            None
        } else {
            Some(self.parse_type()?)
        };
        let mut end = self.cursor.previous_span();

        match self.cursor.current_kind() {
            // object creation: `new T(...) { ... }`
            TokenKind::LParen if ty.is_some() => {
                end = recovery::skip_balanced(&mut self.cursor)?;
                if self.cursor.check(TokenKind::LBrace) {
                    end = recovery::skip_balanced(&mut self.cursor)?;
                }
                return Ok(Expr::new(ExprKind::Error, start.merge(end)));
            }
            // sized array: `new T[n]`
            TokenKind::LBracket => {
                end = recovery::skip_balanced(&mut self.cursor)?;
            }
            _ => {}
        }

        let elements = if self.cursor.check(TokenKind::LBrace) {
            let (elements, close) =
                self.parse_element_list(TokenKind::LBrace, TokenKind::RBrace, "`}`")?;
            end = close;
            elements
        } else {
            Vec::new()
        };
        Ok(Expr::new(
            ExprKind::ArrayCreation {
                ty: ty.map(Box::new),
                elements,
            },
            start.merge(end),
        ))
    }

    /// Comma-separated expressions between `open` and `close`, trailing
    /// comma allowed.
    fn parse_element_list(
        &mut self,
        open: TokenKind,
        close: TokenKind,
        close_text: &str,
    ) -> Result<(Vec<Expr>, Span), ParseError> {
        self.expect(open, open.display_name())?;
        let mut elements = Vec::new();
        while !self.cursor.check(close) {
            elements.push(self.parse_expr()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let end = self.expect(close, close_text)?;
        Ok((elements, end))
    }
}
