//! Attribute lists.
//!
//! `[target: Name, Name(args)]`. Any identifier or keyword followed by a
//! single `:` is a target specifier, so `[result: Ok, Error]` parses as a
//! list with target `result` holding two attributes.

use resgen_ir::ast::{
    Attribute, AttributeArgument, AttributeArgumentList, AttributeList, AttributeTarget,
};
use resgen_ir::TokenKind;

use super::ty::GenericMode;
use crate::recovery;
use crate::{ParseError, Parser};

impl Parser<'_> {
    /// Zero or more attribute lists.
    ///
    /// A malformed list is reported and skipped as a whole.
    pub(crate) fn parse_attribute_lists(&mut self) -> Vec<AttributeList> {
        let mut lists = Vec::new();
        while self.cursor.check(TokenKind::LBracket) {
            let start = self.cursor.position();
            match self.parse_attribute_list() {
                Ok(list) => lists.push(list),
                Err(err) => {
                    self.error(err.with_context("attribute list"));
                    self.cursor.set_position(start);
                    if let Err(unclosed) = recovery::skip_balanced(&mut self.cursor) {
                        self.error(unclosed);
                    }
                }
            }
        }
        lists
    }

    fn parse_attribute_list(&mut self) -> Result<AttributeList, ParseError> {
        let open = self.expect(TokenKind::LBracket, "`[`")?;
        let target = self.parse_attribute_target();

        let mut attributes = Vec::new();
        while !self.cursor.check(TokenKind::RBracket) {
            attributes.push(self.parse_attribute()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RBracket, "`]`")?;
        Ok(AttributeList {
            target,
            attributes,
            span: open.merge(close),
        })
    }

    /// `assembly:`, `return:`, `result:`, ...
    fn parse_attribute_target(&mut self) -> Option<AttributeTarget> {
        if self.cursor.peek_kind_at(1) != TokenKind::Colon {
            return None;
        }
        let token = self.cursor.current();
        let name = match token.kind {
            TokenKind::Ident(name) => name,
            TokenKind::Keyword(kw) => self.intern(kw.as_str()),
            _ => return None,
        };
        self.cursor.advance();
        self.cursor.advance();
        Some(AttributeTarget {
            name,
            span: token.span,
        })
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let name = self.parse_name(GenericMode::Type)?;
        let args = if self.cursor.check(TokenKind::LParen) {
            Some(self.parse_attribute_arguments()?)
        } else {
            None
        };
        let span = match &args {
            Some(list) => name.span.merge(list.span),
            None => name.span,
        };
        Ok(Attribute { name, args, span })
    }

    fn parse_attribute_arguments(&mut self) -> Result<AttributeArgumentList, ParseError> {
        let open = self.expect(TokenKind::LParen, "`(`")?;
        let mut args = Vec::new();
        while !self.cursor.check(TokenKind::RParen) {
            args.push(self.parse_attribute_argument()?);
            if !self.cursor.eat(TokenKind::Comma) {
                break;
            }
        }
        let close = self.expect(TokenKind::RParen, "`)`")?;
        Ok(AttributeArgumentList {
            args,
            span: open.merge(close),
        })
    }

    /// `expr`, `name: expr` or `Name = expr`.
    fn parse_attribute_argument(&mut self) -> Result<AttributeArgument, ParseError> {
        let start = self.cursor.current_span();
        let mut name_colon = None;
        let mut name_equals = None;
        if matches!(self.cursor.current_kind(), TokenKind::Ident(_)) {
            match self.cursor.peek_kind_at(1) {
                TokenKind::Colon => {
                    name_colon = self.cursor.eat_ident();
                    self.cursor.advance();
                }
                TokenKind::Eq => {
                    name_equals = self.cursor.eat_ident();
                    self.cursor.advance();
                }
                _ => {}
            }
        }
        let expr = self.parse_expr()?;
        Ok(AttributeArgument {
            name_colon,
            name_equals,
            span: start.merge(expr.span),
            expr,
        })
    }
}
