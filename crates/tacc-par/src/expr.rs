//! Expression parsing: the logical/comparison/arithmetic precedence chain.
//!
//! `cond > cmpr > expr > term > factor`, lowest precedence first. There is
//! no comparison chaining — `cmpr` consumes at most one comparison
//! operator — and `not` is the only prefix operator, binding tighter than
//! `and`/`or` but looser than everything below `cmpr`.

use tacc_lex::TokenKind;
use tacc_util::CompileError;

use crate::ast::{BinaryOperator, Constant, Expression, UnaryOperator};
use crate::Parser;

impl<'a> Parser<'a> {
    pub(crate) fn parse_cond(&mut self) -> Result<Expression, CompileError> {
        if self.at_operator("not") {
            let span = self.expect_operator("not")?;
            let operand = self.parse_cond()?;
            return Ok(Expression::UnaryOp {
                op: UnaryOperator::Not,
                operand: Box::new(operand),
                span,
            });
        }

        let mut left = self.parse_cmpr()?;
        loop {
            let op = if self.at_operator("and") {
                BinaryOperator::And
            } else if self.at_operator("or") {
                BinaryOperator::Or
            } else {
                break;
            };
            let span = self.peek().unwrap().span;
            self.advance();
            let right = self.parse_cmpr()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    pub(crate) fn parse_cmpr(&mut self) -> Result<Expression, CompileError> {
        let left = self.parse_expr()?;

        let op = if self.at_operator("==") {
            BinaryOperator::Eq
        } else if self.at_operator("!=") {
            BinaryOperator::NotEq
        } else if self.at_operator("<=") {
            BinaryOperator::LtEq
        } else if self.at_operator(">=") {
            BinaryOperator::GtEq
        } else if self.at_operator("<") {
            BinaryOperator::Lt
        } else if self.at_operator(">") {
            BinaryOperator::Gt
        } else {
            return Ok(left);
        };

        let span = self.peek().unwrap().span;
        self.advance();
        let right = self.parse_expr()?;
        Ok(Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span,
        })
    }

    pub(crate) fn parse_expr(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_term()?;
        loop {
            let op = if self.at_operator("+") {
                BinaryOperator::Add
            } else if self.at_operator("-") {
                BinaryOperator::Sub
            } else {
                break;
            };
            let span = self.peek().unwrap().span;
            self.advance();
            let right = self.parse_term()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_term(&mut self) -> Result<Expression, CompileError> {
        let mut left = self.parse_factor()?;
        loop {
            let op = if self.at_operator("*") {
                BinaryOperator::Mul
            } else if self.at_operator("/") {
                BinaryOperator::Div
            } else {
                break;
            };
            let span = self.peek().unwrap().span;
            self.advance();
            let right = self.parse_factor()?;
            left = Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span,
            };
        }
        Ok(left)
    }

    fn parse_factor(&mut self) -> Result<Expression, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::LPar => {
                self.expect_lpar()?;
                let inner = self.parse_expr()?;
                self.expect_rpar()?;
                Ok(inner)
            }
            Some(t) if t.kind == TokenKind::Keyword && t.text == "in" => {
                let span = t.span;
                self.advance();
                self.expect_lpar()?;
                self.expect_rpar()?;
                Ok(Expression::Input { span })
            }
            Some(t) if t.kind == TokenKind::Number => {
                let span = t.span;
                let value = Constant::Number(t.text.clone());
                self.advance();
                Ok(Expression::Constant { value, span })
            }
            Some(t) if t.kind == TokenKind::String => {
                let span = t.span;
                let value = Constant::Text(t.text.clone());
                self.advance();
                Ok(Expression::Constant { value, span })
            }
            Some(t) if t.kind == TokenKind::Identifier => {
                let name = t.text.clone();
                let span = t.span;
                self.advance();
                Ok(Expression::Identifier { name, span })
            }
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof("expression")),
        }
    }
}
