//! Statement parsing: declarations, assignment, `print`, `if`, `while`.

use tacc_lex::TokenKind;
use tacc_util::CompileError;

use crate::ast::Statement;
use crate::Parser;

impl<'a> Parser<'a> {
    /// Parses statements until `end` or `else` is seen (not consumed), or
    /// until input is exhausted — which is itself an error, since every
    /// block in this grammar is explicitly closed.
    pub(crate) fn parse_stmt_seq(&mut self) -> Result<Vec<Statement>, CompileError> {
        let mut stmts = Vec::new();
        loop {
            match self.peek() {
                Some(t) if t.kind == TokenKind::Keyword && (t.text == "end" || t.text == "else") => {
                    break;
                }
                Some(_) => stmts.push(self.parse_stmt()?),
                None => return Err(Self::eof("end")),
            }
        }
        Ok(stmts)
    }

    fn parse_stmt(&mut self) -> Result<Statement, CompileError> {
        match self.peek() {
            Some(t) if t.kind == TokenKind::Keyword && t.text == "var" => {
                Ok(Statement::Declaration(self.parse_decl()?))
            }
            Some(t) if t.kind == TokenKind::Keyword && t.text == "print" => self.parse_print_stmt(),
            Some(t) if t.kind == TokenKind::Keyword && t.text == "if" => self.parse_if_stmt(),
            Some(t) if t.kind == TokenKind::Keyword && t.text == "while" => self.parse_while_stmt(),
            Some(t) if t.kind == TokenKind::Identifier => self.parse_assign(),
            Some(t) => Err(Self::unexpected(t)),
            None => Err(Self::eof("statement")),
        }
    }

    fn parse_print_stmt(&mut self) -> Result<Statement, CompileError> {
        let span = self.expect_keyword("print")?;
        self.expect_lpar()?;
        let value = self.parse_expr()?;
        self.expect_rpar()?;
        self.expect_separator(";")?;
        Ok(Statement::Print { value, span })
    }

    fn parse_if_stmt(&mut self) -> Result<Statement, CompileError> {
        let span = self.expect_keyword("if")?;
        let condition = self.parse_cond()?;
        self.expect_keyword("then")?;
        let then_branch = self.parse_stmt_seq()?;
        let else_branch = if self.at_keyword("else") {
            self.advance();
            Some(self.parse_stmt_seq()?)
        } else {
            None
        };
        self.expect_keyword("end")?;
        Ok(Statement::If {
            condition,
            then_branch,
            else_branch,
            span,
        })
    }

    fn parse_while_stmt(&mut self) -> Result<Statement, CompileError> {
        let span = self.expect_keyword("while")?;
        let condition = self.parse_cond()?;
        self.expect_keyword("do")?;
        let body = self.parse_stmt_seq()?;
        self.expect_keyword("end")?;
        Ok(Statement::While {
            condition,
            body,
            span,
        })
    }

    fn parse_assign(&mut self) -> Result<Statement, CompileError> {
        let (target, span) = self.expect_identifier()?;
        self.expect_operator("=")?;
        let value = self.parse_expr()?;
        self.expect_separator(";")?;
        Ok(Statement::Assignment {
            target,
            value,
            span,
        })
    }
}
