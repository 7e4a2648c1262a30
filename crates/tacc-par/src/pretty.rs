//! AST pretty-printer.
//!
//! Reconstructs valid source text from a [`Program`]. Every expression is
//! fully parenthesized regardless of precedence, so the printed source
//! round-trips through lexing and re-parsing back to a tree with the same
//! shape it started from — that's the only property this module needs to
//! guarantee, not minimal or idiomatic-looking output.

use crate::ast::{BinaryOperator, Constant, Declaration, Expression, Program, Statement, UnaryOperator};

pub fn pretty_print(program: &Program) -> String {
    let mut out = String::new();
    out.push_str("procedure main is\n");
    for decl in &program.declarations {
        print_decl(decl, &mut out);
    }
    out.push_str("begin\n");
    for stmt in &program.statements {
        print_stmt(stmt, &mut out);
    }
    out.push_str("end\n");
    out
}

fn print_decl(decl: &Declaration, out: &mut String) {
    out.push_str("var ");
    out.push_str(&decl.name);
    if let Some(value) = &decl.initial_value {
        out.push_str(" = ");
        print_expr(value, out);
    }
    out.push_str(";\n");
}

fn print_stmt(stmt: &Statement, out: &mut String) {
    match stmt {
        Statement::Declaration(decl) => print_decl(decl, out),
        Statement::Assignment { target, value, .. } => {
            out.push_str(target);
            out.push_str(" = ");
            print_expr(value, out);
            out.push_str(";\n");
        }
        Statement::Print { value, .. } => {
            out.push_str("print(");
            print_expr(value, out);
            out.push_str(");\n");
        }
        Statement::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => {
            out.push_str("if ");
            print_expr(condition, out);
            out.push_str(" then\n");
            for s in then_branch {
                print_stmt(s, out);
            }
            if let Some(else_branch) = else_branch {
                out.push_str("else\n");
                for s in else_branch {
                    print_stmt(s, out);
                }
            }
            out.push_str("end\n");
        }
        Statement::While { condition, body, .. } => {
            out.push_str("while ");
            print_expr(condition, out);
            out.push_str(" do\n");
            for s in body {
                print_stmt(s, out);
            }
            out.push_str("end\n");
        }
    }
}

fn print_expr(expr: &Expression, out: &mut String) {
    match expr {
        Expression::BinaryOp { op, left, right, .. } => {
            out.push('(');
            print_expr(left, out);
            out.push(' ');
            out.push_str(binop_text(*op));
            out.push(' ');
            print_expr(right, out);
            out.push(')');
        }
        Expression::UnaryOp { op, operand, .. } => {
            out.push('(');
            out.push_str(unop_text(*op));
            out.push(' ');
            print_expr(operand, out);
            out.push(')');
        }
        Expression::Identifier { name, .. } => out.push_str(name),
        Expression::Constant {
            value: Constant::Number(n),
            ..
        } => out.push_str(n),
        Expression::Constant {
            value: Constant::Text(s),
            ..
        } => out.push_str(s),
        Expression::Input { .. } => out.push_str("in()"),
    }
}

fn binop_text(op: BinaryOperator) -> &'static str {
    match op {
        BinaryOperator::Add => "+",
        BinaryOperator::Sub => "-",
        BinaryOperator::Mul => "*",
        BinaryOperator::Div => "/",
        BinaryOperator::Eq => "==",
        BinaryOperator::NotEq => "!=",
        BinaryOperator::Lt => "<",
        BinaryOperator::LtEq => "<=",
        BinaryOperator::Gt => ">",
        BinaryOperator::GtEq => ">=",
        BinaryOperator::And => "and",
        BinaryOperator::Or => "or",
    }
}

fn unop_text(op: UnaryOperator) -> &'static str {
    match op {
        UnaryOperator::Not => "not",
    }
}
