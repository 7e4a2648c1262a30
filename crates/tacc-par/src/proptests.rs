//! Property: parse totality. A [`Program`] built directly (not parsed)
//! survives a pretty-print → lex → parse round trip with the same shape —
//! same declarations, same statements, same expression trees (spans
//! excluded, since they're positions in the printed text, not the
//! original).

use proptest::prelude::*;

use crate::ast::*;
use crate::{parse, pretty_print};

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

fn leaf_expr() -> impl Strategy<Value = Expression> {
    prop_oneof![
        ident().prop_map(|name| Expression::Identifier {
            name,
            span: tacc_util::Span::DUMMY
        }),
        (0u32..1000).prop_map(|n| Expression::Constant {
            value: Constant::Number(n.to_string()),
            span: tacc_util::Span::DUMMY
        }),
        Just(Expression::Input {
            span: tacc_util::Span::DUMMY
        }),
    ]
}

fn arith_expr() -> impl Strategy<Value = Expression> {
    let leaf = leaf_expr();
    leaf.prop_recursive(3, 16, 4, |inner| {
        prop_oneof![
            (inner.clone(), inner.clone(), prop_oneof![
                Just(BinaryOperator::Add),
                Just(BinaryOperator::Sub),
                Just(BinaryOperator::Mul),
                Just(BinaryOperator::Div),
            ])
                .prop_map(|(left, right, op)| Expression::BinaryOp {
                    op,
                    left: Box::new(left),
                    right: Box::new(right),
                    span: tacc_util::Span::DUMMY,
                }),
        ]
    })
}

fn cond_expr() -> impl Strategy<Value = Expression> {
    (arith_expr(), arith_expr(), prop_oneof![
        Just(BinaryOperator::Eq),
        Just(BinaryOperator::Lt),
        Just(BinaryOperator::GtEq),
    ])
        .prop_map(|(left, right, op)| Expression::BinaryOp {
            op,
            left: Box::new(left),
            right: Box::new(right),
            span: tacc_util::Span::DUMMY,
        })
}

fn decl() -> impl Strategy<Value = Declaration> {
    (ident(), proptest::option::of(arith_expr())).prop_map(|(name, initial_value)| Declaration {
        name,
        initial_value,
        span: tacc_util::Span::DUMMY,
    })
}

fn statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (ident(), arith_expr()).prop_map(|(target, value)| Statement::Assignment {
            target,
            value,
            span: tacc_util::Span::DUMMY
        }),
        arith_expr().prop_map(|value| Statement::Print {
            value,
            span: tacc_util::Span::DUMMY
        }),
        decl().prop_map(Statement::Declaration),
        (cond_expr(), ident(), arith_expr()).prop_map(|(condition, target, value)| {
            Statement::If {
                condition,
                then_branch: vec![Statement::Assignment {
                    target,
                    value,
                    span: tacc_util::Span::DUMMY,
                }],
                else_branch: None,
                span: tacc_util::Span::DUMMY,
            }
        }),
    ]
}

fn program() -> impl Strategy<Value = Program> {
    (
        proptest::collection::vec(decl(), 0..4),
        proptest::collection::vec(statement(), 0..4),
    )
        .prop_map(|(declarations, statements)| Program {
            declarations,
            statements,
        })
}

fn strip_expr(e: &Expression) -> Expression {
    match e {
        Expression::BinaryOp { op, left, right, .. } => Expression::BinaryOp {
            op: *op,
            left: Box::new(strip_expr(left)),
            right: Box::new(strip_expr(right)),
            span: tacc_util::Span::DUMMY,
        },
        Expression::UnaryOp { op, operand, .. } => Expression::UnaryOp {
            op: *op,
            operand: Box::new(strip_expr(operand)),
            span: tacc_util::Span::DUMMY,
        },
        Expression::Identifier { name, .. } => Expression::Identifier {
            name: name.clone(),
            span: tacc_util::Span::DUMMY,
        },
        Expression::Constant { value, .. } => Expression::Constant {
            value: value.clone(),
            span: tacc_util::Span::DUMMY,
        },
        Expression::Input { .. } => Expression::Input {
            span: tacc_util::Span::DUMMY,
        },
    }
}

fn strip_decl(d: &Declaration) -> Declaration {
    Declaration {
        name: d.name.clone(),
        initial_value: d.initial_value.as_ref().map(strip_expr),
        span: tacc_util::Span::DUMMY,
    }
}

fn strip_stmt(s: &Statement) -> Statement {
    match s {
        Statement::Declaration(d) => Statement::Declaration(strip_decl(d)),
        Statement::Assignment { target, value, .. } => Statement::Assignment {
            target: target.clone(),
            value: strip_expr(value),
            span: tacc_util::Span::DUMMY,
        },
        Statement::Print { value, .. } => Statement::Print {
            value: strip_expr(value),
            span: tacc_util::Span::DUMMY,
        },
        Statement::If {
            condition,
            then_branch,
            else_branch,
            ..
        } => Statement::If {
            condition: strip_expr(condition),
            then_branch: then_branch.iter().map(strip_stmt).collect(),
            else_branch: else_branch
                .as_ref()
                .map(|b| b.iter().map(strip_stmt).collect()),
            span: tacc_util::Span::DUMMY,
        },
        Statement::While { condition, body, .. } => Statement::While {
            condition: strip_expr(condition),
            body: body.iter().map(strip_stmt).collect(),
            span: tacc_util::Span::DUMMY,
        },
    }
}

fn strip_program(p: &Program) -> Program {
    Program {
        declarations: p.declarations.iter().map(strip_decl).collect(),
        statements: p.statements.iter().map(strip_stmt).collect(),
    }
}

proptest! {
    #[test]
    fn parse_totality(program in program()) {
        let printed = pretty_print(&program);
        let tokens = tacc_lex::lex(&printed).unwrap();
        let reparsed = parse(&tokens).unwrap();
        prop_assert_eq!(strip_program(&program), strip_program(&reparsed));
    }
}
