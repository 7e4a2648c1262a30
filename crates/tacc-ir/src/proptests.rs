//! Property: generator determinism — re-running the
//! generator on the same AST yields byte-identical IR text. Temp and
//! label counters are private state of a fresh `Generator` per call, so
//! this only fails if that state leaks or a map iterates non-
//! deterministically.

use proptest::prelude::*;

use tacc_par::{BinaryOperator, Constant, Declaration, Expression, Program, Statement};
use tacc_util::Span;

use crate::generate;

fn ident() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9]{0,5}"
}

fn leaf_expr() -> impl Strategy<Value = Expression> {
    // Constants only: an `Identifier` leaf would need to name a
    // declaration that lexically precedes it, which this generator
    // doesn't bother threading through — every generated program must be
    // well-formed, or `generate` itself returns an error instead of IR
    // text to compare.
    (0u32..100).prop_map(|n| Expression::Constant {
        value: Constant::Number(n.to_string()),
        span: Span::DUMMY,
    })
}

fn arith_expr() -> impl Strategy<Value = Expression> {
    leaf_expr().prop_recursive(3, 12, 3, |inner| {
        (inner.clone(), inner, prop_oneof![
            Just(BinaryOperator::Add),
            Just(BinaryOperator::Mul),
        ])
            .prop_map(|(left, right, op)| Expression::BinaryOp {
                op,
                left: Box::new(left),
                right: Box::new(right),
                span: Span::DUMMY,
            })
    })
}

fn decl() -> impl Strategy<Value = Declaration> {
    (ident(), proptest::option::of(arith_expr())).prop_map(|(name, initial_value)| Declaration {
        name,
        initial_value,
        span: Span::DUMMY,
    })
}

fn statement() -> impl Strategy<Value = Statement> {
    prop_oneof![
        (ident(), arith_expr()).prop_map(|(target, value)| Statement::Assignment {
            target,
            value,
            span: Span::DUMMY,
        }),
        arith_expr().prop_map(|value| Statement::Print { value, span: Span::DUMMY }),
    ]
}

fn program() -> impl Strategy<Value = Program> {
    (
        proptest::collection::vec(decl(), 1..4),
        proptest::collection::vec(statement(), 0..4),
    )
        .prop_map(|(declarations, statements)| {
            // Every assignment target must have been declared first, or
            // generation fails; reuse the first declaration's name so
            // assignments are always well-formed.
            let fallback = declarations[0].name.clone();
            let statements = statements
                .into_iter()
                .map(|s| match s {
                    Statement::Assignment { value, .. } => Statement::Assignment {
                        target: fallback.clone(),
                        value,
                        span: Span::DUMMY,
                    },
                    other => other,
                })
                .collect();
            Program { declarations, statements }
        })
}

proptest! {
    #[test]
    fn generator_determinism(program in program()) {
        let first = generate(&program).unwrap().to_text();
        let second = generate(&program).unwrap().to_text();
        prop_assert_eq!(first, second);
    }
}
