//! Edge case tests for tacc-vm: full source-to-output runs through the
//! real pipeline (lex, parse, generate, optimize, execute), not synthetic
//! hand-built IR.

use std::io::Cursor;

use tacc_ir::{generate, optimize};
use tacc_par::parse;

use crate::run_with_io;

fn run_source(source: &str, stdin: &str) -> String {
    let tokens = tacc_lex::lex(source).unwrap();
    let ast = parse(&tokens).unwrap();
    let module = optimize(&generate(&ast).unwrap());
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();
    run_with_io(&module, &mut input, &mut output).unwrap();
    String::from_utf8(output).unwrap()
}

#[test]
fn prints_constant_folding_result() {
    // constant folding: x+3 folds after constant propagation
    let out = run_source("procedure main is var x = 2; begin print(x+3); end", "");
    assert_eq!(out, "5\n");
}

#[test]
fn reads_input_and_doubles_it() {
    let out = run_source("procedure main is var x = 0; begin x = in(); print(x * 2); end", "21\n");
    assert_eq!(out, "42\n");
}

#[test]
fn while_loop_counts_to_three() {
    let out = run_source(
        r#"procedure main is var i = 0; begin
            while i < 3 do
                print(i);
                i = i + 1;
            end
        end"#,
        "",
    );
    assert_eq!(out, "0\n1\n2\n");
}

#[test]
fn if_else_picks_the_live_branch() {
    let out = run_source(
        r#"procedure main is var x = 0; begin
            x = in();
            if x < 10 then print("small"); else print("big"); end
        end"#,
        "3\n",
    );
    assert_eq!(out, "small\n");
}

#[test]
fn string_equality_compares_literal_text() {
    let out = run_source(
        r#"procedure main is begin
            if "a" == "a" then print("yes"); else print("no"); end
        end"#,
        "",
    );
    assert_eq!(out, "yes\n");
}

#[test]
fn string_addition_is_fatal_at_runtime() {
    let tokens = tacc_lex::lex(r#"procedure main is var s = "a"; begin print(s + s); end"#).unwrap();
    let ast = parse(&tokens).unwrap();
    let module = optimize(&generate(&ast).unwrap());
    let mut input = Cursor::new(Vec::new());
    let mut output = Vec::new();
    let err = run_with_io(&module, &mut input, &mut output).unwrap_err();
    assert!(matches!(err.error, tacc_util::CompileError::InvalidStringOperation { .. }));
}

#[test]
fn integer_division_by_zero_is_fatal() {
    let out = run_source_err("procedure main is var x = 0; begin x = in(); print(1 / x); end", "0\n");
    assert!(matches!(out, tacc_util::CompileError::DivisionByZero));
}

#[test]
fn mixed_int_float_arithmetic_promotes_to_float() {
    let out = run_source(
        r#"procedure main is var x = 1; var y = 0.5; begin print(x + y); end"#,
        "",
    );
    assert_eq!(out, "1.5\n");
}

#[test]
fn strength_reduced_multiply_still_computes_the_right_value() {
    // strength reduction: `x * 4` becomes SHIFT_LEFT once x is unknown
    // at compile time; the VM must still produce the arithmetically
    // correct result, not just the expected opcode.
    let out = run_source("procedure main is var x = 0; begin x = in(); print(x * 4); end", "5\n");
    assert_eq!(out, "20\n");
}

fn run_source_err(source: &str, stdin: &str) -> tacc_util::CompileError {
    let tokens = tacc_lex::lex(source).unwrap();
    let ast = parse(&tokens).unwrap();
    let module = optimize(&generate(&ast).unwrap());
    let mut input = Cursor::new(stdin.as_bytes().to_vec());
    let mut output = Vec::new();
    run_with_io(&module, &mut input, &mut output).unwrap_err().error
}
