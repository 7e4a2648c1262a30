//! Edge case tests for tacc-ir: generation and the optimizer pipeline
//! against the source language's real corner cases, not synthetic IR
//! shapes.

#[cfg(test)]
mod tests {
    use tacc_par::parse;

    use crate::{generate, optimize};

    fn ir_for(source: &str) -> String {
        let tokens = tacc_lex::lex(source).unwrap();
        let ast = parse(&tokens).unwrap();
        generate(&ast).unwrap().to_text()
    }

    fn optimized_ir_for(source: &str) -> String {
        let tokens = tacc_lex::lex(source).unwrap();
        let ast = parse(&tokens).unwrap();
        let module = generate(&ast).unwrap();
        optimize(&module).to_text()
    }

    #[test]
    fn empty_program_generates_no_instructions() {
        assert_eq!(ir_for("procedure main is begin end"), "");
    }

    #[test]
    fn declaration_without_initializer_defaults_to_zero() {
        let ir = ir_for("procedure main is var x; begin end");
        assert_eq!(ir, "x = CONST 0");
    }

    #[test]
    fn undeclared_variable_read_is_rejected() {
        let tokens = tacc_lex::lex("procedure main is begin print(x); end").unwrap();
        let ast = parse(&tokens).unwrap();
        let err = generate(&ast).unwrap_err();
        assert!(matches!(err.error, tacc_util::CompileError::UndeclaredVariable(_)));
    }

    #[test]
    fn undeclared_variable_assignment_is_rejected() {
        let tokens = tacc_lex::lex("procedure main is begin x = 1; end").unwrap();
        let ast = parse(&tokens).unwrap();
        let err = generate(&ast).unwrap_err();
        assert!(matches!(err.error, tacc_util::CompileError::UndeclaredVariable(_)));
    }

    #[test]
    fn deeply_nested_expression_generates_without_overflow() {
        let mut expr = String::from("1");
        for _ in 0..200 {
            expr = format!("({expr} + 1)");
        }
        let source = format!("procedure main is var x = {expr}; begin end");
        let ir = ir_for(&source);
        // Constant folding during generation collapses the whole chain to
        // a single literal.
        assert_eq!(ir, "x = CONST 201");
    }

    #[test]
    fn if_with_constant_true_condition_emits_only_then_branch() {
        let ir = ir_for(
            r#"procedure main is begin
                if 1 == 1 then print("yes"); else print("no"); end
            end"#,
        );
        assert!(ir.contains("PRINT \"yes\""));
        assert!(!ir.contains("\"no\""));
    }

    #[test]
    fn while_with_constant_false_condition_emits_nothing() {
        let ir = ir_for("procedure main is begin while 1 == 2 do print(\"never\"); end end");
        assert_eq!(ir, "");
    }

    #[test]
    fn string_constant_keeps_its_quotes() {
        let ir = ir_for(r#"procedure main is begin print("hi"); end"#);
        assert!(ir.contains("CONST \"hi\""));
    }

    #[test]
    fn scenario_constant_folding_after_propagation() {
        // constant folding: x+3 folds after constant propagation
        let ir = optimized_ir_for("procedure main is var x = 2; begin print(x+3); end");
        assert_eq!(ir, "PRINT 5");
    }

    #[test]
    fn scenario_cse_emits_one_shared_binop() {
        // common-subexpression elimination: print((a+b)*(a+b)) shares one `a + b`.
        let ir = optimized_ir_for("procedure main is var a = 1; var b = 2; begin print((a+b)*(a+b)); end");
        let add_count = ir.matches("BINOP + ").count();
        assert_eq!(add_count, 1, "expected exactly one shared a+b, got:\n{ir}");
    }

    #[test]
    fn scenario_strength_reduction_to_shift() {
        // strength reduction: `x * 4` becomes a shift once x is known
        // only at runtime (via `in()`), so it can't fold to a literal.
        let ir = optimized_ir_for("procedure main is var x = 0; begin x = in(); print(x * 4); end");
        assert!(ir.contains("SHIFT_LEFT"), "expected a shift in:\n{ir}");
    }

    #[test]
    fn dead_variable_is_fully_removed() {
        let ir = optimized_ir_for("procedure main is var unused = 5; begin print(1); end");
        assert!(!ir.contains("unused"));
    }

    #[test]
    fn licm_hoists_invariant_computation_out_of_while() {
        let ir = optimized_ir_for(
            r#"procedure main is var i = 0; var x = 2; var y = 3; begin
                while i < 3 do
                    print(x + y);
                    i = i + 1;
                end
            end"#,
        );
        let lines: Vec<&str> = ir.lines().collect();
        let start = lines.iter().position(|l| l.starts_with("LABEL start_label_")).unwrap();
        let hoisted = lines[..start].iter().any(|l| l.contains("BINOP + x y") || l.contains("BINOP + y x"));
        assert!(hoisted, "expected x + y hoisted above the loop header in:\n{ir}");
    }
}
