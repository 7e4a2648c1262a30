//! Edge case tests for tacc-lex.

#[cfg(test)]
mod tests {
    use crate::{lex, Token, TokenKind};
    use tacc_util::CompileError;

    fn lex_all(source: &str) -> Vec<Token> {
        lex(source).unwrap()
    }

    fn lex_err(source: &str) -> CompileError {
        lex(source).unwrap_err().error
    }

    #[test]
    fn empty_source() {
        assert!(lex_all("").is_empty());
    }

    #[test]
    fn single_char_identifier() {
        let t = lex_all("x");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[0].text, "x");
    }

    #[test]
    fn long_identifier() {
        let name = "a".repeat(5000);
        let t = lex_all(&format!("var {name} = 1;"));
        assert!(t.iter().any(|tok| tok.text == name));
    }

    #[test]
    fn all_keywords_recognized() {
        let source = "if then else while do end procedure var begin print main is in";
        let t = lex_all(source);
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Keyword));
        assert_eq!(t.len(), 13);
    }

    #[test]
    fn word_operators_are_operators_not_keywords() {
        let t = lex_all("and or not");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Operator));
    }

    #[test]
    fn keyword_prefix_is_still_identifier() {
        let t = lex_all("ifx endings");
        assert_eq!(t[0].kind, TokenKind::Identifier);
        assert_eq!(t[1].kind, TokenKind::Identifier);
    }

    #[test]
    fn all_symbol_operators() {
        let t = lex_all("= + - * / % == != <= >= < >");
        assert!(t.iter().all(|tok| tok.kind == TokenKind::Operator));
        assert_eq!(t.len(), 12);
    }

    #[test]
    fn separators_and_parens() {
        let t = lex_all("( ) , ;");
        assert_eq!(t[0].kind, TokenKind::LPar);
        assert_eq!(t[1].kind, TokenKind::RPar);
        assert_eq!(t[2].kind, TokenKind::Separator);
        assert_eq!(t[3].kind, TokenKind::Separator);
    }

    #[test]
    fn nested_parens() {
        let t = lex_all("((()))");
        assert_eq!(t.iter().filter(|tok| tok.kind == TokenKind::LPar).count(), 3);
        assert_eq!(t.iter().filter(|tok| tok.kind == TokenKind::RPar).count(), 3);
    }

    #[test]
    fn number_with_decimal_point() {
        let t = lex_all("3.14 42");
        assert_eq!(t[0].text, "3.14");
        assert_eq!(t[1].text, "42");
    }

    #[test]
    fn number_with_two_dots_stops_at_first() {
        // "1.2.3" lexes as NUMBER("1.2") then "." (unrecognized) then NUMBER("3");
        // the unrecognized '.' surfaces as a fatal error before the second
        // number is ever reached.
        let err = lex_err("1.2.3");
        assert!(matches!(err, CompileError::UnrecognizedCharacter { ch: '.', .. }));
    }

    #[test]
    fn digit_followed_by_letter_is_fatal() {
        let err = lex_err("9abc");
        assert!(matches!(err, CompileError::IdentifierBeginsWithDigit(_)));
    }

    #[test]
    fn string_literal_keeps_quotes() {
        let t = lex_all("\"hi there\"");
        assert_eq!(t[0].kind, TokenKind::String);
        assert_eq!(t[0].text, "\"hi there\"");
    }

    #[test]
    fn unterminated_string_is_fatal() {
        let err = lex_err("\"oops");
        assert!(matches!(err, CompileError::UnterminatedString(_)));
    }

    #[test]
    fn unrecognized_character_is_fatal() {
        let err = lex_err("@");
        assert!(matches!(err, CompileError::UnrecognizedCharacter { ch: '@', .. }));
    }

    #[test]
    fn line_tracking_across_newlines() {
        let t = lex_all("var x;\nvar y;");
        let y = t.iter().find(|tok| tok.text == "y").unwrap();
        assert_eq!(y.line(), 2);
    }

    #[test]
    fn whitespace_variations_are_all_skipped() {
        let t = lex_all("var\tx\n=\n1 ;");
        assert_eq!(t[0].text, "var");
        assert_eq!(t[1].text, "x");
        assert_eq!(t[2].text, "=");
        assert_eq!(t[3].text, "1");
        assert_eq!(t[4].text, ";");
    }

    #[test]
    fn percent_is_lexed_even_though_unreachable_in_grammar() {
        let t = lex_all("%");
        assert_eq!(t[0].kind, TokenKind::Operator);
        assert_eq!(t[0].text, "%");
    }
}
