//! Edge case tests for sorrelc-lex

#[cfg(test)]
mod tests {
    use crate::{LexError, Lexer, Token, TokenKind};

    fn lex(source: &str) -> (Vec<Token>, Option<LexError>) {
        Lexer::new(source).tokenize()
    }

    fn lex_ok(source: &str) -> Vec<Token> {
        let (tokens, error) = lex(source);
        assert!(error.is_none(), "{:?} should scan cleanly: {:?}", source, error);
        tokens
    }

    // ==================== EDGE CASES ====================

    #[test]
    fn test_edge_empty_source() {
        assert_eq!(lex(""), (vec![], None));
    }

    #[test]
    fn test_edge_single_char_ident() {
        let tokens = lex_ok("x");
        assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "x")]);
    }

    #[test]
    fn test_edge_long_identifier() {
        let long = "a".repeat(512);
        let tokens = lex_ok(&long);
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].value, long);
        assert_eq!(tokens[0].kind, TokenKind::Identifier);
    }

    #[test]
    fn test_edge_keyword_requires_exact_text() {
        for source in ["lets", "letter", "Let", "LET", "lEt"] {
            let tokens = lex_ok(source);
            assert_eq!(tokens[0].kind, TokenKind::Identifier, "{:?}", source);
        }
    }

    #[test]
    fn test_edge_empty_string_literal() {
        let tokens = lex_ok("\"\"");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "")]);
    }

    #[test]
    fn test_edge_adjacent_strings() {
        let tokens = lex_ok("\"a\"\"b\"");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::String, "a"),
                Token::new(TokenKind::String, "b"),
            ]
        );
    }

    #[test]
    fn test_edge_string_holds_operators_verbatim() {
        let tokens = lex_ok("\"let x = 1; # @\"");
        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::String, "let x = 1; # @")]
        );
    }

    #[test]
    fn test_edge_multiline_string() {
        let tokens = lex_ok("\"one\ntwo\"");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "one\ntwo")]);
    }

    #[test]
    fn test_edge_consecutive_operators() {
        let tokens = lex_ok("++--==;;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Plus,
                TokenKind::Plus,
                TokenKind::Minus,
                TokenKind::Minus,
                TokenKind::Equals,
                TokenKind::Equals,
                TokenKind::Semicolon,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_number_touching_identifier() {
        // Digits end an identifier run, letters end a number run.
        let tokens = lex_ok("x1");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "x"),
                Token::new(TokenKind::Number, "1"),
            ]
        );

        let tokens = lex_ok("1x");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Number, "1"),
                Token::new(TokenKind::Identifier, "x"),
            ]
        );
    }

    #[test]
    fn test_edge_dot_runs() {
        let tokens = lex_ok("...");
        assert_eq!(tokens, vec![Token::new(TokenKind::Number, "...")]);

        let tokens = lex_ok("1..2");
        assert_eq!(tokens, vec![Token::new(TokenKind::Number, "1..2")]);
    }

    #[test]
    fn test_edge_leading_zeros() {
        let tokens = lex_ok("007");
        assert_eq!(tokens, vec![Token::new(TokenKind::Number, "007")]);
    }

    #[test]
    fn test_edge_whitespace_variations() {
        for source in ["a b", "a\tb", "a\r\nb", "a\u{00A0}b", "a \t \n b"] {
            let tokens = lex_ok(source);
            let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
            assert_eq!(values, ["a", "b"], "{:?}", source);
        }
    }

    #[test]
    fn test_edge_unicode_identifiers() {
        let tokens = lex_ok("π ψ_prime 名前");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Identifier, "π"),
                Token::new(TokenKind::Identifier, "ψ_prime"),
                Token::new(TokenKind::Identifier, "名前"),
            ]
        );
    }

    #[test]
    fn test_edge_underscore_inside_identifier() {
        let tokens = lex_ok("say_hello_");
        assert_eq!(tokens, vec![Token::new(TokenKind::Identifier, "say_hello_")]);
    }

    #[test]
    fn test_edge_no_spaces_statement() {
        let tokens = lex_ok("let x=10;");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [
                TokenKind::Let,
                TokenKind::Identifier,
                TokenKind::Equals,
                TokenKind::Number,
                TokenKind::Semicolon,
            ]
        );
    }

    #[test]
    fn test_edge_values_are_verbatim_slices() {
        let source = " let total = 1.5 ; ";
        let tokens = lex_ok(source);
        for token in &tokens {
            assert!(
                source.contains(&token.value),
                "{:?} should appear in the source",
                token.value
            );
        }
    }

    // ==================== ERROR CASES ====================

    #[test]
    fn test_err_unknown_symbols() {
        for (source, bad) in [("#", '#'), ("@", '@'), ("$", '$'), ("%", '%'), ("!", '!')] {
            let (tokens, error) = lex(source);
            assert!(tokens.is_empty(), "{:?}", source);
            assert_eq!(error, Some(LexError::UnknownToken(bad)), "{:?}", source);
        }
    }

    #[test]
    fn test_err_leading_underscore() {
        let (tokens, error) = lex("_private");
        assert!(tokens.is_empty());
        assert_eq!(error, Some(LexError::UnknownToken('_')));
    }

    #[test]
    fn test_err_emoji_is_unknown() {
        let (tokens, error) = lex("🙂");
        assert!(tokens.is_empty());
        assert_eq!(error, Some(LexError::UnknownToken('🙂')));
    }

    #[test]
    fn test_err_unterminated_string() {
        let (tokens, error) = lex("\"never closed");
        assert!(tokens.is_empty());
        assert_eq!(error, Some(LexError::EndOfInput));
    }

    #[test]
    fn test_err_unterminated_string_after_tokens() {
        let (tokens, error) = lex("let s = \"oops");
        let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            [TokenKind::Let, TokenKind::Identifier, TokenKind::Equals]
        );
        assert_eq!(error, Some(LexError::EndOfInput));
    }

    #[test]
    fn test_err_mixed_valid_invalid() {
        let (tokens, error) = lex("a + b @ c");
        let values: Vec<_> = tokens.iter().map(|t| t.value.as_str()).collect();
        assert_eq!(values, ["a", "+", "b"]);
        assert_eq!(error, Some(LexError::UnknownToken('@')));
    }

    #[test]
    fn test_err_unknown_after_string() {
        let (tokens, error) = lex("\"ok\" #");
        assert_eq!(tokens, vec![Token::new(TokenKind::String, "ok")]);
        assert_eq!(error, Some(LexError::UnknownToken('#')));
    }

    #[test]
    fn test_err_reports_first_error_only() {
        let (tokens, error) = lex("# @");
        assert!(tokens.is_empty());
        assert_eq!(error, Some(LexError::UnknownToken('#')));
    }
}
