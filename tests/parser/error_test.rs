//! 構文エラーのテスト

use super::*;
use phpexpr::driver::parse_expression_with_config;
use phpexpr::error::LexerError;
use phpexpr::lexer::tokenize;
use phpexpr::parser::{Parser, ParserConfig};
use pretty_assertions::assert_eq;
use test_case::test_case;

fn shallow() -> ParserConfig {
    ParserConfig::default().with_max_depth(16)
}

#[test]
fn test_operator_where_operand_expected() {
    assert_eq!(
        parse_error("+ * 5"),
        ParserError::ExpectedExpression {
            found: "Star('*')".to_string(),
            span: Span::new(2, 3),
        }
    );
}

#[test]
fn test_missing_closing_paren() {
    assert_eq!(
        parse_error("(1 + 2"),
        ParserError::UnexpectedToken {
            expected: "')'".to_string(),
            found: "end of input".to_string(),
            span: Span::new(6, 6),
        }
    );
}

#[test]
fn test_ternary_without_colon() {
    match parse_error("$a ? $b") {
        ParserError::UnexpectedToken { expected, found, .. } => {
            assert_eq!(expected, "':'");
            assert_eq!(found, "end of input");
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

#[test]
fn test_trailing_tokens_are_rejected() {
    match parse_error("1 2") {
        ParserError::UnexpectedToken { expected, found, span } => {
            assert_eq!(expected, "end of input");
            assert_eq!(found, "NumberLiteral('2')");
            assert_eq!(span, Span::new(2, 3));
        }
        other => panic!("Expected UnexpectedToken, got {:?}", other),
    }
}

#[test_case("" ; "empty input")]
#[test_case(")" ; "stray paren")]
#[test_case("$a +" ; "dangling operator")]
#[test_case("foo(1,,2)" ; "empty argument")]
#[test_case("=> 1" ; "double arrow")]
fn test_expected_expression(source: &str) {
    assert!(matches!(
        parse_error(source),
        ParserError::ExpectedExpression { .. }
    ));
}

#[test_case("self" ; "self without scope")]
#[test_case("$a->" ; "missing member")]
#[test_case("$" ; "missing variable name")]
#[test_case("new 1" ; "bad class reference")]
#[test_case("function () { return 1;" ; "unterminated closure body")]
#[test_case("function ($a" ; "unterminated parameter list")]
#[test_case("[1, 2" ; "unterminated short array")]
#[test_case("$a[1" ; "unterminated index")]
fn test_unexpected_token(source: &str) {
    assert!(matches!(
        parse_error(source),
        ParserError::UnexpectedToken { .. }
    ));
}

#[test]
fn test_deeply_nested_parentheses_hit_the_limit() {
    let source = format!("{}1{}", "(".repeat(20), ")".repeat(20));
    match parse_expression_with_config(&source, shallow()) {
        Err(PhpExprError::Parser(ParserError::TooDeeplyNested { limit, .. })) => {
            assert_eq!(limit, 16)
        }
        other => panic!("Expected TooDeeplyNested, got {:?}", other),
    }
}

#[test]
fn test_deeply_nested_prefix_operators_hit_the_limit() {
    let source = format!("{}1", "- ".repeat(20));
    assert!(matches!(
        parse_expression_with_config(&source, shallow()),
        Err(PhpExprError::Parser(ParserError::TooDeeplyNested { .. }))
    ));
}

#[test_case(format!("{}a", "$".repeat(40)) ; "variable variables")]
#[test_case(format!("new {}a", "$".repeat(40)) ; "variable variables after new")]
#[test_case(format!("$o->{}a", "$".repeat(40)) ; "variable variables as member")]
#[test_case(format!("1{}", "+1".repeat(40)) ; "left associative chain")]
#[test_case(format!("$a{}", "[0]".repeat(40)) ; "postfix chain")]
#[test_case(format!("new $a{}", "->b".repeat(40)) ; "class reference chain")]
fn test_flat_input_still_counts_towards_the_limit(source: String) {
    assert!(matches!(
        parse_expression_with_config(&source, shallow()),
        Err(PhpExprError::Parser(ParserError::TooDeeplyNested { .. }))
    ));
}

#[test_case(format!("{}a", "$".repeat(20_000)) ; "variable variables")]
#[test_case(format!("1{}", "+1".repeat(20_000)) ; "sum")]
#[test_case(format!("$a{}", "[0]".repeat(20_000)) ; "index chain")]
#[test_case(format!("$a{}", "->b".repeat(20_000)) ; "member chain")]
fn test_huge_input_is_rejected_with_default_limit(source: String) {
    assert!(matches!(
        parse_expression_str(&source),
        Err(PhpExprError::Parser(ParserError::TooDeeplyNested { limit: 256, .. }))
    ));
}

#[test]
fn test_short_chains_fit_the_default_limit() {
    let source = format!("1{}", "+1".repeat(100));
    assert!(parse_expression_str(&source).is_ok());
    let source = format!("$a{}", "->b".repeat(100));
    assert!(parse_expression_str(&source).is_ok());
}

#[test]
fn test_nesting_below_the_limit_is_accepted() {
    let source = format!("{}1{}", "(".repeat(3), ")".repeat(3));
    assert_eq!(
        parse_expression_with_config(&source, shallow()).ok(),
        Some(num("1"))
    );
}

#[test]
fn test_paren_level_is_restored() {
    let tokens = tokenize("(((1))) + ($a)").expect("tokenize");
    let mut parser = Parser::new(tokens);
    let expr = parser.parse_expression().expect("parse");
    assert_eq!(expr, bin(num("1"), BinaryOp::Add, var("a")));
    assert_eq!(parser.paren_level(), 0);
    assert!(parser.is_at_end());
}

#[test]
fn test_parser_stops_before_terminator() {
    let tokens = tokenize("$a = 1; $b").expect("tokenize");
    let mut parser = Parser::new(tokens);
    assert_eq!(
        parser.parse_expression().expect("parse"),
        assign(var("a"), AssignOp::Assign, num("1"))
    );
    assert!(parser.match_token(phpexpr::lexer::TokenKind::Semicolon));
    assert_eq!(parser.parse_expression().expect("parse"), var("b"));
}

#[test]
fn test_lexer_errors_surface_through_the_parser() {
    match parse_expression_str(r"$a + \ 1") {
        Err(PhpExprError::Lexer(LexerError::UnrecognizedToken { token, span })) => {
            assert_eq!(token, r"\");
            assert_eq!(span.start, 5);
        }
        other => panic!("Expected lexer error, got {:?}", other),
    }
    assert!(matches!(
        parse_expression_str("$a . 'open"),
        Err(PhpExprError::Lexer(LexerError::UnterminatedString { quote: '\'', .. }))
    ));
}

#[test]
fn test_error_messages() {
    assert_eq!(
        ParserError::UnbalancedParens {
            level: 1,
            original: 0,
            span: Span::new(0, 1),
        }
        .to_string(),
        "括弧の対応が取れていません: 深さ0で開始しましたが、深さ1で終了しました"
    );
    assert_eq!(
        parse_error("1 = 2").to_string(),
        "代入できない式です: 1"
    );
    assert_eq!(
        parse_error("(1").to_string(),
        "予期しないトークン: ')'を期待しましたが、end of inputが見つかりました"
    );
}

#[test]
fn test_errors_carry_spans() {
    let error = parse_error("$a + )");
    assert_eq!(error.span(), Span::new(5, 6));
}
