//! 代入と分割代入のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_simple_assignment() {
    assert_eq!(parse("$a = 1"), assign(var("a"), AssignOp::Assign, num("1")));
}

#[test]
fn test_assignment_is_right_associative() {
    assert_eq!(
        parse("$a = $b = $c"),
        assign(
            var("a"),
            AssignOp::Assign,
            assign(var("b"), AssignOp::Assign, var("c"))
        )
    );
}

#[test_case("$a += 1", AssignOp::Add ; "add")]
#[test_case("$a -= 1", AssignOp::Subtract ; "subtract")]
#[test_case("$a *= 1", AssignOp::Multiply ; "multiply")]
#[test_case("$a /= 1", AssignOp::Divide ; "divide")]
#[test_case("$a .= 1", AssignOp::Concat ; "concat")]
#[test_case("$a %= 1", AssignOp::Modulo ; "modulo")]
#[test_case("$a &= 1", AssignOp::BitAnd ; "bit and")]
#[test_case("$a |= 1", AssignOp::BitOr ; "bit or")]
#[test_case("$a ^= 1", AssignOp::BitXor ; "bit xor")]
#[test_case("$a <<= 1", AssignOp::ShiftLeft ; "shift left")]
#[test_case("$a >>= 1", AssignOp::ShiftRight ; "shift right")]
fn test_compound_assignment(source: &str, op: AssignOp) {
    assert_eq!(parse(source), assign(var("a"), op, num("1")));
}

#[test]
fn test_assignment_targets() {
    assert_eq!(
        parse("$a[] = 1"),
        assign(Expression::array_lookup(var("a"), None), AssignOp::Assign, num("1"))
    );
    assert_eq!(
        parse("$o->p .= 'x'"),
        assign(
            Expression::object_lookup(var("o"), ident("p")),
            AssignOp::Concat,
            string("'x'")
        )
    );
    assert_eq!(
        parse("Foo::$bar = 1"),
        assign(
            Expression::class(ident("Foo"), var("bar")),
            AssignOp::Assign,
            num("1")
        )
    );
}

#[test]
fn test_assignment_by_reference() {
    assert_eq!(
        parse("$a = &$b"),
        assign(
            var("a"),
            AssignOp::Assign,
            Expression::prefix(UnaryOp::Reference, var("b"))
        )
    );
}

#[test]
fn test_assignment_binds_through_lower_operators() {
    assert_eq!(
        parse("$a && $b = 1"),
        bin(var("a"), BinaryOp::And, assign(var("b"), AssignOp::Assign, num("1")))
    );
    assert_eq!(
        parse("!$x = foo()"),
        Expression::prefix(
            UnaryOp::Not,
            assign(var("x"), AssignOp::Assign, Expression::call(ident("foo"), vec![]))
        )
    );
}

#[test]
fn test_literal_is_not_assignable() {
    assert_eq!(
        parse_error("1 = 2"),
        ParserError::NotAssignable {
            expression: "1".to_string(),
            span: Span::new(2, 3),
        }
    );
}

#[test]
fn test_binary_left_side_is_not_assignable() {
    match parse_error("$a + 1 = 2") {
        ParserError::NotAssignable { expression, .. } => assert_eq!(expression, "$a + 1"),
        other => panic!("Expected NotAssignable, got {:?}", other),
    }
}

#[test_case("foo() = 1" ; "call")]
#[test_case("Foo::BAR = 1" ; "class constant")]
#[test_case("FOO = 1" ; "constant")]
#[test_case("'s' .= 1" ; "string literal")]
#[test_case("[1] = $a" ; "array declaration")]
fn test_rejected_assignment_targets(source: &str) {
    assert!(matches!(
        parse_error(source),
        ParserError::NotAssignable { .. }
    ));
}

#[test]
fn test_list_destructuring_keeps_empty_slots() {
    assert_eq!(
        parse("list($a, , $b) = $c"),
        assign(
            Expression::List(ListExpr {
                targets: vec![Some(var("a")), None, Some(var("b"))],
            }),
            AssignOp::Assign,
            var("c")
        )
    );
    assert_eq!(
        parse("list(, $b) = $c"),
        assign(
            Expression::List(ListExpr {
                targets: vec![None, Some(var("b"))],
            }),
            AssignOp::Assign,
            var("c")
        )
    );
}

#[test]
fn test_nested_list() {
    assert_eq!(
        parse("list($a, list($b, $c[0])) = $d"),
        assign(
            Expression::List(ListExpr {
                targets: vec![
                    Some(var("a")),
                    Some(Expression::List(ListExpr {
                        targets: vec![
                            Some(var("b")),
                            Some(Expression::array_lookup(var("c"), Some(num("0")))),
                        ],
                    })),
                ],
            }),
            AssignOp::Assign,
            var("d")
        )
    );
}

#[test]
fn test_list_target_must_be_assignable() {
    match parse_error("list(1) = $a") {
        ParserError::NotAssignable { expression, .. } => assert_eq!(expression, "1"),
        other => panic!("Expected NotAssignable, got {:?}", other),
    }
}
