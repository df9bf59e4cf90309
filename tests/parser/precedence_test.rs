//! 演算子優先順位と結合性のテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test]
fn test_multiplication_binds_tighter_than_addition() {
    assert_eq!(
        parse("1 + 2 * 3"),
        bin(num("1"), BinaryOp::Add, bin(num("2"), BinaryOp::Multiply, num("3")))
    );
    assert_eq!(
        parse("1 * 2 + 3"),
        bin(bin(num("1"), BinaryOp::Multiply, num("2")), BinaryOp::Add, num("3"))
    );
}

#[test]
fn test_binary_operators_are_left_associative() {
    assert_eq!(
        parse("$a - $b - $c"),
        bin(
            bin(var("a"), BinaryOp::Subtract, var("b")),
            BinaryOp::Subtract,
            var("c")
        )
    );
    assert_eq!(
        parse("$a . $b . $c"),
        bin(
            bin(var("a"), BinaryOp::Concat, var("b")),
            BinaryOp::Concat,
            var("c")
        )
    );
}

#[test]
fn test_parentheses_override_precedence() {
    assert_eq!(
        parse("(1 + 2) * 3"),
        bin(bin(num("1"), BinaryOp::Add, num("2")), BinaryOp::Multiply, num("3"))
    );
}

#[test]
fn test_ternary_is_right_associative() {
    assert_eq!(
        parse("$a ? $b : $c ? $d : $e"),
        Expression::ternary(
            var("a"),
            Some(var("b")),
            Expression::ternary(var("c"), Some(var("d")), var("e"))
        )
    );
}

#[test]
fn test_postfix_increment() {
    assert_eq!(
        parse("$i++ + 1"),
        bin(
            Expression::postfix(UnaryOp::Increment, var("i")),
            BinaryOp::Add,
            num("1")
        )
    );
    assert_eq!(
        parse("-$i--"),
        Expression::prefix(
            UnaryOp::Negate,
            Expression::postfix(UnaryOp::Decrement, var("i"))
        )
    );
}

#[test]
fn test_logical_not_sits_below_instanceof() {
    assert_eq!(
        parse("!$a instanceof Foo"),
        Expression::prefix(
            UnaryOp::Not,
            bin(var("a"), BinaryOp::Instanceof, constant("Foo"))
        )
    );
}

#[test_case("$a . $b + $c", "($a . $b) + $c" ; "concat and addition share a level")]
#[test_case("$a << 1 + 2", "$a << (1 + 2)" ; "shift below additive")]
#[test_case("$a < $b == $c > $d", "($a < $b) == ($c > $d)" ; "relational above equality")]
#[test_case("$a & $b ^ $c | $d", "(($a & $b) ^ $c) | $d" ; "bitwise ladder")]
#[test_case("$a || $b && $c", "$a || ($b && $c)" ; "and above or")]
#[test_case("$a or $b xor $c and $d", "$a or ($b xor ($c and $d))" ; "word operators")]
#[test_case("$a == $b ?: $c", "($a == $b) ?: $c" ; "short ternary below equality")]
#[test_case("$a = $b ? 1 : 2", "$a = ($b ? 1 : 2)" ; "ternary above assignment")]
#[test_case("$a = $b or die()", "($a = $b) or die()" ; "word or below assignment")]
#[test_case("$a and $b = 1", "$a and ($b = 1)" ; "assignment inside word and")]
#[test_case("-$a * $b", "(-$a) * $b" ; "negation above multiplication")]
#[test_case("!$a && $b", "(!$a) && $b" ; "not above logical and")]
#[test_case("!$a * $b", "(!$a) * $b" ; "not above multiplication")]
#[test_case("(int) $a . 'x'", "((int) $a) . 'x'" ; "cast binds its operand")]
#[test_case("@foo() || die()", "(@foo()) || die()" ; "silence binds its operand")]
#[test_case("clone $a->b", "clone ($a->b)" ; "clone takes the whole chain")]
#[test_case("$a instanceof Foo && $b", "($a instanceof Foo) && $b" ; "instanceof above logical and")]
#[test_case("$a + $b * $c - $d", "($a + ($b * $c)) - $d" ; "mixed additive and multiplicative")]
#[test_case("$a % $b / $c", "($a % $b) / $c" ; "multiplicative left associative")]
fn test_precedence_matches_explicit_grouping(source: &str, grouped: &str) {
    assert_eq!(parse(source), parse(grouped));
}

#[test]
fn test_precedence_ladder_is_authoritative() {
    // 表の全段が一つの列挙型に収まっている
    let ladder = [
        BinaryOp::WordOr,
        BinaryOp::WordXor,
        BinaryOp::WordAnd,
        BinaryOp::Or,
        BinaryOp::And,
        BinaryOp::BitOr,
        BinaryOp::BitXor,
        BinaryOp::BitAnd,
        BinaryOp::Equal,
        BinaryOp::Less,
        BinaryOp::ShiftLeft,
        BinaryOp::Add,
        BinaryOp::Multiply,
        BinaryOp::Instanceof,
    ];
    for pair in ladder.windows(2) {
        assert!(pair[0].precedence() < pair[1].precedence(), "{:?}", pair);
    }
    assert!(Precedence::Assignment < BinaryOp::Or.precedence());
    assert!(Precedence::Assignment > BinaryOp::WordAnd.precedence());
}
