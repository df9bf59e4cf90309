//! 表示結果を再解析すると同じ木に戻ることのテスト

use super::*;
use pretty_assertions::assert_eq;
use test_case::test_case;

#[test_case("1 + 2 * 3" ; "operator precedence")]
#[test_case("(1 + 2) * 3" ; "grouped sum")]
#[test_case("$a - ($b - $c)" ; "right grouped difference")]
#[test_case("$a ? $b : $c ? $d : $e" ; "nested ternary")]
#[test_case("($a ? $b : $c) ? $d : $e" ; "grouped ternary condition")]
#[test_case("$a ?: $b ?: $c" ; "chained short ternary")]
#[test_case("$a = $b = $c + 1" ; "chained assignment")]
#[test_case("$a = $b or die()" ; "word or after assignment")]
#[test_case("($a or $b) and $c" ; "grouped word operators")]
#[test_case("$a && $b = 1" ; "assignment inside logical and")]
#[test_case("!$x = foo()" ; "assignment under not")]
#[test_case("$a ? $b : $c = 1" ; "assignment in false branch")]
#[test_case("!$a instanceof Foo" ; "not over instanceof")]
#[test_case("(!$a) instanceof Foo" ; "grouped not instanceof")]
#[test_case("-$a * 2 . 'x'" ; "negation multiplication concat")]
#[test_case("$i++ + ++$j" ; "postfix and prefix increment")]
#[test_case("- -$a" ; "double negation")]
#[test_case("-(-$a)" ; "grouped negation")]
#[test_case("+-$a" ; "plus negation")]
#[test_case("(int) $a . (string) $b" ; "casts around concat")]
#[test_case("@foo() || die('x')" ; "silenced call")]
#[test_case("clone $a->b()" ; "clone of method call")]
#[test_case("$a->b[0]::c" ; "member index scope chain")]
#[test_case("$a->b->c($d)[1]->e" ; "long chain")]
#[test_case("$a->{'b' . $c}()" ; "dynamic member call")]
#[test_case("$a->$b->$c" ; "variable members")]
#[test_case("$$a[0]" ; "dynamic variable index")]
#[test_case("${'a' . $b}" ; "braced dynamic variable")]
#[test_case("$s{0} . $s{1}" ; "brace lookups")]
#[test_case("Foo::$bar = [1, 'a' => &$c]" ; "static property array")]
#[test_case("Foo::bar()::$baz" ; "call then static property")]
#[test_case(r"\App\helper(1, 'x')" ; "qualified function")]
#[test_case("(FOO)()" ; "constant callee")]
#[test_case("FOO[1]" ; "constant index")]
#[test_case("array(1, array('k' => 2), &$x)" ; "long arrays")]
#[test_case("[[1, 2], [3]][0][1]" ; "short arrays")]
#[test_case("[(&$b), 'k' => (&$c), &$d]" ; "reference value without reference element")]
#[test_case("`ls -la` . $x" ; "shell command")]
#[test_case("new Foo" ; "new without parens")]
#[test_case("(new Foo)->bar()" ; "parenthesized new")]
#[test_case("new $cls->name['x']($arg)" ; "new with variable class")]
#[test_case("new $a::$b" ; "new with static property")]
#[test_case("$a = &new Foo" ; "reference to new")]
#[test_case("include 'a.php'" ; "include")]
#[test_case("$a = include 'x'" ; "assigned include")]
#[test_case("foo(include 'a', 'b')" ; "include in arguments")]
#[test_case("[include 'a', 'b']" ; "include in array")]
#[test_case("(include 'a') . 'b'" ; "grouped include")]
#[test_case("list($a, , $b) = $c" ; "list with empty slot")]
#[test_case("list($a, list(, $b)) = $c" ; "nested list")]
#[test_case("function ($a, array &$b = array(), ?Foo ...$rest) use (&$x, $y): ?int { return $a + 1; }" ; "closure with full signature")]
#[test_case("(function () {})()" ; "called closure")]
#[test_case("$f = function &() use ($g) { return $g(); }" ; "assigned closure")]
#[test_case("$a < $b == $c > $d" ; "relational and equality")]
#[test_case("$a & $b ^ $c | $d" ; "bitwise ladder")]
#[test_case("$a << ($b >> $c)" ; "grouped shift")]
#[test_case("$a % ($b * $c)" ; "grouped multiplicative")]
fn test_printed_expression_reparses_to_same_tree(source: &str) {
    let original = parse(source);
    let printed = original.to_string();
    assert_eq!(parse(&printed), original, "printed as {:?}", printed);
    assert_eq!(parse(&printed).to_string(), printed);
}

#[test_case("1+2*3", "1 + 2 * 3" ; "spacing")]
#[test_case("(1+2)*3", "(1 + 2) * 3" ; "kept parens")]
#[test_case("$a-($b-$c)", "$a - ($b - $c)" ; "kept right parens")]
#[test_case("(($a))", "$a" ; "redundant parens")]
#[test_case("new Foo", "new Foo()" ; "new gets parens")]
#[test_case("$a=include 'x'", "$a = (include 'x')" ; "include gets parens")]
#[test_case("array(1,'k'=>&$v)", "array(1, 'k' => &$v)" ; "long array")]
#[test_case("[1,2,]", "[1, 2]" ; "short array trailing comma")]
#[test_case("- -$a", "-(-$a)" ; "double negation")]
#[test_case("$a?:$b", "$a ?: $b" ; "short ternary")]
#[test_case("$a?$b:($c?$d:$e)", "$a ? $b : $c ? $d : $e" ; "nested ternary")]
#[test_case("!$x=foo()", "!($x = foo())" ; "assignment under not")]
#[test_case("list($a,,$b)=$c", "list($a, , $b) = $c" ; "list slot")]
#[test_case("(int)$a", "(int) $a" ; "cast")]
#[test_case("function&($x)use(&$y){return $x;}", "function &($x) use (&$y) { return $ x ; }" ; "closure")]
fn test_canonical_rendering(source: &str, expected: &str) {
    assert_eq!(parse(source).to_string(), expected);
}
