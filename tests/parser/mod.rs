//! パーサーテストの共通モジュール
//!
//! パーサーテストで使用する共通のヘルパー関数を定義する。

use phpexpr::ast::*;
use phpexpr::driver::parse_expression_str;
use phpexpr::error::{ParserError, PhpExprError};

/// 式を解析してASTを取得するヘルパー関数
pub fn parse(source: &str) -> Expression {
    match parse_expression_str(source) {
        Ok(expr) => expr,
        Err(e) => panic!("Parsing {:?} should succeed: {}", source, e),
    }
}

/// 解析に失敗することを確認し、パーサーエラーを返すヘルパー関数
pub fn parse_error(source: &str) -> ParserError {
    match parse_expression_str(source) {
        Err(PhpExprError::Parser(e)) => e,
        other => panic!("Parsing {:?} should fail with a parser error, got {:?}", source, other),
    }
}

pub fn var(name: &str) -> Expression {
    Expression::variable(name)
}

pub fn num(value: &str) -> Expression {
    Expression::number(value)
}

pub fn string(value: &str) -> Expression {
    Expression::string(value)
}

pub fn ident(name: &str) -> Expression {
    Expression::identifier(name)
}

pub fn constant(name: &str) -> Expression {
    Expression::constant(name)
}

pub fn bin(left: Expression, op: BinaryOp, right: Expression) -> Expression {
    Expression::binary(left, op, right)
}

pub fn assign(assignee: Expression, op: AssignOp, value: Expression) -> Expression {
    Expression::Assignment(AssignmentExpr {
        assignee: Assignable::new(assignee).expect("assignee should be assignable"),
        op,
        value: Box::new(value),
    })
}

// サブモジュールの宣言
#[cfg(test)]
mod assignment_test;
#[cfg(test)]
mod error_test;
#[cfg(test)]
mod precedence_test;
#[cfg(test)]
mod roundtrip_test;
