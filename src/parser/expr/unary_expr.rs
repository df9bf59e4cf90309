//! 前置単項演算式の解析

use crate::ast::*;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 前置単項演算子を消費し、被演算子を包む
    ///
    /// 被演算子には演算子自身より強く結合する演算だけが付く。
    pub(in crate::parser) fn parse_prefix_unary(&mut self, op: UnaryOp) -> ParseResult<Expression> {
        self.advance();
        let operand = self.parse_prefixed_operand()?;
        let operand = self.parse_operation_above(operand, op.precedence())?;
        Ok(Expression::prefix(op, operand))
    }
}
