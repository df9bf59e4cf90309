//! 二項演算・三項演算・代入の解析

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 二項演算子の右辺を解析して畳み込む
    ///
    /// 右辺には自身より強い演算子だけを結合させるので左結合になる。
    pub(in crate::parser) fn parse_binary(
        &mut self,
        left: Expression,
        op: BinaryOp,
    ) -> ParseResult<Expression> {
        let operand = self.parse_prefixed_operand()?;
        let right = self.parse_operation_above(operand, op.precedence())?;
        Ok(Expression::binary(left, op, right))
    }

    /// `?` の後を解析する（`?:` 省略形では真の分岐なし）
    pub(in crate::parser) fn parse_ternary(&mut self, condition: Expression) -> ParseResult<Expression> {
        let if_true = if self.match_token(TokenKind::Colon) {
            None
        } else {
            let middle = self.parse_expression_internal()?;
            self.expect(TokenKind::Colon)?;
            Some(middle)
        };

        let operand = self.parse_prefixed_operand()?;
        let if_false = self.parse_operation_above(operand, Precedence::Ternary)?;
        Ok(Expression::ternary(condition, if_true, if_false))
    }

    /// 代入演算子の右辺を解析する
    pub(in crate::parser) fn parse_assignment(
        &mut self,
        lhs: Expression,
        op: AssignOp,
        operator: &Token,
    ) -> ParseResult<Expression> {
        let assignee = Assignable::new(lhs).map_err(|lhs| ParserError::NotAssignable {
            expression: lhs.to_string(),
            span: operator.span.clone().into(),
        })?;

        let operand = self.parse_prefixed_operand()?;
        let value = self.parse_operation_above(operand, Precedence::Assignment)?;
        Ok(Expression::Assignment(AssignmentExpr {
            assignee,
            op,
            value: Box::new(value),
        }))
    }
}
