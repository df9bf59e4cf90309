//! 式の解析
//!
//! 入口・前置被演算子の振り分け・演算ループを扱う。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::TokenKind;

use super::operation::{prefix_operator, Operation};
use super::{ParseResult, Parser};

impl Parser {
    /// 式を解析（内部実装）
    ///
    /// 戻るときの括弧の深さは入ったときと同じでなければならない。
    pub(super) fn parse_expression_internal(&mut self) -> ParseResult<Expression> {
        let original = self.paren_level;
        log::trace!("parse_expression at {}", self.cursor.current());

        let expr = self.nested(|p| {
            let operand = p.parse_prefixed_operand()?;
            p.parse_operation(operand)
        })?;

        if self.paren_level != original {
            return Err(ParserError::UnbalancedParens {
                level: self.paren_level,
                original,
                span: self.cursor.current().span.clone().into(),
            });
        }
        Ok(expr)
    }

    /// 前置演算子・特殊形式・被演算子のいずれかを一つ解析する
    ///
    /// 演算ループは呼び出し側が続ける。
    pub(super) fn parse_prefixed_operand(&mut self) -> ParseResult<Expression> {
        self.nested(|p| {
            let token = p.cursor.current().clone();
            if let Some(op) = prefix_operator(&token) {
                return p.parse_prefix_unary(op);
            }

            match token.kind {
                TokenKind::Function => p.parse_anonymous_function(),
                TokenKind::New => p.parse_instantiation(),
                TokenKind::List => p.parse_list(),
                TokenKind::Include
                | TokenKind::IncludeOnce
                | TokenKind::Require
                | TokenKind::RequireOnce => p.parse_include(),
                TokenKind::LeftParen => p.parse_parenthesized(),
                TokenKind::VariableOperator
                | TokenKind::Array
                | TokenKind::LeftBracket
                | TokenKind::Identifier
                | TokenKind::StringLiteral
                | TokenKind::NumberLiteral
                | TokenKind::BooleanLiteral
                | TokenKind::Null
                | TokenKind::SelfKeyword
                | TokenKind::Static
                | TokenKind::Parent
                | TokenKind::ShellCommand => p.parse_operand(),
                _ => Err(ParserError::ExpectedExpression {
                    found: token.to_string(),
                    span: token.span.clone().into(),
                }),
            }
        })
    }

    /// 括弧で囲まれた式と、それに続く後置チェーン
    fn parse_parenthesized(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::LeftParen)?;
        self.paren_level += 1;
        let inner = self.parse_expression_internal()?;
        self.expect(TokenKind::RightParen)?;
        self.paren_level -= 1;
        self.parse_postfix_chain(inner)
    }

    /// 演算ループ（下限なし）
    pub(super) fn parse_operation(&mut self, lhs: Expression) -> ParseResult<Expression> {
        self.parse_operation_above(lhs, Precedence::Lowest)
    }

    /// `floor` より強く結合する演算子だけを `lhs` に畳み込む
    ///
    /// 右結合の演算子は `floor` と同じ優先順位でも結合する。代入演算子は
    /// 左辺が代入可能なら優先順位に関わらず結合する（`!$x = f()`）。
    pub(super) fn parse_operation_above(
        &mut self,
        lhs: Expression,
        floor: Precedence,
    ) -> ParseResult<Expression> {
        let base = self.depth;
        let result = self.fold_operations(lhs, floor);
        self.depth = base;
        result
    }

    /// 畳み込み一回ごとに木が一段深くなるので、深さの上限に数える
    fn fold_operations(&mut self, mut lhs: Expression, floor: Precedence) -> ParseResult<Expression> {
        loop {
            let token = self.advance();
            let operation = match Operation::for_token(token.kind) {
                Some(operation) if binds(operation, floor, &lhs) => operation,
                _ => {
                    self.backup();
                    return Ok(lhs);
                }
            };
            log::trace!("fold {:?} above {:?}", operation, floor);
            self.deepen()?;

            lhs = match operation {
                Operation::Unary(op) => Expression::postfix(op, lhs),
                Operation::Binary(op) => self.parse_binary(lhs, op)?,
                Operation::Ternary => self.parse_ternary(lhs)?,
                Operation::Assignment(op) => self.parse_assignment(lhs, op, &token)?,
            };
        }
    }
}

fn binds(operation: Operation, floor: Precedence, lhs: &Expression) -> bool {
    let prec = operation.precedence();
    match operation {
        Operation::Assignment(_) => floor == Precedence::Lowest || lhs.is_assignable(),
        _ => prec > floor || (prec == floor && prec.is_right_associative()),
    }
}
