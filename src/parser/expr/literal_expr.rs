//! 被演算子（リテラル・変数・識別子）の解析

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 被演算子を一つ解析し、後置チェーンを畳み込む
    ///
    /// リテラルとシェルコマンドは後置チェーンを持たない。
    pub(in crate::parser) fn parse_operand(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token.kind {
            TokenKind::StringLiteral
            | TokenKind::NumberLiteral
            | TokenKind::BooleanLiteral
            | TokenKind::Null => self.parse_literal(&token),
            TokenKind::ShellCommand => {
                let command = token
                    .text
                    .strip_prefix('`')
                    .and_then(|s| s.strip_suffix('`'))
                    .unwrap_or(&token.text)
                    .to_string();
                Ok(Expression::ShellCommand(ShellCommand { command }))
            }
            TokenKind::Array => {
                let array = self.parse_array_declaration(ArraySyntax::Long)?;
                self.parse_postfix_chain(array)
            }
            TokenKind::LeftBracket => {
                let array = self.parse_array_declaration(ArraySyntax::Short)?;
                self.parse_postfix_chain(array)
            }
            TokenKind::VariableOperator => {
                let variable = self.parse_variable()?;
                let variable = self.parse_brace_lookup(variable)?;
                self.parse_postfix_chain(variable)
            }
            TokenKind::Identifier => {
                // 呼び出しとスコープ解決の前では名前、それ以外では定数
                let expr = if self.check(TokenKind::LeftParen) || self.check(TokenKind::DoubleColon) {
                    Expression::identifier(token.text)
                } else {
                    Expression::constant(token.text)
                };
                self.parse_postfix_chain(expr)
            }
            TokenKind::SelfKeyword | TokenKind::Static | TokenKind::Parent => {
                if !self.check(TokenKind::DoubleColon) {
                    let found = self.cursor.current().clone();
                    return Err(self.unexpected(&found, &TokenKind::DoubleColon.to_string()));
                }
                self.parse_postfix_chain(Expression::identifier(token.text))
            }
            _ => Err(ParserError::ExpectedExpression {
                found: token.to_string(),
                span: token.span.clone().into(),
            }),
        }
    }

    /// リテラルトークンを式に変換
    pub(in crate::parser) fn parse_literal(&self, token: &Token) -> ParseResult<Expression> {
        let ty = match token.kind {
            TokenKind::StringLiteral => LiteralType::String,
            TokenKind::NumberLiteral => LiteralType::Float,
            TokenKind::BooleanLiteral => LiteralType::Boolean,
            TokenKind::Null => LiteralType::Null,
            _ => {
                return Err(ParserError::UnknownLiteral {
                    found: token.to_string(),
                    span: token.span.clone().into(),
                })
            }
        };
        Ok(Expression::literal(ty, token.text.clone()))
    }

    /// `$` の直後から変数名を解析する
    ///
    /// `$name`、`$$name`、`${expr}` のいずれか。後置チェーンは付けない。
    pub(in crate::parser) fn parse_variable(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token.kind {
            kind if kind.is_name() => Ok(Expression::variable(token.text)),
            TokenKind::VariableOperator => {
                let inner = self.nested(|p| p.parse_variable())?;
                Ok(Expression::dynamic_variable(inner))
            }
            TokenKind::LeftBrace => {
                let inner = self.parse_expression_internal()?;
                self.expect(TokenKind::RightBrace)?;
                Ok(Expression::dynamic_variable(inner))
            }
            _ => Err(self.unexpected(&token, "変数名")),
        }
    }

    /// 変数直後の `{index}` による配列参照
    fn parse_brace_lookup(&mut self, variable: Expression) -> ParseResult<Expression> {
        if !self.config.curly_lookup || !self.check(TokenKind::LeftBrace) {
            return Ok(variable);
        }
        self.advance();
        let index = self.parse_expression_internal()?;
        self.expect(TokenKind::RightBrace)?;
        Ok(Expression::ArrayLookup(ArrayLookup {
            receiver: Box::new(variable),
            index: Some(Box::new(index)),
            style: LookupStyle::Brace,
        }))
    }
}
