// 後置チェーンの解析
//
// メンバ参照 `->`、配列参照 `[]`、スコープ解決 `::`、関数呼び出し `()` を解析する。

use crate::ast::*;
use crate::lexer::TokenKind;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 後置チェーンを畳み込む
    ///
    /// チェーンを続けないトークンに当たったら一つ戻して返す。
    pub(in crate::parser) fn parse_postfix_chain(&mut self, expr: Expression) -> ParseResult<Expression> {
        let base = self.depth;
        let result = self.fold_postfix(expr);
        self.depth = base;
        result
    }

    fn fold_postfix(&mut self, mut expr: Expression) -> ParseResult<Expression> {
        loop {
            let token = self.advance();
            if matches!(
                token.kind,
                TokenKind::Arrow | TokenKind::LeftBracket | TokenKind::DoubleColon | TokenKind::LeftParen
            ) {
                self.deepen()?;
            }
            expr = match token.kind {
                TokenKind::Arrow => {
                    let member = self.parse_object_member()?;
                    Expression::object_lookup(expr, member)
                }
                TokenKind::LeftBracket => {
                    let index = self.parse_bracket_index()?;
                    Expression::array_lookup(expr, index)
                }
                TokenKind::DoubleColon => {
                    let member = self.parse_class_member()?;
                    Expression::class(expr, member)
                }
                TokenKind::LeftParen => {
                    let arguments = self.parse_arguments()?;
                    Expression::call(expr, arguments)
                }
                _ => {
                    self.backup();
                    return Ok(expr);
                }
            };
        }
    }

    /// `[` の後の添字と `]`（`$a[]` では添字なし）
    pub(in crate::parser) fn parse_bracket_index(&mut self) -> ParseResult<Option<Expression>> {
        if self.match_token(TokenKind::RightBracket) {
            return Ok(None);
        }
        let index = self.parse_expression_internal()?;
        self.expect(TokenKind::RightBracket)?;
        Ok(Some(index))
    }

    /// `(` の後の引数リストと `)`（末尾のカンマを許す）
    pub(in crate::parser) fn parse_arguments(&mut self) -> ParseResult<Vec<Expression>> {
        let mut arguments = Vec::new();
        while !self.check(TokenKind::RightParen) {
            arguments.push(self.parse_expression_internal()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;
        Ok(arguments)
    }

    /// `->` の後のメンバ
    pub(in crate::parser) fn parse_object_member(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token.kind {
            kind if kind.is_name() => Ok(Expression::identifier(token.text)),
            TokenKind::VariableOperator => self.parse_variable(),
            TokenKind::LeftBrace => {
                let member = self.parse_expression_internal()?;
                self.expect(TokenKind::RightBrace)?;
                Ok(member)
            }
            _ => Err(self.unexpected(&token, "メンバ名")),
        }
    }

    /// `::` の後のメンバ（定数・メソッド名・`class` または静的プロパティ）
    fn parse_class_member(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token.kind {
            kind if kind.is_name() => Ok(Expression::identifier(token.text)),
            TokenKind::VariableOperator => self.parse_variable(),
            _ => Err(self.unexpected(&token, "クラスメンバ")),
        }
    }
}
