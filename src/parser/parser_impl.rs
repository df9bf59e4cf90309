//! メインパーサー構造とユーティリティ

use crate::ast::{Expression, Span};
use crate::error::ParserError;
use crate::lexer::{Token, TokenKind};

use super::{ParseError, ParseResult, ParserConfig, TokenCursor};

/// PHP式パーサー
pub struct Parser {
    pub(super) cursor: TokenCursor,
    /// 現在開いている丸括弧の数
    pub(super) paren_level: usize,
    /// 再帰の深さ
    pub(super) depth: usize,
    pub(super) config: ParserConfig,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self::with_config(tokens, ParserConfig::default())
    }

    pub fn with_config(tokens: Vec<Token>, config: ParserConfig) -> Self {
        Self {
            cursor: TokenCursor::new(tokens),
            paren_level: 0,
            depth: 0,
            config,
        }
    }

    /// 式を一つ解析し、カーソルを式の直後に置く
    pub fn parse_expression(&mut self) -> ParseResult<Expression> {
        self.parse_expression_internal()
    }

    /// 次に調べるトークン
    pub fn current_token(&self) -> &Token {
        self.cursor.current()
    }

    pub fn paren_level(&self) -> usize {
        self.paren_level
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// 特定のトークンにマッチしたら進む
    pub fn match_token(&mut self, kind: TokenKind) -> bool {
        if self.check(kind) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// 消費済みトークンの数
    pub fn consumed(&self) -> usize {
        self.cursor.position()
    }

    /// `start` から始まった式の失敗後、`kind` の直後まで読み飛ばす
    ///
    /// 失敗した式がすでに `kind` を消費していればそこで止まる。何も消費して
    /// いなければ少なくとも一つ進む。括弧と深さの状態も初期化する。
    pub fn recover(&mut self, start: usize, kind: TokenKind) {
        let consumed_terminator = self.consumed() > start
            && self.cursor.previous().map(|t| t.kind) == Some(kind);
        if !consumed_terminator {
            while !self.is_at_end() {
                if self.advance().kind == kind {
                    break;
                }
            }
        }
        self.paren_level = 0;
        self.depth = 0;
    }

    // ==================== ユーティリティメソッド ====================

    /// 特定のトークンをチェック（進まない）
    pub(super) fn check(&self, kind: TokenKind) -> bool {
        self.cursor.current().kind == kind
    }

    /// 次のトークンに進む
    pub(super) fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    /// 直前の `advance` を取り消す
    pub(super) fn backup(&mut self) {
        self.cursor.backup()
    }

    /// 特定のトークンを期待
    pub(super) fn expect(&mut self, kind: TokenKind) -> ParseResult<Token> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            let found = self.cursor.current().clone();
            Err(self.unexpected(&found, &kind.to_string()))
        }
    }

    /// 識別子またはキーワードを名前として期待
    pub(super) fn expect_name(&mut self) -> ParseResult<Token> {
        if self.cursor.current().kind.is_name() {
            Ok(self.advance())
        } else {
            let found = self.cursor.current().clone();
            Err(self.unexpected(&found, "名前"))
        }
    }

    /// 予期しないトークンエラーを作成
    pub(super) fn unexpected(&self, token: &Token, expected: &str) -> ParseError {
        ParserError::UnexpectedToken {
            expected: expected.to_string(),
            found: token.to_string(),
            span: token.span.clone().into(),
        }
    }

    /// 開始位置から最後に消費したトークンまでのスパンを作成
    pub(super) fn span_from(&self, start: usize) -> Span {
        let end = self
            .cursor
            .previous()
            .map(|t| t.span.end)
            .unwrap_or(start)
            .max(start);
        Span::new(start, end)
    }

    /// 深さを一段増やして `f` を実行する
    pub(super) fn nested<T>(&mut self, f: impl FnOnce(&mut Self) -> ParseResult<T>) -> ParseResult<T> {
        self.deepen()?;
        let result = f(self);
        self.depth -= 1;
        result
    }

    /// 深さを一段増やす。上限に達していれば `TooDeeplyNested`。
    ///
    /// 畳み込みのループは一段ごとにこれを呼び、抜けるときに深さを戻す。
    pub(super) fn deepen(&mut self) -> ParseResult<()> {
        if self.depth >= self.config.max_depth {
            return Err(ParserError::TooDeeplyNested {
                limit: self.config.max_depth,
                span: self.cursor.current().span.clone().into(),
            });
        }
        self.depth += 1;
        Ok(())
    }
}
