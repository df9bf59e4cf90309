//! トークンカーソル
//!
//! 現在位置・一つ先読み・一段だけの巻き戻しを提供する。

use crate::lexer::{Token, TokenKind};

/// 終端が必ず `Eof` になっているトークン列の上を進むカーソル
#[derive(Debug, Clone)]
pub struct TokenCursor {
    tokens: Vec<Token>,
    position: usize,
    /// 直前の `advance` が位置を動かしたか（巻き戻しは一段のみ）
    last_advanced: bool,
}

impl TokenCursor {
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::Eof) {
            let offset = tokens.last().map(|t| t.span.end).unwrap_or(0);
            let position = tokens.last().map(|t| t.position).unwrap_or_default();
            tokens.push(Token::eof(position, offset));
        }
        Self {
            tokens,
            position: 0,
            last_advanced: false,
        }
    }

    /// 現在のトークン
    pub fn current(&self) -> &Token {
        &self.tokens[self.position.min(self.tokens.len() - 1)]
    }

    /// 一つ先のトークン（終端では `Eof`）
    pub fn peek(&self) -> &Token {
        let index = (self.position + 1).min(self.tokens.len() - 1);
        &self.tokens[index]
    }

    /// 現在のトークンを消費して返す。`Eof` では位置を動かさない。
    pub fn advance(&mut self) -> Token {
        let token = self.current().clone();
        if token.kind == TokenKind::Eof {
            self.last_advanced = false;
        } else {
            self.position += 1;
            self.last_advanced = true;
        }
        token
    }

    /// 直前の `advance` を取り消す
    pub fn backup(&mut self) {
        if self.last_advanced {
            self.position -= 1;
            self.last_advanced = false;
        }
    }

    /// 最後に消費したトークン
    pub fn previous(&self) -> Option<&Token> {
        self.position.checked_sub(1).and_then(|i| self.tokens.get(i))
    }

    pub fn is_at_end(&self) -> bool {
        self.current().kind == TokenKind::Eof
    }

    /// 消費済みトークンの数
    pub fn position(&self) -> usize {
        self.position
    }
}
