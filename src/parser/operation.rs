//! トークンから演算の種類への対応表
//!
//! 演算子の分類はこのモジュールだけが知っている。

use crate::ast::{AssignOp, BinaryOp, CastType, Precedence, UnaryOp};
use crate::lexer::{Token, TokenKind};

/// 演算ループが左辺に畳み込む演算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// 後置単項演算子（`++` / `--`）
    Unary(UnaryOp),
    Binary(BinaryOp),
    Ternary,
    Assignment(AssignOp),
}

impl Operation {
    /// 演算子として現れたトークンの分類。演算子でなければ `None`。
    pub fn for_token(kind: TokenKind) -> Option<Self> {
        let op = match kind {
            TokenKind::Increment => Operation::Unary(UnaryOp::Increment),
            TokenKind::Decrement => Operation::Unary(UnaryOp::Decrement),

            TokenKind::Plus => Operation::Binary(BinaryOp::Add),
            TokenKind::Minus => Operation::Binary(BinaryOp::Subtract),
            TokenKind::Star => Operation::Binary(BinaryOp::Multiply),
            TokenKind::Slash => Operation::Binary(BinaryOp::Divide),
            TokenKind::Percent => Operation::Binary(BinaryOp::Modulo),
            TokenKind::Dot => Operation::Binary(BinaryOp::Concat),
            TokenKind::ShiftLeft => Operation::Binary(BinaryOp::ShiftLeft),
            TokenKind::ShiftRight => Operation::Binary(BinaryOp::ShiftRight),
            TokenKind::Less => Operation::Binary(BinaryOp::Less),
            TokenKind::Greater => Operation::Binary(BinaryOp::Greater),
            TokenKind::LessEqual => Operation::Binary(BinaryOp::LessEqual),
            TokenKind::GreaterEqual => Operation::Binary(BinaryOp::GreaterEqual),
            TokenKind::Equal => Operation::Binary(BinaryOp::Equal),
            TokenKind::NotEqual => Operation::Binary(BinaryOp::NotEqual),
            TokenKind::Identical => Operation::Binary(BinaryOp::Identical),
            TokenKind::NotIdentical => Operation::Binary(BinaryOp::NotIdentical),
            TokenKind::Ampersand => Operation::Binary(BinaryOp::BitAnd),
            TokenKind::Caret => Operation::Binary(BinaryOp::BitXor),
            TokenKind::Pipe => Operation::Binary(BinaryOp::BitOr),
            TokenKind::AndAnd => Operation::Binary(BinaryOp::And),
            TokenKind::OrOr => Operation::Binary(BinaryOp::Or),
            TokenKind::Instanceof => Operation::Binary(BinaryOp::Instanceof),
            TokenKind::WrittenAnd => Operation::Binary(BinaryOp::WordAnd),
            TokenKind::WrittenXor => Operation::Binary(BinaryOp::WordXor),
            TokenKind::WrittenOr => Operation::Binary(BinaryOp::WordOr),

            TokenKind::Question => Operation::Ternary,

            TokenKind::Assign => Operation::Assignment(AssignOp::Assign),
            TokenKind::PlusAssign => Operation::Assignment(AssignOp::Add),
            TokenKind::MinusAssign => Operation::Assignment(AssignOp::Subtract),
            TokenKind::StarAssign => Operation::Assignment(AssignOp::Multiply),
            TokenKind::SlashAssign => Operation::Assignment(AssignOp::Divide),
            TokenKind::DotAssign => Operation::Assignment(AssignOp::Concat),
            TokenKind::PercentAssign => Operation::Assignment(AssignOp::Modulo),
            TokenKind::AmpersandAssign => Operation::Assignment(AssignOp::BitAnd),
            TokenKind::PipeAssign => Operation::Assignment(AssignOp::BitOr),
            TokenKind::CaretAssign => Operation::Assignment(AssignOp::BitXor),
            TokenKind::ShiftLeftAssign => Operation::Assignment(AssignOp::ShiftLeft),
            TokenKind::ShiftRightAssign => Operation::Assignment(AssignOp::ShiftRight),

            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(self) -> Precedence {
        match self {
            Operation::Unary(_) => Precedence::ArrayLookup,
            Operation::Binary(op) => op.precedence(),
            Operation::Ternary => Precedence::Ternary,
            Operation::Assignment(_) => Precedence::Assignment,
        }
    }
}

/// 式の先頭に現れる前置単項演算子の分類
///
/// `@` と `&` もここで扱う。
pub fn prefix_operator(token: &Token) -> Option<UnaryOp> {
    let op = match token.kind {
        TokenKind::Bang => UnaryOp::Not,
        TokenKind::Minus => UnaryOp::Negate,
        TokenKind::Plus => UnaryOp::Plus,
        TokenKind::Tilde => UnaryOp::BitNot,
        TokenKind::Ampersand => UnaryOp::Reference,
        TokenKind::Increment => UnaryOp::Increment,
        TokenKind::Decrement => UnaryOp::Decrement,
        TokenKind::At => UnaryOp::Silence,
        TokenKind::Clone => UnaryOp::Clone,
        TokenKind::Cast => UnaryOp::Cast(CastType::from_token_text(&token.text)?),
        _ => return None,
    };
    Some(op)
}
