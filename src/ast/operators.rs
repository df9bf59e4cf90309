//! 演算子と優先順位の定義

use serde::{Deserialize, Serialize};
use std::fmt;

/// 演算子の優先順位（数値が大きいほど強く結合する）
///
/// `Lowest` は「どの演算子も結合してよい」下限、`Primary` は演算子を
/// 持たない式の表示用の値で、どちらも演算子には割り当てられない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Precedence {
    Lowest = 0,
    WordOr = 1,
    WordXor = 2,
    WordAnd = 3,
    Assignment = 4,
    Ternary = 5,
    LogicalOr = 6,
    LogicalAnd = 7,
    BitwiseOr = 8,
    BitwiseXor = 9,
    BitwiseAnd = 10,
    Equality = 11,
    Relational = 12,
    Shift = 13,
    Additive = 14,
    Multiplicative = 15,
    LogicalNot = 16,
    Instanceof = 17,
    Unary = 18,
    ArrayLookup = 19,
    Primary = 20,
}

impl Precedence {
    /// 数値レベル
    pub fn level(self) -> u8 {
        self as u8
    }

    /// 右結合かどうか（代入と三項演算子のみ）
    pub fn is_right_associative(self) -> bool {
        matches!(self, Precedence::Assignment | Precedence::Ternary)
    }
}

/// 二項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Concat,
    ShiftLeft,
    ShiftRight,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Equal,
    NotEqual,
    Identical,
    NotIdentical,
    BitAnd,
    BitXor,
    BitOr,
    And,
    Or,
    Instanceof,
    WordAnd,
    WordXor,
    WordOr,
}

impl BinaryOp {
    pub fn precedence(self) -> Precedence {
        match self {
            BinaryOp::Instanceof => Precedence::Instanceof,
            BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo => Precedence::Multiplicative,
            BinaryOp::Add | BinaryOp::Subtract | BinaryOp::Concat => Precedence::Additive,
            BinaryOp::ShiftLeft | BinaryOp::ShiftRight => Precedence::Shift,
            BinaryOp::Less | BinaryOp::Greater | BinaryOp::LessEqual | BinaryOp::GreaterEqual => {
                Precedence::Relational
            }
            BinaryOp::Equal | BinaryOp::NotEqual | BinaryOp::Identical | BinaryOp::NotIdentical => {
                Precedence::Equality
            }
            BinaryOp::BitAnd => Precedence::BitwiseAnd,
            BinaryOp::BitXor => Precedence::BitwiseXor,
            BinaryOp::BitOr => Precedence::BitwiseOr,
            BinaryOp::And => Precedence::LogicalAnd,
            BinaryOp::Or => Precedence::LogicalOr,
            BinaryOp::WordAnd => Precedence::WordAnd,
            BinaryOp::WordXor => Precedence::WordXor,
            BinaryOp::WordOr => Precedence::WordOr,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Concat => ".",
            BinaryOp::ShiftLeft => "<<",
            BinaryOp::ShiftRight => ">>",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Identical => "===",
            BinaryOp::NotIdentical => "!==",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitXor => "^",
            BinaryOp::BitOr => "|",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
            BinaryOp::Instanceof => "instanceof",
            BinaryOp::WordAnd => "and",
            BinaryOp::WordXor => "xor",
            BinaryOp::WordOr => "or",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 代入演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssignOp {
    Assign,
    Add,
    Subtract,
    Multiply,
    Divide,
    Concat,
    Modulo,
    BitAnd,
    BitOr,
    BitXor,
    ShiftLeft,
    ShiftRight,
}

impl AssignOp {
    pub fn as_str(self) -> &'static str {
        match self {
            AssignOp::Assign => "=",
            AssignOp::Add => "+=",
            AssignOp::Subtract => "-=",
            AssignOp::Multiply => "*=",
            AssignOp::Divide => "/=",
            AssignOp::Concat => ".=",
            AssignOp::Modulo => "%=",
            AssignOp::BitAnd => "&=",
            AssignOp::BitOr => "|=",
            AssignOp::BitXor => "^=",
            AssignOp::ShiftLeft => "<<=",
            AssignOp::ShiftRight => ">>=",
        }
    }
}

impl fmt::Display for AssignOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// キャスト先の型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CastType {
    Int,
    Bool,
    Float,
    String,
    Array,
    Object,
    Unset,
    Binary,
}

impl CastType {
    /// `(int)` のようなキャストトークンの字句から型を求める
    pub fn from_token_text(text: &str) -> Option<Self> {
        let name = text
            .trim_start_matches('(')
            .trim_end_matches(')')
            .trim()
            .to_ascii_lowercase();
        match name.as_str() {
            "int" | "integer" => Some(CastType::Int),
            "bool" | "boolean" => Some(CastType::Bool),
            "float" | "double" | "real" => Some(CastType::Float),
            "string" => Some(CastType::String),
            "array" => Some(CastType::Array),
            "object" => Some(CastType::Object),
            "unset" => Some(CastType::Unset),
            "binary" => Some(CastType::Binary),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CastType::Int => "int",
            CastType::Bool => "bool",
            CastType::Float => "float",
            CastType::String => "string",
            CastType::Array => "array",
            CastType::Object => "object",
            CastType::Unset => "unset",
            CastType::Binary => "binary",
        }
    }
}

/// 単項演算子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryOp {
    Negate,
    Plus,
    Not,
    BitNot,
    Reference,
    Increment,
    Decrement,
    /// エラー抑制演算子 `@`
    Silence,
    Clone,
    Cast(CastType),
}

impl UnaryOp {
    /// 前置演算子としての優先順位
    pub fn precedence(self) -> Precedence {
        match self {
            UnaryOp::Not => Precedence::LogicalNot,
            _ => Precedence::Unary,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Negate => f.write_str("-"),
            UnaryOp::Plus => f.write_str("+"),
            UnaryOp::Not => f.write_str("!"),
            UnaryOp::BitNot => f.write_str("~"),
            UnaryOp::Reference => f.write_str("&"),
            UnaryOp::Increment => f.write_str("++"),
            UnaryOp::Decrement => f.write_str("--"),
            UnaryOp::Silence => f.write_str("@"),
            UnaryOp::Clone => f.write_str("clone"),
            UnaryOp::Cast(ty) => write!(f, "({})", ty.as_str()),
        }
    }
}
