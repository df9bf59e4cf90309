//! トークン定義

use logos::Logos;
use std::fmt;

/// PHP式の文法のトークン種別
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[logos(skip r"[ \t\r\n\f]+")] // 空白文字をスキップ
pub enum TokenKind {
    // 変数の `$`（名前は別のトークンとして続く）
    #[token("$")]
    VariableOperator,

    // キーワード（大文字小文字を区別しない）
    #[token("array", ignore(ascii_case))]
    Array,
    #[token("list", ignore(ascii_case))]
    List,
    #[token("new", ignore(ascii_case))]
    New,
    #[token("function", ignore(ascii_case))]
    Function,
    #[token("use", ignore(ascii_case))]
    Use,
    #[token("include", ignore(ascii_case))]
    Include,
    #[token("include_once", ignore(ascii_case))]
    IncludeOnce,
    #[token("require", ignore(ascii_case))]
    Require,
    #[token("require_once", ignore(ascii_case))]
    RequireOnce,
    #[token("self", ignore(ascii_case))]
    SelfKeyword,
    #[token("static", ignore(ascii_case))]
    Static,
    #[token("parent", ignore(ascii_case))]
    Parent,
    #[token("instanceof", ignore(ascii_case))]
    Instanceof,
    #[token("clone", ignore(ascii_case))]
    Clone,
    #[token("and", ignore(ascii_case))]
    WrittenAnd,
    #[token("or", ignore(ascii_case))]
    WrittenOr,
    #[token("xor", ignore(ascii_case))]
    WrittenXor,

    // リテラル
    #[token("true", ignore(ascii_case))]
    #[token("false", ignore(ascii_case))]
    BooleanLiteral,
    #[token("null", ignore(ascii_case))]
    Null,
    #[regex(r"[0-9][0-9_]*")]
    #[regex(r"0[xX][0-9a-fA-F][0-9a-fA-F_]*")]
    #[regex(r"0[bB][01][01_]*")]
    #[regex(r"([0-9][0-9_]*)?\.[0-9][0-9_]*([eE][+-]?[0-9]+)?")]
    #[regex(r"[0-9][0-9_]*[eE][+-]?[0-9]+")]
    NumberLiteral,
    #[regex(r"'([^'\\]|\\.)*'")]
    #[regex(r#""([^"\\]|\\.)*""#)]
    StringLiteral,
    #[regex(r"`([^`\\]|\\.)*`")]
    ShellCommand,

    // 識別子（名前空間修飾を含む。キーワードより優先度を下げる）
    #[regex(
        r"\\?[a-zA-Z_][a-zA-Z0-9_]*(\\[a-zA-Z_][a-zA-Z0-9_]*)*",
        priority = 1
    )]
    Identifier,

    // キャスト
    #[regex(
        r"\([ \t]*(int|integer|bool|boolean|float|double|real|string|array|object|unset|binary)[ \t]*\)",
        ignore(ascii_case)
    )]
    Cast,

    // 算術・文字列演算子
    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("%")]
    Percent,
    #[token(".")]
    Dot,
    #[token("<<")]
    ShiftLeft,
    #[token(">>")]
    ShiftRight,

    // 比較演算子
    #[token("<")]
    Less,
    #[token(">")]
    Greater,
    #[token("<=")]
    LessEqual,
    #[token(">=")]
    GreaterEqual,
    #[token("==")]
    Equal,
    #[token("!=")]
    #[token("<>")]
    NotEqual,
    #[token("===")]
    Identical,
    #[token("!==")]
    NotIdentical,

    // ビット演算子・論理演算子
    #[token("&")]
    Ampersand,
    #[token("^")]
    Caret,
    #[token("|")]
    Pipe,
    #[token("&&")]
    AndAnd,
    #[token("||")]
    OrOr,
    #[token("!")]
    Bang,
    #[token("~")]
    Tilde,
    #[token("@")]
    At,
    #[token("++")]
    Increment,
    #[token("--")]
    Decrement,

    // 三項演算子
    #[token("?")]
    Question,
    #[token(":")]
    Colon,

    // 代入演算子
    #[token("=")]
    Assign,
    #[token("+=")]
    PlusAssign,
    #[token("-=")]
    MinusAssign,
    #[token("*=")]
    StarAssign,
    #[token("/=")]
    SlashAssign,
    #[token(".=")]
    DotAssign,
    #[token("%=")]
    PercentAssign,
    #[token("&=")]
    AmpersandAssign,
    #[token("|=")]
    PipeAssign,
    #[token("^=")]
    CaretAssign,
    #[token("<<=")]
    ShiftLeftAssign,
    #[token(">>=")]
    ShiftRightAssign,

    // メンバアクセス
    #[token("->")]
    Arrow,
    #[token("::")]
    DoubleColon,
    #[token("=>")]
    DoubleArrow,
    #[token("...")]
    Ellipsis,

    // 区切り文字
    #[token("(")]
    LeftParen,
    #[token(")")]
    RightParen,
    #[token("[")]
    LeftBracket,
    #[token("]")]
    RightBracket,
    #[token("{")]
    LeftBrace,
    #[token("}")]
    RightBrace,
    #[token(",")]
    Comma,
    #[token(";")]
    Semicolon,

    // 入力の終端（logos自体は生成しない）
    Eof,

    // コメントと開始タグ（スキップ）
    #[regex(r"//[^\n]*", logos::skip)]
    #[regex(r"#[^\n]*", logos::skip)]
    #[regex(r"/\*([^*]|\*+[^*/])*\*+/", logos::skip)]
    #[regex(r"<\?php", logos::skip)]
    // 認識できない入力
    Error,
}

impl TokenKind {
    /// `$`・`->`・`::` の後では名前としても使えるキーワード
    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Array
                | TokenKind::List
                | TokenKind::New
                | TokenKind::Function
                | TokenKind::Use
                | TokenKind::Include
                | TokenKind::IncludeOnce
                | TokenKind::Require
                | TokenKind::RequireOnce
                | TokenKind::SelfKeyword
                | TokenKind::Static
                | TokenKind::Parent
                | TokenKind::Instanceof
                | TokenKind::Clone
                | TokenKind::WrittenAnd
                | TokenKind::WrittenOr
                | TokenKind::WrittenXor
                | TokenKind::BooleanLiteral
                | TokenKind::Null
        )
    }

    /// 名前として使えるトークン（識別子またはキーワード）か
    pub fn is_name(self) -> bool {
        self == TokenKind::Identifier || self.is_keyword()
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::VariableOperator => write!(f, "'$'"),
            TokenKind::LeftParen => write!(f, "'('"),
            TokenKind::RightParen => write!(f, "')'"),
            TokenKind::LeftBracket => write!(f, "'['"),
            TokenKind::RightBracket => write!(f, "']'"),
            TokenKind::LeftBrace => write!(f, "'{{'"),
            TokenKind::RightBrace => write!(f, "'}}'"),
            TokenKind::Comma => write!(f, "','"),
            TokenKind::Semicolon => write!(f, "';'"),
            TokenKind::Colon => write!(f, "':'"),
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{:?}", self),
        }
    }
}

/// エラー報告用の位置情報
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Position {
    pub fn new() -> Self {
        Position { line: 1, column: 1 }
    }

    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// 種別・元の字句・位置を持つトークン
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub position: Position,
    pub span: logos::Span,
}

impl Token {
    pub fn new(kind: TokenKind, text: impl Into<String>, position: Position, span: logos::Span) -> Self {
        Self {
            kind,
            text: text.into(),
            position,
            span,
        }
    }

    /// `offset` の位置にある入力終端トークン
    pub fn eof(position: Position, offset: usize) -> Self {
        Self::new(TokenKind::Eof, "", position, offset..offset)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Eof => write!(f, "end of input"),
            _ => write!(f, "{:?}('{}')", self.kind, self.text),
        }
    }
}
