//! エラー型と診断情報
//!
//! 字句解析・構文解析のエラーはすべてソース上のスパンを持ち、
//! codespan-reporting の診断に変換して表示できる。

use crate::ast::Span;
use codespan_reporting::diagnostic::{Diagnostic, Label};
use thiserror::Error;

/// phpexprの統一エラー型
#[derive(Error, Debug, Clone)]
pub enum PhpExprError {
    /// レキサーエラー
    #[error("字句解析エラー: {0}")]
    Lexer(#[from] LexerError),

    /// パーサーエラー
    #[error("構文解析エラー: {0}")]
    Parser(#[from] ParserError),

    /// ファイルI/Oエラー
    #[error("ファイル操作エラー: {0}")]
    Io(String),

    /// その他のエラー
    #[error("{0}")]
    Other(String),
}

impl PhpExprError {
    /// エラー位置（位置を持たないエラーでは `None`）
    pub fn span(&self) -> Option<Span> {
        match self {
            PhpExprError::Lexer(e) => Some(e.span()),
            PhpExprError::Parser(e) => Some(e.span()),
            PhpExprError::Io(_) | PhpExprError::Other(_) => None,
        }
    }
}

/// レキサーエラーの詳細
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LexerError {
    #[error("認識できないトークン: '{token}'")]
    UnrecognizedToken { token: String, span: Span },

    #[error("未終了の文字列リテラル（{quote}）")]
    UnterminatedString { quote: char, span: Span },
}

impl LexerError {
    pub fn span(&self) -> Span {
        match self {
            LexerError::UnrecognizedToken { span, .. } | LexerError::UnterminatedString { span, .. } => *span,
        }
    }
}

/// パーサーエラーの詳細
///
/// どのエラーも現在の式の解析を打ち切る。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParserError {
    #[error("予期しないトークン: {expected}を期待しましたが、{found}が見つかりました")]
    UnexpectedToken {
        expected: String,
        found: String,
        span: Span,
    },

    #[error("式を期待しましたが、{found}が見つかりました")]
    ExpectedExpression { found: String, span: Span },

    #[error("括弧の対応が取れていません: 深さ{original}で開始しましたが、深さ{level}で終了しました")]
    UnbalancedParens {
        level: usize,
        original: usize,
        span: Span,
    },

    #[error("代入できない式です: {expression}")]
    NotAssignable { expression: String, span: Span },

    #[error("不明なリテラル: {found}")]
    UnknownLiteral { found: String, span: Span },

    #[error("式の入れ子が深すぎます（上限 {limit}）")]
    TooDeeplyNested { limit: usize, span: Span },
}

impl ParserError {
    pub fn span(&self) -> Span {
        match self {
            ParserError::UnexpectedToken { span, .. }
            | ParserError::ExpectedExpression { span, .. }
            | ParserError::UnbalancedParens { span, .. }
            | ParserError::NotAssignable { span, .. }
            | ParserError::UnknownLiteral { span, .. }
            | ParserError::TooDeeplyNested { span, .. } => *span,
        }
    }
}

/// エラー情報とソースコードの位置情報を含むエラー
#[derive(Debug, Clone)]
pub struct DiagnosticError {
    pub error: PhpExprError,
    pub file_id: usize,
}

impl DiagnosticError {
    pub fn new(error: PhpExprError, file_id: usize) -> Self {
        Self { error, file_id }
    }

    /// codespan-reportingのDiagnosticに変換
    pub fn to_diagnostic(&self) -> Diagnostic<usize> {
        let (message, labels) = match &self.error {
            PhpExprError::Lexer(e) => match e {
                LexerError::UnrecognizedToken { token, span } => (
                    format!("認識できないトークン: '{}'", token),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("ここに不正なトークンがあります")],
                ),
                LexerError::UnterminatedString { span, .. } => (
                    e.to_string(),
                    vec![Label::primary(self.file_id, span.start..span.end)
                        .with_message("文字列が閉じられていません")],
                ),
            },
            PhpExprError::Parser(e) => {
                let span = e.span();
                let label = Label::primary(self.file_id, span.start..span.end);
                let label = match e {
                    ParserError::NotAssignable { .. } => label.with_message("この式には代入できません"),
                    ParserError::UnbalancedParens { .. } => label.with_message("ここで式が終了しました"),
                    ParserError::ExpectedExpression { .. } => label.with_message("ここに式が必要です"),
                    _ => label,
                };
                (e.to_string(), vec![label])
            }
            PhpExprError::Io(message) => (format!("ファイル操作エラー: {}", message), vec![]),
            PhpExprError::Other(message) => (message.clone(), vec![]),
        };

        Diagnostic::error().with_message(message).with_labels(labels)
    }
}

/// 回復しながら解析したときのエラーを順に溜める
#[derive(Debug, Default)]
pub struct ErrorCollector {
    errors: Vec<DiagnosticError>,
}

impl ErrorCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: PhpExprError, file_id: usize) {
        self.errors.push(DiagnosticError::new(error, file_id));
    }

    /// エラーがあるかどうか
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// エラーの数
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// すべてのエラーを取得
    pub fn errors(&self) -> &[DiagnosticError] {
        &self.errors
    }

    /// 最初のエラーを取得
    pub fn first_error(&self) -> Option<&DiagnosticError> {
        self.errors.first()
    }
}

/// Result型のエイリアス
pub type PhpExprResult<T> = Result<T, PhpExprError>;

impl From<std::io::Error> for PhpExprError {
    fn from(e: std::io::Error) -> Self {
        PhpExprError::Io(e.to_string())
    }
}
