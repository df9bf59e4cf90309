//! パーサーモジュール
//!
//! このモジュールはトークン列を一つの式の抽象構文木（AST）に解析します。
//! 被演算子の解決は再帰下降で、演算子の畳み込みは優先順位の下限を
//! 引き上げていく演算ループで行います。
//!
//! ```text
//! $a = $b->c[0] + foo(1) * 2 ?: null
//! ```
//!
//! のような式は、被演算子（`$b->c[0]`、`foo(1)` など）を先に確定させてから、
//! 演算ループが `*`、`+`、`?:`、`=` の順に左辺へ畳み込みます。

mod config;
mod cursor;
mod expr;
mod expr_parser;
mod operation;
mod parser_impl;

// 公開API
pub use config::{ParserConfig, DEFAULT_MAX_DEPTH};
pub use cursor::TokenCursor;
pub use operation::{prefix_operator, Operation};
pub use parser_impl::Parser;

use crate::error::ParserError;
pub type ParseError = ParserError;
pub type ParseResult<T> = Result<T, ParseError>;
