//! phpexpr: expression parser for a PHP-family scripting language
//!
//! This library turns PHP expression source into a typed AST, resolving
//! operator precedence, associativity and the language's special forms.

pub mod ast;
pub mod driver;
pub mod error;
pub mod lexer;
pub mod parser;

// Re-export commonly used types
pub use ast::{Assignable, Expression, Precedence};
pub use driver::{parse_expression_str, parse_source, ParseSession};
pub use error::{ErrorCollector, LexerError, ParserError, PhpExprError, PhpExprResult};
pub use lexer::{tokenize, Lexer, Token, TokenKind};
pub use parser::{ParseError, ParseResult, Parser, ParserConfig};
