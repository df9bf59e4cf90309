//! 演算子と特殊形式ごとのサブパーサー
//!
//! 演算ループ（`expr_parser`）から呼ばれ、被演算子の確定や右辺の解析を受け持つ。

mod binary_expr;
mod complex_expr;
mod literal_expr;
mod postfix_expr;
mod unary_expr;
