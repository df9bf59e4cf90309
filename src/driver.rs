//! 解析のメイン処理モジュール
//!
//! このモジュールは、ソース全体を `;` で区切られた式の並びとして解析し、
//! 失敗した式を読み飛ばしながら複数のエラーを蓄積する機能を提供します。

use crate::ast::Expression;
use crate::error::{ErrorCollector, ParserError, PhpExprError, PhpExprResult};
use crate::lexer::{tokenize, TokenKind};
use crate::parser::{ParseResult, Parser, ParserConfig};
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term::termcolor::{ColorChoice, NoColor, StandardStream};
use std::fs;
use std::path::Path;

/// 一つのソースファイルの解析状態を管理する構造体
pub struct ParseSession {
    pub source_name: String,
    pub source: String,
    pub files: SimpleFiles<String, String>,
    pub file_id: usize,
    pub error_collector: ErrorCollector,
    config: ParserConfig,
}

impl ParseSession {
    /// ファイルから解析状態を作成
    pub fn new<P: AsRef<Path>>(source_file: P) -> PhpExprResult<Self> {
        let source_name = source_file.as_ref().display().to_string();
        let source = fs::read_to_string(source_file.as_ref())
            .map_err(|e| PhpExprError::Io(format!("ソースファイルを読み込めません: {}", e)))?;
        Ok(Self::from_string(&source_name, source))
    }

    /// 文字列から解析状態を作成
    pub fn from_string(name: &str, source: String) -> Self {
        let mut files = SimpleFiles::new();
        let file_id = files.add(name.to_string(), source.clone());

        Self {
            source_name: name.to_string(),
            source,
            files,
            file_id,
            error_collector: ErrorCollector::new(),
            config: ParserConfig::default(),
        }
    }

    pub fn with_config(mut self, config: ParserConfig) -> Self {
        self.config = config;
        self
    }

    /// エラーを追加
    pub fn add_error(&mut self, error: PhpExprError) {
        self.error_collector.add_error(error, self.file_id);
    }

    /// ソース中の式をすべて解析する
    ///
    /// 失敗した式は次の `;` まで読み飛ばし、エラーとして記録する。
    pub fn parse(&mut self) -> Vec<Expression> {
        log::debug!("parsing {}", self.source_name);

        let tokens = match tokenize(&self.source) {
            Ok(tokens) => tokens,
            Err(e) => {
                self.add_error(e.into());
                return Vec::new();
            }
        };

        let mut parser = Parser::with_config(tokens, self.config);
        let mut expressions = Vec::new();
        while !parser.is_at_end() {
            // 空文
            if parser.match_token(TokenKind::Semicolon) {
                continue;
            }

            let start = parser.consumed();
            match parse_terminated(&mut parser) {
                Ok(expr) => expressions.push(expr),
                Err(e) => {
                    log::debug!("recovering after error: {}", e);
                    self.add_error(e.into());
                    parser.recover(start, TokenKind::Semicolon);
                }
            }
        }

        log::debug!(
            "parsed {} expressions with {} errors",
            expressions.len(),
            self.error_count()
        );
        expressions
    }

    /// 診断情報を標準エラー出力に報告
    pub fn report_diagnostics(&self) -> PhpExprResult<()> {
        let writer = StandardStream::stderr(ColorChoice::Auto);
        let config = codespan_reporting::term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(&mut writer.lock(), &config, &self.files, &diagnostic)
                .map_err(|e| PhpExprError::Io(format!("診断情報を出力できません: {}", e)))?;
        }

        Ok(())
    }

    /// 診断情報を色なしの文字列として描画
    pub fn render_diagnostics(&self) -> PhpExprResult<String> {
        let mut writer = NoColor::new(Vec::new());
        let config = codespan_reporting::term::Config::default();

        for error in self.error_collector.errors() {
            let diagnostic = error.to_diagnostic();
            codespan_reporting::term::emit(&mut writer, &config, &self.files, &diagnostic)
                .map_err(|e| PhpExprError::Io(format!("診断情報を出力できません: {}", e)))?;
        }

        String::from_utf8(writer.into_inner()).map_err(|e| PhpExprError::Other(e.to_string()))
    }

    /// エラーがあるかチェック
    pub fn has_errors(&self) -> bool {
        self.error_collector.has_errors()
    }

    /// エラー数を取得
    pub fn error_count(&self) -> usize {
        self.error_collector.error_count()
    }
}

/// 式を一つ解析し、`;` または入力の終端を要求する
fn parse_terminated(parser: &mut Parser) -> ParseResult<Expression> {
    let expr = parser.parse_expression()?;
    if parser.match_token(TokenKind::Semicolon) || parser.is_at_end() {
        return Ok(expr);
    }
    let found = parser.current_token();
    Err(ParserError::UnexpectedToken {
        expected: TokenKind::Semicolon.to_string(),
        found: found.to_string(),
        span: found.span.clone().into(),
    })
}

/// ソース全体を解析し、最初のエラーがあればそれを返す
pub fn parse_source(source: &str, config: ParserConfig) -> PhpExprResult<Vec<Expression>> {
    let mut session = ParseSession::from_string("<input>", source.to_string()).with_config(config);
    let expressions = session.parse();
    match session.error_collector.first_error() {
        Some(error) => Err(error.error.clone()),
        None => Ok(expressions),
    }
}

/// 式をちょうど一つ解析する（末尾の `;` は省略可）
pub fn parse_expression_str(source: &str) -> PhpExprResult<Expression> {
    parse_expression_with_config(source, ParserConfig::default())
}

/// 設定を指定して式をちょうど一つ解析する
pub fn parse_expression_with_config(source: &str, config: ParserConfig) -> PhpExprResult<Expression> {
    let tokens = tokenize(source)?;
    let mut parser = Parser::with_config(tokens, config);
    let expr = parser.parse_expression()?;
    parser.match_token(TokenKind::Semicolon);
    if !parser.is_at_end() {
        let found = parser.current_token();
        return Err(ParserError::UnexpectedToken {
            expected: TokenKind::Eof.to_string(),
            found: found.to_string(),
            span: found.span.clone().into(),
        }
        .into());
    }
    Ok(expr)
}
