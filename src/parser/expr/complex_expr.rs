//! 複合式の解析
//!
//! 配列宣言、`new`、`include`、`list(...)`、無名関数を扱う。

use crate::ast::*;
use crate::error::ParserError;
use crate::lexer::TokenKind;
use crate::parser::{ParseResult, Parser};

impl Parser {
    /// 配列宣言（`array` または `[` は消費済み）
    pub(in crate::parser) fn parse_array_declaration(&mut self, syntax: ArraySyntax) -> ParseResult<Expression> {
        let close = match syntax {
            ArraySyntax::Long => {
                self.expect(TokenKind::LeftParen)?;
                TokenKind::RightParen
            }
            ArraySyntax::Short => TokenKind::RightBracket,
        };

        let mut elements = Vec::new();
        while !self.check(close) {
            elements.push(self.parse_array_element()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(close)?;

        Ok(Expression::Array(ArrayDeclaration { elements, syntax }))
    }

    /// `value`、`&value`、`key => value`、`key => &value`
    fn parse_array_element(&mut self) -> ParseResult<ArrayElement> {
        if self.match_token(TokenKind::Ampersand) {
            let value = self.parse_expression_internal()?;
            return Ok(ArrayElement {
                key: None,
                value,
                by_reference: true,
            });
        }

        let first = self.parse_expression_internal()?;
        if !self.match_token(TokenKind::DoubleArrow) {
            return Ok(ArrayElement {
                key: None,
                value: first,
                by_reference: false,
            });
        }

        let by_reference = self.match_token(TokenKind::Ampersand);
        let value = self.parse_expression_internal()?;
        Ok(ArrayElement {
            key: Some(first),
            value,
            by_reference,
        })
    }

    /// `new` 式
    pub(in crate::parser) fn parse_instantiation(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::New)?;
        let class = self.parse_class_reference()?;
        let arguments = if self.match_token(TokenKind::LeftParen) {
            self.parse_arguments()?
        } else {
            Vec::new()
        };
        log::trace!("instantiation of {}", class);

        Ok(Expression::Instantiation(Instantiation {
            class: Box::new(class),
            arguments,
        }))
    }

    /// `new` の直後のクラス参照
    ///
    /// 変数の場合は `->`、`[]`、`::$x` のチェーンのみ許し、呼び出しは引数リストとして残す。
    fn parse_class_reference(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        match token.kind {
            TokenKind::Identifier | TokenKind::SelfKeyword | TokenKind::Static | TokenKind::Parent => {
                Ok(Expression::identifier(token.text))
            }
            TokenKind::VariableOperator => {
                let base = self.depth;
                let result = self.parse_variable_class_chain();
                self.depth = base;
                result
            }
            _ => Err(self.unexpected(&token, "クラス名")),
        }
    }

    /// `new $x` の後の `->`、`[]`、`::$y` の連なり
    fn parse_variable_class_chain(&mut self) -> ParseResult<Expression> {
        let mut class = self.parse_variable()?;
        loop {
            let token = self.advance();
            if matches!(token.kind, TokenKind::Arrow | TokenKind::LeftBracket | TokenKind::DoubleColon) {
                self.deepen()?;
            }
            class = match token.kind {
                TokenKind::Arrow => {
                    let member = self.parse_object_member()?;
                    Expression::object_lookup(class, member)
                }
                TokenKind::LeftBracket => {
                    let index = self.parse_bracket_index()?;
                    Expression::array_lookup(class, index)
                }
                TokenKind::DoubleColon if self.check(TokenKind::VariableOperator) => {
                    self.advance();
                    let member = self.parse_variable()?;
                    Expression::class(class, member)
                }
                _ => {
                    self.backup();
                    return Ok(class);
                }
            };
        }
    }

    /// `include` 系ディレクティブ
    pub(in crate::parser) fn parse_include(&mut self) -> ParseResult<Expression> {
        let token = self.advance();
        let kind = match token.kind {
            TokenKind::Include => IncludeKind::Include,
            TokenKind::IncludeOnce => IncludeKind::IncludeOnce,
            TokenKind::Require => IncludeKind::Require,
            TokenKind::RequireOnce => IncludeKind::RequireOnce,
            _ => return Err(self.unexpected(&token, "include")),
        };

        let mut expressions = vec![self.parse_expression_internal()?];
        while self.match_token(TokenKind::Comma) {
            expressions.push(self.parse_expression_internal()?);
        }

        Ok(Expression::Include(IncludeExpr { kind, expressions }))
    }

    /// `list(...)` による分割代入の対象
    ///
    /// 続く `= value` は演算ループが畳み込む。
    pub(in crate::parser) fn parse_list(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::List)?;
        self.expect(TokenKind::LeftParen)?;

        let mut targets = Vec::new();
        loop {
            if self.match_token(TokenKind::Comma) {
                targets.push(None);
                continue;
            }
            if self.check(TokenKind::RightParen) {
                break;
            }

            let start = self.cursor.current().span.start;
            let target = self.parse_expression_internal()?;
            if !target.is_assignable() {
                return Err(ParserError::NotAssignable {
                    expression: target.to_string(),
                    span: self.span_from(start),
                });
            }
            targets.push(Some(target));

            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;

        Ok(Expression::List(ListExpr { targets }))
    }

    /// 無名関数。本体は波括弧の対応だけを見て字句列として保持する。
    pub(in crate::parser) fn parse_anonymous_function(&mut self) -> ParseResult<Expression> {
        self.expect(TokenKind::Function)?;
        let by_reference = self.match_token(TokenKind::Ampersand);

        self.expect(TokenKind::LeftParen)?;
        let mut parameters = Vec::new();
        while !self.check(TokenKind::RightParen) {
            parameters.push(self.parse_parameter()?);
            if !self.match_token(TokenKind::Comma) {
                break;
            }
        }
        self.expect(TokenKind::RightParen)?;

        let mut uses = Vec::new();
        if self.match_token(TokenKind::Use) {
            self.expect(TokenKind::LeftParen)?;
            while !self.check(TokenKind::RightParen) {
                let by_reference = self.match_token(TokenKind::Ampersand);
                self.expect(TokenKind::VariableOperator)?;
                let name = self.expect_name()?.text;
                uses.push(ClosureUse { by_reference, name });
                if !self.match_token(TokenKind::Comma) {
                    break;
                }
            }
            self.expect(TokenKind::RightParen)?;
        }

        let return_type = if self.match_token(TokenKind::Colon) {
            Some(self.parse_type_hint()?)
        } else {
            None
        };

        let body = self.parse_opaque_body()?;

        Ok(Expression::AnonymousFunction(AnonymousFunction {
            by_reference,
            parameters,
            uses,
            return_type,
            body,
        }))
    }

    /// `?Type &...$name = default`
    fn parse_parameter(&mut self) -> ParseResult<Parameter> {
        let type_hint = if self.check(TokenKind::Question) || self.cursor.current().kind.is_name() {
            Some(self.parse_type_hint()?)
        } else {
            None
        };
        let by_reference = self.match_token(TokenKind::Ampersand);
        let variadic = self.match_token(TokenKind::Ellipsis);
        self.expect(TokenKind::VariableOperator)?;
        let name = self.expect_name()?.text;
        let default = if self.match_token(TokenKind::Assign) {
            Some(self.parse_expression_internal()?)
        } else {
            None
        };

        Ok(Parameter {
            type_hint,
            by_reference,
            variadic,
            name,
            default,
        })
    }

    fn parse_type_hint(&mut self) -> ParseResult<TypeHint> {
        let nullable = self.match_token(TokenKind::Question);
        let name = self.expect_name()?.text;
        Ok(TypeHint { nullable, name })
    }

    /// `{ ... }` の内側の字句列
    fn parse_opaque_body(&mut self) -> ParseResult<Vec<String>> {
        self.expect(TokenKind::LeftBrace)?;
        let mut depth = 1usize;
        let mut body = Vec::new();
        loop {
            let token = self.advance();
            match token.kind {
                TokenKind::LeftBrace => depth += 1,
                TokenKind::RightBrace => {
                    depth -= 1;
                    if depth == 0 {
                        return Ok(body);
                    }
                }
                TokenKind::Eof => return Err(self.unexpected(&token, &TokenKind::RightBrace.to_string())),
                _ => {}
            }
            body.push(token.text);
        }
    }
}
