//! 式の定義

use serde::{Deserialize, Serialize};

use super::{AssignOp, BinaryOp, Precedence, UnaryOp};

/// 式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expression {
    Literal(Literal),
    Variable(Variable),
    Constant(ConstantExpr),
    Identifier(Identifier),
    Array(ArrayDeclaration),
    ArrayLookup(ArrayLookup),
    ObjectLookup(ObjectLookup),
    Class(ClassExpr),
    Call(FunctionCall),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Ternary(TernaryExpr),
    Assignment(AssignmentExpr),
    Include(IncludeExpr),
    ShellCommand(ShellCommand),
    Instantiation(Instantiation),
    AnonymousFunction(AnonymousFunction),
    List(ListExpr),
}

/// リテラルの種類
///
/// 数値は基数に関わらずすべて `Float` として扱う。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralType {
    String,
    Boolean,
    Float,
    Null,
}

/// リテラル（値はソース上の字句そのまま）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub ty: LiteralType,
    pub value: String,
}

/// 変数名
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum VariableName {
    /// `$name`
    Named(String),
    /// `$$name` や `${expr}`
    Dynamic(Box<Expression>),
}

/// 変数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Variable {
    pub name: VariableName,
}

/// 定数として参照される裸の識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstantExpr {
    pub name: String,
}

/// 関数名・クラス名・メンバ名の位置に置かれた識別子
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    pub name: String,
}

/// 配列宣言の書き方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ArraySyntax {
    /// `array(...)`
    Long,
    /// `[...]`
    Short,
}

/// 配列要素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayElement {
    pub key: Option<Expression>,
    pub value: Expression,
    pub by_reference: bool,
}

/// 配列宣言
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayDeclaration {
    pub elements: Vec<ArrayElement>,
    pub syntax: ArraySyntax,
}

/// 添字の括弧
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LookupStyle {
    Bracket,
    Brace,
}

/// 配列参照（`$a[]` では添字なし）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayLookup {
    pub receiver: Box<Expression>,
    pub index: Option<Box<Expression>>,
    pub style: LookupStyle,
}

/// オブジェクトのメンバ参照 `receiver->member`
///
/// メンバは `Identifier`、`Variable`、または波括弧で囲まれた任意の式。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectLookup {
    pub receiver: Box<Expression>,
    pub member: Box<Expression>,
}

/// スコープ解決 `receiver::member`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassExpr {
    pub receiver: Box<Expression>,
    pub member: Box<Expression>,
}

/// 関数呼び出し
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub callee: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// 単項演算子の位置
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnarySide {
    Prefix,
    Postfix,
}

/// 単項演算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpr {
    pub op: UnaryOp,
    pub operand: Box<Expression>,
    pub side: UnarySide,
}

/// 二項演算
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpr {
    pub left: Box<Expression>,
    pub op: BinaryOp,
    pub right: Box<Expression>,
}

/// 三項演算（`?:` 省略形では `if_true` なし）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TernaryExpr {
    pub condition: Box<Expression>,
    pub if_true: Option<Box<Expression>>,
    pub if_false: Box<Expression>,
}

/// 代入
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentExpr {
    pub assignee: Assignable,
    pub op: AssignOp,
    pub value: Box<Expression>,
}

/// include 系ディレクティブの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncludeKind {
    Include,
    IncludeOnce,
    Require,
    RequireOnce,
}

impl IncludeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IncludeKind::Include => "include",
            IncludeKind::IncludeOnce => "include_once",
            IncludeKind::Require => "require",
            IncludeKind::RequireOnce => "require_once",
        }
    }
}

/// include 式
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IncludeExpr {
    pub kind: IncludeKind,
    pub expressions: Vec<Expression>,
}

/// バッククォートで囲まれたシェルコマンド（中身のみ保持）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellCommand {
    pub command: String,
}

/// `new` によるインスタンス生成
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instantiation {
    pub class: Box<Expression>,
    pub arguments: Vec<Expression>,
}

/// 型ヒント（`?Foo` なら nullable）
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeHint {
    pub nullable: bool,
    pub name: String,
}

/// 無名関数の引数
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub type_hint: Option<TypeHint>,
    pub by_reference: bool,
    pub variadic: bool,
    pub name: String,
    pub default: Option<Expression>,
}

/// `use (...)` で捕捉する変数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureUse {
    pub by_reference: bool,
    pub name: String,
}

/// 無名関数
///
/// 本体は解析せず、波括弧の内側の字句列をそのまま保持する。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnonymousFunction {
    pub by_reference: bool,
    pub parameters: Vec<Parameter>,
    pub uses: Vec<ClosureUse>,
    pub return_type: Option<TypeHint>,
    pub body: Vec<String>,
}

/// `list(...)` による分割代入の対象（空きスロットは `None`）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListExpr {
    pub targets: Vec<Option<Expression>>,
}

/// 代入の左辺になれる式
///
/// [`Assignable::new`] の検査を通してしか構築できない。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Expression", into = "Expression")]
pub struct Assignable(Box<Expression>);

impl Assignable {
    /// 代入可能でなければ式をそのまま返す
    pub fn new(expr: Expression) -> Result<Self, Expression> {
        if expr.is_assignable() {
            Ok(Self(Box::new(expr)))
        } else {
            Err(expr)
        }
    }

    pub fn as_expression(&self) -> &Expression {
        &self.0
    }

    pub fn into_expression(self) -> Expression {
        *self.0
    }
}

impl TryFrom<Expression> for Assignable {
    type Error = String;

    fn try_from(expr: Expression) -> Result<Self, Self::Error> {
        Assignable::new(expr).map_err(|expr| format!("代入できない式です: {}", expr))
    }
}

impl From<Assignable> for Expression {
    fn from(assignable: Assignable) -> Self {
        assignable.into_expression()
    }
}

impl Expression {
    /// 代入の左辺になれるかどうか
    pub fn is_assignable(&self) -> bool {
        match self {
            Expression::Variable(_)
            | Expression::ArrayLookup(_)
            | Expression::ObjectLookup(_)
            | Expression::List(_) => true,
            // 静的プロパティ `Foo::$bar` のみ
            Expression::Class(class) => matches!(*class.member, Expression::Variable(_)),
            Expression::Literal(_)
            | Expression::Constant(_)
            | Expression::Identifier(_)
            | Expression::Array(_)
            | Expression::Call(_)
            | Expression::Unary(_)
            | Expression::Binary(_)
            | Expression::Ternary(_)
            | Expression::Assignment(_)
            | Expression::Include(_)
            | Expression::ShellCommand(_)
            | Expression::Instantiation(_)
            | Expression::AnonymousFunction(_) => false,
        }
    }

    /// 式全体の結合の強さ（表示時の括弧付けに使う）
    pub fn precedence(&self) -> Precedence {
        match self {
            Expression::Binary(binary) => binary.op.precedence(),
            Expression::Ternary(_) => Precedence::Ternary,
            Expression::Assignment(_) => Precedence::Assignment,
            Expression::Unary(unary) => match unary.side {
                UnarySide::Prefix => unary.op.precedence(),
                UnarySide::Postfix => Precedence::ArrayLookup,
            },
            Expression::Include(_) => Precedence::Lowest,
            Expression::Literal(_)
            | Expression::Variable(_)
            | Expression::Constant(_)
            | Expression::Identifier(_)
            | Expression::Array(_)
            | Expression::ArrayLookup(_)
            | Expression::ObjectLookup(_)
            | Expression::Class(_)
            | Expression::Call(_)
            | Expression::ShellCommand(_)
            | Expression::Instantiation(_)
            | Expression::AnonymousFunction(_)
            | Expression::List(_) => Precedence::Primary,
        }
    }

    pub fn literal(ty: LiteralType, value: impl Into<String>) -> Self {
        Expression::Literal(Literal {
            ty,
            value: value.into(),
        })
    }

    /// 数値リテラル
    pub fn number(value: impl Into<String>) -> Self {
        Self::literal(LiteralType::Float, value)
    }

    /// 文字列リテラル（引用符を含む字句）
    pub fn string(value: impl Into<String>) -> Self {
        Self::literal(LiteralType::String, value)
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(Variable {
            name: VariableName::Named(name.into()),
        })
    }

    pub fn dynamic_variable(name: Expression) -> Self {
        Expression::Variable(Variable {
            name: VariableName::Dynamic(Box::new(name)),
        })
    }

    pub fn constant(name: impl Into<String>) -> Self {
        Expression::Constant(ConstantExpr { name: name.into() })
    }

    pub fn identifier(name: impl Into<String>) -> Self {
        Expression::Identifier(Identifier { name: name.into() })
    }

    pub fn binary(left: Expression, op: BinaryOp, right: Expression) -> Self {
        Expression::Binary(BinaryExpr {
            left: Box::new(left),
            op,
            right: Box::new(right),
        })
    }

    pub fn prefix(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            side: UnarySide::Prefix,
        })
    }

    pub fn postfix(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary(UnaryExpr {
            op,
            operand: Box::new(operand),
            side: UnarySide::Postfix,
        })
    }

    pub fn ternary(condition: Expression, if_true: Option<Expression>, if_false: Expression) -> Self {
        Expression::Ternary(TernaryExpr {
            condition: Box::new(condition),
            if_true: if_true.map(Box::new),
            if_false: Box::new(if_false),
        })
    }

    pub fn array_lookup(receiver: Expression, index: Option<Expression>) -> Self {
        Expression::ArrayLookup(ArrayLookup {
            receiver: Box::new(receiver),
            index: index.map(Box::new),
            style: LookupStyle::Bracket,
        })
    }

    pub fn object_lookup(receiver: Expression, member: Expression) -> Self {
        Expression::ObjectLookup(ObjectLookup {
            receiver: Box::new(receiver),
            member: Box::new(member),
        })
    }

    pub fn class(receiver: Expression, member: Expression) -> Self {
        Expression::Class(ClassExpr {
            receiver: Box::new(receiver),
            member: Box::new(member),
        })
    }

    pub fn call(callee: Expression, arguments: Vec<Expression>) -> Self {
        Expression::Call(FunctionCall {
            callee: Box::new(callee),
            arguments,
        })
    }
}
