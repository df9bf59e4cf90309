//! Canonical source rendering of expressions.
//!
//! The printer only inserts the parentheses needed to preserve the tree shape,
//! so parsing the rendered text yields an equal tree.

use std::fmt;

use super::*;

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Literal(lit) => f.write_str(&lit.value),
            Expression::Variable(var) => write!(f, "{}", var),
            Expression::Constant(constant) => f.write_str(&constant.name),
            Expression::Identifier(ident) => f.write_str(&ident.name),
            Expression::Array(array) => write!(f, "{}", array),
            Expression::ArrayLookup(lookup) => {
                write_receiver(f, &lookup.receiver)?;
                let (open, close) = match lookup.style {
                    LookupStyle::Bracket => ("[", "]"),
                    LookupStyle::Brace => ("{", "}"),
                };
                f.write_str(open)?;
                if let Some(index) = &lookup.index {
                    write!(f, "{}", index)?;
                }
                f.write_str(close)
            }
            Expression::ObjectLookup(lookup) => {
                write_receiver(f, &lookup.receiver)?;
                f.write_str("->")?;
                match lookup.member.as_ref() {
                    Expression::Identifier(ident) => f.write_str(&ident.name),
                    Expression::Variable(var) => write!(f, "{}", var),
                    other => write!(f, "{{{}}}", other),
                }
            }
            Expression::Class(class) => {
                match class.receiver.as_ref() {
                    Expression::Identifier(ident) => f.write_str(&ident.name)?,
                    // `FOO::x` would read back as a class name
                    Expression::Constant(_) => write_operand(f, &class.receiver, true)?,
                    receiver => write_receiver(f, receiver)?,
                }
                f.write_str("::")?;
                match class.member.as_ref() {
                    Expression::Identifier(ident) => f.write_str(&ident.name),
                    Expression::Variable(var) => write!(f, "{}", var),
                    other => write!(f, "{{{}}}", other),
                }
            }
            Expression::Call(call) => {
                match call.callee.as_ref() {
                    Expression::Identifier(ident) => f.write_str(&ident.name)?,
                    Expression::Constant(_) => write_operand(f, &call.callee, true)?,
                    callee => write_receiver(f, callee)?,
                }
                write!(f, "({})", comma_separated(&call.arguments))
            }
            Expression::Unary(unary) => write!(f, "{}", unary),
            Expression::Binary(binary) => {
                let prec = binary.op.precedence();
                write_operand(f, &binary.left, binary.left.precedence() < prec)?;
                write!(f, " {} ", binary.op)?;
                write_operand(f, &binary.right, binary.right.precedence() <= prec)
            }
            Expression::Ternary(ternary) => {
                write_operand(
                    f,
                    &ternary.condition,
                    ternary.condition.precedence() <= Precedence::Ternary,
                )?;
                match &ternary.if_true {
                    Some(if_true) => write!(f, " ? {} : ", if_true)?,
                    None => f.write_str(" ?: ")?,
                }
                write_operand(
                    f,
                    &ternary.if_false,
                    ternary.if_false.precedence() < Precedence::Ternary,
                )
            }
            Expression::Assignment(assign) => {
                write!(f, "{} {} ", assign.assignee.as_expression(), assign.op)?;
                write_operand(
                    f,
                    &assign.value,
                    assign.value.precedence() < Precedence::Assignment,
                )
            }
            Expression::Include(include) => {
                write!(f, "{} ", include.kind.as_str())?;
                for (i, expr) in include.expressions.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_operand(f, expr, expr.precedence() == Precedence::Lowest)?;
                }
                Ok(())
            }
            Expression::ShellCommand(shell) => write!(f, "`{}`", shell.command),
            Expression::Instantiation(new) => {
                write!(f, "new {}({})", new.class, comma_separated(&new.arguments))
            }
            Expression::AnonymousFunction(function) => write!(f, "{}", function),
            Expression::List(list) => {
                f.write_str("list(")?;
                for (i, target) in list.targets.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(target) = target {
                        write!(f, "{}", target)?;
                    }
                }
                // A trailing empty slot needs its own comma to survive re-parsing
                if matches!(list.targets.last(), Some(None)) {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.name {
            VariableName::Named(name) => write!(f, "${}", name),
            VariableName::Dynamic(inner) => match inner.as_ref() {
                Expression::Variable(var) => write!(f, "${}", var),
                other => write!(f, "${{{}}}", other),
            },
        }
    }
}

impl fmt::Display for ArrayDeclaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open, close) = match self.syntax {
            ArraySyntax::Long => ("array(", ")"),
            ArraySyntax::Short => ("[", "]"),
        };
        f.write_str(open)?;
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if let Some(key) = &element.key {
                write!(f, "{} => ", element_part(key))?;
            }
            if element.by_reference {
                f.write_str("&")?;
            }
            f.write_str(&element_part(&element.value))?;
        }
        f.write_str(close)
    }
}

impl fmt::Display for UnaryExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.side {
            UnarySide::Prefix => {
                match self.op {
                    UnaryOp::Cast(_) | UnaryOp::Clone => write!(f, "{} ", self.op)?,
                    _ => write!(f, "{}", self.op)?,
                }
                // `- -$a` must not collapse into `--$a`
                let nested_prefix = matches!(
                    self.operand.as_ref(),
                    Expression::Unary(UnaryExpr {
                        side: UnarySide::Prefix,
                        ..
                    })
                );
                let parens = nested_prefix || self.operand.precedence() < self.op.precedence();
                write_operand(f, &self.operand, parens)
            }
            UnarySide::Postfix => {
                write_operand(
                    f,
                    &self.operand,
                    self.operand.precedence() < Precedence::ArrayLookup,
                )?;
                write!(f, "{}", self.op)
            }
        }
    }
}

impl fmt::Display for TypeHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.nullable {
            f.write_str("?")?;
        }
        f.write_str(&self.name)
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(hint) = &self.type_hint {
            write!(f, "{} ", hint)?;
        }
        if self.by_reference {
            f.write_str("&")?;
        }
        if self.variadic {
            f.write_str("...")?;
        }
        write!(f, "${}", self.name)?;
        if let Some(default) = &self.default {
            write!(f, " = {}", default)?;
        }
        Ok(())
    }
}

impl fmt::Display for AnonymousFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("function ")?;
        if self.by_reference {
            f.write_str("&")?;
        }
        f.write_str("(")?;
        for (i, param) in self.parameters.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", param)?;
        }
        f.write_str(")")?;
        if !self.uses.is_empty() {
            f.write_str(" use (")?;
            for (i, captured) in self.uses.iter().enumerate() {
                if i > 0 {
                    f.write_str(", ")?;
                }
                if captured.by_reference {
                    f.write_str("&")?;
                }
                write!(f, "${}", captured.name)?;
            }
            f.write_str(")")?;
        }
        if let Some(ret) = &self.return_type {
            write!(f, ": {}", ret)?;
        }
        if self.body.is_empty() {
            f.write_str(" {}")
        } else {
            write!(f, " {{ {} }}", self.body.join(" "))
        }
    }
}

/// Receivers of `->`, `[]`, `::` and calls print bare only when the parser
/// would read them back as the same chain head.
fn write_receiver(f: &mut fmt::Formatter<'_>, receiver: &Expression) -> fmt::Result {
    let bare = matches!(
        receiver,
        Expression::Variable(_)
            | Expression::Array(_)
            | Expression::ArrayLookup(_)
            | Expression::ObjectLookup(_)
            | Expression::Class(_)
            | Expression::Call(_)
            | Expression::Constant(_)
            | Expression::Identifier(_)
    );
    write_operand(f, receiver, !bare)
}

fn write_operand(f: &mut fmt::Formatter<'_>, expr: &Expression, parens: bool) -> fmt::Result {
    if parens {
        write!(f, "({})", expr)
    } else {
        write!(f, "{}", expr)
    }
}

/// `include` swallows the rest of a comma list, so it is wrapped inside one
fn list_item(expr: &Expression) -> String {
    if expr.precedence() == Precedence::Lowest {
        format!("({})", expr)
    } else {
        expr.to_string()
    }
}

/// A leading `&` in an array element would read back as a by-reference element
fn element_part(expr: &Expression) -> String {
    match expr {
        Expression::Unary(UnaryExpr {
            op: UnaryOp::Reference,
            side: UnarySide::Prefix,
            ..
        }) => format!("({})", expr),
        _ => list_item(expr),
    }
}

fn comma_separated(exprs: &[Expression]) -> String {
    exprs.iter().map(list_item).collect::<Vec<_>>().join(", ")
}
