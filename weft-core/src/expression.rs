use crate::{ColumnRef, ColumnType, SqlWriter, Value};
use std::borrow::Cow;

#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Null,
    LitBool(bool),
    LitFloat(f64),
    LitIdent(&'static str),
    LitInt(i128),
    LitStr(Cow<'static, str>),
    Column(ColumnRef),
    Type(ColumnType),
    /// Value rendered inline as a literal.
    Variable(Value),
    /// Value bound as a positional parameter, unless the context asks for literal binds.
    Param(Value),
    Asterisk,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOpType {
    Negative,
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOpType {
    Cast,
    Multiplication,
    Division,
    Remainder,
    Addition,
    Subtraction,
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
    Is,
    IsNot,
    Like,
    NotLike,
    And,
    Or,
    Alias,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UnaryOp {
    pub op: UnaryOpType,
    pub arg: Box<Expression>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BinaryOp {
    pub op: BinaryOpType,
    pub lhs: Box<Expression>,
    pub rhs: Box<Expression>,
}

/// SQL functions with a dialect specific spelling get their own variant, everything else is a `Call`.
#[derive(Debug, Clone, PartialEq)]
pub enum Function {
    CurrentTimestamp,
    CurrentDate,
    Call(Cow<'static, str>, Vec<Expression>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    pub name: Cow<'static, str>,
    pub schema: Option<Cow<'static, str>>,
}

impl Sequence {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            schema: None,
        }
    }

    pub fn with_schema(mut self, schema: impl Into<Cow<'static, str>>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn next_value(&self) -> Expression {
        Expression::NextValue(self.clone())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    ASC,
    DESC,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Ordered {
    pub expression: Expression,
    pub order: Order,
}

/// Node of the abstract query tree. Each variant is compiled by its own `SqlWriter` method.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Operand(Operand),
    Unary(UnaryOp),
    Binary(BinaryOp),
    Function(Function),
    NextValue(Sequence),
}

impl Expression {
    pub fn column(name: impl Into<Cow<'static, str>>) -> Self {
        Expression::Operand(Operand::Column(ColumnRef::new(name)))
    }

    pub fn param(value: impl Into<Value>) -> Self {
        Expression::Operand(Operand::Param(value.into()))
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Expression::Operand(Operand::Variable(value.into()))
    }

    pub fn int(value: i128) -> Self {
        Expression::Operand(Operand::LitInt(value))
    }

    pub fn string(value: impl Into<Cow<'static, str>>) -> Self {
        Expression::Operand(Operand::LitStr(value.into()))
    }

    pub fn now() -> Self {
        Expression::Function(Function::CurrentTimestamp)
    }

    pub fn call(name: impl Into<Cow<'static, str>>, args: Vec<Expression>) -> Self {
        Expression::Function(Function::Call(name.into(), args))
    }

    pub fn unary(op: UnaryOpType, arg: impl Into<Expression>) -> Self {
        Expression::Unary(UnaryOp {
            op,
            arg: Box::new(arg.into()),
        })
    }

    pub fn binary(op: BinaryOpType, lhs: impl Into<Expression>, rhs: impl Into<Expression>) -> Self {
        Expression::Binary(BinaryOp {
            op,
            lhs: Box::new(lhs.into()),
            rhs: Box::new(rhs.into()),
        })
    }

    pub fn eq(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOpType::Equal, self, rhs)
    }

    pub fn lt(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOpType::Less, self, rhs)
    }

    pub fn gt(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOpType::Greater, self, rhs)
    }

    pub fn and(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOpType::And, self, rhs)
    }

    pub fn or(self, rhs: impl Into<Expression>) -> Self {
        Self::binary(BinaryOpType::Or, self, rhs)
    }

    pub fn cast(self, column_type: ColumnType) -> Self {
        Self::binary(
            BinaryOpType::Cast,
            self,
            Expression::Operand(Operand::Type(column_type)),
        )
    }

    pub fn alias(self, name: &'static str) -> Self {
        Self::binary(
            BinaryOpType::Alias,
            self,
            Expression::Operand(Operand::LitIdent(name)),
        )
    }

    pub fn asc(self) -> Ordered {
        Ordered {
            expression: self,
            order: Order::ASC,
        }
    }

    pub fn desc(self) -> Ordered {
        Ordered {
            expression: self,
            order: Order::DESC,
        }
    }

    /// Binding strength used to decide parenthesization.
    pub fn precedence(&self, writer: &dyn SqlWriter) -> i32 {
        match self {
            Expression::Unary(v) => writer.expression_unary_op_precedence(&v.op),
            Expression::Binary(v) => writer.expression_binary_op_precedence(&v.op),
            Expression::Operand(Operand::LitInt(v)) if *v < 0 => {
                writer.expression_unary_op_precedence(&UnaryOpType::Negative)
            }
            _ => 1_000_000,
        }
    }

    pub fn is_next_value(&self) -> bool {
        match self {
            Expression::NextValue(..) => true,
            Expression::Binary(BinaryOp {
                op: BinaryOpType::Alias,
                lhs,
                ..
            }) => lhs.is_next_value(),
            _ => false,
        }
    }
}

impl From<Operand> for Expression {
    fn from(value: Operand) -> Self {
        Expression::Operand(value)
    }
}

impl From<ColumnRef> for Expression {
    fn from(value: ColumnRef) -> Self {
        Expression::Operand(Operand::Column(value))
    }
}

impl From<Function> for Expression {
    fn from(value: Function) -> Self {
        Expression::Function(value)
    }
}

impl From<i32> for Expression {
    fn from(value: i32) -> Self {
        Expression::int(value as i128)
    }
}

impl From<bool> for Expression {
    fn from(value: bool) -> Self {
        Expression::Operand(Operand::LitBool(value))
    }
}

impl From<&'static str> for Expression {
    fn from(value: &'static str) -> Self {
        Expression::string(value)
    }
}
