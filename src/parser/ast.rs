use crate::lexer::Position;
use num_bigint::BigUint;
use std::fmt;

/// Expression variants
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expression {
    Call {
        callee: String,
        args: Vec<Expression>,
    },
    Variable(String),
    Integer(BigUint),
}

impl Expression {
    pub fn call(callee: impl Into<String>, args: Vec<Expression>) -> Self {
        Expression::Call {
            callee: callee.into(),
            args,
        }
    }

    pub fn variable(name: impl Into<String>) -> Self {
        Expression::Variable(name.into())
    }

    pub fn integer(value: impl Into<BigUint>) -> Self {
        Expression::Integer(value.into())
    }
}

/// The root of every tree: `define name(params) body end`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    pub name: String,
    /// Duplicates are allowed.
    pub params: Vec<String>,
    pub body: Expression,
    pub pos: Position,
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Expression::Call { callee, args } => {
                write!(f, "Call({callee}, [")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, "])")
            }
            Expression::Variable(name) => write!(f, "VarRef({name})"),
            Expression::Integer(value) => write!(f, "Integer({value})"),
        }
    }
}

impl fmt::Display for Definition {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Definition({}, [{}], {})",
            self.name,
            self.params.join(", "),
            self.body
        )
    }
}
