use crate::diag::StrResult;
use ecow::{EcoString, eco_format};
use std::fmt::{self, Display, Formatter};

/// A runtime value. Only the types the demonstrations pass around.
#[derive(Debug, Default, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    #[default]
    Unit,
    Int(i64),
    Str(EcoString),
}

impl Value {
    pub fn unit() -> Self {
        Value::Unit
    }

    /// The user-facing name of this value's type.
    pub fn ty_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
        }
    }

    pub fn as_int(&self) -> StrResult<i64> {
        match self {
            Value::Int(v) => Ok(*v),
            other => Err(eco_format!("expected int, found {}", other.ty_name())),
        }
    }

    pub fn as_str(&self) -> StrResult<&str> {
        match self {
            Value::Str(v) => Ok(v),
            other => Err(eco_format!("expected string, found {}", other.ty_name())),
        }
    }
}

/// Values print bare, without quoting or type markers, so that a printed
/// value is exactly its contents.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unit => f.pad("()"),
            Value::Int(v) => Display::fmt(v, f),
            Value::Str(v) => f.pad(v),
        }
    }
}

pub trait IntoValue {
    fn into_value(self) -> Value;
}

impl IntoValue for Value {
    fn into_value(self) -> Value {
        self
    }
}

macro_rules! impl_into_value {
    ($($t:ty => $i:ident,)+ $(,)?) => {
        $(
            impl IntoValue for $t {
                fn into_value(self) -> Value {
                    Value::$i(self.into())
                }
            }
        )*
    }
}

impl_into_value!(
    i64 => Int,
    EcoString => Str,
    &str => Str,
);
