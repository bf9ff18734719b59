use std::{
    fmt,
    hash::{Hash, Hasher},
};

use crate::{error::RuntimeError, interpreter::value::core::Value};

/// Key of a `Value::Hash` entry.
///
/// A key keeps the full value it was derived from, so two keys are equal
/// exactly when the values they came from are equal. Keys of different
/// kinds never compare equal, even when `1` and `true` would hash alike.
///
/// # Example
/// ```
/// use yoru::interpreter::value::{core::Value, hash_key::HashKey};
///
/// let a = HashKey::try_from(&Value::from("name")).unwrap();
/// let b = HashKey::try_from(&Value::from("name")).unwrap();
/// let c = HashKey::try_from(&Value::from("other")).unwrap();
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_ne!(HashKey::Integer(1), HashKey::Boolean(true));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum HashKey {
    /// An integer key such as `1`.
    Integer(i64),
    /// A boolean key such as `true`.
    Boolean(bool),
    /// A string key such as `"name"`.
    String(String),
}

impl TryFrom<&Value> for HashKey {
    type Error = RuntimeError;

    fn try_from(value: &Value) -> Result<Self, Self::Error> {
        match value {
            Value::Integer(i) => Ok(Self::Integer(*i)),
            Value::Boolean(b) => Ok(Self::Boolean(*b)),
            Value::String(s) => Ok(Self::String(s.clone())),
            other => Err(RuntimeError::UnusableAsHashKey { type_name: other.type_name() }),
        }
    }
}

impl From<HashKey> for Value {
    fn from(key: HashKey) -> Self {
        match key {
            HashKey::Integer(i) => Self::Integer(i),
            HashKey::Boolean(b) => Self::Boolean(b),
            HashKey::String(s) => Self::String(s),
        }
    }
}

impl Hash for HashKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Integer(i) => {
                state.write_u8(0);
                i.hash(state);
            },
            Self::Boolean(b) => {
                state.write_u8(1);
                b.hash(state);
            },
            Self::String(s) => {
                state.write_u8(2);
                s.hash(state);
            },
        }
    }
}

impl fmt::Display for HashKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{i}"),
            Self::Boolean(b) => write!(f, "{b}"),
            Self::String(s) => f.write_str(s),
        }
    }
}
