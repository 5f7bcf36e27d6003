use core::fmt;

/// A value crossing the host boundary
#[derive(Clone, PartialEq, Eq)]
pub enum Value {
    /// Binary string
    Bytes(Vec<u8>),
    /// Text string; its UTF-8 encoding is accepted wherever bytes are
    Str(String),
    /// Integer
    Int(i64),
    /// Interned name
    Symbol(String),
    /// Boolean
    Bool(bool),
    /// Absent value
    Nil,
}

impl Value {
    /// Name of the value's host type, as reported in type errors
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Bytes(_) | Self::Str(_) => "String",
            Self::Int(_) => "Integer",
            Self::Symbol(_) => "Symbol",
            Self::Bool(true) => "true",
            Self::Bool(false) => "false",
            Self::Nil => "nil",
        }
    }

    /// Borrow the value as a byte string, if it is one
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(b) => Some(b),
            Self::Str(s) => Some(s.as_bytes()),
            _ => None,
        }
    }

    /// Integer payload, if any
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Boolean payload, if any
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Symbol name, if any
    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Build a symbol
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }
}

// Bytes may be plaintext or key material
impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bytes(b) => write!(f, "Bytes(<{} bytes>)", b.len()),
            Self::Str(s) => write!(f, "Str(<{} bytes>)", s.len()),
            Self::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Self::Symbol(s) => write!(f, ":{}", s),
            Self::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Self::Nil => f.write_str("Nil"),
        }
    }
}

impl From<Vec<u8>> for Value {
    fn from(bytes: Vec<u8>) -> Self {
        Self::Bytes(bytes)
    }
}

impl From<&[u8]> for Value {
    fn from(bytes: &[u8]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<[u8; N]> for Value {
    fn from(bytes: [u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl<const N: usize> From<&[u8; N]> for Value {
    fn from(bytes: &[u8; N]) -> Self {
        Self::Bytes(bytes.to_vec())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}
