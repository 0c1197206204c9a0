use crate::utils::hex;
use num_bigint::BigInt;
use serde_json::json;
use std::fmt;

/// A single decoded field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Boolean(bool),
    Bits(Vec<bool>),
    Byte(u8),
    Bytes(Vec<u8>),
    Vlq(u32),
    Short(i16),
    Int(i32),
    Long(BigInt),
    BigInt(BigInt),
}

impl Value {
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Boolean(_) => "bool",
            Value::Bits(_) => "bits",
            Value::Byte(_) => "byte",
            Value::Bytes(_) => "bytes",
            Value::Vlq(_) => "vlq",
            Value::Short(_) => "short",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::BigInt(_) => "bigint",
        }
    }

    /// JSON form. Arbitrary-precision integers are strings.
    pub fn to_json(&self) -> serde_json::Value {
        let value = match self {
            Value::Boolean(b) => json!(b),
            Value::Bits(bits) => json!(bits),
            Value::Byte(b) => json!(b),
            Value::Bytes(bytes) => json!(hex::encode(bytes)),
            Value::Vlq(v) => json!(v),
            Value::Short(v) => json!(v),
            Value::Int(v) => json!(v),
            Value::Long(v) | Value::BigInt(v) => json!(v.to_string()),
        };
        json!({ "kind": self.kind(), "value": value })
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Bits(bits) => {
                for &bit in bits {
                    f.write_str(if bit { "1" } else { "0" })?;
                }
                Ok(())
            }
            Value::Byte(b) => write!(f, "{}", b),
            Value::Bytes(bytes) => write!(f, "{}", hex::encode(bytes)),
            Value::Vlq(v) => write!(f, "{}", v),
            Value::Short(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Long(v) | Value::BigInt(v) => write!(f, "{}", v),
        }
    }
}
