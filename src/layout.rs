//! Field layouts: an ordered list of field kinds decoded one after another
//! from a single reader, e.g. `"bool,vlq,bytes:4,long"`.

use crate::protocol::{ReaderError, ReaderResult};
use crate::reader::SigmaReader;
use crate::value::Value;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Boolean,
    Bits(usize),
    Byte,
    Bytes(usize),
    Vlq,
    Short,
    Int,
    Long,
    BigInt,
}

impl FieldKind {
    pub fn read(self, reader: &mut SigmaReader<'_>) -> ReaderResult<Value> {
        Ok(match self {
            FieldKind::Boolean => Value::Boolean(reader.read_boolean()?),
            FieldKind::Bits(count) => Value::Bits(reader.read_bits(count)?),
            FieldKind::Byte => Value::Byte(reader.read_byte()?),
            FieldKind::Bytes(len) => Value::Bytes(reader.read_bytes(len)?.to_vec()),
            FieldKind::Vlq => Value::Vlq(reader.read_vlq()?),
            FieldKind::Short => Value::Short(reader.read_short()?),
            FieldKind::Int => Value::Int(reader.read_int()?),
            FieldKind::Long => Value::Long(reader.read_long()?),
            FieldKind::BigInt => Value::BigInt(reader.read_bigint()?),
        })
    }
}

fn parse_count(kind: &str, arg: Option<&str>) -> ReaderResult<usize> {
    let arg = arg.ok_or_else(|| {
        ReaderError::InvalidLayout(format!("{kind} needs a length, e.g. {kind}:4"))
    })?;
    arg.parse()
        .map_err(|_| ReaderError::InvalidLayout(format!("bad length '{arg}' for {kind}")))
}

impl FromStr for FieldKind {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (name, arg) = match s.split_once(':') {
            Some((name, arg)) => (name.trim(), Some(arg.trim())),
            None => (s, None),
        };

        let kind = match name {
            "bool" | "boolean" => FieldKind::Boolean,
            "bits" => FieldKind::Bits(parse_count(name, arg)?),
            "byte" => FieldKind::Byte,
            "bytes" => FieldKind::Bytes(parse_count(name, arg)?),
            "vlq" => FieldKind::Vlq,
            "short" => FieldKind::Short,
            "int" => FieldKind::Int,
            "long" => FieldKind::Long,
            "bigint" => FieldKind::BigInt,
            other => {
                return Err(ReaderError::InvalidLayout(format!(
                    "unknown field kind '{other}'"
                )))
            }
        };

        if arg.is_some() && !matches!(kind, FieldKind::Bits(_) | FieldKind::Bytes(_)) {
            return Err(ReaderError::InvalidLayout(format!("{name} takes no length")));
        }
        Ok(kind)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldKind::Boolean => write!(f, "bool"),
            FieldKind::Bits(n) => write!(f, "bits:{}", n),
            FieldKind::Byte => write!(f, "byte"),
            FieldKind::Bytes(n) => write!(f, "bytes:{}", n),
            FieldKind::Vlq => write!(f, "vlq"),
            FieldKind::Short => write!(f, "short"),
            FieldKind::Int => write!(f, "int"),
            FieldKind::Long => write!(f, "long"),
            FieldKind::BigInt => write!(f, "bigint"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Layout {
    fields: Vec<FieldKind>,
}

impl Layout {
    pub fn new(fields: Vec<FieldKind>) -> Self {
        Self { fields }
    }

    pub fn fields(&self) -> &[FieldKind] {
        &self.fields
    }

    /// Decodes every field in order, stopping at the first error
    pub fn decode(&self, reader: &mut SigmaReader<'_>) -> ReaderResult<Vec<Value>> {
        self.fields.iter().map(|field| field.read(reader)).collect()
    }
}

impl FromStr for Layout {
    type Err = ReaderError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields = s
            .split(',')
            .filter(|part| !part.trim().is_empty())
            .map(str::parse)
            .collect::<ReaderResult<Vec<FieldKind>>>()?;
        Ok(Self::new(fields))
    }
}
