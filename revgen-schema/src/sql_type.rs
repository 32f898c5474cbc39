//! Declared SQL column types.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A column's declared SQL type, e.g. `varchar(255)` or `decimal(10,2)`.
///
/// Deserializes either from a plain string (`"varchar(255)"`) or from a
/// table (`{ name = "varchar", length = 255 }`). Always serializes as the
/// table form, with absent lengths as `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawSqlType")]
pub struct SqlType {
    /// Type name as reported by the driver, e.g. `VARCHAR`.
    pub name: String,
    /// First length/precision argument.
    pub length: Option<u32>,
    /// Second length/scale argument.
    pub length2: Option<u32>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawSqlType {
    Short(String),
    Full {
        name: String,
        #[serde(default)]
        length: Option<u32>,
        #[serde(default)]
        length2: Option<u32>,
    },
}

impl From<RawSqlType> for SqlType {
    fn from(raw: RawSqlType) -> Self {
        match raw {
            RawSqlType::Short(s) => SqlType::parse(&s),
            RawSqlType::Full {
                name,
                length,
                length2,
            } => SqlType {
                name,
                length,
                length2,
            },
        }
    }
}

/// Language-agnostic classification of SQL types.
///
/// Language bindings map a [`TypeKind`] to their own type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Bool,
    Int,
    BigInt,
    Float,
    Double,
    Decimal,
    Text,
    Uuid,
    Json,
    Binary,
    Date,
    Time,
    DateTime,
    Unknown,
}

impl TypeKind {
    /// Whether values of this kind are points in time.
    pub fn is_time(self) -> bool {
        matches!(self, TypeKind::Date | TypeKind::Time | TypeKind::DateTime)
    }

    /// Whether values of this kind are textual.
    pub fn is_text(self) -> bool {
        matches!(self, TypeKind::Text | TypeKind::Uuid | TypeKind::Json)
    }
}

impl SqlType {
    /// Create a type without length arguments.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            length: None,
            length2: None,
        }
    }

    /// Set the length argument.
    pub fn with_length(mut self, length: u32) -> Self {
        self.length = Some(length);
        self
    }

    /// Parse a declaration such as `varchar(255)`, `decimal(10, 2)` or
    /// `int unsigned`. Arguments that are not numbers are dropped.
    pub fn parse(s: &str) -> Self {
        let s = s.trim();
        let Some((name, rest)) = s.split_once('(') else {
            return Self::new(s);
        };

        let args = rest.split(')').next().unwrap_or_default();
        let mut lengths = args.split(',').map(|a| a.trim().parse::<u32>().ok());

        Self {
            name: name.trim().to_string(),
            length: lengths.next().flatten(),
            length2: lengths.next().flatten(),
        }
    }

    /// Classify the type name.
    pub fn kind(&self) -> TypeKind {
        let lower = self.name.to_ascii_lowercase();
        let base = lower
            .trim_end_matches(" unsigned")
            .trim_end_matches(" signed")
            .trim();

        match base {
            "bool" | "boolean" => TypeKind::Bool,
            "bit" | "tinyint" | "smallint" | "mediumint" | "int" | "integer" | "int2" | "int4"
            | "serial" | "smallserial" | "year" => TypeKind::Int,
            "bigint" | "int8" | "bigserial" => TypeKind::BigInt,
            "float" | "real" | "float4" => TypeKind::Float,
            "double" | "double precision" | "float8" => TypeKind::Double,
            "decimal" | "numeric" | "money" | "smallmoney" => TypeKind::Decimal,
            "char" | "varchar" | "nchar" | "nvarchar" | "character" | "character varying"
            | "tinytext" | "text" | "mediumtext" | "longtext" | "ntext" | "clob" | "citext"
            | "enum" | "set" | "sysname" | "string" => TypeKind::Text,
            "uuid" | "uniqueidentifier" => TypeKind::Uuid,
            "json" | "jsonb" => TypeKind::Json,
            "binary" | "varbinary" | "tinyblob" | "blob" | "mediumblob" | "longblob" | "bytea"
            | "image" => TypeKind::Binary,
            "date" => TypeKind::Date,
            "time" | "timetz" | "time with time zone" => TypeKind::Time,
            "datetime" | "datetime2" | "smalldatetime" | "timestamp" | "timestamptz"
            | "timestamp with time zone" | "timestamp without time zone" => TypeKind::DateTime,
            _ => TypeKind::Unknown,
        }
    }
}

impl fmt::Display for SqlType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.length, self.length2) {
            (Some(l), Some(l2)) => write!(f, "{}({},{})", self.name, l, l2),
            (Some(l), None) => write!(f, "{}({})", self.name, l),
            _ => f.write_str(&self.name),
        }
    }
}

impl FromStr for SqlType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SqlType::parse(s))
    }
}
