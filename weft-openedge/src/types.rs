use weft_core::{ColumnType, DialectError, Error, Result, Row, Value};

/// Mapping between abstract column types and their OpenEdge spelling.
///
/// OpenEdge has no native boolean, booleans are stored in `BIT` columns and travel as integers.
#[derive(Default, Debug, Clone, Copy)]
pub struct TypeRegistry;

impl TypeRegistry {
    /// DDL spelling of the column type.
    pub fn ddl_name(column_type: &ColumnType) -> Result<String> {
        Ok(match column_type {
            ColumnType::Boolean => "BIT".into(),
            ColumnType::SmallInt => "SMALLINT".into(),
            ColumnType::Integer => "INTEGER".into(),
            ColumnType::BigInt => "BIGINT".into(),
            ColumnType::Decimal {
                precision: 0,
                scale: 0,
            } => "DECIMAL".into(),
            ColumnType::Decimal { precision, scale } => {
                format!("DECIMAL({},{})", precision, scale)
            }
            ColumnType::Double => "DOUBLE PRECISION".into(),
            ColumnType::Varchar(Some(length)) => format!("VARCHAR({})", length),
            ColumnType::Varchar(None) => {
                return Err(DialectError::compilation(
                    "VARCHAR requires a length on OpenEdge",
                )
                .into());
            }
            ColumnType::Date => "DATE".into(),
            ColumnType::Timestamp | ColumnType::TimestampWithTimezone => "TIMESTAMP".into(),
        })
    }

    /// Column type from a wire type name like `varchar(40)` or `DECIMAL(10,2)`.
    pub fn from_wire_name(name: &str) -> Result<ColumnType> {
        let unsupported = || -> Error {
            let error: Error = DialectError::UnsupportedType(name.to_string()).into();
            log::error!("{:#}", error);
            error
        };
        let trimmed = name.trim();
        let (base, arguments) = match trimmed.split_once('(') {
            Some((base, rest)) => {
                let arguments = rest.strip_suffix(')').ok_or_else(unsupported)?;
                let arguments = arguments
                    .split(',')
                    .map(|v| v.trim().parse::<u32>())
                    .collect::<std::result::Result<Vec<_>, _>>()
                    .map_err(|_| unsupported())?;
                (base.trim_end(), Some(arguments))
            }
            None => (trimmed, None),
        };
        let base = base
            .split_whitespace()
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        let narrow = |v: u32| u8::try_from(v).map_err(|_| unsupported());
        Ok(match (base.as_str(), arguments.as_deref()) {
            ("BIT", None) => ColumnType::Boolean,
            ("SMALLINT", None) => ColumnType::SmallInt,
            ("INTEGER", None) => ColumnType::Integer,
            ("BIGINT", None) => ColumnType::BigInt,
            ("DECIMAL", None) => ColumnType::Decimal {
                precision: 0,
                scale: 0,
            },
            ("DECIMAL", Some([precision])) => ColumnType::Decimal {
                precision: narrow(*precision)?,
                scale: 0,
            },
            ("DECIMAL", Some([precision, scale])) => ColumnType::Decimal {
                precision: narrow(*precision)?,
                scale: narrow(*scale)?,
            },
            ("DOUBLE PRECISION", None) => ColumnType::Double,
            ("VARCHAR", None) => ColumnType::Varchar(None),
            ("VARCHAR", Some([length])) => ColumnType::Varchar(Some(*length)),
            ("DATE", None) => ColumnType::Date,
            ("TIMESTAMP", None) => ColumnType::Timestamp,
            _ => return Err(unsupported()),
        })
    }

    /// Convert a boolean parameter into its `BIT` representation, other values are left untouched.
    pub fn encode(value: Value) -> Value {
        match value {
            Value::Boolean(v) => Value::Int32(v.map(|v| v as i32)),
            v => v,
        }
    }

    /// Convert a `BIT` result cell back into a boolean: nonzero is true.
    pub fn decode_bit(value: Value) -> Result<Value> {
        match value {
            v if v.is_null() => Ok(Value::Boolean(None)),
            Value::Int16(..) | Value::Int32(..) | Value::Int64(..) => {
                Ok(Value::Boolean(value.as_integer().map(|v| v != 0)))
            }
            v => {
                let error = Error::new(DialectError::TypeMismatch {
                    expected: "BIT",
                    found: v.type_name().into(),
                });
                log::error!("{:#}", error);
                Err(error)
            }
        }
    }

    /// Decode a cell of a result column of the given type.
    pub fn decode(column_type: &ColumnType, value: Value) -> Result<Value> {
        match column_type {
            ColumnType::Boolean => Self::decode_bit(value),
            _ => Ok(value),
        }
    }

    pub fn bind_parameters(params: Vec<Value>) -> Vec<Value> {
        params.into_iter().map(Self::encode).collect()
    }

    /// Decode a row against the expected column types, extra cells pass through.
    pub fn decode_row(row: Row, types: &[ColumnType]) -> Result<Row> {
        row.into_vec()
            .into_iter()
            .enumerate()
            .map(|(i, value)| match types.get(i) {
                Some(column_type) => Self::decode(column_type, value),
                None => Ok(value),
            })
            .collect()
    }
}
