//! Loosely typed company and employee records.
//!
//! Records are kept as the JSON objects they were loaded from. Only the
//! fields the pipeline reads get accessors, and every accessor is null-safe:
//! an absent field, or one holding an unexpected JSON type, reads as `None`.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Raw JSON object as found in a data file.
pub type RecordFields = Map<String, Value>;

/// Key under which attached employees are emitted on an enriched company.
pub const EMPLOYEES_KEY: &str = "employees";

/// Compares two record identifiers.
///
/// Integral numbers compare by value, so `1` and `1.0` are the same id.
/// Anything else compares structurally. A missing id never matches.
#[must_use]
pub fn ids_match(left: Option<&Value>, right: Option<&Value>) -> bool {
    match (left, right) {
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            match (integral_value(a), integral_value(b)) {
                (Some(x), Some(y)) => x == y,
                _ => a == b,
            }
        }
        (Some(Value::Null), _) | (_, Some(Value::Null)) | (None, _) | (_, None) => false,
        (Some(a), Some(b)) => a == b,
    }
}

fn integral_value(n: &serde_json::Number) -> Option<i128> {
    if let Some(v) = n.as_i64() {
        return Some(i128::from(v));
    }
    if let Some(v) = n.as_u64() {
        return Some(i128::from(v));
    }
    let f = n.as_f64()?;
    if f.fract() == 0.0 && f.abs() < 9.0e15 {
        #[allow(clippy::cast_possible_truncation)]
        let whole = f as i128;
        return Some(whole);
    }
    None
}

/// A company record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Company(RecordFields);

impl Company {
    #[must_use]
    pub fn new(fields: RecordFields) -> Self {
        Self(fields)
    }

    /// Raw identifier value, used for joining.
    #[must_use]
    pub fn id_value(&self) -> Option<&Value> {
        self.0.get("id")
    }

    /// Identifier as an integer, when it is an integral JSON number.
    #[must_use]
    pub fn id(&self) -> Option<i64> {
        self.id_value()
            .and_then(|v| match v {
                Value::Number(n) => integral_value(n),
                _ => None,
            })
            .and_then(|v| i64::try_from(v).ok())
    }

    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.0.get("name").and_then(Value::as_str)
    }

    #[must_use]
    pub fn active(&self) -> Option<bool> {
        self.0.get("active").and_then(Value::as_bool)
    }

    #[must_use]
    pub fn fields(&self) -> &RecordFields {
        &self.0
    }
}

impl From<RecordFields> for Company {
    fn from(fields: RecordFields) -> Self {
        Self(fields)
    }
}

impl Serialize for Company {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// An employee record.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Employee(RecordFields);

impl Employee {
    #[must_use]
    pub fn new(fields: RecordFields) -> Self {
        Self(fields)
    }

    #[must_use]
    pub fn company_id(&self) -> Option<&Value> {
        self.0.get("company_id")
    }

    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.0.get("first_name").and_then(Value::as_str)
    }

    #[must_use]
    pub fn last_name(&self) -> Option<&str> {
        self.0.get("last_name").and_then(Value::as_str)
    }

    /// `"<first_name> <last_name>"`, or `None` if either part is missing.
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        Some(format!("{} {}", self.first_name()?, self.last_name()?))
    }

    #[must_use]
    pub fn fields(&self) -> &RecordFields {
        &self.0
    }
}

impl From<RecordFields> for Employee {
    fn from(fields: RecordFields) -> Self {
        Self(fields)
    }
}

impl Serialize for Employee {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.0.serialize(serializer)
    }
}

/// A company together with the employees referencing it.
///
/// Serializes as the company's own fields followed by an `employees` array.
/// An `employees` field carried by the source record is replaced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EnrichedCompany {
    pub company: Company,
    pub employees: Vec<Employee>,
}

impl EnrichedCompany {
    #[must_use]
    pub fn new(company: Company, employees: Vec<Employee>) -> Self {
        Self { company, employees }
    }
}

impl Serialize for EnrichedCompany {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let fields = self.company.fields();
        let own = fields.keys().filter(|k| *k != EMPLOYEES_KEY).count();
        let mut map = serializer.serialize_map(Some(own + 1))?;
        for (key, value) in fields {
            if key != EMPLOYEES_KEY {
                map.serialize_entry(key, value)?;
            }
        }
        map.serialize_entry(EMPLOYEES_KEY, &self.employees)?;
        map.end()
    }
}
