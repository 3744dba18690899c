use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A stored holiday row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Holiday {
    pub id: i64,
    pub name: String,
    pub date: Option<NaiveDate>,
}

/// One field of a sparse payload.
///
/// Distinguishes a key that was never sent (`Missing`) from one sent as
/// JSON null (`Null`) and one sent with a value. A plain `Option` cannot
/// represent that difference, and patch semantics depend on it.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Field<T> {
    #[default]
    Missing,
    Null,
    Value(T),
}

impl<T> Field<T> {
    pub fn is_missing(&self) -> bool {
        matches!(self, Field::Missing)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Field::Null)
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Field::Value(_))
    }

    /// The supplied value, if any. `Missing` and `Null` both collapse to None.
    pub fn value(self) -> Option<T> {
        match self {
            Field::Value(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_ref(&self) -> Field<&T> {
        match self {
            Field::Missing => Field::Missing,
            Field::Null => Field::Null,
            Field::Value(v) => Field::Value(v),
        }
    }
}

// Only called when the key is present in the input; a missing key goes
// through serde's default and stays `Missing`.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(v) => Field::Value(v),
            None => Field::Null,
        })
    }
}

// `Missing` is skipped at the struct level; serializing it still has to
// produce something, so it falls back to null.
impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Field::Missing | Field::Null => serializer.serialize_none(),
            Field::Value(v) => v.serialize(serializer),
        }
    }
}

/// Client-supplied holiday payload for create and patch requests.
///
/// Every field is sparse: absent keys deserialize to `Field::Missing`,
/// explicit nulls to `Field::Null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HolidayPayload {
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_missing")]
    pub date: Field<NaiveDate>,
}

impl HolidayPayload {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Field::Value(id);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Field::Value(name.into());
        self
    }

    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Field::Value(date);
        self
    }
}
