// Wire-format helpers shared by the widget encoders
use serde::ser::{Error, SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};

/// Largest magnitude below which every integral f64 is exactly representable.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Serialize a number the way the dashboard expects it: integral values
/// without a fractional part (`20`, not `20.0`), everything else as the
/// shortest round-trip decimal. NaN and infinities cannot be represented.
pub fn number<S>(value: &f64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let value = *value;
    if !value.is_finite() {
        return Err(S::Error::custom(format!("unsupported value: {}", value)));
    }

    if value.fract() == 0.0 && value.abs() < MAX_EXACT_INTEGER {
        serializer.serialize_i64(value as i64)
    } else {
        serializer.serialize_f64(value)
    }
}

/// `serialize_with` adapter for optional numbers; pair it with a
/// `skip_serializing_if` so `None` never reaches the wire.
pub fn optional_number<S>(value: &Option<f64>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => number(value, serializer),
        None => serializer.serialize_none(),
    }
}

/// Serialize a list of numbers as a JSON array using [`number`] for each point.
pub fn numbers<S>(values: &[f64], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let mut seq = serializer.serialize_seq(Some(values.len()))?;
    for value in values {
        seq.serialize_element(&Number(*value))?;
    }
    seq.end()
}

/// A single wire number, usable wherever a `Serialize` value is needed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Number(pub f64);

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        number(&self.0, serializer)
    }
}

/// A borrowed series of wire numbers.
#[derive(Debug, Clone, Copy)]
pub struct Numbers<'a>(pub &'a [f64]);

impl Serialize for Numbers<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        numbers(self.0, serializer)
    }
}

/// The `{"item": ...}` envelope every widget payload is wrapped in.
pub struct Item<T>(pub T);

impl<T: Serialize> Serialize for Item<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Item", 1)?;
        state.serialize_field("item", &self.0)?;
        state.end()
    }
}

/// `{"value": n}`, used for gauge bounds.
#[derive(Serialize)]
pub struct ValueObject {
    #[serde(serialize_with = "number")]
    pub value: f64,
}

/// Optional numbers treat zero as absent.
pub fn is_zero_or_none(value: &Option<f64>) -> bool {
    value.is_none_or(|v| v == 0.0)
}

/// Optional ranks treat zero as absent.
pub fn is_zero_rank(value: &Option<u32>) -> bool {
    value.is_none_or(|v| v == 0)
}

/// Optional strings treat the empty string as absent.
pub fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().is_none_or(str::is_empty)
}

/// Borrow an optional string, collapsing empty strings to `None`.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}
