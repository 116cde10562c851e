// Number widget with an optional secondary stat
use super::widget::Widget;
use crate::infrastructure::wire::{self, Item, Numbers};
use serde::{Deserialize, Serialize, Serializer};

/// A single big number, optionally followed by a secondary stat.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Number {
    pub value: f64,
    pub text: Option<String>,
    pub prefix: Option<String>,
    /// Display hint sent as `type`, e.g. `"reverse"`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub secondary: Option<SecondaryStat>,
}

/// What follows the primary number in the payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SecondaryStat {
    Trendline(TrendlineSecondary),
    /// Arbitrary JSON, sent verbatim.
    Json(serde_json::Value),
}

/// Recent values drawn as a sparkline under the number.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct TrendlineSecondary(pub Vec<f64>);

impl Serialize for TrendlineSecondary {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        Numbers(&self.0).serialize(serializer)
    }
}

impl From<Vec<f64>> for TrendlineSecondary {
    fn from(points: Vec<f64>) -> Self {
        Self(points)
    }
}

#[derive(Serialize)]
struct NumberPrimary<'a> {
    #[serde(serialize_with = "wire::number")]
    value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    kind: Option<&'a str>,
}

// `[primary]` or `[primary, secondary]`.
#[derive(Serialize)]
#[serde(untagged)]
enum NumberItems<'a> {
    Single((NumberPrimary<'a>,)),
    WithSecondary((NumberPrimary<'a>, &'a SecondaryStat)),
}

impl Number {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            ..Default::default()
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    pub fn with_secondary(mut self, secondary: impl Into<SecondaryStat>) -> Self {
        self.secondary = Some(secondary.into());
        self
    }
}

impl From<TrendlineSecondary> for SecondaryStat {
    fn from(trend: TrendlineSecondary) -> Self {
        SecondaryStat::Trendline(trend)
    }
}

impl From<serde_json::Value> for SecondaryStat {
    fn from(value: serde_json::Value) -> Self {
        SecondaryStat::Json(value)
    }
}

impl Serialize for Number {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let primary = NumberPrimary {
            value: self.value,
            text: wire::non_empty(&self.text),
            prefix: wire::non_empty(&self.prefix),
            kind: wire::non_empty(&self.kind),
        };

        let items = match &self.secondary {
            Some(secondary) => NumberItems::WithSecondary((primary, secondary)),
            None => NumberItems::Single((primary,)),
        };

        Item(items).serialize(serializer)
    }
}

impl Widget for Number {
    fn kind(&self) -> &'static str {
        "number"
    }
}
