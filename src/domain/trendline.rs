// Number-and-trendline widget
use super::widget::Widget;
use crate::infrastructure::wire::{self, Item, Numbers};
use serde::{Deserialize, Serialize, Serializer};

/// A captioned number with a trend drawn beneath it.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Trendline {
    pub text: String,
    pub value: f64,
    #[serde(default)]
    pub trend: Vec<f64>,
}

#[derive(Serialize)]
struct TrendlineHead<'a> {
    text: &'a str,
    #[serde(serialize_with = "wire::number")]
    value: f64,
}

impl Trendline {
    pub fn new(text: impl Into<String>, value: f64, trend: Vec<f64>) -> Self {
        Self {
            text: text.into(),
            value,
            trend,
        }
    }
}

impl Serialize for Trendline {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let head = TrendlineHead {
            text: &self.text,
            value: self.value,
        };

        Item((head, Numbers(&self.trend))).serialize(serializer)
    }
}

impl Widget for Trendline {
    fn kind(&self) -> &'static str {
        "trendline"
    }
}
