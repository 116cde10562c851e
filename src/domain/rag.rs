// Red/Amber/Green status widget
use super::error::{RagSlot, WidgetError};
use super::widget::Widget;
use crate::infrastructure::wire;
use serde::ser::Error;
use serde::{Deserialize, Serialize, Serializer};

/// Red/Amber/Green counters. Red and amber must be set; green is optional.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct Rag {
    pub red: Option<RagItem>,
    pub amber: Option<RagItem>,
    pub green: Option<RagItem>,
    pub prefix: Option<String>,
    /// Swap the meaning of the colors (green becomes bad).
    #[serde(default)]
    pub reverse: bool,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct RagItem {
    #[serde(serialize_with = "wire::number")]
    pub value: f64,
    pub text: String,
}

impl RagItem {
    pub fn new(value: f64, text: impl Into<String>) -> Self {
        Self {
            value,
            text: text.into(),
        }
    }
}

#[derive(Serialize)]
struct RagPayload<'a> {
    item: Vec<&'a RagItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    prefix: Option<&'a str>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    reverse: bool,
}

impl Rag {
    pub fn new(red: RagItem, amber: RagItem, green: Option<RagItem>) -> Self {
        Self {
            red: Some(red),
            amber: Some(amber),
            green,
            ..Default::default()
        }
    }

    // Slots in wire order, red first.
    fn slots(&self) -> Result<Vec<&RagItem>, WidgetError> {
        let red = self.red.as_ref().ok_or(WidgetError::MissingSlot(RagSlot::Red))?;
        let amber = self
            .amber
            .as_ref()
            .ok_or(WidgetError::MissingSlot(RagSlot::Amber))?;

        let mut slots = vec![red, amber];
        slots.extend(self.green.as_ref());
        Ok(slots)
    }
}

impl Serialize for Rag {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let item = self.slots().map_err(S::Error::custom)?;

        RagPayload {
            item,
            prefix: wire::non_empty(&self.prefix),
            reverse: self.reverse,
        }
        .serialize(serializer)
    }
}

impl Widget for Rag {
    fn kind(&self) -> &'static str {
        "rag"
    }

    fn validate(&self) -> Result<(), WidgetError> {
        self.slots().map(|_| ())
    }
}
