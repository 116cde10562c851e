// Geck-O-Meter gauge widget
use super::widget::Widget;
use crate::infrastructure::wire::{self, ValueObject};
use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

/// A needle gauge between two bounds.
///
/// The bounds are not checked; an inverted or empty range is sent as given.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Gauge {
    pub item: f64,
    pub min: f64,
    pub max: f64,
}

impl Gauge {
    pub fn new(item: f64, min: f64, max: f64) -> Self {
        Self { item, min, max }
    }
}

impl Serialize for Gauge {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("Gauge", 3)?;
        state.serialize_field("item", &wire::Number(self.item))?;
        state.serialize_field("min", &ValueObject { value: self.min })?;
        state.serialize_field("max", &ValueObject { value: self.max })?;
        state.end()
    }
}

impl Widget for Gauge {
    fn kind(&self) -> &'static str {
        "gauge"
    }
}
