// Leaderboard widget
use super::widget::Widget;
use crate::infrastructure::wire;
use serde::{Deserialize, Serialize};

/// Ranked list of labelled items, shown in the order given.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Leaderboard {
    #[serde(rename(serialize = "item"))]
    pub items: Vec<LeaderboardItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<LeaderboardFormat>,
    #[serde(skip_serializing_if = "wire::is_blank")]
    pub unit: Option<String>,
}

/// How the dashboard renders leaderboard values. Leaving it unset uses the
/// dashboard's default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaderboardFormat {
    Decimal,
    Percent,
    Currency,
}

/// One row of a leaderboard. A zero value or rank is not sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct LeaderboardItem {
    pub label: String,
    #[serde(
        default,
        skip_serializing_if = "wire::is_zero_or_none",
        serialize_with = "wire::optional_number"
    )]
    pub value: Option<f64>,
    #[serde(default, skip_serializing_if = "wire::is_zero_rank")]
    pub previous_rank: Option<u32>,
}

impl Leaderboard {
    pub fn new(items: impl IntoIterator<Item = LeaderboardItem>) -> Self {
        Self {
            items: items.into_iter().collect(),
            ..Default::default()
        }
    }

    pub fn with_format(mut self, format: LeaderboardFormat) -> Self {
        self.format = Some(format);
        self
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Sort ascending by value (absent counts as zero), ties by label.
    ///
    /// Encoding never reorders items; call this first if the dashboard should
    /// show them sorted.
    pub fn sort_by_value(&mut self) {
        self.items.sort_by(|a, b| {
            a.value
                .unwrap_or(0.0)
                .total_cmp(&b.value.unwrap_or(0.0))
                .then_with(|| a.label.cmp(&b.label))
        });
    }
}

impl LeaderboardItem {
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value: Some(value),
            previous_rank: None,
        }
    }

    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Default::default()
        }
    }
}

impl Widget for Leaderboard {
    fn kind(&self) -> &'static str {
        "leaderboard"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_without_format_or_unit() {
        let board = Leaderboard::new([
            LeaderboardItem::new("Alice", 42.0),
            LeaderboardItem::new("Bob", 12.5),
        ]);

        assert_eq!(
            board.encode_to_string().unwrap(),
            r#"{"item":[{"label":"Alice","value":42},{"label":"Bob","value":12.5}]}"#
        );
    }

    #[test]
    fn test_format_values() {
        for (format, name) in [
            (LeaderboardFormat::Decimal, "decimal"),
            (LeaderboardFormat::Percent, "percent"),
            (LeaderboardFormat::Currency, "currency"),
        ] {
            let board = Leaderboard::new([LeaderboardItem::labelled("x")]).with_format(format);
            let value: serde_json::Value =
                serde_json::from_slice(&board.encode().unwrap()).unwrap();
            assert_eq!(value["format"], name);
            assert!(value.get("unit").is_none());
        }
    }

    #[test]
    fn test_unit_and_format_order() {
        let board = Leaderboard::new([LeaderboardItem::new("EU", 3.0)])
            .with_format(LeaderboardFormat::Currency)
            .with_unit("EUR");

        assert_eq!(
            board.encode_to_string().unwrap(),
            r#"{"item":[{"label":"EU","value":3}],"format":"currency","unit":"EUR"}"#
        );
    }

    #[test]
    fn test_empty_unit_is_omitted() {
        let board = Leaderboard::new([]).with_unit("");
        assert_eq!(board.encode_to_string().unwrap(), r#"{"item":[]}"#);
    }

    #[test]
    fn test_zero_value_and_rank_are_omitted() {
        let item = LeaderboardItem {
            label: "Carol".to_string(),
            value: Some(0.0),
            previous_rank: Some(0),
        };
        assert_eq!(serde_json::to_string(&item).unwrap(), r#"{"label":"Carol"}"#);

        let item = LeaderboardItem {
            label: "Carol".to_string(),
            value: Some(-1.5),
            previous_rank: Some(4),
        };
        assert_eq!(
            serde_json::to_string(&item).unwrap(),
            r#"{"label":"Carol","value":-1.5,"previous_rank":4}"#
        );
    }

    #[test]
    fn test_sort_by_value() {
        let mut board = Leaderboard::new([
            LeaderboardItem::new("c", 2.0),
            LeaderboardItem::new("b", 1.0),
            LeaderboardItem::labelled("z"),
            LeaderboardItem::new("a", 1.0),
        ]);
        board.sort_by_value();

        let labels: Vec<&str> = board.items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["z", "a", "b", "c"]);
    }
}
