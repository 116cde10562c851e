// Widget trait and the closed set of dashboard widgets
use super::error::WidgetError;
use super::gauge::Gauge;
use super::leaderboard::Leaderboard;
use super::monitoring::Monitoring;
use super::number::Number;
use super::rag::Rag;
use super::text::Text;
use super::trendline::Trendline;
use serde::{Deserialize, Serialize, Serializer};

/// A value that can be turned into a dashboard payload.
///
/// `Serialize` writes the wire shape; `validate` holds the shape checks the
/// dashboard rejects server-side. `encode` runs both, so a failed call never
/// yields partial output.
pub trait Widget: Serialize {
    /// Short name of the widget kind, as used in configuration files.
    fn kind(&self) -> &'static str;

    fn validate(&self) -> Result<(), WidgetError> {
        Ok(())
    }

    fn encode(&self) -> Result<Vec<u8>, WidgetError> {
        self.validate()?;
        let bytes = serde_json::to_vec(self)?;
        tracing::debug!(kind = self.kind(), bytes = bytes.len(), "encoded widget payload");
        Ok(bytes)
    }

    fn encode_to_string(&self) -> Result<String, WidgetError> {
        self.validate()?;
        Ok(serde_json::to_string(self)?)
    }
}

/// Any one of the supported widgets.
///
/// Deserializes from the friendly form tagged by `kind`; serializes to the
/// wire shape of the wrapped widget with no tag.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashboardWidget {
    Gauge(Gauge),
    Leaderboard(Leaderboard),
    Monitoring(Monitoring),
    Number(Number),
    Rag(Rag),
    Trendline(Trendline),
    Text(Text),
}

impl Serialize for DashboardWidget {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            DashboardWidget::Gauge(w) => w.serialize(serializer),
            DashboardWidget::Leaderboard(w) => w.serialize(serializer),
            DashboardWidget::Monitoring(w) => w.serialize(serializer),
            DashboardWidget::Number(w) => w.serialize(serializer),
            DashboardWidget::Rag(w) => w.serialize(serializer),
            DashboardWidget::Trendline(w) => w.serialize(serializer),
            DashboardWidget::Text(w) => w.serialize(serializer),
        }
    }
}

impl Widget for DashboardWidget {
    fn kind(&self) -> &'static str {
        match self {
            DashboardWidget::Gauge(w) => w.kind(),
            DashboardWidget::Leaderboard(w) => w.kind(),
            DashboardWidget::Monitoring(w) => w.kind(),
            DashboardWidget::Number(w) => w.kind(),
            DashboardWidget::Rag(w) => w.kind(),
            DashboardWidget::Trendline(w) => w.kind(),
            DashboardWidget::Text(w) => w.kind(),
        }
    }

    fn validate(&self) -> Result<(), WidgetError> {
        match self {
            DashboardWidget::Rag(w) => w.validate(),
            DashboardWidget::Text(w) => w.validate(),
            _ => Ok(()),
        }
    }
}

macro_rules! impl_from_widget {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for DashboardWidget {
                fn from(widget: $variant) -> Self {
                    DashboardWidget::$variant(widget)
                }
            }
        )*
    };
}

impl_from_widget!(Gauge, Leaderboard, Monitoring, Number, Rag, Trendline, Text);
