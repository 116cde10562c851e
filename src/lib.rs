//! Typed Geckoboard custom-widget payloads.
//!
//! Each widget type serializes to the exact JSON shape the dashboard's push
//! API expects. Build a value, call [`Widget::encode`], and hand the bytes to
//! whatever delivers them.
//!
//! ```
//! use gecko_widgets::{Trendline, Widget};
//!
//! let widget = Trendline::new("Monthly new users", 32.0, vec![2.0, 4.0, 8.0, 16.0]);
//! assert_eq!(
//!     widget.encode_to_string().unwrap(),
//!     r#"{"item":[{"text":"Monthly new users","value":32},[2,4,8,16]]}"#
//! );
//! ```
pub mod application;
pub mod domain;
pub mod infrastructure;

pub use application::rank_resolver::resolve_previous_ranks;
pub use application::render_service::{RenderService, RenderedWidget};
pub use domain::error::{MAX_TEXT_PAGES, RagSlot, WidgetError};
pub use domain::gauge::Gauge;
pub use domain::leaderboard::{Leaderboard, LeaderboardFormat, LeaderboardItem};
pub use domain::monitoring::{MONITORING_DOWN, MONITORING_UP, Monitoring};
pub use domain::number::{Number, SecondaryStat, TrendlineSecondary};
pub use domain::rag::{Rag, RagItem};
pub use domain::text::{Text, TextPage, TextStyle};
pub use domain::trendline::Trendline;
pub use domain::widget::{DashboardWidget, Widget};
pub use infrastructure::config::{
    WidgetConfig, WidgetsConfig, load_widgets_config, load_widgets_config_from,
};
