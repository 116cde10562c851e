// Domain layer - Widget value types and their wire encoders
pub mod error;
pub mod gauge;
pub mod leaderboard;
pub mod monitoring;
pub mod number;
pub mod rag;
pub mod text;
pub mod trendline;
pub mod widget;
