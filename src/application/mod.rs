// Application layer - Operations over widgets
pub mod rank_resolver;
pub mod render_service;
