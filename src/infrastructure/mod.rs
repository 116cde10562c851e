// Infrastructure layer - Configuration and wire-format plumbing
pub mod config;
pub mod wire;
