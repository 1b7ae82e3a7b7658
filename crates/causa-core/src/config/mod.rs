//! Engine configuration, loadable from TOML.

pub mod defaults;
pub mod engine_config;

pub use engine_config::CausalEngineConfig;
