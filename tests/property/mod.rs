//! Property-based tests for option overrides and defaults

mod config_overrides;
