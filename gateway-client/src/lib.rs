//! Gateway Client
//!
//! Typed binding for the gateway account-configuration REST API. Every
//! operation maps to exactly one HTTP endpoint; the round trip itself is
//! delegated to a [`RequestExecutor`].

pub mod client;
pub mod config;
pub mod error;
pub mod executor;
pub mod test_util;

pub use client::{
    account_path, configuration_path, device_settings_path, logging_path, GatewayClient,
};
pub use config::{ClientConfig, ConfigError};
pub use error::{Error, Result};
pub use executor::{Credentials, HttpExecutor, RequestExecutor, TransportError};
pub use reqwest::Method;
