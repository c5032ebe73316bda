//! Gateway Common Types
//!
//! Wire types for the gateway account-configuration API, shared by the
//! client library and the command-line front end.

pub mod account;
pub mod configuration;
pub mod device;
pub mod envelope;
pub mod logging;

pub use account::AccountIdentity;
pub use configuration::{
    AccountConfiguration, AccountSettings, ActivityLogSettings, AntivirusSettings,
    BlockPageSettings, BrowserIsolationSettings, FipsSettings, TlsDecryptSettings,
};
pub use device::DeviceSettings;
pub use envelope::{Envelope, ResponseInfo, ResponseStatus};
pub use logging::{LoggingSettings, RuleLoggingConfig, RuleType};
