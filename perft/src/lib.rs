#![warn(clippy::imprecise_flops, clippy::suboptimal_flops)]

pub mod config;
pub mod divide;
pub mod error;
pub mod output;
pub mod soak;

pub use config::Config;
pub use divide::{divide, iterate};
pub use error::{ConfigError, DriverError, SoakError};
pub use soak::{soak, SoakStats};
