#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

mod button;
mod config;
mod error;
mod form;
mod guard;
mod timer;

pub use button::*;
pub use config::{GuardConfig, DEFAULT_RELOCK_DELAY_MS};
pub use error::ConfigError;
pub use form::FormTarget;
pub use guard::{GuardOutcome, Missing, SubmissionGuard};
pub use timer::*;

