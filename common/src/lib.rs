//! Page-independent part of formguard: the password policy, the submit gate
//! decision and the configuration shared by the web client and the CLI.

pub mod consts;
pub mod config;
pub mod dom;
pub mod gate;
pub mod password;
mod error;

pub use config::Config;
pub use error::{Error, Result};
pub use gate::{on_submit, SubmitOutcome};
pub use password::{evaluate, Requirement, Verdict};
