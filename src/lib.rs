#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod core;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;

pub use crate::core::*;
#[cfg(feature = "std")]
pub use cli::{run_session, SessionSummary};
#[cfg(feature = "std")]
pub use logging::init_logging;
