#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod errors;
mod events;
mod permit;
mod storage;
mod validator;

pub use contract::*;
pub use errors::TokenError;
pub use events::TokenEvents;
pub use permit::{PermitMessage, PERMIT_NAME, PERMIT_VERSION};
pub use storage::{AllowanceDataKey, AllowanceValue, TokenDataKey};
