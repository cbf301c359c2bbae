#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod actions;
mod constants;
mod contract;
mod dependencies;
mod errors;
mod events;
mod loan;
mod pricing;
mod storage;
mod validator;

pub use constants::{LIQUIDATION_RATIO, PRICE_DECIMALS, SCALAR_18};
pub use contract::*;
pub use errors::MinterError;
pub use events::MinterEvents;
pub use loan::Loan;
pub use storage::{MinterConfig, MinterDataKey};

#[cfg(test)]
mod testutils;

#[cfg(test)]
mod test;
