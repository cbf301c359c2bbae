use std::path::PathBuf;

use crate::snapshot;

/// Environment variable pointing at a ledger snapshot to run the suites against
pub const FORK_SNAPSHOT_VAR: &str = "ONE_BUCK_FORK_SNAPSHOT";

/// The chain state a `TestFixture` is built on
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Network {
    /// A fresh ledger with a locally deployed collateral asset and generated accounts
    Local,
    /// A ledger loaded from a snapshot, using the collateral and accounts that already live there
    Forked(ForkConfig),
}

impl Network {
    /// Select the network from `ONE_BUCK_FORK_SNAPSHOT`. An unset or empty variable selects
    /// `Network::Local`; otherwise the snapshot is treated as a mainnet fork.
    pub fn from_env() -> Network {
        match std::env::var(FORK_SNAPSHOT_VAR) {
            Ok(path) if !path.is_empty() => Network::Forked(ForkConfig::mainnet(path)),
            _ => Network::Local,
        }
    }

    pub fn is_forked(&self) -> bool {
        matches!(self, Network::Forked(_))
    }
}

/// Where a forked ledger lives and which of its accounts play each role. Addresses are strkeys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ForkConfig {
    /// The ledger snapshot file
    pub snapshot: PathBuf,
    /// The Stellar Asset Contract used as collateral
    pub collateral: String,
    /// An account holding collateral, used as the token owner and borrower
    pub owner: String,
    pub receiver: String,
    /// An account that liquidates the owner's loans
    pub alice: String,
    /// The collateral price published to the price feed, with 7 decimals
    pub collateral_price: i128,
}

impl ForkConfig {
    /// Fork mainnet from a snapshot containing the native XLM contract and the XLM whale
    pub fn mainnet(snapshot: impl Into<PathBuf>) -> ForkConfig {
        ForkConfig {
            snapshot: snapshot.into(),
            collateral: snapshot::XLM_ID.to_string(),
            owner: snapshot::XLM_WHALE.to_string(),
            receiver: snapshot::BACKSTOP_ID.to_string(),
            alice: snapshot::BLND_USDC_LP_ID.to_string(),
            collateral_price: snapshot::XLM_PRICE,
        }
    }
}
