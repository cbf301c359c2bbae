//! Contract addresses and other relevant values used in the mainnet snapshot

use std::path::Path;

use soroban_sdk::{
    testutils::{EnvTestConfig, Ledger, LedgerInfo},
    token::StellarAssetClient,
    Address, Env,
};

use crate::network::ForkConfig;

pub const XLM_ID: &str = "CAS3J7GYLGXMF6TDJBBYYSE3HQ6BBSMLNUQ34T6TZMYMW2EVH34XOWMA";

pub const BLND_USDC_LP_ID: &str = "CAS3FL6TLZKDGGSISDBWGGPXT3NRR4DYTZD7YOD3HMYO6LTJUVGRVEAM";
pub const BACKSTOP_ID: &str = "CAO3AGAMZVRMHITL36EJ2VZQWKYRPWMQAPDQD5YEOF3GIF7T44U4JAL3";

// has ~3m XLM available
pub const XLM_WHALE: &str = "CBP7NO6F7FRDHSOFQBT2L2UWYIZ2PU76JKVRYAQTG3KZSQLYAOKIF2WB";

/// Issues the collateral in a locally generated fork. Must not be one of the fixture's accounts,
/// as the nonce its mint authorization leaves in the ledger collides once the fork is reloaded.
pub const COLLATERAL_ADMIN_ID: &str = "CCOQM6S7ICIUWA225O5PSJWUBEMXGFSSW2PQFO6FP4DQEKMS5DASRGRR";

/// XLM price published for forked runs, $0.115
pub const XLM_PRICE: i128 = 0_1150000;

/// Collateral the owner holds in a locally generated fork
pub const LOCAL_FORK_BALANCE: i128 = 1_000_000_0000000;

/// Load a ledger snapshot without writing a new one when the env drops
pub fn env_from_snapshot(path: &Path) -> Env {
    let mut env = Env::from_ledger_snapshot_file(path);
    env.set_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });
    env
}

/// Write a ledger holding a collateral SAC and a funded owner to `path`, and return the fork
/// configuration that points at it. The accounts are the mainnet ones, so only the collateral
/// address differs from `ForkConfig::mainnet`.
pub fn fork_from_local(path: &Path) -> ForkConfig {
    let env = Env::new_with_config(EnvTestConfig {
        capture_snapshot_at_drop: false,
    });
    env.mock_all_auths();
    env.ledger().set(LedgerInfo {
        timestamp: 1_735_689_600,
        protocol_version: 22,
        sequence_number: 55_000_000,
        network_id: [7; 32],
        base_reserve: 10,
        min_temp_entry_ttl: 500_000,
        min_persistent_entry_ttl: 500_000,
        max_entry_ttl: 9_999_999,
    });

    // generated addresses would collide with contracts registered on the fork
    let admin = Address::from_str(&env, COLLATERAL_ADMIN_ID);
    let owner = Address::from_str(&env, XLM_WHALE);
    let collateral = env.register_stellar_asset_contract_v2(admin).address();
    StellarAssetClient::new(&env, &collateral).mint(&owner, &LOCAL_FORK_BALANCE);

    env.to_ledger_snapshot()
        .write_file(path)
        .expect("ledger snapshot is writable");

    ForkConfig {
        snapshot: path.to_path_buf(),
        collateral: strkey(&collateral),
        owner: XLM_WHALE.to_string(),
        receiver: BACKSTOP_ID.to_string(),
        alice: BLND_USDC_LP_ID.to_string(),
        collateral_price: XLM_PRICE,
    }
}

/// A path in the temp dir for a snapshot that no other test writes to
pub fn temp_snapshot_path() -> std::path::PathBuf {
    std::env::temp_dir().join(format!("one-buck-fork-{}.json", rand::random::<u64>()))
}

fn strkey(address: &Address) -> String {
    let strkey = address.to_string();
    let mut buf = vec![0u8; strkey.len() as usize];
    strkey.copy_into_slice(&mut buf);
    String::from_utf8(buf).expect("strkeys are ascii")
}
