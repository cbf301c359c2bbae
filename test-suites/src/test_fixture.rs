use minter::{MinterClient, MinterContract, SCALAR_18};
use one_buck_token::{OneBuckClient, OneBuckContract, PermitMessage};
use price_feed::{PriceFeedClient, PriceFeedContract};
use sep_40_oracle::Asset;
use soroban_fixed_point_math::FixedPoint;
use soroban_sdk::testutils::{Address as _, EnvTestConfig, Ledger, LedgerInfo};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, BytesN, Env, String, Symbol};

use crate::network::Network;
use crate::snapshot;

pub const SCALAR_7: i128 = 1_000_0000;

/// The share of deposited collateral minted on a local network, 50%
pub const LOCAL_COLLATERAL_PCT: i128 = 500_000_000_000_000_000;
/// The share of deposited collateral minted on a forked network, 80%
pub const FORKED_COLLATERAL_PCT: i128 = 800_000_000_000_000_000;

/// The oldest price the minter accepts, in seconds
pub const MAX_PRICE_AGE: u64 = 24 * 60 * 60;

/// Collateral minted to the owner on a local network
pub const LOCAL_COLLATERAL_BALANCE: i128 = 1_000_000 * SCALAR_7;

/// Ledgers the collateral approval for the minter stays live for
const APPROVAL_LEDGERS: u32 = 17280 * 30;

pub struct TestFixture<'a> {
    pub env: Env,
    pub network: Network,
    pub owner: Address,
    pub receiver: Address,
    pub alice: Address,
    /// The collateral price published at creation, with 7 decimals
    pub collateral_price: i128,
    pub token: OneBuckClient<'a>,
    pub collateral: TokenClient<'a>,
    pub minter: MinterClient<'a>,
    pub oracle: PriceFeedClient<'a>,
}

impl TestFixture<'_> {
    /// Create a new TestFixture for one-buck on `network`
    ///
    /// Deploys a price feed quoting the collateral, the one-buck token, and a minter, makes the
    /// minter the token's minter, and approves the minter to take all of the owner's collateral.
    pub fn create<'a>(network: &Network) -> TestFixture<'a> {
        let (e, owner, receiver, alice, collateral_id, price, collateral_pct) = match network {
            Network::Local => {
                let e = Env::new_with_config(EnvTestConfig {
                    capture_snapshot_at_drop: false,
                });
                e.mock_all_auths();
                e.cost_estimate().budget().reset_unlimited();
                e.ledger().set(LedgerInfo {
                    timestamp: 1_735_689_600,
                    protocol_version: 22,
                    sequence_number: 100,
                    network_id: Default::default(),
                    base_reserve: 10,
                    min_temp_entry_ttl: 500_000,
                    min_persistent_entry_ttl: 500_000,
                    max_entry_ttl: 9_999_999,
                });

                let owner = Address::generate(&e);
                let receiver = Address::generate(&e);
                let alice = Address::generate(&e);
                let collateral_id = e.register_stellar_asset_contract_v2(owner.clone()).address();
                StellarAssetClient::new(&e, &collateral_id)
                    .mint(&owner, &LOCAL_COLLATERAL_BALANCE);
                (
                    e,
                    owner,
                    receiver,
                    alice,
                    collateral_id,
                    SCALAR_7,
                    LOCAL_COLLATERAL_PCT,
                )
            }
            Network::Forked(config) => {
                let e = snapshot::env_from_snapshot(&config.snapshot);
                e.mock_all_auths();
                e.cost_estimate().budget().reset_unlimited();

                let owner = Address::from_str(&e, &config.owner);
                let receiver = Address::from_str(&e, &config.receiver);
                let alice = Address::from_str(&e, &config.alice);
                let collateral_id = Address::from_str(&e, &config.collateral);
                (
                    e,
                    owner,
                    receiver,
                    alice,
                    collateral_id,
                    config.collateral_price,
                    FORKED_COLLATERAL_PCT,
                )
            }
        };
        let collateral = TokenClient::new(&e, &collateral_id);

        let oracle_id = e.register(
            PriceFeedContract {},
            (
                owner.clone(),
                Asset::Other(Symbol::new(&e, "USD")),
                7u32,
                300u32,
            ),
        );
        let oracle = PriceFeedClient::new(&e, &oracle_id);
        oracle.set_price(&Asset::Stellar(collateral_id.clone()), &price);

        let token_id = e.register(
            OneBuckContract {},
            (
                owner.clone(),
                collateral.decimals(),
                String::from_str(&e, "one-buck"),
                String::from_str(&e, "BUCK"),
            ),
        );
        let token = OneBuckClient::new(&e, &token_id);

        let minter_id = e.register(
            MinterContract {},
            (
                owner.clone(),
                token_id.clone(),
                collateral_id.clone(),
                oracle_id.clone(),
                collateral_pct,
                MAX_PRICE_AGE,
            ),
        );
        let minter = MinterClient::new(&e, &minter_id);

        token.set_minter(&owner, &minter_id);
        collateral.approve(
            &owner,
            &minter_id,
            &collateral.balance(&owner),
            &(e.ledger().sequence() + APPROVAL_LEDGERS),
        );

        TestFixture {
            env: e,
            network: network.clone(),
            owner,
            receiver,
            alice,
            collateral_price: price,
            token,
            collateral,
            minter,
            oracle,
        }
    }

    pub fn is_forked(&self) -> bool {
        self.network.is_forked()
    }

    /// The collateral_pct the minter is deployed with on this network
    pub fn collateral_pct(&self) -> i128 {
        if self.is_forked() {
            FORKED_COLLATERAL_PCT
        } else {
            LOCAL_COLLATERAL_PCT
        }
    }

    /// The one-buck a mint of `quantity` collateral should produce
    pub fn expected_dy(&self, quantity: i128) -> i128 {
        quantity
            .fixed_mul_floor(self.collateral_pct(), SCALAR_18)
            .unwrap()
    }

    /// Publish a collateral price with 7 decimals
    pub fn set_collateral_price(&self, price: i128) {
        self.oracle
            .set_price(&Asset::Stellar(self.collateral.address.clone()), &price);
    }

    /// Approve the minter to burn `amount` one-buck from `user`
    pub fn approve_burn(&self, user: &Address, amount: i128) {
        self.token.approve(
            user,
            &self.minter.address,
            &amount,
            &(self.env.ledger().sequence() + APPROVAL_LEDGERS),
        );
    }

    /// Build the permit for `owner` at their current nonce, bound to this ledger's network id
    /// and the one-buck token
    pub fn permit(
        &self,
        owner: &Address,
        spender: &Address,
        value: i128,
        deadline: u64,
    ) -> PermitMessage {
        PermitMessage::new(
            &self.env,
            &self.token.address,
            owner,
            spender,
            value,
            self.token.nonce(owner),
            deadline,
        )
    }

    /// The digest of `permit`, as a permit signer signs it
    pub fn permit_digest(&self, permit: &PermitMessage) -> BytesN<32> {
        permit.digest(&self.env)
    }

    /// Advance the ledger timestamp by `time` seconds
    pub fn jump(&self, time: u64) {
        self.env
            .ledger()
            .with_mut(|li| li.timestamp = li.timestamp.saturating_add(time));
    }
}
