use soroban_sdk::{
    testutils::{Address as _, IssuerFlags, Ledger},
    token, Address, Env,
};

use crate::{InterestBank, InterestBankClient};

// Constants
pub const SCALE: i128 = 10_000_000; // 7 decimals
pub const DAY: u64 = 86_400;
pub const LOCK: u64 = 30 * DAY;
pub const START: u64 = 1_000;
pub const RATE_BPS: u32 = 100; // 1% per day

pub struct TestContext<'a> {
    pub env: Env,
    pub owner: Address,
    pub admin: Address,
    pub user: Address,
    pub outsider: Address,
    pub token: token::Client<'a>,
    pub token_admin: token::StellarAssetClient<'a>,
    pub bank: InterestBankClient<'a>,
}

impl<'a> TestContext<'a> {
    pub fn set_time(&self, timestamp: u64) {
        self.env.ledger().with_mut(|li| {
            li.timestamp = timestamp;
        });
    }
}

/// Bank with one admin and one whitelisted user; everyone holds 1,000,000 tokens
pub fn setup<'a>() -> TestContext<'a> {
    let env = Env::default();
    env.mock_all_auths();
    env.ledger().with_mut(|li| {
        li.timestamp = START;
    });

    let owner = Address::generate(&env);
    let admin = Address::generate(&env);
    let user = Address::generate(&env);
    let outsider = Address::generate(&env);
    let asset_admin = Address::generate(&env);

    let sac = env.register_stellar_asset_contract_v2(asset_admin);
    sac.issuer().set_flag(IssuerFlags::RevocableFlag);
    let token = token::Client::new(&env, &sac.address());
    let token_admin = token::StellarAssetClient::new(&env, &sac.address());
    for holder in [&owner, &admin, &user, &outsider] {
        token_admin.mint(holder, &(1_000_000 * SCALE));
    }

    let bank_id = env.register(InterestBank, ());
    let bank = InterestBankClient::new(&env, &bank_id);
    bank.initialize(&owner, &sac.address(), &RATE_BPS, &LOCK, &DAY);
    bank.grant_admin(&owner, &admin);
    bank.whitelist_user(&owner, &user);

    TestContext {
        env,
        owner,
        admin,
        user,
        outsider,
        token,
        token_admin,
        bank,
    }
}
