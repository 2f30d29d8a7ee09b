use soroban_sdk::{contracttype, Address, Env};

use crate::error::Error;

// Constants
pub const BASIS_POINTS: i128 = 10_000; // 100% = 10,000 basis points
pub const MAX_RATE_BPS: u32 = 10_000;
pub const MAX_DEPOSITS_PAGE: u32 = 50;

pub const DAY_IN_LEDGERS: u32 = 17_280; // 5s ledgers
pub const INSTANCE_BUMP_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
pub const INSTANCE_LIFETIME_THRESHOLD: u32 = INSTANCE_BUMP_AMOUNT - DAY_IN_LEDGERS;
pub const PERSISTENT_BUMP_AMOUNT: u32 = 90 * DAY_IN_LEDGERS;
pub const PERSISTENT_LIFETIME_THRESHOLD: u32 = PERSISTENT_BUMP_AMOUNT - DAY_IN_LEDGERS;

/// Parameters fixed at initialization
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankConfig {
    /// Token accepted for deposits, reserve and ownership payments
    pub token: Address,
    /// Seconds a deposit stays locked after creation
    pub lock_duration: u64,
    /// Seconds per accrual unit
    pub time_unit: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Deposit {
    /// Principal in token units
    pub amount: i128,
    /// Ledger timestamp at creation
    pub created_at: u64,
    /// Interest rate in force at creation, basis points per time unit
    pub rate_bps: u32,
    /// Lock period captured at creation
    pub lock_duration: u64,
    /// Set once, never cleared
    pub withdrawn: bool,
}

impl Deposit {
    pub fn maturity_time(&self) -> u64 {
        self.created_at.saturating_add(self.lock_duration)
    }

    pub fn is_matured(&self, now: u64) -> bool {
        now >= self.maturity_time()
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipOffer {
    pub active: bool,
    pub candidate: Option<Address>,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PendingOffer {
    pub candidate: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Config,
    Owner,
    Admin(Address),
    User(Address),
    InterestRate, // In basis points per time unit
    BankActive,
    Reserve,
    TotalPrincipal,
    DepositCount(Address),
    Deposit(Address, u32), // (account, index) → Deposit
    Offer,
}

pub struct Storage;

impl Storage {
    pub fn bump_instance(env: &Env) {
        env.storage()
            .instance()
            .extend_ttl(INSTANCE_LIFETIME_THRESHOLD, INSTANCE_BUMP_AMOUNT);
    }

    fn bump_persistent(env: &Env, key: &DataKey) {
        env.storage().persistent().extend_ttl(
            key,
            PERSISTENT_LIFETIME_THRESHOLD,
            PERSISTENT_BUMP_AMOUNT,
        );
    }

    // Initialization
    pub fn is_initialized(env: &Env) -> bool {
        env.storage().instance().has(&DataKey::Initialized)
    }

    pub fn set_initialized(env: &Env) {
        env.storage().instance().set(&DataKey::Initialized, &true);
    }

    pub fn get_config(env: &Env) -> Result<BankConfig, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Config)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_config(env: &Env, config: &BankConfig) {
        env.storage().instance().set(&DataKey::Config, config);
    }

    // Roles
    pub fn get_owner(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Owner)
            .ok_or(Error::NotInitialized)
    }

    pub fn set_owner(env: &Env, owner: &Address) {
        env.storage().instance().set(&DataKey::Owner, owner);
    }

    pub fn is_admin(env: &Env, identity: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::Admin(identity.clone()))
            .unwrap_or(false)
    }

    pub fn set_admin(env: &Env, identity: &Address, granted: bool) {
        let key = DataKey::Admin(identity.clone());
        if granted {
            env.storage().persistent().set(&key, &true);
            Self::bump_persistent(env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    pub fn is_user(env: &Env, identity: &Address) -> bool {
        env.storage()
            .persistent()
            .get(&DataKey::User(identity.clone()))
            .unwrap_or(false)
    }

    pub fn set_user(env: &Env, identity: &Address, whitelisted: bool) {
        let key = DataKey::User(identity.clone());
        if whitelisted {
            env.storage().persistent().set(&key, &true);
            Self::bump_persistent(env, &key);
        } else {
            env.storage().persistent().remove(&key);
        }
    }

    // Governance
    pub fn get_interest_rate(env: &Env) -> u32 {
        env.storage()
            .instance()
            .get(&DataKey::InterestRate)
            .unwrap_or(0)
    }

    pub fn set_interest_rate(env: &Env, rate_bps: u32) {
        env.storage()
            .instance()
            .set(&DataKey::InterestRate, &rate_bps);
    }

    pub fn is_bank_active(env: &Env) -> bool {
        env.storage()
            .instance()
            .get(&DataKey::BankActive)
            .unwrap_or(false)
    }

    pub fn set_bank_active(env: &Env, active: bool) {
        env.storage().instance().set(&DataKey::BankActive, &active);
    }

    // Balances
    pub fn get_reserve(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::Reserve)
            .unwrap_or(0)
    }

    pub fn set_reserve(env: &Env, amount: i128) {
        env.storage().instance().set(&DataKey::Reserve, &amount);
    }

    pub fn get_total_principal(env: &Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalPrincipal)
            .unwrap_or(0)
    }

    pub fn set_total_principal(env: &Env, amount: i128) {
        env.storage()
            .instance()
            .set(&DataKey::TotalPrincipal, &amount);
    }

    // Deposits
    pub fn get_deposit_count(env: &Env, account: &Address) -> u32 {
        env.storage()
            .persistent()
            .get(&DataKey::DepositCount(account.clone()))
            .unwrap_or(0)
    }

    pub fn set_deposit_count(env: &Env, account: &Address, count: u32) {
        let key = DataKey::DepositCount(account.clone());
        env.storage().persistent().set(&key, &count);
        Self::bump_persistent(env, &key);
    }

    pub fn get_deposit(env: &Env, account: &Address, index: u32) -> Result<Deposit, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Deposit(account.clone(), index))
            .ok_or(Error::DepositNotFound)
    }

    pub fn set_deposit(env: &Env, account: &Address, index: u32, deposit: &Deposit) {
        let key = DataKey::Deposit(account.clone(), index);
        env.storage().persistent().set(&key, deposit);
        Self::bump_persistent(env, &key);
    }

    // Ownership offer
    pub fn get_offer(env: &Env) -> Option<PendingOffer> {
        env.storage().instance().get(&DataKey::Offer)
    }

    pub fn set_offer(env: &Env, offer: &PendingOffer) {
        env.storage().instance().set(&DataKey::Offer, offer);
    }

    pub fn clear_offer(env: &Env) {
        env.storage().instance().remove(&DataKey::Offer);
    }
}
