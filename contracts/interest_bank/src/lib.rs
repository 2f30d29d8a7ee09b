#![no_std]

mod access;
mod error;
mod events;
mod interest;
mod ledger;
mod market;
mod reserve;
mod storage;
mod transfer;

#[cfg(test)]
mod test_setup;
#[cfg(test)]
mod access_test;

pub use error::{Error, ErrorKind};
pub use storage::{BankConfig, Deposit, OwnershipOffer};

use access::AccessRegistry;
use interest::InterestCalculator;
use ledger::DepositLedger;
use market::OwnershipMarket;
use reserve::ReservePool;
use storage::{Storage, MAX_RATE_BPS};

use soroban_sdk::{contract, contractimpl, log, Address, Env, Vec};

#[contract]
pub struct InterestBank;

#[contractimpl]
impl InterestBank {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Initialize the bank
    ///
    /// The bank starts active, with no admins, no users and an empty reserve.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `InvalidConfig`: `lock_duration` or `time_unit` is zero
    /// - `InvalidRate`: Rate above `MAX_RATE_BPS`
    pub fn initialize(
        env: Env,
        owner: Address,
        token: Address,
        interest_rate_bps: u32,
        lock_duration: u64,
        time_unit: u64,
    ) -> Result<(), Error> {
        if Storage::is_initialized(&env) {
            return Err(Error::AlreadyInitialized);
        }

        owner.require_auth();

        if lock_duration == 0 || time_unit == 0 {
            return Err(Error::InvalidConfig);
        }
        if interest_rate_bps > MAX_RATE_BPS {
            return Err(Error::InvalidRate);
        }

        Storage::set_initialized(&env);
        Storage::set_owner(&env, &owner);
        Storage::set_config(
            &env,
            &BankConfig {
                token,
                lock_duration,
                time_unit,
            },
        );
        Storage::set_interest_rate(&env, interest_rate_bps);
        Storage::set_bank_active(&env, true);
        Storage::set_reserve(&env, 0);
        Storage::set_total_principal(&env, 0);
        Storage::bump_instance(&env);

        log!(&env, "bank initialized", owner, interest_rate_bps);
        Ok(())
    }

    // ============================================
    // OWNER & ADMIN
    // ============================================

    pub fn set_bank_active(env: Env, caller: Address, active: bool) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::set_bank_active(&env, &caller, active)
    }

    /// Returns the new reserve total
    pub fn contribute_reserve(env: Env, caller: Address, amount: i128) -> Result<i128, Error> {
        Storage::bump_instance(&env);
        ReservePool::contribute(&env, &caller, amount)
    }

    pub fn grant_admin(env: Env, caller: Address, identity: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::grant_admin(&env, &caller, &identity)
    }

    pub fn revoke_admin(env: Env, caller: Address, identity: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::revoke_admin(&env, &caller, &identity)
    }

    pub fn set_interest_rate(env: Env, caller: Address, rate_bps: u32) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::set_interest_rate(&env, &caller, rate_bps)
    }

    pub fn whitelist_user(env: Env, caller: Address, identity: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::whitelist_user(&env, &caller, &identity)
    }

    pub fn delist_user(env: Env, caller: Address, identity: Address) -> Result<(), Error> {
        Storage::bump_instance(&env);
        AccessRegistry::delist_user(&env, &caller, &identity)
    }

    // ============================================
    // DEPOSITS
    // ============================================

    /// Returns the index of the new deposit
    pub fn create_deposit(env: Env, user: Address, amount: i128) -> Result<u32, Error> {
        Storage::bump_instance(&env);
        DepositLedger::create_deposit(&env, &user, amount)
    }

    /// Returns principal plus interest paid out
    pub fn withdraw(env: Env, user: Address, index: u32) -> Result<i128, Error> {
        Storage::bump_instance(&env);
        DepositLedger::withdraw(&env, &user, index)
    }

    // ============================================
    // OWNERSHIP SALE
    // ============================================

    pub fn offer_ownership(
        env: Env,
        caller: Address,
        candidate: Option<Address>,
        price: i128,
    ) -> Result<(), Error> {
        Storage::bump_instance(&env);
        OwnershipMarket::offer(&env, &caller, candidate, price)
    }

    pub fn accept_ownership(env: Env, candidate: Address, payment: i128) -> Result<(), Error> {
        Storage::bump_instance(&env);
        OwnershipMarket::accept(&env, &candidate, payment)
    }

    pub fn get_ownership_offer(env: Env) -> OwnershipOffer {
        OwnershipMarket::get_offer(&env)
    }

    /// Value sent without naming an operation is refused
    pub fn receive(env: Env, from: Address, amount: i128) -> Result<(), Error> {
        log!(&env, "direct transfer", from, amount);
        Err(Error::DirectTransferRejected.logged(&env))
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Tokens held by the bank (principal, reserve and anything sent around it)
    pub fn total_balance(env: Env) -> Result<i128, Error> {
        let config = Storage::get_config(&env)?;
        Ok(transfer::balance_held(&env, &config.token))
    }

    pub fn total_reserve(env: Env) -> i128 {
        ReservePool::reserve_at(&env)
    }

    /// Principal of all deposits not yet withdrawn
    pub fn total_principal(env: Env) -> i128 {
        Storage::get_total_principal(&env)
    }

    pub fn deposit_count(env: Env, user: Address) -> u32 {
        DepositLedger::deposit_count(&env, &user)
    }

    pub fn get_deposit(env: Env, user: Address, index: u32) -> Result<Deposit, Error> {
        DepositLedger::get_deposit(&env, &user, index)
    }

    /// One page of an account's deposits; `limit` is capped at 50
    pub fn get_deposits(env: Env, user: Address, start: u32, limit: u32) -> Vec<Deposit> {
        DepositLedger::get_deposits(&env, &user, start, limit)
    }

    pub fn preview_interest(env: Env, user: Address, index: u32) -> Result<i128, Error> {
        DepositLedger::preview_interest(&env, &user, index)
    }

    pub fn maturity_time(env: Env, user: Address, index: u32) -> Result<u64, Error> {
        DepositLedger::maturity_time(&env, &user, index)
    }

    pub fn is_matured(env: Env, user: Address, index: u32) -> Result<bool, Error> {
        DepositLedger::is_matured(&env, &user, index)
    }

    /// Pure accrual: `floor(principal × rate_bps / 10,000) × elapsed_units`
    pub fn calculate_interest(
        _env: Env,
        principal: i128,
        rate_bps: u32,
        elapsed_units: u64,
    ) -> Result<i128, Error> {
        InterestCalculator::accrue(principal, rate_bps, elapsed_units)
            .ok_or(Error::ArithmeticOverflow)
    }

    pub fn owner(env: Env) -> Result<Address, Error> {
        Storage::get_owner(&env)
    }

    pub fn is_owner(env: Env, identity: Address) -> bool {
        AccessRegistry::is_owner(&env, &identity)
    }

    pub fn is_admin(env: Env, identity: Address) -> bool {
        AccessRegistry::is_admin(&env, &identity)
    }

    pub fn is_owner_or_admin(env: Env, identity: Address) -> bool {
        AccessRegistry::is_owner_or_admin(&env, &identity)
    }

    pub fn is_authorized_user(env: Env, identity: Address) -> bool {
        AccessRegistry::is_authorized_user(&env, &identity)
    }

    pub fn interest_rate(env: Env) -> u32 {
        Storage::get_interest_rate(&env)
    }

    pub fn is_bank_active(env: Env) -> bool {
        Storage::is_bank_active(&env)
    }

    pub fn get_config(env: Env) -> Result<BankConfig, Error> {
        Storage::get_config(&env)
    }
}
