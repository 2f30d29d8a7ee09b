use soroban_sdk::{log, Address, Env, Vec};

use crate::access::AccessRegistry;
use crate::error::Error;
use crate::events::{self, DepositMadeEvent, WithdrawalMadeEvent};
use crate::interest::InterestCalculator;
use crate::reserve::ReservePool;
use crate::storage::{Deposit, Storage, MAX_DEPOSITS_PAGE};
use crate::transfer;

/// Append-only log of deposits per account.
///
/// Indices start at 0, are never reused and records are never removed;
/// withdrawal only flips `withdrawn`.
pub struct DepositLedger;

impl DepositLedger {
    /// Record a new deposit at the current interest rate
    ///
    /// # Errors
    /// - `BankInactive`: Bank is not active
    /// - `NotAuthorizedUser`: Account is not whitelisted
    /// - `InvalidAmount`: Amount <= 0
    /// - `TransferFailed`: Account could not pay
    pub fn create_deposit(env: &Env, account: &Address, amount: i128) -> Result<u32, Error> {
        Self::require_open_for(env, account)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let config = Storage::get_config(env)?;
        let now = env.ledger().timestamp();
        let rate_bps = Storage::get_interest_rate(env);

        let index = Storage::get_deposit_count(env, account);
        let next_count = index.checked_add(1).ok_or(Error::ArithmeticOverflow)?;
        let total_principal = Storage::get_total_principal(env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;

        let deposit = Deposit {
            amount,
            created_at: now,
            rate_bps,
            lock_duration: config.lock_duration,
            withdrawn: false,
        };
        Storage::set_deposit(env, account, index, &deposit);
        Storage::set_deposit_count(env, account, next_count);
        Storage::set_total_principal(env, total_principal);

        transfer::pull(env, &config.token, account, amount)?;

        events::emit_deposit_made(
            env,
            DepositMadeEvent {
                account: account.clone(),
                index,
                amount,
                rate_bps,
                time: now,
            },
        );

        Ok(index)
    }

    /// Pay out principal plus interest for a matured deposit
    ///
    /// Internal state (withdrawn flag, reserve, principal total) is committed
    /// before the outbound transfer.
    ///
    /// # Errors
    /// - `BankInactive`: Bank is not active
    /// - `NotAuthorizedUser`: Account is not whitelisted
    /// - `DepositNotFound`: No deposit at `index`
    /// - `AlreadyWithdrawn`: Deposit already paid out
    /// - `NotMatured`: Lock period has not elapsed
    /// - `InsufficientReserve`: Reserve cannot cover the interest
    /// - `InsufficientContractBalance`: Bank holds less than the payout
    /// - `TransferFailed`: Payout transfer failed
    pub fn withdraw(env: &Env, account: &Address, index: u32) -> Result<i128, Error> {
        Self::require_open_for(env, account)?;

        let config = Storage::get_config(env)?;
        let now = env.ledger().timestamp();

        let mut deposit = Self::get_live_deposit(env, account, index)?;
        if !deposit.is_matured(now) {
            return Err(Error::NotMatured);
        }

        let interest = Self::accrued(&deposit, now, config.time_unit)?;
        let payout = deposit
            .amount
            .checked_add(interest)
            .ok_or(Error::ArithmeticOverflow)?;

        ReservePool::ensure_covers(env, interest)?;
        let held = transfer::balance_held(env, &config.token);
        if held < payout {
            log!(env, "bank balance short", payout, held);
            return Err(Error::InsufficientContractBalance.logged(env));
        }

        deposit.withdrawn = true;
        Storage::set_deposit(env, account, index, &deposit);
        ReservePool::debit(env, interest)?;
        let total_principal = Storage::get_total_principal(env)
            .checked_sub(deposit.amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set_total_principal(env, total_principal);

        transfer::push(env, &config.token, account, payout)?;

        events::emit_withdrawal_made(
            env,
            WithdrawalMadeEvent {
                account: account.clone(),
                index,
                principal: deposit.amount,
                interest,
                time: now,
            },
        );

        Ok(payout)
    }

    /// Interest `withdraw` would pay right now, ignoring maturity
    ///
    /// # Errors
    /// - `DepositNotFound`: No deposit at `index`
    /// - `AlreadyWithdrawn`: Deposit already paid out
    pub fn preview_interest(env: &Env, account: &Address, index: u32) -> Result<i128, Error> {
        let config = Storage::get_config(env)?;
        let deposit = Self::get_live_deposit(env, account, index)?;
        Self::accrued(&deposit, env.ledger().timestamp(), config.time_unit)
    }

    // ============================================
    // READS
    // ============================================

    pub fn deposit_count(env: &Env, account: &Address) -> u32 {
        Storage::get_deposit_count(env, account)
    }

    pub fn get_deposit(env: &Env, account: &Address, index: u32) -> Result<Deposit, Error> {
        Storage::get_deposit(env, account, index)
    }

    /// At most `MAX_DEPOSITS_PAGE` records from index `start` on
    pub fn get_deposits(env: &Env, account: &Address, start: u32, limit: u32) -> Vec<Deposit> {
        let mut deposits = Vec::new(env);
        let count = Storage::get_deposit_count(env, account);
        let end = start
            .saturating_add(limit.min(MAX_DEPOSITS_PAGE))
            .min(count);
        for index in start..end {
            if let Ok(deposit) = Storage::get_deposit(env, account, index) {
                deposits.push_back(deposit);
            }
        }
        deposits
    }

    pub fn maturity_time(env: &Env, account: &Address, index: u32) -> Result<u64, Error> {
        Ok(Storage::get_deposit(env, account, index)?.maturity_time())
    }

    pub fn is_matured(env: &Env, account: &Address, index: u32) -> Result<bool, Error> {
        let deposit = Storage::get_deposit(env, account, index)?;
        Ok(deposit.is_matured(env.ledger().timestamp()))
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn require_open_for(env: &Env, account: &Address) -> Result<(), Error> {
        AccessRegistry::require_active(env)?;
        AccessRegistry::require_authorized_user(env, account)
    }

    fn get_live_deposit(env: &Env, account: &Address, index: u32) -> Result<Deposit, Error> {
        let deposit = Storage::get_deposit(env, account, index)?;
        if deposit.withdrawn {
            return Err(Error::AlreadyWithdrawn);
        }
        Ok(deposit)
    }

    fn accrued(deposit: &Deposit, now: u64, time_unit: u64) -> Result<i128, Error> {
        let elapsed = InterestCalculator::elapsed_units(deposit.created_at, now, time_unit);
        InterestCalculator::accrue(deposit.amount, deposit.rate_bps, elapsed)
            .ok_or(Error::ArithmeticOverflow)
    }
}
