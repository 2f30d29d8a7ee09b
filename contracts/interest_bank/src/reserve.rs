use soroban_sdk::{log, Address, Env};

use crate::access::AccessRegistry;
use crate::error::Error;
use crate::events;
use crate::storage::Storage;
use crate::transfer;

/// Pool that pays interest, tracked apart from depositor principal.
pub struct ReservePool;

impl ReservePool {
    /// Owner tops up the reserve from its own token balance
    ///
    /// # Errors
    /// - `NotOwner`: Caller is not the owner
    /// - `InvalidAmount`: Amount <= 0
    /// - `ArithmeticOverflow`: Reserve would exceed i128
    /// - `TransferFailed`: Owner could not pay
    pub fn contribute(env: &Env, caller: &Address, amount: i128) -> Result<i128, Error> {
        AccessRegistry::require_owner(env, caller)?;

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        let new_total = Self::reserve_at(env)
            .checked_add(amount)
            .ok_or(Error::ArithmeticOverflow)?;
        Storage::set_reserve(env, new_total);

        let config = Storage::get_config(env)?;
        transfer::pull(env, &config.token, caller, amount)?;

        events::emit_reserve_added(env, caller, amount, new_total);
        Ok(new_total)
    }

    pub fn reserve_at(env: &Env) -> i128 {
        Storage::get_reserve(env)
    }

    pub(crate) fn ensure_covers(env: &Env, amount: i128) -> Result<(), Error> {
        let reserve = Self::reserve_at(env);
        if amount > reserve {
            log!(env, "reserve short", amount, reserve);
            return Err(Error::InsufficientReserve.logged(env));
        }
        Ok(())
    }

    /// Must run before the payout leaves the bank
    pub(crate) fn debit(env: &Env, amount: i128) -> Result<(), Error> {
        Self::ensure_covers(env, amount)?;
        Storage::set_reserve(env, Self::reserve_at(env) - amount);
        Ok(())
    }
}
