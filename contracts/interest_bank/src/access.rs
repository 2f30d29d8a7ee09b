use soroban_sdk::{log, Address, Env};

use crate::error::Error;
use crate::events;
use crate::storage::{Storage, MAX_RATE_BPS};

/// Owner, administrator and authorized-user capabilities.
///
/// Every `require_*` helper authenticates `caller` first, then checks the
/// role. Membership is not exclusive: the owner or an admin may also be
/// whitelisted as a user.
pub struct AccessRegistry;

impl AccessRegistry {
    // ============================================
    // CAPABILITY PREDICATES
    // ============================================

    pub fn is_owner(env: &Env, identity: &Address) -> bool {
        Storage::get_owner(env).map_or(false, |owner| owner == *identity)
    }

    pub fn is_admin(env: &Env, identity: &Address) -> bool {
        Storage::is_admin(env, identity)
    }

    pub fn is_owner_or_admin(env: &Env, identity: &Address) -> bool {
        Self::is_owner(env, identity) || Self::is_admin(env, identity)
    }

    pub fn is_authorized_user(env: &Env, identity: &Address) -> bool {
        Storage::is_user(env, identity)
    }

    pub fn require_owner(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        let owner = Storage::get_owner(env)?;
        if owner != *caller {
            return Err(Error::NotOwner);
        }
        Ok(())
    }

    pub fn require_owner_or_admin(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        Storage::get_owner(env)?;
        if !Self::is_owner_or_admin(env, caller) {
            return Err(Error::NotOwnerOrAdmin);
        }
        Ok(())
    }

    pub fn require_authorized_user(env: &Env, caller: &Address) -> Result<(), Error> {
        caller.require_auth();
        if !Self::is_authorized_user(env, caller) {
            return Err(Error::NotAuthorizedUser);
        }
        Ok(())
    }

    pub fn require_active(env: &Env) -> Result<(), Error> {
        if !Storage::is_bank_active(env) {
            return Err(Error::BankInactive);
        }
        Ok(())
    }

    /// The bank's own address stands in for the null identity
    pub fn require_valid_identity(env: &Env, identity: &Address) -> Result<(), Error> {
        if *identity == env.current_contract_address() {
            return Err(Error::InvalidIdentity);
        }
        Ok(())
    }

    // ============================================
    // ADMINISTRATORS (OWNER ONLY)
    // ============================================

    /// # Errors
    /// - `NotOwner`: Caller is not the owner
    /// - `InvalidIdentity`: Identity is the bank itself
    /// - `AlreadyAdmin`: Identity already holds the role
    pub fn grant_admin(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        Self::require_valid_identity(env, identity)?;

        if Storage::is_admin(env, identity) {
            return Err(Error::AlreadyAdmin);
        }

        Storage::set_admin(env, identity, true);
        events::emit_role_changed(env, "admin_added", identity);
        Ok(())
    }

    /// # Errors
    /// - `NotOwner`: Caller is not the owner
    /// - `InvalidIdentity`: Identity is the bank itself
    /// - `NotAdmin`: Identity does not hold the role
    pub fn revoke_admin(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
        Self::require_owner(env, caller)?;
        Self::require_valid_identity(env, identity)?;

        if !Storage::is_admin(env, identity) {
            return Err(Error::NotAdmin);
        }

        Storage::set_admin(env, identity, false);
        events::emit_role_changed(env, "admin_revoked", identity);
        Ok(())
    }

    // ============================================
    // USERS (OWNER OR ADMIN)
    // ============================================

    pub fn whitelist_user(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
        Self::require_owner_or_admin(env, caller)?;
        Self::require_valid_identity(env, identity)?;

        if Storage::is_user(env, identity) {
            return Err(Error::AlreadyWhitelisted);
        }

        Storage::set_user(env, identity, true);
        events::emit_role_changed(env, "user_whitelisted", identity);
        Ok(())
    }

    pub fn delist_user(env: &Env, caller: &Address, identity: &Address) -> Result<(), Error> {
        Self::require_owner_or_admin(env, caller)?;
        Self::require_valid_identity(env, identity)?;

        if !Storage::is_user(env, identity) {
            return Err(Error::NotWhitelisted);
        }

        Storage::set_user(env, identity, false);
        events::emit_role_changed(env, "user_removed", identity);
        Ok(())
    }

    // ============================================
    // GOVERNANCE
    // ============================================

    /// Only deposits created after this call use the new rate.
    ///
    /// # Errors
    /// - `NotOwnerOrAdmin`: Caller holds neither role
    /// - `InvalidRate`: Rate above `MAX_RATE_BPS`
    pub fn set_interest_rate(env: &Env, caller: &Address, rate_bps: u32) -> Result<(), Error> {
        Self::require_owner_or_admin(env, caller)?;

        if rate_bps > MAX_RATE_BPS {
            return Err(Error::InvalidRate);
        }

        let old_rate = Storage::get_interest_rate(env);
        Storage::set_interest_rate(env, rate_bps);

        log!(env, "interest rate changed", old_rate, rate_bps);
        events::emit_rate_changed(env, caller, old_rate, rate_bps);
        Ok(())
    }

    pub fn set_bank_active(env: &Env, caller: &Address, active: bool) -> Result<(), Error> {
        Self::require_owner(env, caller)?;

        Storage::set_bank_active(env, active);
        events::emit_bank_status(env, caller, active);
        Ok(())
    }
}
