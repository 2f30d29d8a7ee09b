use soroban_sdk::{testutils::Address as _, Address, Env};

use crate::test_setup::{setup, DAY, LOCK, RATE_BPS, SCALE};
use crate::{Error, InterestBank, InterestBankClient};

#[test]
fn test_initialize_sets_roles_and_config() {
    let ctx = setup();

    assert_eq!(ctx.bank.owner(), ctx.owner);
    assert!(ctx.bank.is_owner(&ctx.owner));
    assert!(ctx.bank.is_admin(&ctx.admin));
    assert!(ctx.bank.is_owner_or_admin(&ctx.admin));
    assert!(ctx.bank.is_authorized_user(&ctx.user));
    assert!(!ctx.bank.is_owner_or_admin(&ctx.outsider));
    assert!(ctx.bank.is_bank_active());
    assert_eq!(ctx.bank.interest_rate(), RATE_BPS);
    assert_eq!(ctx.bank.total_reserve(), 0);

    let config = ctx.bank.get_config();
    assert_eq!(config.token, ctx.token.address);
    assert_eq!(config.lock_duration, LOCK);
    assert_eq!(config.time_unit, DAY);
}

#[test]
fn test_double_initialize_fails() {
    let ctx = setup();

    let result = ctx
        .bank
        .try_initialize(&ctx.outsider, &ctx.token.address, &0, &LOCK, &DAY);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(ctx.bank.owner(), ctx.owner);
}

#[test]
fn test_initialize_rejects_bad_config() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let token = Address::generate(&env);
    let bank_id = env.register(InterestBank, ());
    let bank = InterestBankClient::new(&env, &bank_id);

    assert_eq!(
        bank.try_initialize(&owner, &token, &100, &0, &DAY),
        Err(Ok(Error::InvalidConfig))
    );
    assert_eq!(
        bank.try_initialize(&owner, &token, &100, &LOCK, &0),
        Err(Ok(Error::InvalidConfig))
    );
    assert_eq!(
        bank.try_initialize(&owner, &token, &10_001, &LOCK, &DAY),
        Err(Ok(Error::InvalidRate))
    );

    // Nothing stuck from the failed attempts
    bank.initialize(&owner, &token, &100, &LOCK, &DAY);
    assert_eq!(bank.owner(), owner);
}

#[test]
fn test_grant_admin_is_owner_only() {
    let ctx = setup();
    let candidate = Address::generate(&ctx.env);

    assert_eq!(
        ctx.bank.try_grant_admin(&ctx.outsider, &candidate),
        Err(Ok(Error::NotOwner))
    );
    // Admins cannot appoint admins
    assert_eq!(
        ctx.bank.try_grant_admin(&ctx.admin, &candidate),
        Err(Ok(Error::NotOwner))
    );
    assert!(!ctx.bank.is_admin(&candidate));

    ctx.bank.grant_admin(&ctx.owner, &candidate);
    assert!(ctx.bank.is_admin(&candidate));
}

#[test]
fn test_grant_admin_twice_fails() {
    let ctx = setup();

    assert_eq!(
        ctx.bank.try_grant_admin(&ctx.owner, &ctx.admin),
        Err(Ok(Error::AlreadyAdmin))
    );
}

#[test]
fn test_revoke_admin_removes_capability() {
    let ctx = setup();
    let someone = Address::generate(&ctx.env);

    ctx.bank.whitelist_user(&ctx.admin, &someone);
    ctx.bank.revoke_admin(&ctx.owner, &ctx.admin);

    assert!(!ctx.bank.is_admin(&ctx.admin));
    assert!(!ctx.bank.is_owner_or_admin(&ctx.admin));
    assert_eq!(
        ctx.bank.try_delist_user(&ctx.admin, &someone),
        Err(Ok(Error::NotOwnerOrAdmin))
    );
    assert_eq!(
        ctx.bank.try_set_interest_rate(&ctx.admin, &500),
        Err(Ok(Error::NotOwnerOrAdmin))
    );

    // Second revoke has nothing to revoke
    assert_eq!(
        ctx.bank.try_revoke_admin(&ctx.owner, &ctx.admin),
        Err(Ok(Error::NotAdmin))
    );

    // Re-granting restores it
    ctx.bank.grant_admin(&ctx.owner, &ctx.admin);
    ctx.bank.delist_user(&ctx.admin, &someone);
    assert!(!ctx.bank.is_authorized_user(&someone));
}

#[test]
fn test_admin_can_manage_users() {
    let ctx = setup();
    let someone = Address::generate(&ctx.env);

    ctx.bank.whitelist_user(&ctx.admin, &someone);
    assert!(ctx.bank.is_authorized_user(&someone));

    ctx.bank.delist_user(&ctx.admin, &someone);
    assert!(!ctx.bank.is_authorized_user(&someone));
}

#[test]
fn test_outsider_cannot_manage_users() {
    let ctx = setup();
    let someone = Address::generate(&ctx.env);

    assert_eq!(
        ctx.bank.try_whitelist_user(&ctx.outsider, &someone),
        Err(Ok(Error::NotOwnerOrAdmin))
    );
    // Whitelisted users have no governance rights
    assert_eq!(
        ctx.bank.try_whitelist_user(&ctx.user, &someone),
        Err(Ok(Error::NotOwnerOrAdmin))
    );
}

#[test]
fn test_redundant_user_changes_fail() {
    let ctx = setup();

    assert_eq!(
        ctx.bank.try_whitelist_user(&ctx.owner, &ctx.user),
        Err(Ok(Error::AlreadyWhitelisted))
    );
    assert_eq!(
        ctx.bank.try_delist_user(&ctx.owner, &ctx.outsider),
        Err(Ok(Error::NotWhitelisted))
    );
}

#[test]
fn test_bank_address_is_not_a_valid_identity() {
    let ctx = setup();
    let bank_address = ctx.bank.address.clone();

    assert_eq!(
        ctx.bank.try_grant_admin(&ctx.owner, &bank_address),
        Err(Ok(Error::InvalidIdentity))
    );
    assert_eq!(
        ctx.bank.try_whitelist_user(&ctx.owner, &bank_address),
        Err(Ok(Error::InvalidIdentity))
    );
}

#[test]
fn test_set_interest_rate() {
    let ctx = setup();

    ctx.bank.set_interest_rate(&ctx.admin, &250);
    assert_eq!(ctx.bank.interest_rate(), 250);

    ctx.bank.set_interest_rate(&ctx.owner, &0);
    assert_eq!(ctx.bank.interest_rate(), 0);

    assert_eq!(
        ctx.bank.try_set_interest_rate(&ctx.outsider, &300),
        Err(Ok(Error::NotOwnerOrAdmin))
    );
    assert_eq!(
        ctx.bank.try_set_interest_rate(&ctx.owner, &10_001),
        Err(Ok(Error::InvalidRate))
    );
    assert_eq!(ctx.bank.interest_rate(), 0);
}

#[test]
fn test_set_bank_active_is_owner_only() {
    let ctx = setup();

    assert_eq!(
        ctx.bank.try_set_bank_active(&ctx.admin, &false),
        Err(Ok(Error::NotOwner))
    );
    assert!(ctx.bank.is_bank_active());

    ctx.bank.set_bank_active(&ctx.owner, &false);
    assert!(!ctx.bank.is_bank_active());

    ctx.bank.set_bank_active(&ctx.owner, &true);
    assert!(ctx.bank.is_bank_active());
}

#[test]
fn test_owner_may_also_be_whitelisted() {
    let ctx = setup();

    ctx.bank.whitelist_user(&ctx.owner, &ctx.owner);
    assert!(ctx.bank.is_owner(&ctx.owner));
    assert!(ctx.bank.is_authorized_user(&ctx.owner));

    let index = ctx.bank.create_deposit(&ctx.owner, &(10 * SCALE));
    assert_eq!(index, 0);
    assert_eq!(ctx.bank.deposit_count(&ctx.owner), 1);
}
