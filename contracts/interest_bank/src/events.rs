use soroban_sdk::{contracttype, Address, Env, Symbol};

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct BankStatusEvent {
    pub owner: Address,
    pub active: bool,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ReserveAddedEvent {
    pub contributor: Address,
    pub amount: i128,
    pub new_total: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InterestRateChangedEvent {
    pub actor: Address,
    pub old_rate_bps: u32,
    pub new_rate_bps: u32,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RoleChangedEvent {
    pub identity: Address,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct DepositMadeEvent {
    pub account: Address,
    pub index: u32,
    pub amount: i128,
    pub rate_bps: u32,
    pub time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct WithdrawalMadeEvent {
    pub account: Address,
    pub index: u32,
    pub principal: i128,
    pub interest: i128,
    pub time: u64,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipOfferedEvent {
    pub candidate: Address,
    pub price: i128,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OwnershipTransferredEvent {
    pub previous_owner: Address,
    pub new_owner: Address,
    pub price: i128,
}

pub fn emit_bank_status(env: &Env, owner: &Address, active: bool) {
    let name = if active {
        "bank_activated"
    } else {
        "bank_deactivated"
    };
    env.events().publish(
        (Symbol::new(env, name),),
        BankStatusEvent {
            owner: owner.clone(),
            active,
        },
    );
}

pub fn emit_reserve_added(env: &Env, contributor: &Address, amount: i128, new_total: i128) {
    env.events().publish(
        (Symbol::new(env, "reserve_added"), contributor.clone()),
        ReserveAddedEvent {
            contributor: contributor.clone(),
            amount,
            new_total,
        },
    );
}

pub fn emit_rate_changed(env: &Env, actor: &Address, old_rate_bps: u32, new_rate_bps: u32) {
    env.events().publish(
        (Symbol::new(env, "rate_changed"), actor.clone()),
        InterestRateChangedEvent {
            actor: actor.clone(),
            old_rate_bps,
            new_rate_bps,
        },
    );
}

/// `name` is one of `admin_added`, `admin_revoked`, `user_whitelisted`, `user_removed`.
pub fn emit_role_changed(env: &Env, name: &str, identity: &Address) {
    env.events().publish(
        (Symbol::new(env, name), identity.clone()),
        RoleChangedEvent {
            identity: identity.clone(),
        },
    );
}

pub fn emit_deposit_made(env: &Env, event: DepositMadeEvent) {
    env.events().publish(
        (
            Symbol::new(env, "deposit_made"),
            event.account.clone(),
            event.index,
        ),
        event,
    );
}

pub fn emit_withdrawal_made(env: &Env, event: WithdrawalMadeEvent) {
    env.events().publish(
        (
            Symbol::new(env, "withdrawal_made"),
            event.account.clone(),
            event.index,
        ),
        event,
    );
}

pub fn emit_ownership_offered(env: &Env, candidate: &Address, price: i128) {
    env.events().publish(
        (Symbol::new(env, "ownership_offered"), candidate.clone()),
        OwnershipOfferedEvent {
            candidate: candidate.clone(),
            price,
        },
    );
}

pub fn emit_offer_cancelled(env: &Env) {
    env.events()
        .publish((Symbol::new(env, "offer_cancelled"),), ());
}

pub fn emit_ownership_transferred(
    env: &Env,
    previous_owner: &Address,
    new_owner: &Address,
    price: i128,
) {
    env.events().publish(
        (
            Symbol::new(env, "ownership_transferred"),
            previous_owner.clone(),
            new_owner.clone(),
        ),
        OwnershipTransferredEvent {
            previous_owner: previous_owner.clone(),
            new_owner: new_owner.clone(),
            price,
        },
    );
}
