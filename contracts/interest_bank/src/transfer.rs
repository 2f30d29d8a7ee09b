use soroban_sdk::{log, token, Address, Env};

use crate::error::Error;

/// Move `amount` of `token` from `from` to `to`.
///
/// Failures are surfaced as `TransferFailed`; the host then rolls back every
/// write made earlier in the same invocation.
pub fn send(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), Error> {
    let client = token::Client::new(env, token);
    match client.try_transfer(from, to, &amount) {
        Ok(Ok(())) => Ok(()),
        _ => {
            log!(env, "token transfer failed", from.clone(), to.clone(), amount);
            Err(Error::TransferFailed.logged(env))
        }
    }
}

/// Into the bank
pub fn pull(env: &Env, token: &Address, from: &Address, amount: i128) -> Result<(), Error> {
    send(env, token, from, &env.current_contract_address(), amount)
}

/// Out of the bank
pub fn push(env: &Env, token: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    send(env, token, &env.current_contract_address(), to, amount)
}

pub fn balance_held(env: &Env, token: &Address) -> i128 {
    token::Client::new(env, token).balance(&env.current_contract_address())
}
