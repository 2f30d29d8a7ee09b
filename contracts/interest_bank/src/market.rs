use soroban_sdk::{log, Address, Env};

use crate::access::AccessRegistry;
use crate::error::Error;
use crate::events;
use crate::storage::{OwnershipOffer, PendingOffer, Storage};
use crate::transfer;

/// Sale of the owner role for a fixed price.
pub struct OwnershipMarket;

impl OwnershipMarket {
    /// Offer the owner role, or cancel with `(None, 0)`
    ///
    /// # Errors
    /// - `NotOwner`: Caller is not the owner
    /// - `InvalidOffer`: Candidate and price do not form an offer or a cancellation
    /// - `SelfOffer`: Candidate is already the owner
    /// - `InvalidIdentity`: Candidate is the bank itself
    pub fn offer(
        env: &Env,
        caller: &Address,
        candidate: Option<Address>,
        price: i128,
    ) -> Result<(), Error> {
        AccessRegistry::require_owner(env, caller)?;

        match candidate {
            Some(candidate) if price > 0 => {
                if candidate == *caller {
                    return Err(Error::SelfOffer);
                }
                AccessRegistry::require_valid_identity(env, &candidate)?;

                Storage::set_offer(
                    env,
                    &PendingOffer {
                        candidate: candidate.clone(),
                        price,
                    },
                );
                events::emit_ownership_offered(env, &candidate, price);
            }
            None if price == 0 => {
                Storage::clear_offer(env);
                events::emit_offer_cancelled(env);
            }
            _ => return Err(Error::InvalidOffer),
        }

        Ok(())
    }

    /// Candidate buys the owner role, paying exactly the offered price
    ///
    /// Ownership moves before the payment is sent to the previous owner.
    ///
    /// # Errors
    /// - `NoActiveOffer`: Nothing on offer
    /// - `NotCandidate`: Caller is not the named candidate
    /// - `PaymentMismatch`: Payment differs from the price
    /// - `TransferFailed`: Payment could not be delivered
    pub fn accept(env: &Env, candidate: &Address, payment: i128) -> Result<(), Error> {
        candidate.require_auth();

        let offer = Storage::get_offer(env).ok_or(Error::NoActiveOffer)?;
        if offer.candidate != *candidate {
            return Err(Error::NotCandidate);
        }
        if payment != offer.price {
            return Err(Error::PaymentMismatch);
        }

        let previous_owner = Storage::get_owner(env)?;
        let config = Storage::get_config(env)?;

        Storage::set_owner(env, candidate);
        Storage::clear_offer(env);

        transfer::send(env, &config.token, candidate, &previous_owner, payment)?;

        log!(env, "ownership transferred", previous_owner.clone(), candidate.clone());
        events::emit_ownership_transferred(env, &previous_owner, candidate, payment);
        Ok(())
    }

    pub fn get_offer(env: &Env) -> OwnershipOffer {
        match Storage::get_offer(env) {
            Some(offer) => OwnershipOffer {
                active: true,
                candidate: Some(offer.candidate),
                price: offer.price,
            },
            None => OwnershipOffer {
                active: false,
                candidate: None,
                price: 0,
            },
        }
    }
}
