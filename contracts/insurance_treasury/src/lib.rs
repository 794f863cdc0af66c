//! Insurance Treasury Contract
//!
//! Sole custodian of the native asset and fungible tokens collected by the
//! insurance protocol: purchase fees, locked principal backing, and native
//! revenue. Privileged withdrawal is gated behind an owner-managed admin set
//! plus one distinguished "linked protocol" address, which is treated as
//! implicitly authorized for all gated operations.
//!
//! ## Key design decisions
//!
//! - **Single linked protocol**: exactly one engine address may move funds
//!   without being in the admin set; changing it emits the old/new pair.
//! - **Idempotent admin set**: adding an existing admin or removing a
//!   missing one is a no-op, never an error.
//! - **Atomic failure**: balance is checked before every transfer; any
//!   failure panics and the host reverts the whole invocation.
//! - **Unsolicited receipt**: token transfers into the contract address
//!   always succeed on Soroban, so native/token revenue needs no entry point.

#![no_std]

mod errors;

use errors::*;

use soroban_sdk::{contract, contractimpl, contracttype, token::TokenClient, Address, Env, Symbol};


#[contracttype]
#[derive(Clone)]
enum DataKey {
    /// Contract owner (deployer account).
    Owner,
    /// Token contract for the chain's base asset.
    NativeToken,
    /// The one insurance protocol address implicitly authorized.
    LinkedProtocol,
    /// Authorization set membership: Address -> bool.
    Admin(Address),
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn get_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn require_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != get_owner(e) {
        panic!("{}", ERR_NOT_OWNER);
    }
}

fn require_authorized(e: &Env, caller: &Address) {
    caller.require_auth();
    if !check_authorized(e, caller) {
        panic!("{}", ERR_NOT_AUTHORIZED);
    }
}

fn check_authorized(e: &Env, account: &Address) -> bool {
    if *account == get_owner(e) {
        return true;
    }
    if let Some(protocol) = e
        .storage()
        .instance()
        .get::<_, Address>(&DataKey::LinkedProtocol)
    {
        if protocol == *account {
            return true;
        }
    }
    e.storage()
        .instance()
        .get(&DataKey::Admin(account.clone()))
        .unwrap_or(false)
}

/// Panics unless the treasury holds at least `amount` of `token`.
fn require_balance(e: &Env, token: &Address, amount: i128) {
    let held = TokenClient::new(e, token).balance(&e.current_contract_address());
    if held < amount {
        panic!("{}", ERR_INSUFFICIENT_BALANCE);
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct InsuranceTreasury;

#[contractimpl]
impl InsuranceTreasury {
    /// One-time initialization. Stores `owner` and the native-asset token
    /// contract. Panics if called again after initialization.
    pub fn initialize(e: Env, owner: Address, native_token: Address) {
        if e.storage().instance().has(&DataKey::Owner) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage()
            .instance()
            .set(&DataKey::NativeToken, &native_token);
    }

    // ── Authorization management ───────────────────────────────────────────

    /// Link the insurance protocol address granted implicit authorization.
    ///
    /// Owner-only. Emits `protocol_changed` with the previous address (if
    /// any) and the new one.
    pub fn set_insurance_protocol_address(e: Env, caller: Address, protocol: Address) {
        require_owner(&e, &caller);
        let old: Option<Address> = e.storage().instance().get(&DataKey::LinkedProtocol);
        e.storage()
            .instance()
            .set(&DataKey::LinkedProtocol, &protocol);
        e.events().publish(
            (Symbol::new(&e, "protocol_changed"),),
            (old, protocol),
        );
    }

    /// Add `account` to the authorization set. Owner-only, idempotent.
    pub fn add_admin(e: Env, caller: Address, account: Address) {
        require_owner(&e, &caller);
        e.storage()
            .instance()
            .set(&DataKey::Admin(account.clone()), &true);
        e.events()
            .publish((Symbol::new(&e, "admin_added"),), account);
    }

    /// Remove `account` from the authorization set. Owner-only, idempotent.
    pub fn remove_admin(e: Env, caller: Address, account: Address) {
        require_owner(&e, &caller);
        e.storage()
            .instance()
            .remove(&DataKey::Admin(account.clone()));
        e.events()
            .publish((Symbol::new(&e, "admin_removed"),), account);
    }

    // ── Disbursement ───────────────────────────────────────────────────────

    /// Transfer `amount` of the native asset to the caller.
    ///
    /// Authorized-only. Panics if the treasury balance is insufficient.
    /// Emits `native_withdrawn` with recipient and amount.
    pub fn withdraw(e: Env, caller: Address, amount: i128) {
        require_authorized(&e, &caller);
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        let native: Address = e
            .storage()
            .instance()
            .get(&DataKey::NativeToken)
            .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED));
        require_balance(&e, &native, amount);

        TokenClient::new(&e, &native).transfer(
            &e.current_contract_address(),
            &caller,
            &amount,
        );
        e.events().publish(
            (Symbol::new(&e, "native_withdrawn"),),
            (caller, amount),
        );
    }

    /// Transfer `amount` of `token` to `to`.
    ///
    /// Authorized-only; this is the disbursement path the linked protocol
    /// uses for refunds, maturity payouts, and referral claims. Panics if
    /// the treasury balance is insufficient. Emits `token_withdrawn` with
    /// token, recipient, and amount.
    pub fn withdraw_token(e: Env, caller: Address, token: Address, to: Address, amount: i128) {
        require_authorized(&e, &caller);
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        require_balance(&e, &token, amount);

        TokenClient::new(&e, &token).transfer(&e.current_contract_address(), &to, &amount);
        e.events().publish(
            (Symbol::new(&e, "token_withdrawn"),),
            (token, to, amount),
        );
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns `true` if `account` is the owner, a member of the admin set,
    /// or the linked protocol address.
    pub fn is_authorized(e: Env, account: Address) -> bool {
        check_authorized(&e, &account)
    }

    /// Returns the treasury's balance of `token`.
    pub fn get_balance(e: Env, token: Address) -> i128 {
        TokenClient::new(&e, &token).balance(&e.current_contract_address())
    }

    /// Returns the currently linked protocol address, if one is set.
    pub fn get_protocol(e: Env) -> Option<Address> {
        e.storage().instance().get(&DataKey::LinkedProtocol)
    }
}
