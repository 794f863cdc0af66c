//! Insurance Protocol Engine
//!
//! Users lock a stable-asset principal against a chosen insured asset for a
//! fixed term, under a package plan with a deterministic fee schedule. The
//! engine owns the plan catalog, the per-user package ledger, the referral
//! ledger, and the payment/insured-asset allow-lists; funds are custodied by
//! the linked treasury contract and conversions routed through an external
//! swap venue.
//!
//! ## Key design decisions
//!
//! - **Deterministic plan ids**: `keccak256(period, fee_bps, uninsure_fee)`
//!   assigned once at creation; in-place term edits keep the id stable.
//! - **Terms frozen at purchase**: expiry and penalty are snapshotted onto
//!   the package, so catalog edits never change existing packages' math.
//! - **Checks-Effects-Interactions**: terminal/claimed flags are persisted
//!   *before* treasury disbursement or token transfers.
//! - **Atomic batches**: batch operations validate every entry before
//!   executing any.
//! - **Auth-gated mutations**: `require_auth` on every caller; owner-only
//!   catalog, allow-list, and configuration changes.

#![no_std]

mod errors;
mod events;
mod swap;
mod types;

use errors::*;
use swap::SwapVenueClient;
use types::{DataKey, PackagePlan, Referral, UserPackage};

use soroban_sdk::{
    contract, contractclient, contractimpl, token::TokenClient, Address, Bytes, BytesN, Env,
    Symbol, Vec,
};


#[cfg(test)]
mod test_plans;





/// Fee base: insurance fees are quoted in basis points.
const FEE_BASIS: i128 = 10_000;

/// Referral rewards are quoted as a percentage of the fee.
const REFERRAL_BASIS: i128 = 100;

/// How long a routed conversion stays valid at the swap venue.
const SWAP_DEADLINE_SECS: u64 = 300;

/// Matured packages must be withdrawn within this window past expiry.
const CLAIM_WINDOW_SECS: u64 = 30 * 86_400;

/// Disbursement surface of the treasury consumed by the engine. The engine
/// authenticates as the treasury's linked protocol via invoker auth.
#[contractclient(name = "TreasuryClient")]
pub trait TreasuryContract {
    fn withdraw_token(env: Env, caller: Address, token: Address, to: Address, amount: i128);
}

// ─── Helpers ───────────────────────────────────────────────────────────────

fn read_owner(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn require_owner(e: &Env, caller: &Address) {
    caller.require_auth();
    if *caller != read_owner(e) {
        panic!("{}", ERR_NOT_OWNER);
    }
}

fn read_treasury(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::Treasury)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn read_swap_venue(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::SwapVenue)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn read_reward_token(e: &Env) -> Address {
    e.storage()
        .instance()
        .get(&DataKey::RewardToken)
        .unwrap_or_else(|| panic!("{}", ERR_NOT_INITIALIZED))
}

fn read_plan(e: &Env, plan_id: &BytesN<32>) -> PackagePlan {
    e.storage()
        .persistent()
        .get(&DataKey::Plan(plan_id.clone()))
        .unwrap_or_else(|| panic!("{}", ERR_PLAN_NOT_FOUND))
}

fn read_package(e: &Env, package_id: u64) -> UserPackage {
    e.storage()
        .persistent()
        .get(&DataKey::Package(package_id))
        .unwrap_or_else(|| panic!("{}", ERR_PACKAGE_NOT_FOUND))
}

fn read_referral(e: &Env, referral_id: u64) -> Referral {
    e.storage()
        .persistent()
        .get(&DataKey::Referral(referral_id))
        .unwrap_or_else(|| panic!("{}", ERR_REFERRAL_NOT_FOUND))
}

/// keccak256 over the big-endian encoding of the plan terms.
fn compute_plan_id(e: &Env, period: u64, fee_bps: u32, uninsure_fee: i128) -> BytesN<32> {
    let mut b = Bytes::new(e);
    b.extend_from_array(&period.to_be_bytes());
    b.extend_from_array(&fee_bps.to_be_bytes());
    b.extend_from_array(&uninsure_fee.to_be_bytes());
    e.crypto().keccak256(&b).to_bytes()
}

/// Apply basis-point fee: returns `(fee, principal)`, `fee + principal == amount`.
fn apply_fee(amount: i128, fee_bps: u32) -> (i128, i128) {
    let fee = amount * (fee_bps as i128) / FEE_BASIS;
    (fee, amount - fee)
}

fn validate_plan_terms(period: u64, fee_bps: u32, uninsure_fee: i128) {
    if period == 0 {
        panic!("{}", ERR_INVALID_DURATION);
    }
    if fee_bps as i128 > FEE_BASIS {
        panic!("{}", ERR_INVALID_FEE);
    }
    if uninsure_fee < 0 {
        panic!("{}", ERR_INVALID_PENALTY);
    }
}

fn next_id(e: &Env, key: &DataKey) -> u64 {
    let id: u64 = e.storage().instance().get(key).unwrap_or(0_u64) + 1;
    e.storage().instance().set(key, &id);
    id
}

fn add_total_locked(e: &Env, delta: i128) {
    let current: i128 = e
        .storage()
        .instance()
        .get(&DataKey::TotalLocked)
        .unwrap_or(0_i128);
    e.storage()
        .instance()
        .set(&DataKey::TotalLocked, &(current + delta));
}

/// Shared purchase flow for `insure` and `insure_with_referrer`.
/// Returns `(package_id, fee, payment_token)`.
fn execute_purchase(
    e: &Env,
    buyer: &Address,
    plan_id: &BytesN<32>,
    amount: i128,
    swap_path: &Vec<Address>,
    insure_symbol: &Symbol,
    payment_symbol: &Symbol,
) -> (u64, i128, Address) {
    buyer.require_auth();

    if amount <= 0 {
        panic!("{}", ERR_INVALID_AMOUNT);
    }
    let plan = read_plan(e, plan_id);
    if !plan.is_activated {
        panic!("{}", ERR_PLAN_INACTIVE);
    }

    let payment_token: Address = e
        .storage()
        .instance()
        .get(&DataKey::PaymentToken(payment_symbol.clone()))
        .unwrap_or_else(|| panic!("{}", ERR_PAYMENT_TOKEN_UNKNOWN));
    let insure_coin: Address = e
        .storage()
        .instance()
        .get(&DataKey::InsureCoin(insure_symbol.clone()))
        .unwrap_or_else(|| panic!("{}", ERR_INSURE_COIN_UNKNOWN));

    // The path must start at the payment token and end at the insured asset.
    if swap_path.len() < 2
        || swap_path.get(0).unwrap() != payment_token
        || swap_path.get(swap_path.len() - 1).unwrap() != insure_coin
    {
        panic!("{}", ERR_PATH_MISMATCH);
    }

    let engine = e.current_contract_address();
    let token = TokenClient::new(e, &payment_token);

    // Pull the gross amount (caller must have approved).
    token.transfer_from(&engine, buyer, &engine, &amount);

    let (fee, principal) = apply_fee(amount, plan.insurance_fee_bps);

    // Fee is retained by the treasury in payment-token form.
    if fee > 0 {
        token.transfer(&engine, &read_treasury(e), &fee);
    }

    // Route the principal through the swap venue; the insured asset is
    // delivered directly to the buyer. The venue quote doubles as the
    // minimum-output guard.
    let venue = read_swap_venue(e);
    let venue_client = SwapVenueClient::new(e, &venue);
    let min_out = venue_client.quote(&principal, swap_path);
    let now = e.ledger().timestamp();
    let deadline = now
        .checked_add(SWAP_DEADLINE_SECS)
        .unwrap_or_else(|| panic!("{}", ERR_EXPIRY_OVERFLOW));
    token.transfer(&engine, &venue, &principal);
    venue_client.swap_exact_input(&principal, &min_out, swap_path, buyer, &deadline);

    let expiry = now
        .checked_add(plan.period_duration)
        .unwrap_or_else(|| panic!("{}", ERR_EXPIRY_OVERFLOW));

    let package_id = next_id(e, &DataKey::PackageCounter);
    let package = UserPackage {
        package_id,
        owner: buyer.clone(),
        plan_id: plan_id.clone(),
        payment_token: payment_token.clone(),
        insure_coin: insure_coin.clone(),
        initial_deposit: principal,
        uninsure_fee: plan.uninsure_fee,
        deposit_timestamp: now,
        expiry_timestamp: expiry,
        is_cancelled: false,
        is_withdrawn: false,
    };
    e.storage()
        .persistent()
        .set(&DataKey::Package(package_id), &package);

    let key = DataKey::UserPackages(buyer.clone());
    let mut owned: Vec<u64> = e
        .storage()
        .persistent()
        .get(&key)
        .unwrap_or_else(|| Vec::new(e));
    owned.push_back(package_id);
    e.storage().persistent().set(&key, &owned);

    add_total_locked(e, principal);

    events::emit_insured(e, buyer, &insure_coin, principal, package_id, &plan);

    (package_id, fee, payment_token)
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct InsuranceProtocol;

#[contractimpl]
impl InsuranceProtocol {
    // ── Setup & configuration ──────────────────────────────────────────────

    /// One-time initialization. Stores the owner, collaborator addresses,
    /// and seeds the payment-token allow-list with the default payment
    /// token. The referral percentage starts at 0. Panics if called again.
    pub fn initialize(
        e: Env,
        owner: Address,
        treasury: Address,
        swap_venue: Address,
        reward_token: Address,
        payment_symbol: Symbol,
        payment_token: Address,
    ) {
        if e.storage().instance().has(&DataKey::Owner) {
            panic!("{}", ERR_ALREADY_INITIALIZED);
        }
        e.storage().instance().set(&DataKey::Owner, &owner);
        e.storage().instance().set(&DataKey::Treasury, &treasury);
        e.storage().instance().set(&DataKey::SwapVenue, &swap_venue);
        e.storage()
            .instance()
            .set(&DataKey::RewardToken, &reward_token);
        e.storage().instance().set(&DataKey::ReferralPct, &0_u32);
        e.storage()
            .instance()
            .set(&DataKey::PlanIds, &Vec::<BytesN<32>>::new(&e));
        e.storage()
            .instance()
            .set(&DataKey::PaymentToken(payment_symbol.clone()), &payment_token);
        e.storage()
            .instance()
            .set(&DataKey::PaymentSymbol(payment_token), &payment_symbol);
    }

    /// Replace the treasury address. Owner-only.
    pub fn set_treasury_address(e: Env, caller: Address, treasury: Address) {
        require_owner(&e, &caller);
        e.storage().instance().set(&DataKey::Treasury, &treasury);
        e.events()
            .publish((Symbol::new(&e, "treasury_changed"),), treasury);
    }

    /// Replace the swap venue address. Owner-only.
    pub fn set_swap_venue_address(e: Env, caller: Address, venue: Address) {
        require_owner(&e, &caller);
        e.storage().instance().set(&DataKey::SwapVenue, &venue);
        e.events()
            .publish((Symbol::new(&e, "swap_venue_changed"),), venue);
    }

    /// Replace the reward/penalty token address. Owner-only.
    pub fn set_reward_token(e: Env, caller: Address, token: Address) {
        require_owner(&e, &caller);
        e.storage().instance().set(&DataKey::RewardToken, &token);
        e.events()
            .publish((Symbol::new(&e, "reward_token_changed"),), token);
    }

    /// Hand the contract to a new owner. Owner-only.
    pub fn transfer_ownership(e: Env, caller: Address, new_owner: Address) {
        require_owner(&e, &caller);
        e.storage().instance().set(&DataKey::Owner, &new_owner);
        e.events().publish(
            (Symbol::new(&e, "ownership_transferred"),),
            (caller, new_owner),
        );
    }

    /// Swap the contract logic while keeping the storage layout. Owner-only.
    pub fn upgrade(e: Env, caller: Address, new_wasm_hash: BytesN<32>) {
        require_owner(&e, &caller);
        e.deployer().update_current_contract_wasm(new_wasm_hash);
    }

    // ── Plan catalog ───────────────────────────────────────────────────────

    /// Add a plan with a deterministic id derived from its terms.
    ///
    /// Owner-only. Panics if a plan with the same terms (hence the same id)
    /// already exists. Returns the new id and emits `plan_added`.
    pub fn add_package_plan(
        e: Env,
        caller: Address,
        period_duration: u64,
        insurance_fee_bps: u32,
        uninsure_fee: i128,
    ) -> BytesN<32> {
        require_owner(&e, &caller);
        validate_plan_terms(period_duration, insurance_fee_bps, uninsure_fee);

        let plan_id = compute_plan_id(&e, period_duration, insurance_fee_bps, uninsure_fee);
        let key = DataKey::Plan(plan_id.clone());
        if e.storage().persistent().has(&key) {
            panic!("{}", ERR_PLAN_EXISTS);
        }

        let plan = PackagePlan {
            plan_id: plan_id.clone(),
            period_duration,
            insurance_fee_bps,
            uninsure_fee,
            is_activated: true,
        };
        e.storage().persistent().set(&key, &plan);

        let mut ids: Vec<BytesN<32>> = e
            .storage()
            .instance()
            .get(&DataKey::PlanIds)
            .unwrap_or_else(|| Vec::new(&e));
        ids.push_back(plan_id.clone());
        e.storage().instance().set(&DataKey::PlanIds, &ids);

        events::emit_plan_added(&e, &plan_id);
        plan_id
    }

    /// Update plan terms in place, batched. Owner-only.
    ///
    /// Every id must already exist; the whole batch is validated before any
    /// plan is touched. Ids are stable handles and are not recomputed from
    /// the new terms.
    pub fn update_package_plans(
        e: Env,
        caller: Address,
        ids: Vec<BytesN<32>>,
        period_durations: Vec<u64>,
        insurance_fee_bps: Vec<u32>,
        uninsure_fees: Vec<i128>,
    ) {
        require_owner(&e, &caller);

        let n = ids.len();
        if n == 0 {
            panic!("{}", ERR_EMPTY_BATCH);
        }
        if period_durations.len() != n || insurance_fee_bps.len() != n || uninsure_fees.len() != n {
            panic!("{}", ERR_LENGTH_MISMATCH);
        }

        // Validate everything before executing anything.
        for i in 0..n {
            let id = ids.get(i).unwrap();
            if !e.storage().persistent().has(&DataKey::Plan(id)) {
                panic!("{}", ERR_PLAN_NOT_FOUND);
            }
            validate_plan_terms(
                period_durations.get(i).unwrap(),
                insurance_fee_bps.get(i).unwrap(),
                uninsure_fees.get(i).unwrap(),
            );
        }

        for i in 0..n {
            let id = ids.get(i).unwrap();
            let mut plan = read_plan(&e, &id);
            plan.period_duration = period_durations.get(i).unwrap();
            plan.insurance_fee_bps = insurance_fee_bps.get(i).unwrap();
            plan.uninsure_fee = uninsure_fees.get(i).unwrap();
            e.storage()
                .persistent()
                .set(&DataKey::Plan(id.clone()), &plan);
            events::emit_plan_updated(&e, &id);
        }
    }

    /// Take a plan off sale. Owner-only; one-way (there is no reactivate
    /// operation). The plan stays visible in the catalog.
    pub fn deactivate_package_plan(e: Env, caller: Address, plan_id: BytesN<32>) {
        require_owner(&e, &caller);
        let mut plan = read_plan(&e, &plan_id);
        plan.is_activated = false;
        e.storage()
            .persistent()
            .set(&DataKey::Plan(plan_id.clone()), &plan);
        events::emit_plan_deactivated(&e, &plan_id);
    }

    // ── Insurance lifecycle ────────────────────────────────────────────────

    /// Purchase a package plan.
    ///
    /// Pulls `amount` of the payment token from `buyer` (prior allowance
    /// required), retains the plan's fee with the treasury, converts the
    /// remaining principal into the insured asset through the swap venue
    /// (delivered to the buyer), and records a new Active package. Returns
    /// the package id.
    pub fn insure(
        e: Env,
        buyer: Address,
        plan_id: BytesN<32>,
        amount: i128,
        swap_path: Vec<Address>,
        insure_symbol: Symbol,
        payment_symbol: Symbol,
    ) -> u64 {
        let (package_id, _, _) = execute_purchase(
            &e,
            &buyer,
            &plan_id,
            amount,
            &swap_path,
            &insure_symbol,
            &payment_symbol,
        );
        package_id
    }

    /// Purchase a package plan, crediting a share of the fee to `referrer`.
    ///
    /// Identical to `insure`, plus an unclaimed referral record denominated
    /// in the payment token. The reward is a liability against the treasury
    /// until claimed; no funds move at credit time.
    pub fn insure_with_referrer(
        e: Env,
        buyer: Address,
        plan_id: BytesN<32>,
        amount: i128,
        swap_path: Vec<Address>,
        insure_symbol: Symbol,
        payment_symbol: Symbol,
        referrer: Address,
    ) -> u64 {
        let (package_id, fee, payment_token) = execute_purchase(
            &e,
            &buyer,
            &plan_id,
            amount,
            &swap_path,
            &insure_symbol,
            &payment_symbol,
        );

        let pct: u32 = e
            .storage()
            .instance()
            .get(&DataKey::ReferralPct)
            .unwrap_or(0);
        let reward = fee * (pct as i128) / REFERRAL_BASIS;
        if reward > 0 {
            let referral_id = next_id(&e, &DataKey::ReferralCounter);
            let referral = Referral {
                referral_id,
                referrer: referrer.clone(),
                reward_amount: reward,
                token: payment_token.clone(),
                claimed: false,
            };
            e.storage()
                .persistent()
                .set(&DataKey::Referral(referral_id), &referral);

            let key = DataKey::UserReferrals(referrer.clone());
            let mut credited: Vec<u64> = e
                .storage()
                .persistent()
                .get(&key)
                .unwrap_or_else(|| Vec::new(&e));
            credited.push_back(referral_id);
            e.storage().persistent().set(&key, &credited);

            events::emit_referral_rewarded(&e, &referrer, referral_id, reward, &payment_token);
        }

        package_id
    }

    /// Cancel an Active package before expiry.
    ///
    /// Caller must own the package. Collects the snapshotted penalty in the
    /// reward/penalty token (prior allowance required), then refunds the
    /// locked principal from the treasury. Cancellation is a form of early
    /// withdrawal, so both terminal flags are set.
    pub fn cancel(e: Env, caller: Address, package_id: u64) {
        caller.require_auth();

        let mut package = read_package(&e, package_id);
        if package.owner != caller {
            panic!("{}", ERR_NOT_PACKAGE_OWNER);
        }
        if package.is_cancelled || package.is_withdrawn {
            panic!("{}", ERR_PACKAGE_TERMINAL);
        }
        let now = e.ledger().timestamp();
        if now >= package.expiry_timestamp {
            panic!("{}", ERR_EXPIRED);
        }

        let engine = e.current_contract_address();
        let treasury = read_treasury(&e);

        // Penalty goes straight from the caller to the treasury.
        if package.uninsure_fee > 0 {
            TokenClient::new(&e, &read_reward_token(&e)).transfer_from(
                &engine,
                &caller,
                &treasury,
                &package.uninsure_fee,
            );
        }

        // CEI: both terminal flags before the refund.
        package.is_cancelled = true;
        package.is_withdrawn = true;
        e.storage()
            .persistent()
            .set(&DataKey::Package(package_id), &package);
        add_total_locked(&e, -package.initial_deposit);

        TreasuryClient::new(&e, &treasury).withdraw_token(
            &engine,
            &package.payment_token,
            &caller,
            &package.initial_deposit,
        );

        events::emit_cancelled(
            &e,
            &caller,
            package_id,
            package.initial_deposit,
            package.uninsure_fee,
        );
    }

    /// Withdraw a matured package.
    ///
    /// Caller must own the package; allowed from expiry until the claim
    /// window closes, after which the principal stays locked. Pays exactly
    /// `initial_deposit` from the treasury.
    pub fn withdraw(e: Env, caller: Address, package_id: u64) {
        caller.require_auth();

        let mut package = read_package(&e, package_id);
        if package.owner != caller {
            panic!("{}", ERR_NOT_PACKAGE_OWNER);
        }
        if package.is_cancelled || package.is_withdrawn {
            panic!("{}", ERR_PACKAGE_TERMINAL);
        }
        let now = e.ledger().timestamp();
        if now < package.expiry_timestamp {
            panic!("{}", ERR_NOT_EXPIRED);
        }
        if now > package.expiry_timestamp.saturating_add(CLAIM_WINDOW_SECS) {
            panic!("{}", ERR_CLAIM_WINDOW_CLOSED);
        }

        // CEI: mark withdrawn before the payout.
        package.is_withdrawn = true;
        e.storage()
            .persistent()
            .set(&DataKey::Package(package_id), &package);
        add_total_locked(&e, -package.initial_deposit);

        let engine = e.current_contract_address();
        TreasuryClient::new(&e, &read_treasury(&e)).withdraw_token(
            &engine,
            &package.payment_token,
            &caller,
            &package.initial_deposit,
        );

        events::emit_withdrawn(&e, &caller, package_id, package.initial_deposit);
    }

    /// Preview the principal that `insure` would lock: `amount` minus the
    /// plan's fee, truncating division. Pure over catalog state.
    pub fn get_insure_amount(e: Env, plan_id: BytesN<32>, amount: i128) -> i128 {
        if amount <= 0 {
            panic!("{}", ERR_INVALID_AMOUNT);
        }
        let plan = read_plan(&e, &plan_id);
        let (_, principal) = apply_fee(amount, plan.insurance_fee_bps);
        principal
    }

    // ── Referral rewards ───────────────────────────────────────────────────

    /// Set the percentage of the insurance fee credited to referrers on
    /// referred purchases. Owner-only, base 100.
    pub fn update_referral_reward(e: Env, caller: Address, percentage: u32) {
        require_owner(&e, &caller);
        if percentage > 100 {
            panic!("{}", ERR_INVALID_PERCENTAGE);
        }
        e.storage()
            .instance()
            .set(&DataKey::ReferralPct, &percentage);
        e.events()
            .publish((Symbol::new(&e, "referral_reward_updated"),), percentage);
    }

    /// Claim referral rewards, batched and atomic: the whole call fails if
    /// any id is unknown, not the caller's, or already claimed. Claimed
    /// flags are persisted before any treasury transfer.
    pub fn claim_referral_reward(e: Env, caller: Address, referral_ids: Vec<u64>) {
        caller.require_auth();

        if referral_ids.is_empty() {
            panic!("{}", ERR_EMPTY_BATCH);
        }

        // Validate and mark everything claimed first; a duplicate id in the
        // list trips the claimed check on its second occurrence.
        let mut to_pay: Vec<Referral> = Vec::new(&e);
        for referral_id in referral_ids.iter() {
            let mut referral = read_referral(&e, referral_id);
            if referral.referrer != caller {
                panic!("{}", ERR_NOT_REFERRER);
            }
            if referral.claimed {
                panic!("{}", ERR_REFERRAL_CLAIMED);
            }
            referral.claimed = true;
            e.storage()
                .persistent()
                .set(&DataKey::Referral(referral_id), &referral);
            to_pay.push_back(referral);
        }

        let engine = e.current_contract_address();
        let treasury = TreasuryClient::new(&e, &read_treasury(&e));
        for referral in to_pay.iter() {
            treasury.withdraw_token(&engine, &referral.token, &caller, &referral.reward_amount);
            events::emit_referral_claimed(
                &e,
                &caller,
                referral.referral_id,
                referral.reward_amount,
            );
        }
    }

    // ── Allow-lists ────────────────────────────────────────────────────────

    /// Allow a payment token under `symbol`. Owner-only; the symbol must be
    /// absent. Keeps the reverse lookup in sync.
    pub fn add_payment_token(e: Env, caller: Address, symbol: Symbol, token: Address) {
        require_owner(&e, &caller);
        if e.storage()
            .instance()
            .has(&DataKey::PaymentToken(symbol.clone()))
        {
            panic!("{}", ERR_PAYMENT_TOKEN_EXISTS);
        }
        e.storage()
            .instance()
            .set(&DataKey::PaymentToken(symbol.clone()), &token);
        e.storage()
            .instance()
            .set(&DataKey::PaymentSymbol(token.clone()), &symbol);
        e.events()
            .publish((Symbol::new(&e, "payment_token_added"),), (symbol, token));
    }

    /// Remove a payment token from the allow-list. Owner-only; the symbol
    /// must be present.
    pub fn remove_payment_token(e: Env, caller: Address, symbol: Symbol) {
        require_owner(&e, &caller);
        let token: Address = e
            .storage()
            .instance()
            .get(&DataKey::PaymentToken(symbol.clone()))
            .unwrap_or_else(|| panic!("{}", ERR_PAYMENT_TOKEN_UNKNOWN));
        e.storage()
            .instance()
            .remove(&DataKey::PaymentToken(symbol.clone()));
        e.storage()
            .instance()
            .remove(&DataKey::PaymentSymbol(token.clone()));
        e.events()
            .publish((Symbol::new(&e, "payment_token_removed"),), (symbol, token));
    }

    /// Allow insured assets, batched. Owner-only; validates every entry
    /// before adding any.
    pub fn add_insure_coins(e: Env, caller: Address, symbols: Vec<Symbol>, tokens: Vec<Address>) {
        require_owner(&e, &caller);

        let n = symbols.len();
        if n == 0 {
            panic!("{}", ERR_EMPTY_BATCH);
        }
        if tokens.len() != n {
            panic!("{}", ERR_LENGTH_MISMATCH);
        }
        for symbol in symbols.iter() {
            if e.storage().instance().has(&DataKey::InsureCoin(symbol)) {
                panic!("{}", ERR_INSURE_COIN_EXISTS);
            }
        }

        for i in 0..n {
            let symbol = symbols.get(i).unwrap();
            let token = tokens.get(i).unwrap();
            e.storage()
                .instance()
                .set(&DataKey::InsureCoin(symbol.clone()), &token);
            e.events()
                .publish((Symbol::new(&e, "insure_coin_added"),), (symbol, token));
        }
    }

    /// Remove insured assets, batched. Owner-only; every symbol must be
    /// present.
    pub fn remove_insure_coins(e: Env, caller: Address, symbols: Vec<Symbol>) {
        require_owner(&e, &caller);

        if symbols.is_empty() {
            panic!("{}", ERR_EMPTY_BATCH);
        }
        for symbol in symbols.iter() {
            if !e.storage().instance().has(&DataKey::InsureCoin(symbol)) {
                panic!("{}", ERR_INSURE_COIN_UNKNOWN);
            }
        }

        for symbol in symbols.iter() {
            e.storage()
                .instance()
                .remove(&DataKey::InsureCoin(symbol.clone()));
            e.events()
                .publish((Symbol::new(&e, "insure_coin_removed"),), symbol);
        }
    }

    // ── Queries ────────────────────────────────────────────────────────────

    /// Returns the plan for `plan_id`. Panics if unknown.
    pub fn get_package_plan(e: Env, plan_id: BytesN<32>) -> PackagePlan {
        read_plan(&e, &plan_id)
    }

    /// Returns plans in insertion order, paginated.
    pub fn get_all_package_plans(e: Env, offset: u32, limit: u32) -> Vec<PackagePlan> {
        let ids: Vec<BytesN<32>> = e
            .storage()
            .instance()
            .get(&DataKey::PlanIds)
            .unwrap_or_else(|| Vec::new(&e));
        let mut plans = Vec::new(&e);
        let end = core::cmp::min(ids.len(), offset.saturating_add(limit));
        let mut i = offset;
        while i < end {
            plans.push_back(read_plan(&e, &ids.get(i).unwrap()));
            i += 1;
        }
        plans
    }

    /// Returns the number of plans ever created.
    pub fn get_package_plans_length(e: Env) -> u32 {
        let ids: Vec<BytesN<32>> = e
            .storage()
            .instance()
            .get(&DataKey::PlanIds)
            .unwrap_or_else(|| Vec::new(&e));
        ids.len()
    }

    /// Returns the package for `package_id`. Panics if unknown.
    pub fn get_user_package(e: Env, package_id: u64) -> UserPackage {
        read_package(&e, package_id)
    }

    /// Returns `account`'s packages in purchase order, paginated.
    pub fn get_all_user_packages(e: Env, account: Address, offset: u32, limit: u32) -> Vec<UserPackage> {
        let ids: Vec<u64> = e
            .storage()
            .persistent()
            .get(&DataKey::UserPackages(account))
            .unwrap_or_else(|| Vec::new(&e));
        let mut packages = Vec::new(&e);
        let end = core::cmp::min(ids.len(), offset.saturating_add(limit));
        let mut i = offset;
        while i < end {
            packages.push_back(read_package(&e, ids.get(i).unwrap()));
            i += 1;
        }
        packages
    }

    /// Returns `account`'s referrals in credit order, paginated.
    pub fn get_all_user_referrals(e: Env, account: Address, offset: u32, limit: u32) -> Vec<Referral> {
        let ids: Vec<u64> = e
            .storage()
            .persistent()
            .get(&DataKey::UserReferrals(account))
            .unwrap_or_else(|| Vec::new(&e));
        let mut referrals = Vec::new(&e);
        let end = core::cmp::min(ids.len(), offset.saturating_add(limit));
        let mut i = offset;
        while i < end {
            referrals.push_back(read_referral(&e, ids.get(i).unwrap()));
            i += 1;
        }
        referrals
    }

    /// Aggregate principal locked in Active packages, payment-token units.
    pub fn total_insurance_locked(e: Env) -> i128 {
        e.storage()
            .instance()
            .get(&DataKey::TotalLocked)
            .unwrap_or(0_i128)
    }

    /// Current referral percentage (base 100 of the purchase fee).
    pub fn get_referral_percentage(e: Env) -> u32 {
        e.storage()
            .instance()
            .get(&DataKey::ReferralPct)
            .unwrap_or(0)
    }

    /// Returns the contract owner.
    pub fn get_owner(e: Env) -> Address {
        read_owner(&e)
    }

    /// Returns the treasury address.
    pub fn get_treasury_address(e: Env) -> Address {
        read_treasury(&e)
    }

    /// Returns the swap venue address.
    pub fn get_swap_venue_address(e: Env) -> Address {
        read_swap_venue(&e)
    }

    /// Returns the reward/penalty token address.
    pub fn get_reward_token_address(e: Env) -> Address {
        read_reward_token(&e)
    }
}
