use crate::types::PackagePlan;
use soroban_sdk::{Address, BytesN, Env, Symbol};

/// Emitted when a new package plan is added to the catalog.
///
/// # Topics
/// * `Symbol` - "plan_added"
///
/// # Data
/// * `BytesN<32>` - The deterministic plan id
pub fn emit_plan_added(e: &Env, plan_id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "plan_added"),), plan_id.clone());
}

/// Emitted for each plan touched by a batch update.
///
/// # Topics
/// * `Symbol` - "plan_updated"
///
/// # Data
/// * `BytesN<32>` - The plan id (unchanged by the update)
pub fn emit_plan_updated(e: &Env, plan_id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "plan_updated"),), plan_id.clone());
}

/// Emitted when a plan is deactivated. There is no reactivation event
/// because there is no reactivation operation.
pub fn emit_plan_deactivated(e: &Env, plan_id: &BytesN<32>) {
    e.events()
        .publish((Symbol::new(e, "plan_deactivated"),), plan_id.clone());
}

/// Emitted when a package plan is purchased.
///
/// # Topics
/// * `Symbol` - "insured"
/// * `Address` - The buyer
///
/// # Data
/// * `Address` - The insured asset
/// * `i128` - The principal locked, in payment-token units
/// * `u64` - The new package id
/// * `PackagePlan` - Snapshot of the plan in force at purchase
pub fn emit_insured(
    e: &Env,
    buyer: &Address,
    insure_coin: &Address,
    locked: i128,
    package_id: u64,
    plan: &PackagePlan,
) {
    let topics = (Symbol::new(e, "insured"), buyer.clone());
    let data = (insure_coin.clone(), locked, package_id, plan.clone());
    e.events().publish(topics, data);
}

/// Emitted when a package is cancelled before expiry.
///
/// # Topics
/// * `Symbol` - "cancelled"
/// * `Address` - The package owner
///
/// # Data
/// * `u64` - The package id
/// * `i128` - The principal refunded
/// * `i128` - The penalty collected, in the reward/penalty token
pub fn emit_cancelled(e: &Env, owner: &Address, package_id: u64, refund: i128, penalty: i128) {
    let topics = (Symbol::new(e, "cancelled"), owner.clone());
    e.events().publish(topics, (package_id, refund, penalty));
}

/// Emitted when a matured package is withdrawn.
///
/// # Topics
/// * `Symbol` - "withdrawn"
/// * `Address` - The package owner
///
/// # Data
/// * `u64` - The package id
/// * `i128` - The principal paid out
pub fn emit_withdrawn(e: &Env, owner: &Address, package_id: u64, amount: i128) {
    let topics = (Symbol::new(e, "withdrawn"), owner.clone());
    e.events().publish(topics, (package_id, amount));
}

/// Emitted when a referred purchase credits a reward.
///
/// # Topics
/// * `Symbol` - "referral_rewarded"
/// * `Address` - The referrer
///
/// # Data
/// * `u64` - The new referral id
/// * `i128` - The reward amount
/// * `Address` - The token the reward is denominated in
pub fn emit_referral_rewarded(
    e: &Env,
    referrer: &Address,
    referral_id: u64,
    reward: i128,
    token: &Address,
) {
    let topics = (Symbol::new(e, "referral_rewarded"), referrer.clone());
    e.events().publish(topics, (referral_id, reward, token.clone()));
}

/// Emitted once per referral paid out by a claim batch.
///
/// # Topics
/// * `Symbol` - "referral_claimed"
/// * `Address` - The referrer
///
/// # Data
/// * `u64` - The referral id
/// * `i128` - The amount paid
pub fn emit_referral_claimed(e: &Env, referrer: &Address, referral_id: u64, amount: i128) {
    let topics = (Symbol::new(e, "referral_claimed"), referrer.clone());
    e.events().publish(topics, (referral_id, amount));
}
