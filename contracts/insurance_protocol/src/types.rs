use soroban_sdk::{contracttype, Address, BytesN, Symbol};

// ─── Plan catalog ──────────────────────────────────────────────────────────

/// A purchasable fee/penalty/duration template. Immutable identity once
/// created; terms may be edited in place and activation toggled off.
#[contracttype]
#[derive(Clone, Debug)]
pub struct PackagePlan {
    /// keccak256 over (period_duration, insurance_fee_bps, uninsure_fee).
    /// Assigned once at creation and treated as a stable handle thereafter,
    /// so in-place term edits do not move the plan.
    pub plan_id: BytesN<32>,
    /// Lock duration in seconds.
    pub period_duration: u64,
    /// Purchase-time fee in basis points (100 bps = 1 %).
    pub insurance_fee_bps: u32,
    /// Flat early-cancellation penalty, in the reward/penalty token.
    pub uninsure_fee: i128,
    /// Inactive plans cannot be purchased but remain visible.
    pub is_activated: bool,
}

// ─── Policies ──────────────────────────────────────────────────────────────

/// One user's lock against a plan. Created on purchase, mutated only by
/// cancel/withdraw, never deleted.
#[contracttype]
#[derive(Clone, Debug)]
pub struct UserPackage {
    /// Sequence-assigned, unique per purchase.
    pub package_id: u64,
    /// Purchasing account.
    pub owner: Address,
    /// Plan in force at purchase time.
    pub plan_id: BytesN<32>,
    /// Stable asset the principal was paid in.
    pub payment_token: Address,
    /// Insured asset delivered through the swap venue.
    pub insure_coin: Address,
    /// Fee-adjusted principal, in payment-token units.
    pub initial_deposit: i128,
    /// Penalty snapshotted from the plan at purchase; later plan edits do
    /// not change it.
    pub uninsure_fee: i128,
    /// Ledger timestamp at purchase.
    pub deposit_timestamp: u64,
    /// `deposit_timestamp + period_duration`, precomputed.
    pub expiry_timestamp: u64,
    /// Set at most once; implies `is_withdrawn`.
    pub is_cancelled: bool,
    /// Set at most once; either terminal flag rejects further mutation.
    pub is_withdrawn: bool,
}

// ─── Referrals ─────────────────────────────────────────────────────────────

/// A share of a purchase fee credited to whoever referred the buyer.
/// Liability only until claimed; no funds move at credit time.
#[contracttype]
#[derive(Clone, Debug)]
pub struct Referral {
    pub referral_id: u64,
    pub referrer: Address,
    pub reward_amount: i128,
    /// Token the reward is denominated in (the purchase's payment token).
    pub token: Address,
    /// Set exactly once by claim.
    pub claimed: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract owner.
    Owner,
    /// Treasury contract address.
    Treasury,
    /// Swap venue contract address.
    SwapVenue,
    /// Reward/penalty token address.
    RewardToken,
    /// Percentage of the insurance fee credited to referrers (base 100).
    ReferralPct,
    /// Ordered list of all plan ids, for pagination.
    PlanIds,
    /// Plan by id.
    Plan(BytesN<32>),
    /// Last assigned package id.
    PackageCounter,
    /// Package by id.
    Package(u64),
    /// Package ids owned by an account, insertion order.
    UserPackages(Address),
    /// Last assigned referral id.
    ReferralCounter,
    /// Referral by id.
    Referral(u64),
    /// Referral ids credited to an account, insertion order.
    UserReferrals(Address),
    /// Aggregate locked principal across active packages, payment-token units.
    TotalLocked,
    /// Payment-token allow-list: symbol -> address.
    PaymentToken(Symbol),
    /// Reverse lookup for the payment-token allow-list.
    PaymentSymbol(Address),
    /// Insured-asset allow-list: symbol -> address.
    InsureCoin(Symbol),
}
