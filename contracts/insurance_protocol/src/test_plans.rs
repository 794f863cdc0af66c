//! Plan catalog tests: creation, deterministic ids, batch update,
//! deactivation, pagination.

#![cfg(test)]

use crate::test_helpers::*;
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

// ═══════════════════════════════════════════════════════════════════
// 1. Creation & deterministic ids
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_add_package_plan() {
    let e = Env::default();
    let ctx = setup(&e);

    let plan_id = add_default_plan(&ctx);
    let plan = ctx.protocol.get_package_plan(&plan_id);

    assert_eq!(plan.plan_id, plan_id);
    assert_eq!(plan.period_duration, SIX_MONTHS);
    assert_eq!(plan.insurance_fee_bps, 100);
    assert_eq!(plan.uninsure_fee, 1);
    assert!(plan.is_activated);
    assert_eq!(ctx.protocol.get_package_plans_length(), 1);
}

#[test]
fn test_plan_id_is_deterministic() {
    let e = Env::default();
    let ctx = setup(&e);

    // Same terms on two separate deployments hash to the same id.
    let id_here = add_default_plan(&ctx);

    let e2 = Env::default();
    let ctx2 = setup(&e2);
    let id_there = add_default_plan(&ctx2);

    assert_eq!(id_here.to_array(), id_there.to_array());
}

#[test]
#[should_panic(expected = "package plan already exists")]
fn test_add_plan_with_identical_terms_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    add_default_plan(&ctx);
    add_default_plan(&ctx);
}

#[test]
fn test_plans_with_different_terms_get_different_ids() {
    let e = Env::default();
    let ctx = setup(&e);
    let a = ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &100_u32, &1_i128);
    let b = ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &50_u32, &10_i128);
    assert_ne!(a, b);
    assert_eq!(ctx.protocol.get_package_plans_length(), 2);
}

#[test]
#[should_panic(expected = "caller is not the owner")]
fn test_add_plan_non_owner_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let impostor = Address::generate(&e);
    ctx.protocol
        .add_package_plan(&impostor, &SIX_MONTHS, &100_u32, &1_i128);
}

#[test]
#[should_panic(expected = "duration must be positive")]
fn test_add_plan_zero_duration_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.protocol
        .add_package_plan(&ctx.owner, &0_u64, &100_u32, &1_i128);
}

#[test]
#[should_panic(expected = "fee cannot exceed 10000 basis points")]
fn test_add_plan_excessive_fee_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.protocol
        .add_package_plan(&ctx.owner, &SIX_MONTHS, &10_001_u32, &1_i128);
}

#[test]
#[should_panic(expected = "penalty cannot be negative")]
fn test_add_plan_negative_penalty_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.protocol
        .add_package_plan(&ctx.owner, &SIX_MONTHS, &100_u32, &(-1_i128));
}

// ═══════════════════════════════════════════════════════════════════
// 2. Batch update
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_update_package_plans_in_place() {
    let e = Env::default();
    let ctx = setup(&e);
    let a = ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &100_u32, &1_i128);
    let b = ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &50_u32, &10_i128);

    ctx.protocol.update_package_plans(
        &ctx.owner,
        &vec![&e, a.clone(), b.clone()],
        &vec![&e, SIX_MONTHS, 2 * SIX_MONTHS],
        &vec![&e, 100_u32, 25_u32],
        &vec![&e, 2_i128, 20_i128],
    );

    // Ids stay stable even though the stored terms no longer hash to them.
    let updated_a = ctx.protocol.get_package_plan(&a);
    assert_eq!(updated_a.plan_id, a);
    assert_eq!(updated_a.uninsure_fee, 2);

    let updated_b = ctx.protocol.get_package_plan(&b);
    assert_eq!(updated_b.period_duration, 2 * SIX_MONTHS);
    assert_eq!(updated_b.insurance_fee_bps, 25);
    assert_eq!(updated_b.uninsure_fee, 20);
}

#[test]
#[should_panic(expected = "package plan not found")]
fn test_update_unknown_plan_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let known = add_default_plan(&ctx);
    let unknown = soroban_sdk::BytesN::from_array(&e, &[7_u8; 32]);

    // One bad id fails the whole batch before anything is touched.
    ctx.protocol.update_package_plans(
        &ctx.owner,
        &vec![&e, known, unknown],
        &vec![&e, SIX_MONTHS, SIX_MONTHS],
        &vec![&e, 100_u32, 100_u32],
        &vec![&e, 1_i128, 1_i128],
    );
}

#[test]
#[should_panic(expected = "input lengths do not match")]
fn test_update_length_mismatch_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let id = add_default_plan(&ctx);
    ctx.protocol.update_package_plans(
        &ctx.owner,
        &vec![&e, id],
        &vec![&e, SIX_MONTHS, SIX_MONTHS],
        &vec![&e, 100_u32],
        &vec![&e, 1_i128],
    );
}

#[test]
#[should_panic(expected = "empty batch")]
fn test_update_empty_batch_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.protocol.update_package_plans(
        &ctx.owner,
        &vec![&e],
        &vec![&e],
        &vec![&e],
        &vec![&e],
    );
}

#[test]
#[should_panic(expected = "caller is not the owner")]
fn test_update_non_owner_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let id = add_default_plan(&ctx);
    let impostor = Address::generate(&e);
    ctx.protocol.update_package_plans(
        &impostor,
        &vec![&e, id],
        &vec![&e, SIX_MONTHS],
        &vec![&e, 100_u32],
        &vec![&e, 2_i128],
    );
}

// ═══════════════════════════════════════════════════════════════════
// 3. Deactivation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_deactivate_keeps_plan_visible() {
    let e = Env::default();
    let ctx = setup(&e);
    let id = add_default_plan(&ctx);
    ctx.protocol.deactivate_package_plan(&ctx.owner, &id);

    let plan = ctx.protocol.get_package_plan(&id);
    assert!(!plan.is_activated);
    assert_eq!(ctx.protocol.get_package_plans_length(), 1);
}

#[test]
fn test_deactivate_is_one_way() {
    // There is deliberately no reactivation operation; even an in-place
    // term update leaves the plan deactivated.
    let e = Env::default();
    let ctx = setup(&e);
    let id = add_default_plan(&ctx);
    ctx.protocol.deactivate_package_plan(&ctx.owner, &id);

    ctx.protocol.update_package_plans(
        &ctx.owner,
        &vec![&e, id.clone()],
        &vec![&e, SIX_MONTHS],
        &vec![&e, 100_u32],
        &vec![&e, 5_i128],
    );
    assert!(!ctx.protocol.get_package_plan(&id).is_activated);
}

#[test]
#[should_panic(expected = "package plan not found")]
fn test_deactivate_unknown_plan_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let unknown = soroban_sdk::BytesN::from_array(&e, &[9_u8; 32]);
    ctx.protocol.deactivate_package_plan(&ctx.owner, &unknown);
}

#[test]
#[should_panic(expected = "caller is not the owner")]
fn test_deactivate_non_owner_panics() {
    let e = Env::default();
    let ctx = setup(&e);
    let id = add_default_plan(&ctx);
    let impostor = Address::generate(&e);
    ctx.protocol.deactivate_package_plan(&impostor, &id);
}

// ═══════════════════════════════════════════════════════════════════
// 4. Pagination
// ═══════════════════════════════════════════════════════════════════

#[test]
fn test_get_all_package_plans_insertion_order() {
    let e = Env::default();
    let ctx = setup(&e);
    let a = ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &100_u32, &1_i128);
    let b = ctx.protocol.add_package_plan(&ctx.owner, &(2 * SIX_MONTHS), &50_u32, &10_i128);
    let c = ctx.protocol.add_package_plan(&ctx.owner, &(4 * SIX_MONTHS), &25_u32, &100_i128);

    let all = ctx.protocol.get_all_package_plans(&0, &10);
    assert_eq!(all.len(), 3);
    assert_eq!(all.get(0).unwrap().plan_id, a);
    assert_eq!(all.get(1).unwrap().plan_id, b);
    assert_eq!(all.get(2).unwrap().plan_id, c);
}

#[test]
fn test_get_all_package_plans_offset_and_limit() {
    let e = Env::default();
    let ctx = setup(&e);
    ctx.protocol.add_package_plan(&ctx.owner, &SIX_MONTHS, &100_u32, &1_i128);
    let b = ctx.protocol.add_package_plan(&ctx.owner, &(2 * SIX_MONTHS), &50_u32, &10_i128);
    ctx.protocol.add_package_plan(&ctx.owner, &(4 * SIX_MONTHS), &25_u32, &100_i128);

    let page = ctx.protocol.get_all_package_plans(&1, &1);
    assert_eq!(page.len(), 1);
    assert_eq!(page.get(0).unwrap().plan_id, b);

    let tail = ctx.protocol.get_all_package_plans(&2, &10);
    assert_eq!(tail.len(), 1);

    let past_end = ctx.protocol.get_all_package_plans(&5, &10);
    assert_eq!(past_end.len(), 0);
}

#[test]
fn test_empty_catalog_reads() {
    let e = Env::default();
    let ctx = setup(&e);
    assert_eq!(ctx.protocol.get_package_plans_length(), 0);
    assert_eq!(ctx.protocol.get_all_package_plans(&0, &10).len(), 0);
}
