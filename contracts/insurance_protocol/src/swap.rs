//! Swap venue call contract.
//!
//! The engine converts the fee-adjusted principal into the insured asset
//! through an external liquidity-routing venue. Only the narrow surface
//! below is consumed; pool bootstrap operations (liquidity provision and
//! the like) belong to the venue's own tooling. Input tokens are
//! transferred to the venue before the swap call, so the venue never needs
//! spend authority over the engine.

use soroban_sdk::{contractclient, Address, Env, Vec};

#[contractclient(name = "SwapVenueClient")]
pub trait SwapVenue {
    /// Expected output of converting `amount_in` along `path`.
    fn quote(env: Env, amount_in: i128, path: Vec<Address>) -> i128;

    /// Convert `amount_in` along `path` and pay the output to `to`.
    ///
    /// Consumes input already held by the venue. Panics if `deadline` has
    /// elapsed or the realized output is below `amount_out_min`; returns
    /// the realized output.
    fn swap_exact_input(
        env: Env,
        amount_in: i128,
        amount_out_min: i128,
        path: Vec<Address>,
        to: Address,
        deadline: u64,
    ) -> i128;
}
