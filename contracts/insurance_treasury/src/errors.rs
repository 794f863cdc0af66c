/// All panic messages used by the insurance_treasury contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.

// Initialization
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";

// Authorization
pub const ERR_NOT_OWNER: &str = "caller is not the owner";
pub const ERR_NOT_AUTHORIZED: &str = "caller is not authorized";

// Funds
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INSUFFICIENT_BALANCE: &str = "insufficient treasury balance";
