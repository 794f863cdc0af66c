/// All panic messages used by the insurance_protocol contract.
///
/// Using string constants avoids typos in `#[should_panic(expected = "...")]` tests.

// Initialization
pub const ERR_ALREADY_INITIALIZED: &str = "already initialized";
pub const ERR_NOT_INITIALIZED: &str = "not initialized";

// Authorization
pub const ERR_NOT_OWNER: &str = "caller is not the owner";
pub const ERR_NOT_PACKAGE_OWNER: &str = "caller does not own this package";
pub const ERR_NOT_REFERRER: &str = "caller is not the referrer";

// NotFound
pub const ERR_PLAN_NOT_FOUND: &str = "package plan not found";
pub const ERR_PACKAGE_NOT_FOUND: &str = "package not found";
pub const ERR_REFERRAL_NOT_FOUND: &str = "referral not found";

// InvalidState
pub const ERR_PLAN_EXISTS: &str = "package plan already exists";
pub const ERR_PLAN_INACTIVE: &str = "package plan is not activated";
pub const ERR_PACKAGE_TERMINAL: &str = "package already cancelled or withdrawn";
pub const ERR_REFERRAL_CLAIMED: &str = "referral reward already claimed";
pub const ERR_PAYMENT_TOKEN_EXISTS: &str = "payment token already supported";
pub const ERR_PAYMENT_TOKEN_UNKNOWN: &str = "unsupported payment token";
pub const ERR_INSURE_COIN_EXISTS: &str = "insure coin already supported";
pub const ERR_INSURE_COIN_UNKNOWN: &str = "unsupported insure coin";
pub const ERR_LENGTH_MISMATCH: &str = "input lengths do not match";
pub const ERR_EMPTY_BATCH: &str = "empty batch";
pub const ERR_PATH_MISMATCH: &str = "swap path does not match the supplied assets";
pub const ERR_INVALID_PERCENTAGE: &str = "percentage cannot exceed 100";
pub const ERR_INVALID_FEE: &str = "fee cannot exceed 10000 basis points";
pub const ERR_INVALID_DURATION: &str = "duration must be positive";

// TimingViolation
pub const ERR_NOT_EXPIRED: &str = "package has not yet expired";
pub const ERR_EXPIRED: &str = "package has expired; cancellation window closed";
pub const ERR_CLAIM_WINDOW_CLOSED: &str = "withdrawal claim window has lapsed";
pub const ERR_EXPIRY_OVERFLOW: &str = "expiry timestamp would overflow";

// InsufficientFunds
pub const ERR_INVALID_AMOUNT: &str = "amount must be positive";
pub const ERR_INVALID_PENALTY: &str = "penalty cannot be negative";
