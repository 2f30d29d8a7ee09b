use soroban_sdk::{contracterror, log, Env, String};

/// Failure classes every `Error` variant belongs to.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Initialization,
    Authorization,
    StateGate,
    Validation,
    NotFound,
    AlreadyDone,
    Timing,
    Solvency,
    Transfer,
}

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-9)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,
    /// Lock duration or time unit is zero
    InvalidConfig = 3,

    // ============================================
    // AUTHORIZATION ERRORS (10-19)
    // ============================================
    /// Caller is not the owner
    NotOwner = 10,
    /// Caller is neither owner nor administrator
    NotOwnerOrAdmin = 11,
    /// Caller is not a whitelisted user
    NotAuthorizedUser = 12,
    /// Caller is not the candidate named in the ownership offer
    NotCandidate = 13,

    // ============================================
    // STATE GATE ERRORS (20-29)
    // ============================================
    /// Bank is not active
    BankInactive = 20,

    // ============================================
    // VALIDATION ERRORS (30-39)
    // ============================================
    /// Amount must be positive
    InvalidAmount = 30,
    /// Identity cannot be the bank itself
    InvalidIdentity = 31,
    /// Rate outside 0..=MAX_RATE_BPS
    InvalidRate = 32,
    /// Offer must be (candidate, price > 0) or (none, 0)
    InvalidOffer = 33,
    /// Cannot offer ownership to the current owner
    SelfOffer = 34,
    /// Intermediate value overflowed i128
    ArithmeticOverflow = 35,

    // ============================================
    // ROLE MUTATION ERRORS (40-49)
    // ============================================
    /// Identity is already an administrator
    AlreadyAdmin = 40,
    /// Identity is not an administrator
    NotAdmin = 41,
    /// Identity is already whitelisted
    AlreadyWhitelisted = 42,
    /// Identity is not whitelisted
    NotWhitelisted = 43,

    // ============================================
    // LOOKUP ERRORS (50-59)
    // ============================================
    /// No deposit at this index for the account
    DepositNotFound = 50,
    /// No ownership offer is active
    NoActiveOffer = 51,

    // ============================================
    // LIFECYCLE ERRORS (60-69)
    // ============================================
    /// Deposit has already been withdrawn
    AlreadyWithdrawn = 60,

    // ============================================
    // TIMING ERRORS (70-79)
    // ============================================
    /// Deposit has not reached maturity
    NotMatured = 70,

    // ============================================
    // SOLVENCY ERRORS (80-89)
    // ============================================
    /// Reserve cannot cover the interest owed
    InsufficientReserve = 80,
    /// Bank token balance cannot cover the payout
    InsufficientContractBalance = 81,
    /// Payment does not equal the offered price
    PaymentMismatch = 82,

    // ============================================
    // TRANSFER ERRORS (90-99)
    // ============================================
    /// Token transfer failed
    TransferFailed = 90,
    /// Value sent without selecting an operation
    DirectTransferRejected = 91,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::AlreadyInitialized | Error::NotInitialized | Error::InvalidConfig => {
                ErrorKind::Initialization
            }
            Error::NotOwner
            | Error::NotOwnerOrAdmin
            | Error::NotAuthorizedUser
            | Error::NotCandidate => ErrorKind::Authorization,
            Error::BankInactive => ErrorKind::StateGate,
            Error::InvalidAmount
            | Error::InvalidIdentity
            | Error::InvalidRate
            | Error::InvalidOffer
            | Error::SelfOffer
            | Error::ArithmeticOverflow
            | Error::AlreadyWhitelisted
            | Error::NotWhitelisted
            | Error::NotAdmin => ErrorKind::Validation,
            Error::DepositNotFound | Error::NoActiveOffer => ErrorKind::NotFound,
            Error::AlreadyWithdrawn | Error::AlreadyAdmin => ErrorKind::AlreadyDone,
            Error::NotMatured => ErrorKind::Timing,
            Error::InsufficientReserve
            | Error::InsufficientContractBalance
            | Error::PaymentMismatch => ErrorKind::Solvency,
            Error::TransferFailed | Error::DirectTransferRejected => ErrorKind::Transfer,
        }
    }

    pub fn reason(&self) -> &'static str {
        match self {
            Error::AlreadyInitialized => "bank already initialized",
            Error::NotInitialized => "bank not initialized",
            Error::InvalidConfig => "lock duration and time unit must be positive",
            Error::NotOwner => "caller is not the owner",
            Error::NotOwnerOrAdmin => "caller is not the owner or an admin",
            Error::NotAuthorizedUser => "caller is not a whitelisted user",
            Error::NotCandidate => "caller is not the offered candidate",
            Error::BankInactive => "bank is not active",
            Error::InvalidAmount => "amount must be greater than zero",
            Error::InvalidIdentity => "identity is not valid",
            Error::InvalidRate => "interest rate out of range",
            Error::InvalidOffer => "offer needs a candidate and price, or neither",
            Error::SelfOffer => "owner cannot offer ownership to itself",
            Error::ArithmeticOverflow => "arithmetic overflow",
            Error::AlreadyAdmin => "identity is already an admin",
            Error::NotAdmin => "identity is not an admin",
            Error::AlreadyWhitelisted => "identity is already whitelisted",
            Error::NotWhitelisted => "identity is not whitelisted",
            Error::DepositNotFound => "deposit index out of range",
            Error::NoActiveOffer => "no active ownership offer",
            Error::AlreadyWithdrawn => "deposit already withdrawn",
            Error::NotMatured => "deposit is still locked",
            Error::InsufficientReserve => "reserve cannot cover interest",
            Error::InsufficientContractBalance => "bank balance cannot cover payout",
            Error::PaymentMismatch => "payment must equal the offered price",
            Error::TransferFailed => "token transfer failed",
            Error::DirectTransferRejected => "direct transfers are not accepted",
        }
    }

    /// Log the failure reason and hand the error back
    pub(crate) fn logged(self, env: &Env) -> Self {
        log!(env, "rejected", self as u32, String::from_str(env, self.reason()));
        self
    }
}
