multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Claim Error — first failed guard of a claim transition
// ============================================================

/// Guards are evaluated in declaration order; the first one that
/// fails is the one reported.
#[derive(Clone, Copy, PartialEq, Debug)]
pub enum ClaimError {
    FaucetPaused,
    /// Seconds left until the identity's cooldown ends.
    CooldownActive { seconds_remaining: u64 },
    LifetimeLimitReached,
    InsufficientFaucetBalance,
}

impl ClaimError {
    pub fn message(&self) -> &'static str {
        match self {
            ClaimError::FaucetPaused => "Faucet is paused",
            ClaimError::CooldownActive { .. } => "Cooldown period not elapsed",
            ClaimError::LifetimeLimitReached => "Lifetime claim limit reached",
            ClaimError::InsufficientFaucetBalance => "Faucet has insufficient token balance",
        }
    }
}

// ============================================================
// Ledger Error — rejected mint, no state touched
// ============================================================

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum LedgerError {
    /// Minted total would cross the max supply.
    SupplyExceeded,
    /// Presented minter is not the bound one.
    UnauthorizedMinter,
}

impl LedgerError {
    pub fn message(&self) -> &'static str {
        match self {
            LedgerError::SupplyExceeded => "Max supply exceeded",
            LedgerError::UnauthorizedMinter => "Only faucet can mint",
        }
    }
}

// ============================================================
// Claimer Info — dashboard projection for one identity
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, PartialEq, Debug)]
pub struct ClaimerInfo<M: ManagedTypeApi> {
    pub balance: BigUint<M>,
    pub total_claimed: BigUint<M>,
    pub remaining_allowance: BigUint<M>,
    /// 0 if the identity never claimed
    pub last_claim_at: u64,
    pub cooldown_remaining: u64,
    /// Advisory: the supply ceiling is only checked by a real claim
    pub can_claim: bool,
}
