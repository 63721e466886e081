#![no_std]

multiversx_sc::imports!();

pub mod supply_ledger;
pub mod token_faucet_proxy;
pub mod types;

use types::{ClaimError, ClaimerInfo, LedgerError};

// ============================================================
// Constants
// ============================================================

/// One whole token in base units (18 decimals)
pub const ONE_TOKEN: u64 = 1_000_000_000_000_000_000;

/// Fixed amount minted by every successful claim: 100 tokens
pub const CLAIM_TOKENS: u64 = 100;

/// Most an identity can ever receive: 1000 tokens
pub const LIFETIME_CAP_TOKENS: u64 = 1_000;

/// Minimum wait between two claims of one identity: 24 hours in seconds
pub const COOLDOWN_SECONDS: u64 = 86_400;

/// Earliest timestamp at which an identity may claim again.
/// Saturates at `u64::MAX` instead of wrapping back into the past.
///
/// A stored `last_claim_at` of 0 means "never claimed", so a claim
/// committed at block timestamp 0 carries no cooldown. Real chains
/// never produce that timestamp.
pub fn next_claim_at(last_claim_at: u64) -> u64 {
    if last_claim_at == 0 {
        return 0;
    }
    last_claim_at.saturating_add(COOLDOWN_SECONDS)
}

pub fn cooldown_remaining(last_claim_at: u64, now: u64) -> u64 {
    next_claim_at(last_claim_at).saturating_sub(now)
}

// ============================================================
// Contract
// ============================================================

#[multiversx_sc::contract]
pub trait TokenFaucet: supply_ledger::SupplyLedgerModule {
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, max_supply: BigUint, token_name: ManagedBuffer, token_ticker: ManagedBuffer) {
        let deployer = self.blockchain().get_caller();
        self.admin().set(&deployer);
        self.paused().set(false);

        self.init_ledger(max_supply, token_name, token_ticker);
        self.bind_minter(&self.blockchain().get_sc_address());
    }

    #[upgrade]
    fn upgrade(&self) {}

    // ========================================================
    // ENDPOINT: requestTokens
    // Checks pause, then cooldown, then lifetime cap, then supply.
    // ========================================================

    #[endpoint(requestTokens)]
    fn request_tokens(&self) {
        let caller = self.blockchain().get_caller();
        let now = self.blockchain().get_block_timestamp();

        if let Err(err) = self.check_claim_guards(&caller, now) {
            self.signal_claim_error(&caller, err);
        }

        let amount = self.claim_amount();
        let minter = self.blockchain().get_sc_address();
        match self.mint(&minter, &caller, &amount) {
            Ok(()) => {}
            // Ledger-internal ceiling error is reported in engine terms
            Err(LedgerError::SupplyExceeded) => {
                self.signal_claim_error(&caller, ClaimError::InsufficientFaucetBalance)
            }
            Err(err) => sc_panic!(err.message()),
        }

        self.total_claimed(&caller).update(|claimed| *claimed += &amount);
        self.last_claim_timestamp(&caller).set(now);

        self.tokens_claimed_event(&caller, &amount, now);
    }

    // ========================================================
    // ENDPOINT: setPaused (admin only)
    // ========================================================

    #[endpoint(setPaused)]
    fn set_paused(&self, paused: bool) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.admin().get(), "Only admin");

        self.paused().set(paused);
        self.faucet_paused_event(paused);
    }

    // ========================================================
    // INTERNAL: claim guards
    // Shared by requestTokens and canClaim. Does not consult the
    // ledger, so a passing result is advisory for canClaim.
    // ========================================================

    fn check_claim_guards(&self, identity: &ManagedAddress, now: u64) -> Result<(), ClaimError> {
        if self.paused().get() {
            return Err(ClaimError::FaucetPaused);
        }

        let last_claim_at = self.last_claim_timestamp(identity).get();
        if last_claim_at != 0 && now < next_claim_at(last_claim_at) {
            return Err(ClaimError::CooldownActive {
                seconds_remaining: cooldown_remaining(last_claim_at, now),
            });
        }

        let claimed_after = &self.total_claimed(identity).get() + &self.claim_amount();
        if claimed_after > self.lifetime_cap() {
            return Err(ClaimError::LifetimeLimitReached);
        }

        Ok(())
    }

    fn signal_claim_error(&self, identity: &ManagedAddress, err: ClaimError) -> ! {
        match err {
            ClaimError::CooldownActive { seconds_remaining } => sc_panic!(
                "Cooldown period not elapsed: {} seconds remaining",
                BigUint::from(seconds_remaining)
            ),
            ClaimError::LifetimeLimitReached => sc_panic!(
                "Lifetime claim limit reached: {} remaining",
                self.remaining_allowance_of(identity)
            ),
            _ => sc_panic!(err.message()),
        }
    }

    fn claim_amount(&self) -> BigUint {
        BigUint::from(CLAIM_TOKENS) * BigUint::from(ONE_TOKEN)
    }

    fn lifetime_cap(&self) -> BigUint {
        BigUint::from(LIFETIME_CAP_TOKENS) * BigUint::from(ONE_TOKEN)
    }

    fn remaining_allowance_of(&self, identity: &ManagedAddress) -> BigUint {
        let cap = self.lifetime_cap();
        let claimed = self.total_claimed(identity).get();
        if cap > claimed {
            cap - claimed
        } else {
            BigUint::zero()
        }
    }

    // ========================================================
    // VIEWS — issuance engine
    // ========================================================

    #[view(canClaim)]
    fn can_claim(&self, identity: &ManagedAddress) -> bool {
        let now = self.blockchain().get_block_timestamp();
        self.check_claim_guards(identity, now).is_ok()
    }

    #[view(remainingAllowance)]
    fn remaining_allowance(&self, identity: &ManagedAddress) -> BigUint {
        self.remaining_allowance_of(identity)
    }

    #[view(lastClaimAt)]
    fn get_last_claim_at(&self, identity: &ManagedAddress) -> u64 {
        self.last_claim_timestamp(identity).get()
    }

    #[view(totalClaimed)]
    fn get_total_claimed(&self, identity: &ManagedAddress) -> BigUint {
        self.total_claimed(identity).get()
    }

    #[view(isPaused)]
    fn is_paused(&self) -> bool {
        self.paused().get()
    }

    #[view(getAdmin)]
    fn get_admin(&self) -> ManagedAddress {
        self.admin().get()
    }

    #[view(getFaucetConfig)]
    fn get_faucet_config(&self) -> MultiValue4<BigUint, BigUint, u64, BigUint> {
        (
            self.claim_amount(),
            self.lifetime_cap(),
            COOLDOWN_SECONDS,
            self.max_supply().get(),
        )
            .into()
    }

    // ========================================================
    // VIEWS — query surface
    // Recomputed from storage on every call, nothing cached.
    // ========================================================

    #[view(getCooldownRemaining)]
    fn get_cooldown_remaining(&self, identity: &ManagedAddress) -> u64 {
        let now = self.blockchain().get_block_timestamp();
        cooldown_remaining(self.last_claim_timestamp(identity).get(), now)
    }

    #[view(getNextClaimAt)]
    fn get_next_claim_at(&self, identity: &ManagedAddress) -> u64 {
        next_claim_at(self.last_claim_timestamp(identity).get())
    }

    #[view(getClaimerInfo)]
    fn get_claimer_info(&self, identity: &ManagedAddress) -> ClaimerInfo<Self::Api> {
        let now = self.blockchain().get_block_timestamp();
        let last_claim_at = self.last_claim_timestamp(identity).get();

        ClaimerInfo {
            balance: self.balances(identity).get(),
            total_claimed: self.total_claimed(identity).get(),
            remaining_allowance: self.remaining_allowance_of(identity),
            last_claim_at,
            cooldown_remaining: cooldown_remaining(last_claim_at, now),
            can_claim: self.check_claim_guards(identity, now).is_ok(),
        }
    }

    #[view(getFaucetStats)]
    fn get_faucet_stats(&self) -> MultiValue4<BigUint, BigUint, BigUint, bool> {
        (
            self.total_minted().get(),
            self.max_supply().get(),
            self.remaining_supply(),
            self.paused().get(),
        )
            .into()
    }

    // ========================================================
    // EVENTS
    // ========================================================

    #[event("tokensClaimed")]
    fn tokens_claimed_event(
        &self,
        #[indexed] identity: &ManagedAddress,
        #[indexed] amount: &BigUint,
        timestamp: u64,
    );

    #[event("faucetPaused")]
    fn faucet_paused_event(&self, paused: bool);

    // ========================================================
    // STORAGE
    // ========================================================

    // ── Admin ──

    #[storage_mapper("admin")]
    fn admin(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("paused")]
    fn paused(&self) -> SingleValueMapper<bool>;

    // ── Per-identity claim records ──

    #[storage_mapper("totalClaimed")]
    fn total_claimed(&self, identity: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("lastClaimAt")]
    fn last_claim_timestamp(&self, identity: &ManagedAddress) -> SingleValueMapper<u64>;
}
