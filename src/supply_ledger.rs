multiversx_sc::imports!();

use crate::types::LedgerError;

/// Token decimals; all amounts in this contract are base units.
pub const TOKEN_DECIMALS: u32 = 18;

// ============================================================
// Supply Ledger — capped fungible balance accounting
// ============================================================

#[multiversx_sc::module]
pub trait SupplyLedgerModule {
    fn init_ledger(
        &self,
        max_supply: BigUint,
        token_name: ManagedBuffer,
        token_ticker: ManagedBuffer,
    ) {
        require!(max_supply > 0u64, "Max supply must be positive");
        self.max_supply().set(&max_supply);
        self.total_minted().set(BigUint::zero());
        self.token_name().set(&token_name);
        self.token_ticker().set(&token_ticker);
    }

    /// The minter role can be bound exactly once.
    fn bind_minter(&self, minter: &ManagedAddress) {
        require!(self.minter().is_empty(), "Minter already set");
        self.minter().set(minter);
    }

    /// Credits `amount` to `identity`. The ceiling is the last check
    /// before any write, so a rejected mint leaves the ledger untouched.
    fn mint(
        &self,
        minter: &ManagedAddress,
        identity: &ManagedAddress,
        amount: &BigUint,
    ) -> Result<(), LedgerError> {
        if self.minter().is_empty() || self.minter().get() != *minter {
            return Err(LedgerError::UnauthorizedMinter);
        }

        let new_total = &self.total_minted().get() + amount;
        if new_total > self.max_supply().get() {
            return Err(LedgerError::SupplyExceeded);
        }

        self.balances(identity).update(|balance| *balance += amount);
        self.total_minted().set(&new_total);
        Ok(())
    }

    fn remaining_supply(&self) -> BigUint {
        let max_supply = self.max_supply().get();
        let minted = self.total_minted().get();
        if max_supply > minted {
            max_supply - minted
        } else {
            BigUint::zero()
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    #[view(balanceOf)]
    fn balance_of(&self, identity: &ManagedAddress) -> BigUint {
        self.balances(identity).get()
    }

    #[view(getTotalMinted)]
    fn get_total_minted(&self) -> BigUint {
        self.total_minted().get()
    }

    #[view(getMaxSupply)]
    fn get_max_supply(&self) -> BigUint {
        self.max_supply().get()
    }

    #[view(getRemainingSupply)]
    fn get_remaining_supply(&self) -> BigUint {
        self.remaining_supply()
    }

    #[view(getMinter)]
    fn get_minter(&self) -> ManagedAddress {
        self.minter().get()
    }

    #[view(getTokenName)]
    fn get_token_name(&self) -> ManagedBuffer {
        self.token_name().get()
    }

    #[view(getTokenTicker)]
    fn get_token_ticker(&self) -> ManagedBuffer {
        self.token_ticker().get()
    }

    #[view(getTokenDecimals)]
    fn get_token_decimals(&self) -> u32 {
        TOKEN_DECIMALS
    }

    // ========================================================
    // STORAGE
    // ========================================================

    #[storage_mapper("maxSupply")]
    fn max_supply(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("totalMinted")]
    fn total_minted(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("balances")]
    fn balances(&self, identity: &ManagedAddress) -> SingleValueMapper<BigUint>;

    #[storage_mapper("minter")]
    fn minter(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("tokenName")]
    fn token_name(&self) -> SingleValueMapper<ManagedBuffer>;

    #[storage_mapper("tokenTicker")]
    fn token_ticker(&self) -> SingleValueMapper<ManagedBuffer>;
}
