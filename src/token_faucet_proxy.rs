use multiversx_sc::proxy_imports::*;

use crate::types::ClaimerInfo;

pub struct TokenFaucetProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for TokenFaucetProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = TokenFaucetProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        TokenFaucetProxyMethods { wrapped_tx: tx }
    }
}

pub struct TokenFaucetProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> TokenFaucetProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<
        Arg0: ProxyArg<BigUint<Env::Api>>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedBuffer<Env::Api>>,
    >(
        self,
        max_supply: Arg0,
        token_name: Arg1,
        token_ticker: Arg2,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&max_supply)
            .argument(&token_name)
            .argument(&token_ticker)
            .original_result()
    }
}

impl<Env, From, To, Gas> TokenFaucetProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }

    pub fn request_tokens(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("requestTokens")
            .original_result()
    }

    pub fn set_paused<Arg0: ProxyArg<bool>>(
        self,
        paused: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("setPaused")
            .argument(&paused)
            .original_result()
    }

    pub fn can_claim<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("canClaim")
            .argument(&identity)
            .original_result()
    }

    pub fn remaining_allowance<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("remainingAllowance")
            .argument(&identity)
            .original_result()
    }

    pub fn last_claim_at<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("lastClaimAt")
            .argument(&identity)
            .original_result()
    }

    pub fn total_claimed<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("totalClaimed")
            .argument(&identity)
            .original_result()
    }

    pub fn is_paused(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("isPaused")
            .original_result()
    }

    pub fn admin(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getAdmin")
            .original_result()
    }

    pub fn faucet_config(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<BigUint<Env::Api>, BigUint<Env::Api>, u64, BigUint<Env::Api>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFaucetConfig")
            .original_result()
    }

    pub fn cooldown_remaining<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCooldownRemaining")
            .argument(&identity)
            .original_result()
    }

    pub fn next_claim_at<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getNextClaimAt")
            .argument(&identity)
            .original_result()
    }

    pub fn claimer_info<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ClaimerInfo<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getClaimerInfo")
            .argument(&identity)
            .original_result()
    }

    pub fn faucet_stats(
        self,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValue4<BigUint<Env::Api>, BigUint<Env::Api>, BigUint<Env::Api>, bool>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getFaucetStats")
            .original_result()
    }

    pub fn balance_of<Arg0: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        identity: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("balanceOf")
            .argument(&identity)
            .original_result()
    }

    pub fn total_minted(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTotalMinted")
            .original_result()
    }

    pub fn max_supply(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMaxSupply")
            .original_result()
    }

    pub fn remaining_supply(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getRemainingSupply")
            .original_result()
    }

    pub fn minter(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getMinter")
            .original_result()
    }

    pub fn token_name(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenName")
            .original_result()
    }

    pub fn token_ticker(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedBuffer<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenTicker")
            .original_result()
    }

    pub fn token_decimals(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u32> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTokenDecimals")
            .original_result()
    }
}
