//! Fixtures that deploy real Stellar asset contracts next to the contracts
//! under test.

use soroban_sdk::{testutils::Address as _, testutils::Ledger, token, Address, Env};
use staking::{StakingContract, StakingContractClient};
use token_batch::{TokenBatchContract, TokenBatchContractClient};
use token_sale::{TokenSaleContract, TokenSaleContractClient, WhitelistTier};

use super::constants::*;

/// A Stellar asset contract with its SEP-41 and admin clients.
pub struct AssetFixture<'a> {
    pub address: Address,
    pub client: token::Client<'a>,
    pub admin: token::StellarAssetClient<'a>,
}

impl<'a> AssetFixture<'a> {
    pub fn new(env: &Env, issuer: &Address) -> Self {
        let address = env
            .register_stellar_asset_contract_v2(issuer.clone())
            .address();
        Self {
            client: token::Client::new(env, &address),
            admin: token::StellarAssetClient::new(env, &address),
            address,
        }
    }

    pub fn balance(&self, account: &Address) -> i128 {
        self.client.balance(account)
    }
}

/// A deployed, initialized and funded sale with an operator assigned.
pub struct SaleFixture<'a> {
    pub sale: TokenSaleContractClient<'a>,
    pub owner: Address,
    pub operator: Address,
    pub wallet: Address,
    pub payment: AssetFixture<'a>,
    pub token: AssetFixture<'a>,
}

impl<'a> SaleFixture<'a> {
    /// Ledger time is moved to `SALE_START`, so the sale is open on return.
    pub fn deploy(env: &'a Env, supply: i128) -> Self {
        env.mock_all_auths();
        env.ledger().with_mut(|li| li.timestamp = SALE_START);

        let issuer = Address::generate(env);
        let owner = Address::generate(env);
        let operator = Address::generate(env);
        let wallet = Address::generate(env);
        let payment = AssetFixture::new(env, &issuer);
        let token = AssetFixture::new(env, &issuer);

        let contract_id = env.register_contract(None, TokenSaleContract);
        let sale = TokenSaleContractClient::new(env, &contract_id);
        sale.deploy(
            &owner,
            &wallet,
            &payment.address,
            &SALE_START,
            &SALE_END,
            &0,
        );
        sale.initialize(&owner, &token.address);
        sale.set_operator(&owner, &operator);
        token.admin.mint(&contract_id, &supply);

        Self {
            sale,
            owner,
            operator,
            wallet,
            payment,
            token,
        }
    }

    /// A stage-1 contributor holding `funds` of the payment asset.
    pub fn contributor(&self, env: &Env, funds: i128) -> Address {
        let account = Address::generate(env);
        self.sale
            .update_whitelist(&self.operator, &account, &WhitelistTier::Stage1);
        if funds > 0 {
            self.payment.admin.mint(&account, &funds);
        }
        account
    }
}

pub fn deploy_staking<'a>(
    env: &'a Env,
    deployer: &Address,
    token: &Address,
) -> StakingContractClient<'a> {
    let contract_id = env.register_contract(None, StakingContract);
    let client = StakingContractClient::new(env, &contract_id);
    client.initialize(deployer, token);
    client
}

pub fn deploy_batch<'a>(
    env: &'a Env,
    owner: &Address,
    token: &Address,
    source: &Address,
) -> TokenBatchContractClient<'a> {
    let contract_id = env.register_contract(None, TokenBatchContract);
    let client = TokenBatchContractClient::new(env, &contract_id);
    client.initialize(owner, token, source);
    client
}
