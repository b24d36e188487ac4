//! Full lifecycle: sell out the supply under a changing per-account cap,
//! close the sale, then stake part of the purchased tokens.

use soroban_sdk::{testutils::Ledger, Env};
use token_sale::{Error, SalePhase};

use crate::utils::{constants::*, deploy_staking, SaleFixture};
use crate::{assert_balance, assert_sale_conserved};

#[test]
fn test_sale_sells_out_then_holder_stakes() {
    let env = Env::default();
    let fixture = SaleFixture::deploy(&env, SALE_SUPPLY);
    let sale = &fixture.sale;
    let owner = &fixture.owner;

    sale.set_sale_window(owner, &SALE_START, &SALE_END);
    sale.set_max_tokens_per_account(owner, &(4_000 * UNIT));
    let buyer = fixture.contributor(&env, 50_000 * UNIT);

    // cap of 4 000 tokens: 2 units offered, 1 unit charged
    assert_eq!(sale.buy_tokens(&buyer, &buyer, &(2 * UNIT)), 4_000 * UNIT);
    assert_balance!(fixture.payment, buyer, 49_999 * UNIT);

    // doubled cap frees another 4 000
    sale.set_max_tokens_per_account(owner, &(8_000 * UNIT));
    assert_eq!(sale.buy_tokens(&buyer, &buyer, &(2 * UNIT)), 4_000 * UNIT);
    assert_balance!(fixture.token, buyer, 8_000 * UNIT);

    // no cap: the rest of the supply, 84 992 000 tokens for 21 248 units
    sale.set_max_tokens_per_account(owner, &0);
    let rest = sale.buy_tokens(&buyer, &buyer, &(30_000 * UNIT));
    assert_eq!(rest, SALE_SUPPLY - 8_000 * UNIT);

    assert_eq!(sale.get_total_tokens_sold(), SALE_SUPPLY);
    assert_eq!(sale.get_total_value_collected(), 21_250 * UNIT);
    assert_balance!(fixture.payment, buyer, (50_000 - 21_250) * UNIT);
    assert_balance!(fixture.token, buyer, SALE_SUPPLY);
    assert_sale_conserved!(fixture, SALE_SUPPLY, 0);

    assert_eq!(
        sale.try_buy_tokens(&buyer, &buyer, &UNIT),
        Err(Ok(Error::InsufficientQuota))
    );
    assert_eq!(sale.reclaim_tokens(owner), 0);

    sale.finalize(owner);
    assert_eq!(sale.get_phase(), SalePhase::Finalized);

    let staking = deploy_staking(&env, owner, &fixture.token.address);
    fixture.token.client.approve(
        &buyer,
        &staking.address,
        &1_500,
        &ALLOWANCE_EXPIRATION_LEDGER,
    );
    let before = fixture.token.balance(&buyer);

    staking.stake_tokens(&buyer, &1_000);
    staking.stake_tokens(&buyer, &500);
    assert_eq!(staking.get_stake(&buyer), 1_500);

    staking.unstake_tokens(&buyer, &1_250);
    assert_eq!(staking.get_stake(&buyer), 250);
    assert_eq!(staking.get_total_staked(), 250);
    assert_balance!(fixture.token, buyer, before - 250);
}

#[test]
fn test_sale_closes_with_window_and_unsold_tokens_are_reclaimed() {
    let env = Env::default();
    let fixture = SaleFixture::deploy(&env, SALE_SUPPLY);
    let sale = &fixture.sale;
    let payer = fixture.contributor(&env, 10 * UNIT);
    let receiver = fixture.contributor(&env, 0);

    // bonus of 5% on a proxy purchase
    sale.set_bonus(&fixture.owner, &500);
    assert_eq!(sale.buy_tokens(&payer, &receiver, &UNIT), 4_200 * UNIT);

    env.ledger().with_mut(|li| li.timestamp = SALE_END + 1);
    assert_eq!(sale.get_phase(), SalePhase::Ended);
    assert_eq!(
        sale.try_buy_tokens(&payer, &receiver, &UNIT),
        Err(Ok(Error::NotInWindow))
    );

    let reclaimed = sale.reclaim_tokens(&fixture.owner);
    assert_eq!(reclaimed, SALE_SUPPLY - 4_200 * UNIT);
    assert_sale_conserved!(fixture, SALE_SUPPLY, reclaimed);
    assert_eq!(sale.reclaim_tokens(&fixture.owner), 0);
}
