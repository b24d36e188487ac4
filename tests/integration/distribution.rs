//! Reclaimed sale tokens handed out through the batch contract.

use soroban_sdk::{testutils::Address as _, vec, Address, Env};
use token_batch::Error;

use crate::assert_balance;
use crate::utils::{constants::*, deploy_batch, SaleFixture};

#[test]
fn test_reclaimed_supply_distributed_in_one_batch() {
    let env = Env::default();
    let fixture = SaleFixture::deploy(&env, 1_000 * UNIT);
    let owner = &fixture.owner;

    assert_eq!(fixture.sale.reclaim_tokens(owner), 1_000 * UNIT);

    let batch = deploy_batch(&env, owner, &fixture.token.address, owner);
    fixture.token.client.approve(
        owner,
        &batch.address,
        &(600 * UNIT),
        &ALLOWANCE_EXPIRATION_LEDGER,
    );

    let a = Address::generate(&env);
    let b = Address::generate(&env);
    let c = Address::generate(&env);

    // 700 exceeds the 600 allowance: nothing moves
    assert_eq!(
        batch.try_transfer_from_batch(
            owner,
            &vec![&env, a.clone(), b.clone()],
            &vec![&env, 300 * UNIT, 400 * UNIT]
        ),
        Err(Ok(Error::TransferFailed))
    );
    assert_balance!(fixture.token, a, 0);

    let count = batch.transfer_from_batch(
        owner,
        &vec![&env, a.clone(), b.clone(), c.clone()],
        &vec![&env, 100 * UNIT, 200 * UNIT, 300 * UNIT],
    );
    assert_eq!(count, 3);
    assert_balance!(fixture.token, a, 100 * UNIT);
    assert_balance!(fixture.token, b, 200 * UNIT);
    assert_balance!(fixture.token, c, 300 * UNIT);
    assert_balance!(fixture.token, *owner, 400 * UNIT);
}
