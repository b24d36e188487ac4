//! Custom assertions for cross-contract accounting checks

/// Assert a token balance, naming the holder on failure
#[macro_export]
macro_rules! assert_balance {
    ($asset:expr, $holder:expr, $expected:expr) => {
        assert_eq!(
            $asset.balance(&$holder),
            $expected,
            "unexpected balance for {}",
            stringify!($holder)
        );
    };
}

/// Assert the sale aggregates match the ledger: tokens sold plus the sale's
/// remaining balance plus everything reclaimed equals the initial supply, and
/// the wallet holds exactly the value collected
#[macro_export]
macro_rules! assert_sale_conserved {
    ($fixture:expr, $supply:expr, $reclaimed:expr) => {{
        let sold = $fixture.sale.get_total_tokens_sold();
        let remaining = $fixture.token.balance(&$fixture.sale.address);
        assert_eq!(sold + remaining + $reclaimed, $supply, "token supply not conserved");
        assert_eq!(
            $fixture.payment.balance(&$fixture.wallet),
            $fixture.sale.get_total_value_collected(),
            "wallet does not match value collected"
        );
    }};
}
