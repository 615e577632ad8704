use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;

/// One stock's snapshot for the current session. `change_percent` and
/// `ytd_change` are signed fractions (0.0534 = +5.34%).
#[derive(Clone, Debug, Getters, new)]
pub struct MoverRecord {
    symbol: String,
    company_name: String,
    latest_price: Decimal,
    previous_close: Decimal,
    change_percent: Decimal,
    ytd_change: Decimal,
}

/// The day's gainers and losers in provider order. The two lists are not
/// deduplicated or checked against each other.
#[derive(Clone, Debug, Getters, new)]
pub struct MoverSet {
    gainers: Vec<MoverRecord>,
    losers: Vec<MoverRecord>,
}
