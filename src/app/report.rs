use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::models::{MoverRecord, MoverSet};

/// Renders the mover set into the HTML report sent as the email body.
/// Pure and infallible; empty lists render as tables with an empty body.
pub fn render(movers: &MoverSet) -> String {
    let gainer_table = movers_table(movers.gainers());
    let loser_table = movers_table(movers.losers());

    format!(
        r#"<html>
  <head>
    <style>
      table, th, td {{
        border: 1px solid black;
        border-collapse: collapse;
        padding: 3px;
      }}
    </style>
  </head>
  <body>
    <h1>Today's Biggest Stock Movers</h1>
    <h2>Gainers</h2>
    <div>{}</div>
    <h2>Losers</h2>
    <div>{}</div>
  </body>
</html>"#,
        gainer_table, loser_table
    )
}

/// Biggest movers first: rows ordered by descending |change_percent|.
/// The sort is stable, so equal magnitudes keep provider order.
fn movers_table(records: &[MoverRecord]) -> String {
    let mut sorted: Vec<&MoverRecord> = records.iter().collect();
    sorted.sort_by(|a, b| {
        b.change_percent()
            .abs()
            .cmp(&a.change_percent().abs())
    });

    let rows = sorted
        .iter()
        .map(|record| {
            format!(
                "<tr>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n  <td>{}</td>\n</tr>",
                fmt_percent(record.change_percent()),
                record.symbol(),
                record.company_name(),
                record.latest_price(),
                record.previous_close(),
                fmt_rounded(record.ytd_change()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "<table>\n  <thead>\n    <tr>\n      <th>% Change</th>\n      <th>Symbol</th>\n      <th>Company</th>\n      <th>Close</th>\n      <th>Previous Close</th>\n      <th>YTD Change</th>\n    </tr>\n  </thead>\n  <tbody>\n{}\n  </tbody>\n</table>",
        rows
    )
}

/// Fraction to percent, rounded to two decimals (0.05678 -> "5.68").
fn fmt_percent(change: &Decimal) -> String {
    fmt_rounded(&(change * Decimal::ONE_HUNDRED))
}

/// Rounded to two decimals with NO percent scaling. The upstream feed's
/// YTD figure is rendered this way on purpose, even though it leaves the
/// value unscaled relative to the % Change column.
///
/// Halves round toward positive infinity: -5.675 renders as -5.67.
fn fmt_rounded(value: &Decimal) -> String {
    let rounded =
        (value + dec!(0.005)).round_dp_with_strategy(2, RoundingStrategy::ToNegativeInfinity);
    format!("{:.2}", rounded)
}
