use derive_getters::Getters;
use derive_new::new;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::MoverRecord;

#[derive(Debug, Deserialize, Getters, new)]
#[serde(rename_all = "camelCase")]
pub struct IexQuoteDto {
    symbol: String,
    company_name: String,
    latest_price: Decimal,
    previous_close: Decimal,
    change_percent: Decimal,
    ytd_change: Decimal,
}

impl From<IexQuoteDto> for MoverRecord {
    fn from(dto: IexQuoteDto) -> Self {
        MoverRecord::new(
            dto.symbol,
            dto.company_name,
            dto.latest_price,
            dto.previous_close,
            dto.change_percent,
            dto.ytd_change,
        )
    }
}
