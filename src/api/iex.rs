use anyhow::Result;
use reqwest::Client;

use crate::{
    api::{
        iex_dto::IexQuoteDto,
        utils::{make_request, parse_response_array},
    },
    models::{MoverRecord, MoverSet},
};

const BASE_URL: &str = "https://cloud.iexapis.com/stable";

#[derive(Clone, Debug)]
pub struct IexApi {
    client: Client,
    api_key: String,
    base_url: String,
}

impl IexApi {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, BASE_URL.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url,
        }
    }

    /// Fetches one of the market list rankings, e.g. "gainers" or "losers".
    pub async fn list(&self, kind: &str) -> Result<Vec<MoverRecord>> {
        let endpoint = format!("stock/market/list/{}", kind);
        let params = format!("token={}", self.api_key);
        let res = make_request(&self.client, &self.base_url, &endpoint, &params).await?;

        let quotes = parse_response_array::<IexQuoteDto>(res)?;

        Ok(quotes.into_iter().map(MoverRecord::from).collect())
    }

    /// Fetches gainers and losers concurrently and joins them into one set.
    /// Either list failing fails the whole call; no partial set is returned.
    pub async fn top_movers(&self) -> Result<MoverSet> {
        let (gainers, losers) = tokio::try_join!(self.list("gainers"), self.list("losers"))?;

        Ok(MoverSet::new(gainers, losers))
    }
}
