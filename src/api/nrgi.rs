//! [NRGI](https://nrgi.dk/privat/stroem/stroempriser/) price history client.

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;
use ureq::Agent;

use crate::{api::PriceProvider, core::record::PriceRecord, prelude::*, quantity::KilowattHourRate};

/// West Denmark.
///
/// TODO: add the `DK2` (East Denmark) region once there is a way to select it.
const REGION: &str = "DK1";

pub struct Api {
    client: Agent,
    url: String,
}

impl Api {
    pub fn new(url: String) -> Self {
        let client =
            Agent::config_builder().timeout_global(Some(Duration::from_secs(10))).build().into();
        Self { client, url }
    }
}

impl PriceProvider for Api {
    #[instrument(fields(on = %on), skip_all)]
    fn get_prices(&self, on: NaiveDate) -> Result<PriceRecord> {
        info!(url = %self.url, region = REGION, "fetching…");
        let response = self
            .client
            .get(&self.url)
            .query("region", REGION)
            .query("date", on.to_string())
            .call()
            .with_context(|| format!("failed to request the prices on {on}"))?
            .body_mut()
            .read_json::<Response>()
            .context("failed to deserialize the response")?;
        info!(n_prices = response.prices.len(), "fetched");
        response.into_record(on)
    }
}

#[derive(Deserialize)]
struct Response {
    prices: Vec<HourlyPrice>,
}

impl Response {
    fn into_record(self, on: NaiveDate) -> Result<PriceRecord> {
        ensure!(!self.prices.is_empty(), "NRGI has no prices on {on}");
        let hourly_prices =
            self.prices.into_iter().map(|price| KilowattHourRate::from_ore(price.including_vat));
        Ok(PriceRecord::new(on, hourly_prices.collect()))
    }
}

#[derive(Deserialize)]
struct HourlyPrice {
    /// Øre per kilowatt-hour.
    #[serde(rename = "priceInclVat")]
    including_vat: f64,
}
