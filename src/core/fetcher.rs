use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::{
    api::PriceProvider,
    core::{cache::CacheStorage, record::PriceRecord},
    prelude::*,
    quantity::KilowattHourRate,
};

/// Serves the prices from the cache and refreshes it once per day.
#[derive(bon::Builder)]
pub struct PriceFetcher<P, C> {
    provider: P,
    cache: C,
}

impl<P: PriceProvider, C: CacheStorage> PriceFetcher<P, C> {
    /// Get today's record, fetching it only when the cache is missing or belongs to another day.
    #[instrument(skip_all, fields(today = %today))]
    pub fn ensure_cache_fresh(&self, today: NaiveDate) -> Result<PriceRecord> {
        if let Some(record) = self.cache.load()?
            && record.is_fresh_on(today)
        {
            debug!("the cache is fresh");
            return Ok(record);
        }
        info!("the cache is missing or stale");
        self.fetch_remote_prices(today)
    }

    /// Fetch the prices and overwrite the cache with them.
    #[instrument(skip_all, fields(on = %on))]
    pub fn fetch_remote_prices(&self, on: NaiveDate) -> Result<PriceRecord> {
        let record = self.provider.get_prices(on)?;
        self.cache.store(&record)?;
        Ok(record)
    }

    pub fn read_current_price(&self, now: NaiveDateTime) -> Result<KilowattHourRate> {
        let price = self.ensure_cache_fresh(now.date())?.price_at(now.hour())?;
        info!(hour = now.hour(), ?price);
        Ok(price)
    }

    /// Today's prices go through the cache, other days are fetched without touching it.
    pub fn prices_on(&self, on: NaiveDate, today: NaiveDate) -> Result<PriceRecord> {
        if on == today { self.ensure_cache_fresh(today) } else { self.provider.get_prices(on) }
    }
}
