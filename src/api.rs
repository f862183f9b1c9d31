pub mod nrgi;

use chrono::NaiveDate;

use crate::{core::record::PriceRecord, prelude::*};

pub trait PriceProvider {
    /// Get all hourly prices on the specified day.
    fn get_prices(&self, on: NaiveDate) -> Result<PriceRecord>;
}

/// Returns a fixed record and counts the calls.
#[cfg(test)]
pub struct MockProvider {
    record: Option<PriceRecord>,
    pub n_calls: std::cell::Cell<usize>,
}

#[cfg(test)]
impl MockProvider {
    pub const fn returning(record: PriceRecord) -> Self {
        Self { record: Some(record), n_calls: std::cell::Cell::new(0) }
    }

    /// Fails on any call.
    pub const fn offline() -> Self {
        Self { record: None, n_calls: std::cell::Cell::new(0) }
    }
}

#[cfg(test)]
impl PriceProvider for MockProvider {
    fn get_prices(&self, _on: NaiveDate) -> Result<PriceRecord> {
        self.n_calls.set(self.n_calls.get() + 1);
        self.record.clone().context("no network call expected")
    }
}
