use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{prelude::*, quantity::KilowattHourRate};

/// Hourly prices of a single day, as they are stored in the cache.
#[must_use]
#[derive(Clone, Debug, Eq, PartialEq, Deserialize, Serialize)]
pub struct PriceRecord {
    pub date: NaiveDate,

    /// Index is the local hour.
    #[serde(rename = "prices")]
    pub hourly_prices: Vec<KilowattHourRate>,
}

impl PriceRecord {
    pub const fn new(date: NaiveDate, hourly_prices: Vec<KilowattHourRate>) -> Self {
        Self { date, hourly_prices }
    }

    pub fn is_fresh_on(&self, today: NaiveDate) -> bool {
        self.date == today
    }

    /// Prices are indexed by the wall-clock hour, so on a 25-hour day the hours after the repeated
    /// one are shifted by one, and on a 23-hour day the last hour has no price.
    pub fn price_at(&self, hour: u32) -> Result<KilowattHourRate> {
        usize::try_from(hour)
            .ok()
            .and_then(|index| self.hourly_prices.get(index))
            .copied()
            .with_context(|| {
                format!(
                    "no price for hour {hour} on {} (the record has {} prices)",
                    self.date,
                    self.hourly_prices.len(),
                )
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ok() -> Result {
        // language=json
        let body = r#"{"date": "2022-08-24", "prices": [10.2, 11.0, 9.8]}"#;
        let record = serde_json::from_str::<PriceRecord>(body)?;
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2022, 8, 24).context("invalid date")?);
        assert_eq!(record.price_at(1)?, KilowattHourRate::from(11.0));
        Ok(())
    }

    #[test]
    fn test_serde_keeps_inexact_prices() -> Result {
        let date = NaiveDate::from_ymd_opt(2022, 8, 24).context("invalid date")?;
        let hourly_prices = vec![
            KilowattHourRate::from(14.0 * 0.1),
            KilowattHourRate::from(19.0 * 0.1),
            KilowattHourRate::from_ore(137.0),
        ];
        let record = PriceRecord::new(date, hourly_prices);
        let read_back = serde_json::from_str::<PriceRecord>(&serde_json::to_string(&record)?)?;
        assert_eq!(read_back, record);
        Ok(())
    }

    #[test]
    fn test_is_fresh_on() -> Result {
        let today = NaiveDate::from_ymd_opt(2022, 8, 24).context("invalid date")?;
        let record = PriceRecord::new(today, vec![]);
        assert!(record.is_fresh_on(today));
        assert!(!record.is_fresh_on(today.pred_opt().context("invalid date")?));
        Ok(())
    }

    #[test]
    fn test_price_at_out_of_range() -> Result {
        let date = NaiveDate::from_ymd_opt(2022, 8, 24).context("invalid date")?;
        let record = PriceRecord::new(date, vec![KilowattHourRate::from(1.0); 23]);
        assert!(record.price_at(22).is_ok());
        assert!(record.price_at(23).is_err());
        Ok(())
    }
}
