use std::{fs, path::PathBuf};

use crate::{core::record::PriceRecord, prelude::*};

/// Storage for the most recently fetched day.
pub trait CacheStorage {
    /// Load the stored record, if any.
    fn load(&self) -> Result<Option<PriceRecord>>;

    /// Replace the stored record.
    fn store(&self, record: &PriceRecord) -> Result;
}

/// JSON file on the local disk.
pub struct FileCache {
    path: PathBuf,
}

impl FileCache {
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }
}

impl CacheStorage for FileCache {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn load(&self) -> Result<Option<PriceRecord>> {
        if !self.path.is_file() {
            debug!("no cache yet");
            return Ok(None);
        }
        let contents = fs::read(&self.path)
            .with_context(|| format!("failed to read `{}`", self.path.display()))?;
        match serde_json::from_slice::<PriceRecord>(&contents) {
            Ok(record) => {
                debug!(date = %record.date, n_prices = record.hourly_prices.len(), "loaded");
                Ok(Some(record))
            }
            Err(error) => {
                warn!("ignoring the corrupted cache: {error:#}");
                Ok(None)
            }
        }
    }

    #[instrument(skip_all, fields(path = %self.path.display(), date = %record.date))]
    fn store(&self, record: &PriceRecord) -> Result {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create `{}`", parent.display()))?;
        }
        fs::write(&self.path, serde_json::to_vec(record)?)
            .with_context(|| format!("failed to write `{}`", self.path.display()))?;
        debug!("stored");
        Ok(())
    }
}

#[cfg(test)]
#[derive(Default)]
pub struct MemoryCache(pub std::cell::RefCell<Option<PriceRecord>>);

#[cfg(test)]
impl MemoryCache {
    pub fn with(record: PriceRecord) -> Self {
        Self(std::cell::RefCell::new(Some(record)))
    }
}

#[cfg(test)]
impl CacheStorage for MemoryCache {
    fn load(&self) -> Result<Option<PriceRecord>> {
        Ok(self.0.borrow().clone())
    }

    fn store(&self, record: &PriceRecord) -> Result {
        *self.0.borrow_mut() = Some(record.clone());
        Ok(())
    }
}
