// src/config/cache.rs

use std::sync::{Mutex, OnceLock, PoisonError};

use tracing::debug;

use super::model::ConfigModel;
use crate::errors::Result;
use crate::node::ConfigSource;

/// Holds the model once it has been built.
///
/// The first successful [`ModelCache::get_or_build`] wins; every later call
/// (from any thread) sees the same model and the source is never read again.
#[derive(Debug, Default)]
pub struct ModelCache {
    model: OnceLock<ConfigModel>,
    building: Mutex<()>,
}

impl ModelCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// The cached model, if one has been built.
    pub fn get(&self) -> Option<&ConfigModel> {
        self.model.get()
    }

    pub fn get_or_build<S: ConfigSource + ?Sized>(&self, source: &S) -> Result<&ConfigModel> {
        if let Some(model) = self.model.get() {
            return Ok(model);
        }

        // Serialise builders so a concurrent first call waits instead of
        // building a second copy.
        let _guard = self.building.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(model) = self.model.get() {
            return Ok(model);
        }

        debug!("building config model");
        let model = ConfigModel::from_source(source)?;
        Ok(self.model.get_or_init(|| model))
    }
}
