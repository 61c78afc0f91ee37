use thiserror::Error;

use crate::model::{CatalogError, RoundError, SettingsError};

#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
    #[error(transparent)]
    Round(#[from] RoundError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
}
