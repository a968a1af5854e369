use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown stop: {0}")]
    UnknownStop(String),
    #[error("Routing graph has already been built")]
    GraphAlreadyBuilt,
    #[error("Routing graph has not been built")]
    GraphNotBuilt,
    #[error("Catalogue is frozen once the routing graph is built")]
    CatalogueFrozen,
    #[error("Invalid routing settings: {0}")]
    InvalidSettings(String),
    #[error("Malformed document: {0}")]
    Json(#[from] serde_json::Error),
}
