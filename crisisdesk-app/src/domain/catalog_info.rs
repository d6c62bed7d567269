use super::{Persona, Platform};
use serde::{Deserialize, Serialize};

/// What the form needs before the first submit: the selectable catalogs and
/// whether the server holds an API key at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogInfo {
    pub personas: Vec<Persona>,
    pub platforms: Vec<Platform>,
    pub api_key_present: bool,
}
