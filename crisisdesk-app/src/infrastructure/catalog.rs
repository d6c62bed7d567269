//! Persona and platform catalogs.
//!
//! Reads optional JSON files (`CRISISDESK_PERSONAS` / `CRISISDESK_PLATFORMS`
//! env paths, defaulting to `config/personas.json` and
//! `config/platforms.json`). The app must start without any config files, so
//! every load failure falls back to the compiled-in catalogs.

use crate::domain::{Persona, Platform};
use serde::de::DeserializeOwned;
use std::collections::HashSet;
use std::path::Path;

const PERSONAS_ENV: &str = "CRISISDESK_PERSONAS";
const PLATFORMS_ENV: &str = "CRISISDESK_PLATFORMS";
const PERSONAS_PATH: &str = "config/personas.json";
const PLATFORMS_PATH: &str = "config/platforms.json";

pub struct Catalog {
    personas: Vec<Persona>,
    platforms: Vec<Platform>,
}

impl Catalog {
    /// Catalogs from config files where present, fallbacks otherwise.
    pub fn load() -> Self {
        let fallback = Self::fallback();

        let personas = load_entries(PERSONAS_ENV, PERSONAS_PATH, |p: &Persona| &p.id)
            .unwrap_or(fallback.personas);
        let platforms = load_entries(PLATFORMS_ENV, PLATFORMS_PATH, |p: &Platform| &p.id)
            .unwrap_or(fallback.platforms);

        Self {
            personas,
            platforms,
        }
    }

    pub fn fallback() -> Self {
        Self {
            personas: vec![
                Persona::new(
                    "restaurant-chain",
                    "Restaurant Chain",
                    "Corporate but warm; apologizes sincerely, offers concrete make-goods like refunds or replacement meals",
                ),
                Persona::new(
                    "luxury-fashion",
                    "Luxury Fashion Brand",
                    "Reserved and exclusive; impeccably polite, never casual, protects the brand's prestige in every word",
                ),
                Persona::new(
                    "tech-saas",
                    "Tech / SaaS Company",
                    "Solution-oriented and technical; acknowledges the issue, names the root cause plainly, points to a fix or workaround",
                ),
                Persona::new(
                    "airline",
                    "Airline",
                    "Authoritative and reassuring; references safety and procedure, de-escalates firmly without admitting fault prematurely",
                ),
            ],
            platforms: vec![
                Platform::new(
                    "x",
                    "X (Twitter)",
                    "Short, direct, first-person; invite the customer to DM for details",
                    280,
                ),
                Platform::new(
                    "instagram",
                    "Instagram",
                    "Warm and personable; a touch more emotive, emojis acceptable in moderation",
                    2200,
                ),
                Platform::new(
                    "facebook",
                    "Facebook",
                    "Conversational and complete; room for a fuller explanation and next steps",
                    5000,
                ),
                Platform::new(
                    "google-reviews",
                    "Google Reviews",
                    "Formal and apologetic; address the reviewer by situation, state corrective action taken",
                    4096,
                ),
            ],
        }
    }

    pub fn personas(&self) -> &[Persona] {
        &self.personas
    }

    pub fn platforms(&self) -> &[Platform] {
        &self.platforms
    }

    pub fn persona(&self, id: &str) -> Option<&Persona> {
        self.personas.iter().find(|p| p.id == id)
    }

    pub fn platform(&self, id: &str) -> Option<&Platform> {
        self.platforms.iter().find(|p| p.id == id)
    }
}

/// Loads one catalog file. `None` means "use the fallback".
fn load_entries<T, F>(env_var: &str, default_path: &str, id_of: F) -> Option<Vec<T>>
where
    T: DeserializeOwned,
    F: Fn(&T) -> &str,
{
    let path = std::env::var(env_var).unwrap_or_else(|_| default_path.to_string());
    if !Path::new(&path).exists() {
        tracing::debug!("Catalog file {} not present, using fallback", path);
        return None;
    }

    let raw = match std::fs::read_to_string(&path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!("Failed to read catalog file {}: {}", path, e);
            return None;
        }
    };

    match parse_entries(&raw, id_of) {
        Ok(entries) => {
            tracing::info!("Loaded {} catalog entries from {}", entries.len(), path);
            Some(entries)
        }
        Err(e) => {
            tracing::warn!("Ignoring catalog file {}: {}", path, e);
            None
        }
    }
}

fn parse_entries<T, F>(raw: &str, id_of: F) -> Result<Vec<T>, String>
where
    T: DeserializeOwned,
    F: Fn(&T) -> &str,
{
    let entries: Vec<T> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if entries.is_empty() {
        return Err("catalog file is empty".to_string());
    }

    let mut seen = HashSet::new();
    for entry in &entries {
        if !seen.insert(id_of(entry).to_string()) {
            return Err(format!("duplicate catalog id: {}", id_of(entry)));
        }
    }

    Ok(entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_catalogs_have_unique_ids() {
        let catalog = Catalog::fallback();
        let persona_ids: HashSet<_> = catalog.personas().iter().map(|p| &p.id).collect();
        let platform_ids: HashSet<_> = catalog.platforms().iter().map(|p| &p.id).collect();
        assert_eq!(persona_ids.len(), catalog.personas().len());
        assert_eq!(platform_ids.len(), catalog.platforms().len());
    }

    #[test]
    fn parse_accepts_well_formed_personas() {
        let raw = r#"[
            {"id": "bank", "label": "Retail Bank", "description": "Precise and trustworthy"},
            {"id": "telco", "label": "Telco", "description": "Patient and procedural"}
        ]"#;
        let entries: Vec<Persona> = parse_entries(raw, |p: &Persona| &p.id).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].label, "Retail Bank");
    }

    #[test]
    fn parse_rejects_duplicate_ids() {
        let raw = r#"[
            {"id": "bank", "label": "A", "description": "x"},
            {"id": "bank", "label": "B", "description": "y"}
        ]"#;
        let err = parse_entries(raw, |p: &Persona| &p.id).unwrap_err();
        assert!(err.contains("duplicate"));
    }

    #[test]
    fn parse_rejects_malformed_json() {
        assert!(parse_entries("not json", |p: &Persona| &p.id).is_err());
        assert!(parse_entries("[]", |p: &Persona| &p.id).is_err());
    }

    #[test]
    fn lookup_by_id() {
        let catalog = Catalog::fallback();
        assert!(catalog.persona("airline").is_some());
        assert!(catalog.persona("nonexistent").is_none());
        assert_eq!(catalog.platform("x").unwrap().char_limit, 280);
    }
}
