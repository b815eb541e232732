mod records;

#[cfg(test)]
mod tests;

pub use records::{decode_records, encode_records};

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::config::{canonical_name, validate_value, ConfigError, TokenizerConfig, STORE_DEFAULTS};

/// One persisted tokenizer parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    #[serde(rename = "parameter")]
    pub name: String,
    pub value: String,
    pub updated_at: String,
}

/// SQLite-backed store for tokenizer parameters
pub struct ParameterStore {
    conn: Connection,
}

impl ParameterStore {
    /// Create a new in-memory store seeded with the store defaults
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to create in-memory parameter store")?;
        let store = Self { conn };
        store.init_schema()?;
        store.seed_defaults()?;
        Ok(store)
    }

    /// Open a store file, creating and seeding it when it does not exist yet
    ///
    /// An existing store keeps exactly the parameters it holds.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let created = !path.exists();
        let conn = Connection::open(path)
            .context(format!("Failed to open parameter store at {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        if created {
            store.seed_defaults()?;
            log::info!("created parameter store {}", path.display());
        }
        Ok(store)
    }

    /// Open a store that must already exist; nothing is created or seeded
    pub fn open_existing(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingStore(path.display().to_string()).into());
        }

        let conn = Connection::open_with_flags(
            path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )
        .context(format!("Failed to open parameter store at {}", path.display()))?;
        let store = Self { conn };
        store.init_schema()?;
        Ok(store)
    }

    /// Remove a store file
    pub fn delete(path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if !path.is_file() {
            return Err(ConfigError::MissingStore(path.display().to_string()).into());
        }
        fs::remove_file(path).context(format!("Failed to delete parameter store {}", path.display()))?;
        Ok(())
    }

    /// Initialize database schema
    fn init_schema(&self) -> Result<()> {
        self.conn
            .execute_batch(
                r#"
                CREATE TABLE IF NOT EXISTS parameters (
                    name TEXT PRIMARY KEY,
                    value TEXT NOT NULL,
                    updated_at TEXT NOT NULL
                );
                "#,
            )
            .context("Failed to initialize parameter store schema")?;
        Ok(())
    }

    /// Insert the store defaults for any parameter not yet present
    fn seed_defaults(&self) -> Result<()> {
        let now = Utc::now().to_rfc3339();
        for (name, value) in STORE_DEFAULTS {
            self.conn
                .execute(
                    "INSERT OR IGNORE INTO parameters (name, value, updated_at) VALUES (?1, ?2, ?3)",
                    params![name, value, now],
                )
                .context(format!("Failed to seed default for parameter: {}", name))?;
        }
        Ok(())
    }

    /// Set one parameter; the name is matched case-insensitively
    pub fn set_parameter(&self, name: &str, value: &str) -> Result<()> {
        let name = canonical_name(name)?;
        validate_value(name, value)?;

        self.conn
            .execute(
                "INSERT OR REPLACE INTO parameters (name, value, updated_at) VALUES (?1, ?2, ?3)",
                params![name, value, Utc::now().to_rfc3339()],
            )
            .context(format!("Failed to set parameter: {}", name))?;

        log::info!("parameter {} updated", name);
        Ok(())
    }

    /// Get all parameters ordered by name
    pub fn parameters(&self) -> Result<Vec<Parameter>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name, value, updated_at FROM parameters ORDER BY name")
            .context("Failed to prepare statement")?;

        let parameters = stmt
            .query_map([], |row| {
                Ok(Parameter {
                    name: row.get(0)?,
                    value: row.get(1)?,
                    updated_at: row.get(2)?,
                })
            })
            .context("Failed to query parameters")?
            .collect::<Result<Vec<_>, _>>()
            .context("Failed to collect parameters")?;

        Ok(parameters)
    }

    /// Get one parameter value
    pub fn get_parameter(&self, name: &str) -> Result<Option<String>> {
        let name = canonical_name(name)?;
        self.conn
            .query_row(
                "SELECT value FROM parameters WHERE name = ?1",
                params![name],
                |row| row.get(0),
            )
            .optional()
            .context(format!("Failed to query parameter: {}", name))
    }

    pub fn parameter_map(&self) -> Result<BTreeMap<String, String>> {
        Ok(self
            .parameters()?
            .into_iter()
            .map(|p| (p.name, p.value))
            .collect())
    }

    /// Replace every stored parameter in one transaction
    pub fn replace_all(&mut self, parameters: &BTreeMap<String, String>) -> Result<()> {
        let mut validated = Vec::with_capacity(parameters.len());
        for (name, value) in parameters {
            let canonical = canonical_name(name)?;
            validate_value(canonical, value)?;
            validated.push((canonical, value));
        }

        let now = Utc::now().to_rfc3339();
        let tx = self
            .conn
            .transaction()
            .context("Failed to start transaction")?;
        tx.execute("DELETE FROM parameters", [])
            .context("Failed to clear parameters")?;
        for (name, value) in &validated {
            tx.execute(
                "INSERT OR REPLACE INTO parameters (name, value, updated_at) VALUES (?1, ?2, ?3)",
                params![name, value, now],
            )
            .context(format!("Failed to insert parameter: {}", name))?;
        }
        tx.commit().context("Failed to commit parameters")?;

        log::info!("replaced parameter store with {} parameters", parameters.len());
        Ok(())
    }

    /// Encode the current parameters as a snapshot record file
    pub fn export_records(&self) -> Result<Vec<u8>> {
        Ok(encode_records(&self.parameter_map()?)?)
    }

    /// SHA-256 of the encoded snapshot, hex encoded
    pub fn fingerprint(&self) -> Result<String> {
        let mut hasher = Sha256::new();
        hasher.update(self.export_records()?);
        Ok(hex::encode(hasher.finalize()))
    }

    /// Build the tokenizer configuration snapshot from the stored parameters
    pub fn load_config(&self) -> Result<TokenizerConfig> {
        let parameters = self.parameter_map()?;
        let config = TokenizerConfig::from_parameters(&parameters)
            .context("Invalid tokenizer configuration in parameter store")?;

        log::info!(
            "loaded tokenizer configuration: {} major / {} minor separators, {} stop words, length {}..={}",
            config.major_separators().as_bytes().len(),
            config.minor_separators().as_bytes().len(),
            config.stop_word_count(),
            config.min_length(),
            config.max_length()
        );
        Ok(config)
    }
}
