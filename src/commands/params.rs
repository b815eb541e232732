//! Parameter store commands

use anyhow::{Context, Result};
use clap::Args;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::store::{decode_records, ParameterStore};

/// Arguments for the set command
#[derive(Debug, Args)]
pub struct SetArgs {
    /// Parameter name (case-insensitive)
    pub parameter: String,

    /// New value, taken literally
    #[arg(allow_hyphen_values = true)]
    pub value: String,
}

/// Arguments for the export command
#[derive(Debug, Args)]
pub struct ExportArgs {
    /// Snapshot file to write
    pub file: PathBuf,
}

/// Arguments for the import command
#[derive(Debug, Args)]
pub struct ImportArgs {
    /// Snapshot file to read
    pub file: PathBuf,
}

pub fn set(store_path: &Path, args: &SetArgs) -> Result<()> {
    let store = ParameterStore::open(store_path)?;
    store.set_parameter(&args.parameter, &args.value)?;
    log::info!("store fingerprint {}", store.fingerprint()?);
    Ok(())
}

pub fn show(store_path: &Path) -> Result<()> {
    let store = ParameterStore::open_existing(store_path)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    for parameter in store.parameters()? {
        serde_json::to_writer(&mut out, &parameter).context("Failed to encode parameter")?;
        writeln!(out).context("Failed to write to stdout")?;
    }

    log::info!("store fingerprint {}", store.fingerprint()?);
    Ok(())
}

pub fn delete(store_path: &Path) -> Result<()> {
    ParameterStore::delete(store_path)?;
    log::info!("deleted parameter store {}", store_path.display());
    Ok(())
}

pub fn export(store_path: &Path, args: &ExportArgs) -> Result<()> {
    let store = ParameterStore::open_existing(store_path)?;
    let bytes = store.export_records()?;
    fs::write(&args.file, &bytes)
        .context(format!("Failed to write snapshot: {}", args.file.display()))?;

    log::info!("exported {} bytes to {}", bytes.len(), args.file.display());
    Ok(())
}

pub fn import(store_path: &Path, args: &ImportArgs) -> Result<()> {
    let bytes = fs::read(&args.file)
        .context(format!("Failed to read snapshot: {}", args.file.display()))?;
    let parameters = decode_records(&bytes)
        .context(format!("Failed to decode snapshot: {}", args.file.display()))?;

    let mut store = ParameterStore::open(store_path)?;
    store.replace_all(&parameters)?;
    log::info!("store fingerprint {}", store.fingerprint()?);
    Ok(())
}
