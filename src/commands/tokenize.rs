//! Tokenize command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::rows::{JsonLinesReader, JsonLinesWriter, RowLayout, TokenizeFunction};
use crate::store::ParameterStore;

/// Arguments for the tokenize command
#[derive(Debug, Args)]
pub struct TokenizeArgs {
    /// Input file with one JSON array per line (default: stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Index of the text column; later columns are passed through
    #[arg(long, default_value_t = 0)]
    pub text_column: usize,

    /// Declared row width (default: width of the first row)
    #[arg(long)]
    pub columns: Option<usize>,

    /// Add a "minor"/"major" column after each token
    #[arg(long)]
    pub with_kind: bool,
}

impl TokenizeArgs {
    /// Execute the tokenize command
    pub fn execute(&self, store_path: &Path) -> Result<()> {
        // configuration problems abort before any row is read
        let store = ParameterStore::open_existing(store_path)?;
        let config = store.load_config()?;
        log::info!("store fingerprint {}", store.fingerprint()?);

        let mut rows = JsonLinesReader::new(self.open_input()?).peekable();
        let width = match (self.columns, rows.peek()) {
            (Some(width), _) => width,
            (None, Some(Ok(first))) => first.len(),
            // empty input, or the first line is bad and will be reported below
            (None, _) => self.text_column + 1,
        };
        let layout = RowLayout::new(self.text_column, width)?;
        log::debug!(
            "row layout: text column {}, {} pass-through columns",
            layout.text_column(),
            layout.passthrough_count()
        );

        let function = TokenizeFunction::new(config, layout);
        let mut sink = JsonLinesWriter::new(self.open_output()?, self.with_kind);
        function.process_partition(rows, &mut sink)?;
        sink.flush()?;

        Ok(())
    }

    fn open_input(&self) -> Result<Box<dyn BufRead>> {
        match &self.input {
            Some(path) => {
                let file = File::open(path)
                    .context(format!("Failed to open input: {}", path.display()))?;
                Ok(Box::new(BufReader::new(file)))
            }
            None => Ok(Box::new(io::stdin().lock())),
        }
    }

    fn open_output(&self) -> Result<Box<dyn Write>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .context(format!("Failed to create output: {}", path.display()))?;
                Ok(Box::new(BufWriter::new(file)))
            }
            None => Ok(Box::new(BufWriter::new(io::stdout().lock()))),
        }
    }
}
