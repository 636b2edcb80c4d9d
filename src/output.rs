// src/output.rs
//! Delivery of created nodes.
//!
//! This module is the only place where file I/O happens.

use crate::error::AppError;
use crate::host::MemoryNodeStore;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Where the node dump goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryTarget {
    WriteFile { path: PathBuf },
    PrintToStdout,
}

impl DeliveryTarget {
    pub fn from_output(output: Option<&Path>) -> Self {
        match output {
            Some(path) => Self::WriteFile {
                path: path.to_path_buf(),
            },
            None => Self::PrintToStdout,
        }
    }
}

/// Writes every node in `store` as a pretty JSON array. Returns bytes written.
pub fn deliver_nodes(store: &MemoryNodeStore, target: &DeliveryTarget) -> Result<usize, AppError> {
    let mut content = serde_json::to_string_pretty(&store.nodes())?;
    content.push('\n');

    match target {
        DeliveryTarget::WriteFile { path } => write_file(path, &content),
        DeliveryTarget::PrintToStdout => {
            print_to_stdout(&content)?;
            Ok(content.len())
        }
    }
}

/// Writes content to a file, creating parent directories.
fn write_file(path: &Path, content: &str) -> Result<usize, AppError> {
    log::debug!("Writing {} bytes to {}", content.len(), path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    fs::write(path, content)?;

    log::info!("Wrote file: {}", path.display());
    Ok(content.len())
}

fn print_to_stdout(content: &str) -> Result<(), AppError> {
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(content.as_bytes())?;
    stdout.flush()?;
    Ok(())
}
