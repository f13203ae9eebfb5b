// src/presentation.rs
use std::fmt::Write as _;

use ngstore_domain::{DirectoryDescriptor, EntryDescriptor};
use ngstore_shared_kernel::Result;
use serde::Serialize;

use crate::config::OutputFormat;

#[derive(Debug, Serialize)]
struct DirectoryView<'a> {
    path: String,
    parent_path: &'a str,
    directory_name: &'a str,
    entries: Vec<EntryView<'a>>,
}

#[derive(Debug, Serialize)]
struct EntryView<'a> {
    name: String,
    base_name: &'a str,
    extension: &'a str,
    #[serde(rename = "type")]
    entry_type: u32,
    kind: String,
    path: String,
}

impl<'a> DirectoryView<'a> {
    fn new(dir: &'a DirectoryDescriptor) -> Self {
        let entries = dir
            .entries()
            .iter()
            .zip(dir.entry_paths())
            .map(|(entry, path)| EntryView::new(entry, path))
            .collect();
        Self {
            path: dir.path(),
            parent_path: dir.parent_path(),
            directory_name: dir.directory_name(),
            entries,
        }
    }
}

impl<'a> EntryView<'a> {
    fn new(entry: &'a EntryDescriptor, path: String) -> Self {
        Self {
            name: entry.full_name(),
            base_name: entry.base_name(),
            extension: entry.extension(),
            entry_type: entry.entry_type().bits(),
            kind: entry.entry_type().to_string(),
            path,
        }
    }
}

/// Renders a snapshot in the requested format. Every format ends with a newline.
pub fn render(dir: &DirectoryDescriptor, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(dir)),
        OutputFormat::Json => {
            let mut out = serde_json::to_string_pretty(&DirectoryView::new(dir))?;
            out.push('\n');
            Ok(out)
        }
        #[cfg(feature = "yaml")]
        OutputFormat::Yaml => Ok(serde_yaml::to_string(&DirectoryView::new(dir))?),
    }
}

fn render_text(dir: &DirectoryDescriptor) -> String {
    let mut out = String::new();
    let noun = if dir.len() == 1 { "entry" } else { "entries" };
    let _ = writeln!(out, "{} ({} {noun})", dir.path(), dir.len());
    for entry in dir.entries() {
        let _ = writeln!(out, "{:<10} {}", entry.entry_type().to_string(), entry.full_name());
    }
    out
}
