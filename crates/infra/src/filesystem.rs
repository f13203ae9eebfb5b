// crates/infra/src/filesystem.rs
use std::{
    fs::{self, DirEntry, FileType},
    io::{self, ErrorKind},
    path::Path,
};

use globset::{Glob, GlobSet, GlobSetBuilder};
use log::{debug, warn};
use ngstore_domain::{DirectoryDescriptor, EntryDescriptor, value_objects::EntryType};
use ngstore_ports::directory::{DirectoryListingDto, DirectoryQuery, QueryOptions};
use ngstore_shared_kernel::{
    DomainError, InfrastructureError, Result,
    path::{split_file_name, split_parent, strip_trailing_separator},
};

/// Filesystem adapter implementing the `DirectoryQuery` port for one local directory level.
#[derive(Debug, Default)]
pub struct LocalDirectoryQuery;

impl LocalDirectoryQuery {
    pub fn new() -> Self {
        Self
    }

    pub fn list(path: &Path, options: &QueryOptions) -> Result<DirectoryDescriptor> {
        list_directory(path, options)
    }
}

impl DirectoryQuery for LocalDirectoryQuery {
    fn query(&self, path: &Path, options: &QueryOptions) -> Result<DirectoryListingDto> {
        Self::list(path, options).map(DirectoryListingDto::from)
    }
}

fn list_directory(path: &Path, options: &QueryOptions) -> Result<DirectoryDescriptor> {
    let raw = path.to_str().ok_or_else(|| InfrastructureError::DirectoryRead {
        path: path.to_path_buf(),
        source: io::Error::new(ErrorKind::InvalidInput, "path is not valid UTF-8"),
    })?;
    let cleaned = strip_trailing_separator(raw);
    let cleaned_path = Path::new(cleaned);
    let excludes = ExcludeMatcher::new(&options.exclude_patterns)?;

    let read_dir = fs::read_dir(cleaned_path).map_err(|source| InfrastructureError::DirectoryRead {
        path: cleaned_path.to_path_buf(),
        source,
    })?;

    let mut entries = Vec::new();
    for item in read_dir {
        let item = item.map_err(|source| InfrastructureError::DirectoryRead {
            path: cleaned_path.to_path_buf(),
            source,
        })?;

        let os_name = item.file_name();
        let Some(name) = os_name.to_str() else {
            warn!("skipping entry with a non UTF-8 name in '{cleaned}': {}", os_name.to_string_lossy());
            continue;
        };
        if name == "." || name == ".." {
            continue;
        }
        if !options.include_hidden && name.starts_with('.') {
            continue;
        }
        if excludes.is_excluded(name) {
            debug!("excluded '{name}' in '{cleaned}'");
            continue;
        }

        let entry_type = classify(&item, options.follow_links)?;
        let (base_name, extension) = split_file_name(name);
        entries.push(EntryDescriptor::new(base_name, extension, entry_type));
    }

    let (parent_path, directory_name) = split_parent(cleaned);
    debug!("listed {} entries in '{cleaned}'", entries.len());

    Ok(DirectoryDescriptor::builder(parent_path, directory_name)
        .entries(entries)
        .order(options.order)
        .build())
}

fn classify(item: &DirEntry, follow_links: bool) -> Result<EntryType> {
    let entry_path = item.path();
    let own_type = item.file_type().map_err(|source| InfrastructureError::EntryMetadata {
        path: entry_path.clone(),
        source,
    })?;
    resolve_type(&entry_path, own_type, follow_links, || {
        fs::metadata(&entry_path).map(|metadata| metadata.file_type())
    })
}

/// `own_type` is the entry as read from the directory; `target` stats through links.
fn resolve_type(
    entry_path: &Path,
    own_type: FileType,
    follow_links: bool,
    target: impl FnOnce() -> io::Result<FileType>,
) -> Result<EntryType> {
    let file_type = if follow_links {
        match target() {
            Ok(file_type) => file_type,
            Err(err) if err.kind() == ErrorKind::NotFound && own_type.is_symlink() => {
                warn!("'{}' is a dangling link", entry_path.display());
                return Ok(EntryType::UNKNOWN);
            }
            Err(source) => {
                return Err(InfrastructureError::EntryMetadata {
                    path: entry_path.to_path_buf(),
                    source,
                }
                .into());
            }
        }
    } else {
        own_type
    };

    Ok(if file_type.is_dir() {
        EntryType::DIRECTORY
    } else if file_type.is_file() {
        EntryType::FILE
    } else {
        EntryType::UNKNOWN
    })
}

/// Exclude globs matched against an entry's full name.
struct ExcludeMatcher {
    set: Option<GlobSet>,
}

impl ExcludeMatcher {
    fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self { set: None });
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|err| DomainError::InvalidPattern {
                pattern: pattern.clone(),
                details: err.to_string(),
                source: Some(Box::new(err)),
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|err| DomainError::InvalidPattern {
            pattern: patterns.join(","),
            details: err.to_string(),
            source: Some(Box::new(err)),
        })?;
        Ok(Self { set: Some(set) })
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.set.as_ref().is_some_and(|set| set.is_match(name))
    }
}
