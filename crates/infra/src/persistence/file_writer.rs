// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use ngstore_shared_kernel::{InfraResult, InfrastructureError};

/// Writes rendered snapshots to disk.
pub struct SnapshotWriter;

impl SnapshotWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    /// Best-effort fsync is attempted where available to reduce corruption on crash.
    pub fn write_atomic<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        // PID + nanos keeps the name unique without a retry loop.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        let tmp = parent.join(format!(".{}.{}.tmp", std::process::id(), nanos));

        let write_err = |source: std::io::Error| InfrastructureError::OutputError {
            message: format!("failed to write snapshot to '{}'", path.display()),
            source: Some(Box::new(source)),
        };

        let result = (|| {
            let file = File::create(&tmp)?;
            let mut w = BufWriter::new(file);
            w.write_all(data)?;
            w.flush()?;
            let _ = w.get_ref().sync_all();
            fs::rename(&tmp, path)
        })();
        if let Err(source) = result {
            let _ = fs::remove_file(&tmp);
            return Err(write_err(source));
        }

        #[cfg(unix)]
        {
            if let Ok(dir) = File::open(parent) {
                let _ = dir.sync_all();
            }
        }

        debug!("wrote {} bytes to '{}'", data.len(), path.display());
        Ok(())
    }
}
