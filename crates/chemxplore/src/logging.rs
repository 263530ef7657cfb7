//! Logging setup
//!
//! Native builds write to `{data_dir}/chemxplore.log` with size-based
//! rotation. Web builds log to the browser console.

#[cfg(feature = "native")]
pub use native::init_logging;

#[cfg(feature = "native")]
mod native {
    use std::fs::{self, File, OpenOptions};
    use std::io::{self, Read, Seek, SeekFrom, Write};
    use std::path::Path;
    use std::sync::{Arc, Mutex, MutexGuard};

    use tracing_subscriber::fmt::MakeWriter;
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    pub(crate) const LOG_FILE_NAME: &str = "chemxplore.log";
    /// Maximum log file size before rotation (5 MB)
    const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
    /// Size to keep after rotation (1 MB of most recent logs)
    const KEEP_SIZE: u64 = 1024 * 1024;

    /// Trim the log to its most recent `keep` bytes once it grows past `max`.
    /// The cut lands on a line boundary.
    pub(crate) fn rotate_log_if_needed(log_path: &Path, max: u64, keep: u64) -> io::Result<()> {
        if !log_path.exists() {
            return Ok(());
        }

        let metadata = fs::metadata(log_path)?;
        if metadata.len() <= max {
            return Ok(());
        }

        let mut file = File::open(log_path)?;
        file.seek(SeekFrom::Start(metadata.len().saturating_sub(keep)))?;
        let mut buffer = Vec::new();
        file.read_to_end(&mut buffer)?;
        drop(file);

        let skip = buffer
            .iter()
            .position(|&b| b == b'\n')
            .map(|i| i + 1)
            .unwrap_or(0);

        let mut file = File::create(log_path)?;
        file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
        file.write_all(&buffer[skip..])?;
        Ok(())
    }

    /// Hands out writers to the shared log file
    #[derive(Clone)]
    struct LogWriterFactory {
        file: Arc<Mutex<File>>,
    }

    struct LogWriter {
        file: Arc<Mutex<File>>,
    }

    impl LogWriter {
        fn lock(&self) -> io::Result<MutexGuard<'_, File>> {
            self.file
                .lock()
                .map_err(|_| io::Error::other("log file lock poisoned"))
        }
    }

    impl Write for LogWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.lock()?.write(buf)
        }

        fn flush(&mut self) -> io::Result<()> {
            self.lock()?.flush()
        }
    }

    impl<'a> MakeWriter<'a> for LogWriterFactory {
        type Writer = LogWriter;

        fn make_writer(&'a self) -> Self::Writer {
            LogWriter {
                file: Arc::clone(&self.file),
            }
        }
    }

    /// Initialize logging to a file in the data directory.
    ///
    /// `RUST_LOG` takes precedence over `level` when set.
    pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<()> {
        fs::create_dir_all(data_dir)?;

        let log_path = data_dir.join(LOG_FILE_NAME);
        if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
            eprintln!("Warning: Failed to rotate log file: {e}");
        }

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;
        let writer_factory = LogWriterFactory {
            file: Arc::new(Mutex::new(file)),
        };

        let default_filter = format!("chemxplore={level}");
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

        tracing_subscriber::registry()
            .with(env_filter)
            .with(
                fmt::layer()
                    .with_writer(writer_factory)
                    .with_ansi(false)
                    .with_target(true)
                    .with_thread_ids(false),
            )
            .try_init()?;

        tracing::info!(log_path = %log_path.display(), "ChemXplore logging initialized");
        Ok(())
    }

}

/// Initialize logging to the browser console.
#[cfg(feature = "web")]
pub fn init_logging_web() {
    tracing_wasm::set_as_global_default();
}
