use crate::codec::{decode, DecodeError};
use crate::domain::LocationRecord;
use crate::extensions::path_ext::FileName;
use futures::stream::FuturesUnordered;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio_stream::wrappers::ReadDirStream;
use tokio_stream::StreamExt;
use tracing::{debug, info, instrument, warn};

/// A decoded payload file.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedLocation {
    path: PathBuf,
    record: LocationRecord,
}

impl LoadedLocation {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn record(&self) -> &LocationRecord {
        &self.record
    }
}

/// Decodes every `*.{extension}` file in `directory`, ordered by path.
///
/// Files that cannot be read or decoded are logged and skipped, as are blank payloads.
#[instrument]
pub async fn load_locations_from(directory: &str, extension: &str) -> Result<Vec<LoadedLocation>, LoaderError> {
    info!("📁 Loading location payloads...");
    let files = list_files(directory, extension)
        .await
        .map_err(|e| LoaderError::Io { source: e, path: None })?;

    let results = load_files(files).await;
    let (mut locations, mut blank, mut failed) = (Vec::new(), 0, 0);
    for result in results {
        match result {
            Ok(Some(location)) => locations.push(location),
            Ok(None) => blank += 1,
            Err(err) => {
                log_error(&err);
                failed += 1;
            }
        }
    }
    locations.sort_by(|a, b| a.path.cmp(&b.path));

    info!(
        "📁 Loading location payloads... OK, {} loaded, {} blank, {} failed",
        locations.len(),
        blank,
        failed
    );
    Ok(locations)
}

#[instrument]
async fn list_files(directory: &str, extension: &str) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let dir = fs::read_dir(directory).await?;
    let mut entries = ReadDirStream::new(dir);

    while let Some(entry) = entries.next().await {
        match entry {
            Ok(entry) => {
                let path = entry.path();
                if path.is_file() && path.extension().and_then(|e| e.to_str()) == Some(extension) {
                    files.push(path);
                }
            }
            Err(err) => warn!("⚠️ Unable to read directory entry: {}", err),
        }
    }

    Ok(files)
}

#[instrument(skip_all)]
async fn load_files(paths: Vec<PathBuf>) -> Vec<Result<Option<LoadedLocation>, LoaderError>> {
    FuturesUnordered::from_iter(paths.into_iter().map(|path| async move {
        match fs::read_to_string(&path).await {
            Ok(content) => match decode(content) {
                Ok(Some(record)) => Ok(Some(LoadedLocation { path, record })),
                Ok(None) => {
                    debug!("Skipping blank payload '{}'", path.string_file_name());
                    Ok(None)
                }
                Err(err) => Err(LoaderError::Decode { source: err, path }),
            },
            Err(err) => Err(LoaderError::Io {
                source: err,
                path: Some(path),
            }),
        }
    }))
    .collect()
    .await
}

fn log_error(error: &LoaderError) {
    match error {
        LoaderError::Decode { source, path } => warn!("⚠️ Failed to decode '{}': {}", path.string_file_name(), source),
        LoaderError::Io { source, path } => match path {
            Some(path) => warn!("⚠️ Failed to read '{}': {}", path.string_file_name(), source),
            None => warn!("⚠️ {}", source),
        },
    }
}

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("{}", source)]
    Decode { source: DecodeError, path: PathBuf },
    #[error("{}", source)]
    Io { source: io::Error, path: Option<PathBuf> },
}
