// crates/covidplot-core/src/loader/common_io.rs
use crate::error::DataSourceError;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// Opens a snapshot file, buffers it and unwraps gzip for `*.gz` paths.
/// Returns a generic Reader so the caller doesn't care about the compression.
pub fn open_stream(path: &Path) -> Result<Box<dyn Read>, DataSourceError> {
    let file = File::open(path).map_err(|e| {
        DataSourceError::Io(std::io::Error::new(
            e.kind(),
            format!("snapshot not found at {}: {}", path.display(), e),
        ))
    })?;

    let reader = BufReader::new(file);

    if !is_gzip(path) {
        return Ok(Box::new(reader));
    }

    #[cfg(feature = "compact")]
    {
        use flate2::read::GzDecoder;
        Ok(Box::new(GzDecoder::new(reader)))
    }

    #[cfg(not(feature = "compact"))]
    {
        Err(DataSourceError::Shape(format!(
            "{} is gzipped but 'compact' is disabled",
            path.display()
        )))
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"))
}
