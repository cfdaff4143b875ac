use std::{
    io,
    path::{Path, PathBuf},
};

use thiserror::Error;
use tracing::{debug, warn};

use super::{
    reader::{self, Format},
    CountMatrix,
};
use crate::fs;

#[derive(Debug, Error)]
pub enum AggregateError {
    #[error("invalid sample name: {}", .0.display())]
    InvalidSampleName(PathBuf),
    #[error("could not read counts: {}", .src.display())]
    ReadCounts {
        src: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Merges per-sample count files into a single count matrix.
///
/// Each source is a sample column, named by [`sample_name`], in the given order. Rows are the
/// union of all feature names, in first-seen order. If a feature is repeated within a sample,
/// the last count is kept.
pub fn aggregate<P>(srcs: &[P], format: Format) -> Result<CountMatrix, AggregateError>
where
    P: AsRef<Path>,
{
    let mut matrix = CountMatrix::default();

    for src in srcs {
        let src = src.as_ref();

        let sample_name =
            sample_name(src).ok_or_else(|| AggregateError::InvalidSampleName(src.into()))?;

        if matrix.sample_names().contains(sample_name) {
            warn!(src = ?src, sample_name, "duplicate sample name; merging counts");
        }

        debug!(src = ?src, sample_name, ?format, "reading counts");

        let counts = read_counts(src, format).map_err(|e| AggregateError::ReadCounts {
            src: src.into(),
            source: e,
        })?;

        debug!(sample_name, feature_count = counts.len(), "read counts");

        matrix.add_sample(sample_name);

        for (feature_name, count) in counts {
            matrix.insert(&feature_name, sample_name, count);
        }
    }

    Ok(matrix)
}

/// Returns the sample name of a count file, i.e., its filename up to the first `.`.
///
/// This returns `None` if the path has no UTF-8 filename or the resulting name is empty.
pub fn sample_name(src: &Path) -> Option<&str> {
    const EXTENSION_DELIMITER: char = '.';

    src.file_name()
        .and_then(|filename| filename.to_str())
        .and_then(|filename| filename.split(EXTENSION_DELIMITER).next())
        .filter(|name| !name.is_empty())
}

fn read_counts(src: &Path, format: Format) -> io::Result<Vec<(String, String)>> {
    let mut reader = fs::open(src)?;
    reader::read(&mut reader, format)
}
