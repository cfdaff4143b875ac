use std::{
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
};

use exmat_core::{
    counts::{self, reader::Format, writer, AggregateError},
    fs,
    phenotypes::{self, SampleAxis},
    CountMatrix,
};
use tempfile::NamedTempFile;
use thiserror::Error;
use tracing::info;

use crate::cli::Cli;

pub fn create(cli: Cli) -> Result<(), CreateError> {
    let format = Format::from(cli.method);

    info!(sample_count = cli.srcs.len(), ?format, "reading samples");

    let mut matrix = counts::aggregate(&cli.srcs, format)?;

    info!(
        feature_count = matrix.feature_names().len(),
        sample_count = matrix.sample_names().len(),
        "read samples"
    );

    if let Some(src) = &cli.phenotypes {
        let axis = SampleAxis::from(cli.sample_axis);

        info!(src = ?src, ?axis, "reading sample order");

        let sample_names = read_sample_order(src, axis)
            .map_err(|e| CreateError::ReadPhenotypes(src.clone(), e))?;

        info!(sample_count = sample_names.len(), "reindexing samples");

        matrix = matrix.reindex(&sample_names[..]);
    }

    let dst = &cli.output;

    info!(dst = ?dst, "writing matrix");

    write_matrix(dst, &matrix).map_err(|e| CreateError::WriteMatrix(dst.clone(), e))?;

    info!("done");

    Ok(())
}

#[derive(Debug, Error)]
pub enum CreateError {
    #[error("could not aggregate counts")]
    Aggregate(#[from] AggregateError),
    #[error("could not read phenotypes: {}", .0.display())]
    ReadPhenotypes(PathBuf, #[source] io::Error),
    #[error("could not write matrix: {}", .0.display())]
    WriteMatrix(PathBuf, #[source] io::Error),
}

fn read_sample_order(src: &Path, axis: SampleAxis) -> io::Result<Vec<String>> {
    let mut reader = fs::open(src)?;
    phenotypes::read_sample_order(&mut reader, axis)
}

// The destination is only replaced once the whole matrix is written.
fn write_matrix(dst: &Path, matrix: &CountMatrix) -> io::Result<()> {
    let dir = match dst.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut file = NamedTempFile::new_in(dir)?;

    {
        let mut writer = BufWriter::new(file.as_file_mut());
        writer::write(&mut writer, matrix)?;
        writer.flush()?;
    }

    file.persist(dst)?;

    Ok(())
}
