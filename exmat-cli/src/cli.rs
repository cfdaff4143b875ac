use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use exmat_core as core;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum Method {
    /// htseq-count.
    Htseq,
    /// featureCounts.
    #[value(name = "featurecounts")]
    FeatureCounts,
}

impl From<Method> for core::counts::reader::Format {
    fn from(method: Method) -> Self {
        match method {
            Method::Htseq => Self::HtseqCount,
            Method::FeatureCounts => Self::FeatureCounts,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum SampleAxis {
    /// Sample names are the header cells after the first.
    #[default]
    Header,
    /// Sample names are the first cell of each row after the header.
    FirstColumn,
}

impl From<SampleAxis> for core::phenotypes::SampleAxis {
    fn from(sample_axis: SampleAxis) -> Self {
        match sample_axis {
            SampleAxis::Header => Self::Header,
            SampleAxis::FirstColumn => Self::FirstColumn,
        }
    }
}

/// Merge per-sample gene counts into a single expression matrix.
#[derive(Parser)]
pub struct Cli {
    /// Phenotypes file (TSV).
    ///
    /// If set, the matrix columns are reordered to match the sample order it declares. Samples
    /// not listed are dropped, and listed samples with no counts are written as empty columns.
    #[arg(short = 'p', long)]
    pub phenotypes: Option<PathBuf>,

    /// Where sample names are listed in the phenotypes file.
    #[arg(long, value_enum, default_value_t = SampleAxis::default())]
    pub sample_axis: SampleAxis,

    /// Output destination.
    #[arg(short, long, default_value = "expression_matrix.txt")]
    pub output: PathBuf,

    /// Method used to generate the counts.
    #[arg(value_enum)]
    pub method: Method,

    /// Input sources, one per sample.
    ///
    /// Sample names are the filenames up to the first `.`.
    #[arg(required = true)]
    pub srcs: Vec<PathBuf>,
}
