#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Format {
    /// htseq-count.
    HtseqCount,
    /// featureCounts.
    FeatureCounts,
}
