mod feature_counts;
mod format;
mod htseq_count;

pub use self::format::Format;

use std::io::{self, BufRead};

/// Reads `(feature name, count)` pairs from a single sample count file.
///
/// Counts are kept as the raw text of the count column.
pub fn read<R>(reader: &mut R, format: Format) -> io::Result<Vec<(String, String)>>
where
    R: BufRead,
{
    match format {
        Format::HtseqCount => htseq_count::read(reader),
        Format::FeatureCounts => feature_counts::read(reader),
    }
}

pub(crate) fn read_line<R>(reader: &mut R, buf: &mut String) -> io::Result<usize>
where
    R: BufRead,
{
    const LINE_FEED: char = '\n';
    const CARRIAGE_RETURN: char = '\r';

    match reader.read_line(buf)? {
        0 => Ok(0),
        n => {
            if buf.ends_with(LINE_FEED) {
                buf.pop();

                if buf.ends_with(CARRIAGE_RETURN) {
                    buf.pop();
                }
            }

            Ok(n)
        }
    }
}

fn at_line(e: io::Error, line_number: usize) -> io::Error {
    io::Error::new(e.kind(), format!("line {line_number}: {e}"))
}
