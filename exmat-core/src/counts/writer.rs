use std::io::{self, Write};

use super::CountMatrix;

const SEPARATOR: char = '\t';

/// Writes a count matrix as tab-separated text.
///
/// The header is an empty cell followed by the sample names. Each following line is a feature
/// name followed by its counts, with absent counts written as empty cells.
pub fn write<W>(writer: &mut W, matrix: &CountMatrix) -> io::Result<()>
where
    W: Write,
{
    for sample_name in matrix.sample_names() {
        write!(writer, "{SEPARATOR}{sample_name}")?;
    }

    writeln!(writer)?;

    for (i, feature_name) in matrix.feature_names().iter().enumerate() {
        write!(writer, "{feature_name}")?;

        for count in matrix.row(i) {
            let count = count.unwrap_or_default();
            write!(writer, "{SEPARATOR}{count}")?;
        }

        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write() -> io::Result<()> {
        let mut matrix = CountMatrix::default();
        matrix.insert("f0", "s1", "8".into());
        matrix.insert("f0", "s2", "13".into());
        matrix.insert("f1", "s2", "21".into());
        matrix.add_sample("s3");

        let mut buf = Vec::new();
        write(&mut buf, &matrix)?;

        let expected = b"\ts1\ts2\ts3\nf0\t8\t13\t\nf1\t\t21\t\n";
        assert_eq!(buf, expected);

        Ok(())
    }

    #[test]
    fn test_write_with_empty_matrix() -> io::Result<()> {
        let mut buf = Vec::new();
        write(&mut buf, &CountMatrix::default())?;
        assert_eq!(buf, b"\n");
        Ok(())
    }
}
