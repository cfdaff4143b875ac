//! Phenotype (sample metadata) tables.

use std::io::{self, BufRead};

use indexmap::IndexSet;

use crate::counts::reader::read_line;

const DELIMITER: char = '\t';

/// Where sample names are listed in a phenotype table.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum SampleAxis {
    /// The header row, after the first (row label) cell.
    #[default]
    Header,
    /// The first column of each row after the header.
    FirstColumn,
}

/// Reads the sample order declared by a tab-separated phenotype table.
///
/// The result is nonempty and has no empty or duplicate names.
pub fn read_sample_order<R>(reader: &mut R, axis: SampleAxis) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut line = String::new();

    if read_line(reader, &mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing header",
        ));
    }

    let sample_names = match axis {
        SampleAxis::Header => line.split(DELIMITER).skip(1).map(String::from).collect(),
        SampleAxis::FirstColumn => read_first_column(reader, &mut line)?,
    };

    validate_sample_names(&sample_names)?;

    Ok(sample_names)
}

fn read_first_column<R>(reader: &mut R, line: &mut String) -> io::Result<Vec<String>>
where
    R: BufRead,
{
    let mut names = Vec::new();

    loop {
        line.clear();

        if read_line(reader, line)? == 0 {
            break;
        }

        if line.is_empty() {
            continue;
        }

        let name = match line.split_once(DELIMITER) {
            Some((name, _)) => name,
            None => line.as_str(),
        };

        names.push(name.into());
    }

    Ok(names)
}

fn validate_sample_names(names: &[String]) -> io::Result<()> {
    if names.is_empty() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            "missing sample names",
        ));
    }

    let mut seen = IndexSet::with_capacity(names.len());

    for name in names {
        if name.is_empty() {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "empty sample name",
            ));
        }

        if !seen.insert(name.as_str()) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("duplicate sample name: {name}"),
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_sample_order() -> io::Result<()> {
        let data = b"id\ts1\ts2\ts4\ncondition\tctrl\tctrl\ttreated\n";
        let mut reader = &data[..];
        let actual = read_sample_order(&mut reader, SampleAxis::Header)?;
        assert_eq!(actual, ["s1", "s2", "s4"]);
        Ok(())
    }

    #[test]
    fn test_read_sample_order_from_header_only() -> io::Result<()> {
        let mut reader = &b"\ts2\ts1\r\n"[..];
        let actual = read_sample_order(&mut reader, SampleAxis::Header)?;
        assert_eq!(actual, ["s2", "s1"]);
        Ok(())
    }

    #[test]
    fn test_read_sample_order_from_first_column() -> io::Result<()> {
        let data = b"sample\tcondition\ns1\tctrl\n\ns2\ttreated\ns4\n";
        let mut reader = &data[..];
        let actual = read_sample_order(&mut reader, SampleAxis::FirstColumn)?;
        assert_eq!(actual, ["s1", "s2", "s4"]);
        Ok(())
    }

    #[test]
    fn test_read_sample_order_with_malformed_input() {
        fn t(data: &[u8], axis: SampleAxis) {
            let mut reader = data;

            assert!(matches!(
                read_sample_order(&mut reader, axis),
                Err(e) if e.kind() == io::ErrorKind::InvalidData
            ));
        }

        // missing header
        t(b"", SampleAxis::Header);
        t(b"", SampleAxis::FirstColumn);

        // missing sample names
        t(b"id\n", SampleAxis::Header);
        t(b"sample\tcondition\n", SampleAxis::FirstColumn);

        // empty sample name
        t(b"id\ts1\t\ts2\n", SampleAxis::Header);

        // duplicate sample name
        t(b"id\ts1\ts2\ts1\n", SampleAxis::Header);
        t(b"sample\ns1\ns1\n", SampleAxis::FirstColumn);
    }
}
