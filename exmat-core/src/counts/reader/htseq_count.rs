use std::io::{self, BufRead};

use super::{at_line, read_line};

// htseq-count summary rows, e.g., `__no_feature`, `__ambiguous`.
const HTSEQ_COUNT_META_PREFIX: char = '_';

pub(super) fn read<R>(reader: &mut R) -> io::Result<Vec<(String, String)>>
where
    R: BufRead,
{
    let mut line = String::new();
    let mut counts = Vec::new();
    let mut line_number = 0;

    loop {
        line.clear();

        if read_line(reader, &mut line)? == 0 {
            break;
        }

        line_number += 1;

        if line.starts_with(HTSEQ_COUNT_META_PREFIX) {
            continue;
        }

        let (name, count) = parse_line(&line).map_err(|e| at_line(e, line_number))?;
        counts.push((name.into(), count.into()));
    }

    Ok(counts)
}

fn parse_line(s: &str) -> io::Result<(&str, &str)> {
    const DELIMITER: char = '\t';

    let (name, rest) = s
        .split_once(DELIMITER)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing count column"))?;

    let count = match rest.split_once(DELIMITER) {
        Some((count, _)) => count,
        None => rest,
    };

    Ok((name, count))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(entries: &[(&str, &str)]) -> Vec<(String, String)> {
        entries
            .iter()
            .map(|(name, count)| (String::from(*name), String::from(*count)))
            .collect()
    }

    #[test]
    fn test_read() -> io::Result<()> {
        let data = b"geneA\t10\n_no_feature\t3\ngeneB\t5\n";
        let mut reader = &data[..];
        let actual = read(&mut reader)?;
        assert_eq!(actual, pairs(&[("geneA", "10"), ("geneB", "5")]));
        Ok(())
    }

    #[test]
    fn test_read_skips_interleaved_meta_lines() -> io::Result<()> {
        let data = b"f0\t8\n__no_feature\t0\nf1\t13\n__ambiguous\t2\n__alignment_not_unique\t1\n";
        let mut reader = &data[..];
        let actual = read(&mut reader)?;
        assert_eq!(actual, pairs(&[("f0", "8"), ("f1", "13")]));
        Ok(())
    }

    #[test]
    fn test_read_keeps_raw_count_text() -> io::Result<()> {
        let data = b"f0\t008\nf1\t1.5\nf2\tNA\n";
        let mut reader = &data[..];
        let actual = read(&mut reader)?;
        assert_eq!(actual, pairs(&[("f0", "008"), ("f1", "1.5"), ("f2", "NA")]));
        Ok(())
    }

    #[test]
    fn test_read_with_malformed_line() {
        let data = b"f0\t8\nf1 13\n";
        let mut reader = &data[..];

        assert!(matches!(
            read(&mut reader),
            Err(e) if e.kind() == io::ErrorKind::InvalidData && e.to_string().starts_with("line 2:")
        ));
    }

    #[test]
    fn test_parse_line() -> io::Result<()> {
        assert_eq!(parse_line("f0\t8")?, ("f0", "8"));
        assert_eq!(parse_line("f0\t8\textra")?, ("f0", "8"));
        assert_eq!(parse_line("f0\t")?, ("f0", ""));

        assert!(matches!(
            parse_line("f0 13"),
            Err(e) if e.kind() == io::ErrorKind::InvalidData
        ));

        assert!(matches!(
            parse_line(""),
            Err(e) if e.kind() == io::ErrorKind::InvalidData
        ));

        Ok(())
    }
}
