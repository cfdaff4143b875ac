use std::io::{self, BufRead};

use super::{at_line, read_line};

const COMMENT_PREFIX: char = '#';

pub(super) fn read<R>(reader: &mut R) -> io::Result<Vec<(String, String)>>
where
    R: BufRead,
{
    let mut line = String::new();
    let mut counts = Vec::new();

    let mut line_number = consume_header(reader, &mut line)?;

    loop {
        line.clear();

        if read_line(reader, &mut line)? == 0 {
            break;
        }

        line_number += 1;

        if line.starts_with(COMMENT_PREFIX) {
            continue;
        }

        let (name, count) = parse_line(&line).map_err(|e| at_line(e, line_number))?;
        counts.push((name.into(), count.into()));
    }

    Ok(counts)
}

/// Discards the leading program comment and column header lines, whatever they contain.
fn consume_header<R>(reader: &mut R, buf: &mut String) -> io::Result<usize>
where
    R: BufRead,
{
    const HEADER_LINE_COUNT: usize = 2;

    for _ in 0..HEADER_LINE_COUNT {
        buf.clear();
        read_line(reader, buf)?;
    }

    Ok(HEADER_LINE_COUNT)
}

fn parse_line(s: &str) -> io::Result<(&str, &str)> {
    const DELIMITER: char = '\t';

    let (name, rest) = s
        .split_once(DELIMITER)
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidData, "missing count column"))?;

    let count = match rest.rsplit_once(DELIMITER) {
        Some((_, count)) => count,
        None => rest,
    };

    Ok((name, count))
}
