//! Line splitting shared by the filters.
//!
//! A line ends at `\n`, `\r\n` or a lone `\r`. Terminators are not part of
//! the line. A final line without a terminator is still a line; input that
//! ends right after a terminator yields no extra empty line.

use std::io::{self, BufRead};

/// Iterator over the lines of a reader, decoded as UTF-8 one line at a time.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    fn skip_lf_after_cr(&mut self) -> io::Result<()> {
        loop {
            match self.reader.fill_buf() {
                Ok(buf) => {
                    if buf.first() == Some(&b'\n') {
                        self.reader.consume(1);
                    }
                    return Ok(());
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            }
        }
    }

    fn read_line_bytes(&mut self) -> io::Result<Option<Vec<u8>>> {
        let mut line = Vec::new();
        loop {
            let available = match self.reader.fill_buf() {
                Ok(buf) => buf,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => return Err(e),
            };

            if available.is_empty() {
                return Ok(if line.is_empty() { None } else { Some(line) });
            }

            match available.iter().position(|&b| b == b'\n' || b == b'\r') {
                Some(end) => {
                    let terminator = available[end];
                    line.extend_from_slice(&available[..end]);
                    self.reader.consume(end + 1);
                    if terminator == b'\r' {
                        self.skip_lf_after_cr()?;
                    }
                    return Ok(Some(line));
                }
                None => {
                    let taken = available.len();
                    line.extend_from_slice(available);
                    self.reader.consume(taken);
                }
            }
        }
    }
}

impl<R: BufRead> Iterator for LineReader<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_line_bytes() {
            Ok(Some(bytes)) => Some(
                String::from_utf8(bytes).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e)),
            ),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    }
}

/// Same splitting rules as [`LineReader`], over an in-memory string.
pub fn split_lines(text: &str) -> SplitLines<'_> {
    SplitLines { rest: text }
}

pub struct SplitLines<'a> {
    rest: &'a str,
}

impl<'a> Iterator for SplitLines<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }

        match self.rest.find(['\n', '\r']) {
            Some(end) => {
                let line = &self.rest[..end];
                let after = &self.rest[end + 1..];
                self.rest = if self.rest.as_bytes()[end] == b'\r' {
                    after.strip_prefix('\n').unwrap_or(after)
                } else {
                    after
                };
                Some(line)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{BufReader, Cursor};

    fn read_all(input: &[u8]) -> Vec<String> {
        LineReader::new(Cursor::new(input))
            .collect::<io::Result<Vec<_>>>()
            .unwrap()
    }

    #[test]
    fn test_all_terminators() {
        let expected = vec!["a", "b", "c", "", "d"];
        assert_eq!(read_all(b"a\nb\r\nc\r\rd"), expected);
        assert_eq!(split_lines("a\nb\r\nc\r\rd").collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_trailing_terminator_adds_no_line() {
        assert_eq!(read_all(b"a\n"), vec!["a"]);
        assert_eq!(read_all(b"a\r"), vec!["a"]);
        assert_eq!(read_all(b"a\r\n"), vec!["a"]);
        assert!(read_all(b"").is_empty());
        assert_eq!(split_lines("a\r").collect::<Vec<_>>(), vec!["a"]);
        assert_eq!(split_lines("").count(), 0);
    }

    #[test]
    fn test_empty_lines_are_kept() {
        assert_eq!(read_all(b"\n\n"), vec!["", ""]);
        assert_eq!(split_lines("\r\n\r").collect::<Vec<_>>(), vec!["", ""]);
    }

    #[test]
    fn test_crlf_split_across_buffer_refills() {
        let reader = BufReader::with_capacity(2, Cursor::new(b"ab\r\ncd".to_vec()));
        let lines: Vec<String> = LineReader::new(reader).map(|l| l.unwrap()).collect();
        assert_eq!(lines, vec!["ab", "cd"]);
    }

    #[test]
    fn test_invalid_utf8_line_is_error() {
        let mut lines = LineReader::new(Cursor::new(&b"ok\n\xff\n"[..]));
        assert_eq!(lines.next().unwrap().unwrap(), "ok");
        let err = lines.next().unwrap().unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::InvalidData);
    }
}
