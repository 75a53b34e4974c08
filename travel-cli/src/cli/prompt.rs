//! Line-oriented input helpers.

use std::io::{self, BufRead, Write};

/// Reads one line, trimmed. Returns `None` at end of input.
pub fn read_line<R: BufRead>(input: &mut R) -> io::Result<Option<String>> {
    let mut buf = String::new();
    if input.read_line(&mut buf)? == 0 {
        return Ok(None);
    }
    Ok(Some(buf.trim().to_string()))
}

/// Writes a prompt, flushes, and reads the reply.
pub fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
) -> io::Result<Option<String>> {
    write!(out, "{message}")?;
    out.flush()?;
    read_line(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn read_line_trims_whitespace() {
        let mut input = Cursor::new(b"  alice  \n".to_vec());
        assert_eq!(read_line(&mut input).unwrap(), Some("alice".to_string()));
    }

    #[test]
    fn read_line_reports_eof() {
        let mut input = Cursor::new(Vec::new());
        assert_eq!(read_line(&mut input).unwrap(), None);
    }

    #[test]
    fn prompt_writes_message_before_reading() {
        let mut input = Cursor::new(b"2\n".to_vec());
        let mut out = Vec::new();

        let reply = prompt(&mut input, &mut out, "Choose: ").unwrap();

        assert_eq!(reply, Some("2".to_string()));
        assert_eq!(out, b"Choose: ");
    }

    #[test]
    fn empty_line_is_not_eof() {
        let mut input = Cursor::new(b"\n".to_vec());
        assert_eq!(read_line(&mut input).unwrap(), Some(String::new()));
    }
}
