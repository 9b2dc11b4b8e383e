//! Character source for the lexer.
//!
//! Decodes UTF-8 from any byte stream one character at a time and keeps
//! the most recently read character so the lexer can push it back once.

use std::io::{self, BufReader, Bytes, Read};

pub struct CharReader<R: Read> {
    bytes: Bytes<BufReader<R>>,
    last: Option<char>,
    unread: bool,
}

impl<R: Read> CharReader<R> {
    pub fn new(reader: R) -> Self {
        CharReader {
            bytes: BufReader::new(reader).bytes(),
            last: None,
            unread: false,
        }
    }

    /// Returns the next character, or `None` at end of input.
    pub fn read_char(&mut self) -> io::Result<Option<char>> {
        if self.unread {
            self.unread = false;
            return Ok(self.last);
        }

        let ch = self.decode()?;
        self.last = ch;
        Ok(ch)
    }

    /// Pushes back the character returned by the last `read_char`.
    ///
    /// Only one character of push-back is supported; unreading end of input
    /// makes the next read report end of input again.
    pub fn unread_char(&mut self) {
        self.unread = true;
    }

    fn next_byte(&mut self) -> io::Result<Option<u8>> {
        self.bytes.next().transpose()
    }

    fn decode(&mut self) -> io::Result<Option<char>> {
        let first = match self.next_byte()? {
            Some(byte) => byte,
            None => return Ok(None),
        };

        let width = match first {
            0x00..=0x7F => return Ok(Some(first as char)),
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(invalid_utf8()),
        };

        let mut buffer = [first, 0, 0, 0];
        for slot in buffer.iter_mut().take(width).skip(1) {
            *slot = self.next_byte()?.ok_or_else(invalid_utf8)?;
        }

        std::str::from_utf8(&buffer[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or_else(invalid_utf8)
    }
}

fn invalid_utf8() -> io::Error {
    io::Error::new(io::ErrorKind::InvalidData, "source is not valid UTF-8")
}
