use std::io::{self, ErrorKind, Read};
use std::str;

use log::trace;

const BUFFER_LEN: usize = 4096;

/// A `TokenBuffer` is useful for buffering inputs to the lexer because it
/// it is more efficient for the operating system to read blocks of bytes at a
/// time than it is to read one byte at a time.
///
/// The buffer holds up to two blocks of input. A begin pointer references the
/// start of the token being scanned and a forward pointer references the next
/// character the lexer will look at. Only whole UTF-8 characters are ever
/// stepped over, so the bytes between the two pointers are always valid text.
///
/// When the forward pointer reaches the end of the buffered input, the
/// unfinished token is shifted to the front of the buffer and the free space
/// behind it is filled from the reader. A token that still fills the whole
/// buffer is longer than we are willing to scan, and is reported as an error.
///
/// ```
/// use lexer::buffer::TokenBuffer;
///
/// let input = "Hello, World!".as_bytes();
/// let mut buf = TokenBuffer::new(input).unwrap();
/// assert_eq!(buf.scan_forward().unwrap(), Some('H'));
/// assert_eq!(buf.scan_forward().unwrap(), Some('e'));
/// assert_eq!(buf.pop(), "He");
/// ```
pub struct TokenBuffer<R: Read> {
    buf: Box<[u8; 2 * BUFFER_LEN]>,
    inner: R,
    begin: usize,
    forward: usize,
    end: usize,
    eof: bool,
}

/// The encoded length of a UTF-8 character given its first byte.
fn utf8_width(b: u8) -> Option<usize> {
    match b {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

fn invalid_data(msg: &str) -> io::Error {
    io::Error::new(ErrorKind::InvalidData, msg)
}

impl<R: Read> TokenBuffer<R> {
    pub fn new(read: R) -> io::Result<TokenBuffer<R>> {
        let mut buffer = TokenBuffer {
            buf: Box::new([0; 2 * BUFFER_LEN]),
            inner: read,
            begin: 0,
            forward: 0,
            end: 0,
            eof: false,
        };
        buffer.load()?;
        Ok(buffer)
    }

    // Read the next block of input behind the buffered bytes. Returns false
    // once the reader is exhausted.
    fn load(&mut self) -> io::Result<bool> {
        if self.eof {
            return Ok(false);
        }
        if self.begin > 0 {
            // drop everything before the current token
            self.buf.copy_within(self.begin..self.end, 0);
            self.forward -= self.begin;
            self.end -= self.begin;
            self.begin = 0;
        }
        if self.end == self.buf.len() {
            return Err(invalid_data(&format!(
                "token longer than {} bytes",
                2 * BUFFER_LEN
            )));
        }
        loop {
            match self.inner.read(&mut self.buf[self.end..]) {
                Ok(0) => {
                    self.eof = true;
                    return Ok(false);
                }
                Ok(n) => {
                    trace!("buffered {} bytes", n);
                    self.end += n;
                    return Ok(true);
                }
                Err(ref e) if e.kind() == ErrorKind::Interrupted => (),
                Err(e) => return Err(e),
            }
        }
    }

    /// Scan until the next character in the buffer and return the character
    /// that was found or `None` if we have reached the end of the input.
    pub fn scan_forward(&mut self) -> io::Result<Option<char>> {
        if self.forward == self.end && !self.load()? {
            return Ok(None);
        }
        let width = utf8_width(self.buf[self.forward])
            .ok_or_else(|| invalid_data("input is not valid UTF-8"))?;
        while self.forward + width > self.end {
            if !self.load()? {
                return Err(invalid_data("input ends inside a character"));
            }
        }
        let bytes = &self.buf[self.forward..self.forward + width];
        let c = str::from_utf8(bytes)
            .map_err(|_| invalid_data("input is not valid UTF-8"))?
            .chars()
            .next();
        self.forward += width;
        Ok(c)
    }

    /// Move the forward pointer back by one character and return that
    /// character. Returns `None` if the forward pointer is already at the
    /// start of the current token.
    pub fn scan_back(&mut self) -> Option<char> {
        if self.forward == self.begin {
            return None;
        }
        let mut start = self.forward - 1;
        // step over UTF-8 continuation bytes
        while start > self.begin && self.buf[start] & 0xC0 == 0x80 {
            start -= 1;
        }
        let c = str::from_utf8(&self.buf[start..self.forward])
            .ok()
            .and_then(|x| x.chars().next());
        self.forward = start;
        c
    }

    /// Return the current token from the buffer and advance the begin pointer.
    pub fn pop(&mut self) -> String {
        let curr_bytes = &self.buf[self.begin..self.forward];
        let result = String::from_utf8_lossy(curr_bytes).into_owned();
        self.begin = self.forward;
        result
    }
}
