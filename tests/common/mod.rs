//! Scripted byte-stream endpoints standing in for the board's serial port.

// Not every test binary uses every helper here.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::io::{self, Read, Write};

/// One scripted outcome for a `read` call (or a run of them).
pub enum ReadStep {
    /// Serve these bytes across as many read calls as the caller needs.
    Bytes(Vec<u8>),
    /// One read call that consumes nothing (`Ok(0)`).
    Empty,
    /// One read call that fails with this kind.
    Error(io::ErrorKind),
}

/// A mock port that records every write and serves reads from a script.
///
/// An exhausted script keeps returning `Ok(0)`, i.e. "no data yet".
pub struct MockPort {
    pub script: VecDeque<ReadStep>,
    /// Payload of each successful write call, in order.
    pub writes: Vec<Vec<u8>>,
    /// Total write calls, including failed ones.
    pub write_attempts: usize,
    pub fail_writes: bool,
}

impl MockPort {
    pub fn new() -> Self {
        Self::with_script(Vec::new())
    }

    pub fn with_script(script: Vec<ReadStep>) -> Self {
        Self {
            script: script.into(),
            writes: Vec::new(),
            write_attempts: 0,
            fail_writes: false,
        }
    }

    pub fn failing_writes() -> Self {
        let mut port = Self::new();
        port.fail_writes = true;
        port
    }
}

impl Read for MockPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        loop {
            match self.script.front_mut() {
                None => return Ok(0),
                Some(ReadStep::Bytes(bytes)) if bytes.is_empty() => {
                    self.script.pop_front();
                }
                Some(ReadStep::Bytes(bytes)) => {
                    let n = buf.len().min(bytes.len());
                    for (dst, src) in buf.iter_mut().zip(bytes.drain(..n)) {
                        *dst = src;
                    }
                    return Ok(n);
                }
                Some(ReadStep::Empty) => {
                    self.script.pop_front();
                    return Ok(0);
                }
                Some(ReadStep::Error(kind)) => {
                    let kind = *kind;
                    self.script.pop_front();
                    return Err(kind.into());
                }
            }
        }
    }
}

impl Write for MockPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.write_attempts += 1;
        if self.fail_writes {
            return Err(io::ErrorKind::BrokenPipe.into());
        }
        self.writes.push(buf.to_vec());
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// A mock board that answers input requests with the last level written to
/// it, framed the way the firmware frames responses (pin char, level char,
/// CR, LF).
pub struct EchoPort {
    last_state: u8,
    pending: VecDeque<u8>,
    pub writes: Vec<Vec<u8>>,
}

impl EchoPort {
    pub fn new() -> Self {
        Self {
            last_state: b'0',
            pending: VecDeque::new(),
            writes: Vec::new(),
        }
    }
}

impl Read for EchoPort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        match self.pending.pop_front() {
            Some(byte) if !buf.is_empty() => {
                buf[0] = byte;
                Ok(1)
            }
            _ => Ok(0),
        }
    }
}

impl Write for EchoPort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.writes.push(buf.to_vec());
        match buf {
            [state @ (b'0' | b'1')] => self.last_state = *state,
            [pin, b'?'] => {
                self.pending
                    .extend([*pin, self.last_state, b'\r', b'\n']);
            }
            _ => {}
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
