// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::ByteSource;
use std::{collections::VecDeque, io};

/// Replays a fixed byte sequence, then reports end-of-stream.
#[derive(Debug, Default, Clone)]
pub struct ByteSourceMock {
    pub bytes: VecDeque<u8>,
    /// How many times [`ByteSource::wait_until_readable`] was called.
    pub wait_count: usize,
}

impl ByteSourceMock {
    #[must_use]
    pub fn new(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.iter().copied().collect(),
            wait_count: 0,
        }
    }

    /// Bytes not consumed yet.
    #[must_use]
    pub fn remaining(&self) -> usize { self.bytes.len() }
}

impl From<&str> for ByteSourceMock {
    fn from(text: &str) -> Self { Self::new(text.as_bytes()) }
}

impl ByteSource for ByteSourceMock {
    fn read_byte(&mut self) -> io::Result<Option<u8>> { Ok(self.bytes.pop_front()) }

    fn wait_until_readable(&mut self) -> io::Result<()> {
        self.wait_count += 1;
        Ok(())
    }
}
