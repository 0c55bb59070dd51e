// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use super::{Acceptance, ReadingMode};

/// Only ASCII digits get into the buffer. Anything else typed rings the bell.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerMode;

impl ReadingMode for IntegerMode {
    fn accept_printable(&mut self, cluster: &str) -> Acceptance {
        match cluster.as_bytes() {
            [digit] if digit.is_ascii_digit() => Acceptance::Accept(cluster.into()),
            _ => Acceptance::Reject,
        }
    }
}
