// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

use crate::{StdMutex, TerminalModeSwitch};
use miette::miette;
use std::sync::{Arc, PoisonError};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ModeSwitchCounts {
    pub enable: usize,
    pub disable: usize,
}

/// Counts raw mode transitions instead of touching a terminal.
///
/// Like [`crate::StdoutMock`], clones share the same counters, so a test can keep one
/// clone and hand the other to a [`crate::Readline`].
#[derive(Debug, Default, Clone)]
pub struct ModeSwitchMock {
    pub counts: Arc<StdMutex<ModeSwitchCounts>>,
    /// Make [`TerminalModeSwitch::enable_raw_mode`] fail.
    pub fail_enable: bool,
}

impl ModeSwitchMock {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail_enable: true,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn get_counts(&self) -> ModeSwitchCounts {
        *self.counts.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// `true` when every enable was matched by a disable.
    #[must_use]
    pub fn is_balanced(&self) -> bool {
        let counts = self.get_counts();
        counts.enable == counts.disable
    }
}

impl TerminalModeSwitch for ModeSwitchMock {
    fn enable_raw_mode(&mut self) -> miette::Result<()> {
        if self.fail_enable {
            return Err(miette!("not a terminal"));
        }
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .enable += 1;
        Ok(())
    }

    fn disable_raw_mode(&mut self) -> miette::Result<()> {
        self.counts
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .disable += 1;
        Ok(())
    }
}
