// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Something that can put a terminal into raw mode and take it back out.
pub trait TerminalModeSwitch {
    /// # Errors
    ///
    /// Returns miette diagnostic errors if the terminal attributes cannot be read or
    /// written.
    fn enable_raw_mode(&mut self) -> miette::Result<()>;

    /// Restore whatever was in place before [`TerminalModeSwitch::enable_raw_mode`].
    /// No-op if raw mode was never enabled.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if the terminal attributes cannot be written.
    fn disable_raw_mode(&mut self) -> miette::Result<()>;
}

/// For output devices that are not terminals (pipes, files, tests).
#[derive(Debug, Default, Copy, Clone)]
pub struct NoopModeSwitch;

impl TerminalModeSwitch for NoopModeSwitch {
    fn enable_raw_mode(&mut self) -> miette::Result<()> { Ok(()) }

    fn disable_raw_mode(&mut self) -> miette::Result<()> { Ok(()) }
}

/// RAII guard that disables raw mode when dropped.
///
/// Restores the terminal on every exit path out of a read: normal return, `?` on a
/// decode or I/O error, and unwinding.
pub struct RawModeGuard<'a> {
    switch: &'a mut dyn TerminalModeSwitch,
}

impl std::fmt::Debug for RawModeGuard<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawModeGuard").finish_non_exhaustive()
    }
}

impl<'a> RawModeGuard<'a> {
    /// Enable raw mode and return the guard.
    ///
    /// # Errors
    ///
    /// Returns miette diagnostic errors if raw mode cannot be enabled. Nothing needs to
    /// be restored in that case.
    pub fn try_new(switch: &'a mut dyn TerminalModeSwitch) -> miette::Result<Self> {
        switch.enable_raw_mode()?;
        Ok(Self { switch })
    }
}

impl Drop for RawModeGuard<'_> {
    fn drop(&mut self) { drop(self.switch.disable_raw_mode()); }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ModeSwitchCounts, ModeSwitchMock};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guard_restores_on_drop() {
        let mut switch = ModeSwitchMock::new();
        {
            let _guard = RawModeGuard::try_new(&mut switch).unwrap();
        }
        assert_eq!(
            switch.get_counts(),
            ModeSwitchCounts {
                enable: 1,
                disable: 1
            }
        );
    }

    #[test]
    fn test_guard_restores_on_early_return() {
        fn work(switch: &mut dyn TerminalModeSwitch) -> miette::Result<()> {
            let _guard = RawModeGuard::try_new(switch)?;
            Err(miette::miette!("decode failed"))
        }

        let mut switch = ModeSwitchMock::new();
        assert!(work(&mut switch).is_err());
        assert!(switch.is_balanced());
        assert_eq!(switch.get_counts().enable, 1);
    }

    #[test]
    fn test_failed_enable_does_not_restore() {
        let mut switch = ModeSwitchMock::failing();
        assert!(RawModeGuard::try_new(&mut switch).is_err());
        assert_eq!(switch.get_counts(), ModeSwitchCounts::default());
    }

    #[test]
    fn test_noop_switch() {
        let mut switch = NoopModeSwitch;
        let guard = RawModeGuard::try_new(&mut switch);
        assert!(guard.is_ok());
    }
}
