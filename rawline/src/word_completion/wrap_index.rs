// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

/// Map a signed, unbounded cycling index into `0..len`, wrapping negative values to the
/// end of the list (`-1` is the last item). Returns `None` when `len` is 0.
#[must_use]
pub fn wrap_index(index: isize, len: usize) -> Option<usize> {
    let len = isize::try_from(len).ok().filter(|len| *len > 0)?;
    usize::try_from(index.rem_euclid(len)).ok()
}
