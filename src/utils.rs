//! Test helpers shared by the unit tests of every module.
#![cfg(test)]

use core::fmt::{self, Write};

/// Compare the `Display` format of `value` against `expected` without allocating.
#[track_caller]
pub(crate) fn assert_display_eq<D>(value: D, expected: &str)
where
    D: fmt::Display,
{
    let mut w = WriteCompare::new(expected);
    write!(&mut w, "{}", value).unwrap();
    w.finish();
}

/// Compare the `Debug` format of `value` against `expected` without allocating.
#[track_caller]
pub(crate) fn assert_debug_eq<D>(value: D, expected: &str)
where
    D: fmt::Debug,
{
    let mut w = WriteCompare::new(expected);
    write!(&mut w, "{:?}", value).unwrap();
    w.finish();
}

/// Sink that returns an error when the bytes written to it do not match `expected`.
///
/// This tests `Display` and `Debug` implementations in a pure `no_std` environment.
pub(crate) struct WriteCompare<'a> {
    expected: &'a str,
    remainder: &'a str,
}

impl<'a> WriteCompare<'a> {
    pub(crate) fn new(expected: &'a str) -> Self {
        Self { expected, remainder: expected }
    }

    /// Panics if less than the whole of `expected` was written.
    #[track_caller]
    pub(crate) fn finish(&self) {
        assert!(
            self.remainder.is_empty(),
            "output ended early: missing {:?} of {:?}",
            self.remainder,
            self.expected
        );
    }
}

impl<'a> Write for WriteCompare<'a> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if let Some(remainder) = self.remainder.strip_prefix(s) {
            self.remainder = remainder;
            Ok(())
        } else {
            #[cfg(feature = "std")]
            eprintln!(
                "formatting difference: `(left == right)`\n  left: `\"{:?}{:?}(...)\"`\n right: `\"{:?}\"`",
                &self.expected[..(self.expected.len() - self.remainder.len())],
                s,
                self.expected
            );
            Err(fmt::Error)
        }
    }
}

/// Sink that accepts at most `capacity` bytes and fails on the write that would exceed it.
pub(crate) struct BoundedWriter {
    written: usize,
    capacity: usize,
}

impl BoundedWriter {
    pub(crate) fn new(capacity: usize) -> Self {
        Self { written: 0, capacity }
    }
}

impl Write for BoundedWriter {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.written + s.len() > self.capacity {
            return Err(fmt::Error);
        }
        self.written += s.len();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use core::fmt::Write;

    use super::{assert_display_eq, BoundedWriter, WriteCompare};

    #[test]
    fn test_write_compare() {
        assert_display_eq(42, "42");
        let mut w = WriteCompare::new("abc");
        assert!(w.write_str("ab").is_ok());
        assert!(w.write_str("d").is_err());
    }

    #[test]
    #[should_panic(expected = "output ended early")]
    fn test_write_compare_short_output() {
        assert_display_eq(4, "42");
    }

    #[test]
    fn test_bounded_writer() {
        let mut w = BoundedWriter::new(4);
        assert!(w.write_str("abc").is_ok());
        assert!(w.write_str("d").is_ok());
        assert!(w.write_str("e").is_err());
    }
}
