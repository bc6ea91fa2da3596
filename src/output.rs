//! This module defines the tagged output value carried by FST arcs.

use std::fmt;
use std::num::NonZeroU64;

/// A single arc output: either no output at all, or a strictly positive
/// 64-bit integer.
///
/// On the wire, zero is reserved for the "no output" sentinel, so zero can
/// never appear as an explicit value; `NonZeroU64` makes that state
/// unrepresentable in memory. The derived ordering places [`Output::None`]
/// below every value and orders values numerically — this is the domain
/// ordering `subtract` checks its precondition against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Output {
    /// No output contributed by this arc.
    #[default]
    None,
    /// A strictly positive output value.
    Value(NonZeroU64),
}

impl Output {
    /// Wraps a raw payload taken from a dictionary entry.
    ///
    /// Passing zero is a caller bug (use [`Output::None`] to mean "no
    /// output") and is asserted in debug builds. In release builds a zero
    /// payload degrades to the sentinel, which is exactly what the wire
    /// format would decode it as.
    pub fn new(value: u64) -> Self {
        debug_assert!(value > 0, "explicit zero output; use Output::None");
        match NonZeroU64::new(value) {
            Some(v) => Output::Value(v),
            None => Output::None,
        }
    }

    /// Returns true if this is the "no output" sentinel.
    pub fn is_none(self) -> bool {
        matches!(self, Output::None)
    }

    /// The raw payload, with the sentinel mapped to its wire representation 0.
    pub fn to_u64(self) -> u64 {
        match self {
            Output::None => 0,
            Output::Value(v) => v.get(),
        }
    }

    /// The positive payload, if any.
    pub fn get(self) -> Option<NonZeroU64> {
        match self {
            Output::None => None,
            Output::Value(v) => Some(v),
        }
    }
}

impl From<NonZeroU64> for Output {
    fn from(value: NonZeroU64) -> Self {
        Output::Value(value)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::None => f.write_str("<none>"),
            Output::Value(v) => write!(f, "{}", v),
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_ordering() {
        assert!(Output::None < Output::new(1));
        assert!(Output::new(1) < Output::new(2));
        assert!(Output::new(300) <= Output::new(300));
    }

    #[test]
    fn test_raw_payload_mapping() {
        assert_eq!(Output::None.to_u64(), 0);
        assert_eq!(Output::new(42).to_u64(), 42);
        assert!(Output::None.is_none());
        assert!(!Output::new(42).is_none());
        assert_eq!(Output::new(42).get(), NonZeroU64::new(42));
        assert_eq!(Output::None.get(), None);
    }

    #[test]
    fn test_display_rendering() {
        assert_eq!(Output::new(17).to_string(), "17");
        assert_eq!(Output::None.to_string(), "<none>");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "explicit zero output")]
    fn test_zero_payload_is_a_defect() {
        let _ = Output::new(0);
    }
}
