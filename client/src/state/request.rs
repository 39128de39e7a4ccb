//! Request generation tickets.
//!
//! A view that may refetch while an older request is still in flight bumps its
//! generation before each fetch and only applies completions whose ticket
//! matches the current generation.

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestGeneration(u64);

impl RequestGeneration {
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    pub fn value(self) -> u64 {
        self.0
    }

    pub fn is_current(self, current: Self) -> bool {
        self == current
    }
}
