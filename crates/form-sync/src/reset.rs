//! Reset Signal
//!
//! Version key handed to every item view. A view that sees a key different
//! from the one it last recorded drops its local edits.

/// Opaque reset version
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct ResetKey(u64);

impl std::fmt::Display for ResetKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "reset#{}", self.0)
    }
}

/// Monotonic source of reset keys
#[derive(Debug, Default)]
pub struct ResetSignal {
    current: ResetKey,
}

impl ResetSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ResetKey {
        self.current
    }

    /// Advance to a fresh key and return it
    pub fn bump(&mut self) -> ResetKey {
        self.current = ResetKey(self.current.0 + 1);
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_is_strictly_increasing() {
        let mut signal = ResetSignal::new();
        let first = signal.current();
        let second = signal.bump();
        let third = signal.bump();

        assert!(first < second && second < third);
        assert_eq!(signal.current(), third);
    }
}
