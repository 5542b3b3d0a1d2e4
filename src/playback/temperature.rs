use std::fmt;

use crate::catalog::HookCategory;

/// What the depicted processor would be doing given the hooks seen so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProcessorState {
    Cold,
    Warming,
    Hot,
}

impl ProcessorState {
    /// Any late-targeted (or both) hook makes the processor hot; otherwise any
    /// early-broadcast hook makes it warm; otherwise it stays cold.
    #[must_use]
    pub fn classify<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = HookCategory>,
    {
        let mut state = Self::Cold;
        for category in categories {
            match category {
                HookCategory::LateTargeted | HookCategory::Both => return Self::Hot,
                HookCategory::EarlyBroadcast => state = Self::Warming,
            }
        }
        state
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Cold => "COLD",
            Self::Warming => "WARMING",
            Self::Hot => "HOT",
        }
    }

    #[must_use]
    pub const fn sublabel(self) -> &'static str {
        match self {
            Self::Cold => "Idle / not ready",
            Self::Warming => "Phase 1 signal received",
            Self::Hot => "Phase 2 ready",
        }
    }
}

impl fmt::Display for ProcessorState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
