use std::num::NonZeroUsize;

/// Which slide is showing. Moves are clamped; there is no wraparound.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideNavigator {
    current: usize,
    total: NonZeroUsize,
}

impl SlideNavigator {
    #[must_use]
    pub const fn new(total: NonZeroUsize) -> Self {
        Self { current: 0, total }
    }

    #[must_use]
    pub const fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub const fn total(&self) -> NonZeroUsize {
        self.total
    }

    #[must_use]
    pub const fn last_index(&self) -> usize {
        self.total.get().saturating_sub(1)
    }

    #[must_use]
    pub const fn is_first(&self) -> bool {
        self.current == 0
    }

    #[must_use]
    pub const fn is_last(&self) -> bool {
        self.current == self.last_index()
    }

    /// Returns whether the index changed.
    pub fn next(&mut self) -> bool {
        self.go_to(self.current.saturating_add(1))
    }

    pub fn previous(&mut self) -> bool {
        self.go_to(self.current.saturating_sub(1))
    }

    pub fn first(&mut self) -> bool {
        self.go_to(0)
    }

    pub fn last(&mut self) -> bool {
        self.go_to(self.last_index())
    }

    /// Clamps `index` into range rather than rejecting it.
    pub fn go_to(&mut self, index: usize) -> bool {
        let target = index.min(self.last_index());
        let changed = target != self.current;
        self.current = target;
        changed
    }
}
