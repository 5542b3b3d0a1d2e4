//! Passcode gate shown before the deck.
//!
//! A plain equality check against a shared secret; there is no hashing,
//! rate limiting, or persistence.

#[derive(Debug, Clone)]
pub struct Gate {
    secret: Option<String>,
}

impl Gate {
    #[must_use]
    pub const fn new(secret: Option<String>) -> Self {
        Self { secret }
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.secret.is_none()
    }

    #[must_use]
    pub fn check(&self, input: &str) -> bool {
        self.secret.as_deref().is_none_or(|secret| secret == input)
    }
}

/// Prompt state driving the gate screen.
#[derive(Debug, Clone)]
pub struct GateState {
    gate: Gate,
    input: String,
    error: bool,
    unlocked: bool,
}

impl GateState {
    #[must_use]
    pub const fn new(gate: Gate) -> Self {
        let unlocked = gate.is_open();
        Self {
            gate,
            input: String::new(),
            error: false,
            unlocked,
        }
    }

    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.unlocked
    }

    #[must_use]
    pub const fn has_error(&self) -> bool {
        self.error
    }

    /// Number of typed characters; the prompt shows a mask, never the text.
    #[must_use]
    pub fn input_len(&self) -> usize {
        self.input.chars().count()
    }

    pub fn push(&mut self, ch: char) {
        self.error = false;
        self.input.push(ch);
    }

    pub fn backspace(&mut self) {
        self.error = false;
        self.input.pop();
    }

    /// Checks the typed input. On mismatch the input is cleared and the error
    /// flag raised.
    pub fn submit(&mut self) -> bool {
        if self.gate.check(&self.input) {
            self.unlocked = true;
            self.error = false;
        } else {
            self.error = true;
            tracing::debug!("Passcode rejected");
        }
        self.input.clear();
        self.unlocked
    }
}
