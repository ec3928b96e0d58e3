/// Running-length budget deciding whether an encoding is worth keeping.
///
/// The budget is the length of the original document. Encoded output is
/// charged piece by piece; once the running total exceeds the budget the
/// policy stays exceeded and the encoder falls back to the original text.
/// Spending exactly the budget is still within it.
#[derive(Clone, Debug)]
pub struct FallbackPolicy {
    limit: usize,
    spent: usize,
    exceeded: bool,
}

impl FallbackPolicy {
    pub fn new(original_len: usize) -> Self {
        Self { limit: original_len, spent: 0, exceeded: false }
    }

    /// Charge `len` bytes of encoded output. Returns false once over budget.
    pub fn charge(&mut self, len: usize) -> bool {
        self.spent = self.spent.saturating_add(len);
        if self.spent > self.limit {
            self.exceeded = true;
        }
        !self.exceeded
    }

    pub fn spent(&self) -> usize {
        self.spent
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn exceeded(&self) -> bool {
        self.exceeded
    }
}
