/// Whole-tick countdown that floors at zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Countdown {
    total: u32,
    remaining: u32,
}

impl Countdown {
    pub const fn new(total: u32) -> Self {
        Self {
            total,
            remaining: total,
        }
    }

    /// Decrement by one tick. Returns true on the tick that reaches zero.
    pub fn tick(&mut self) -> bool {
        if self.remaining == 0 {
            return false;
        }
        self.remaining -= 1;
        self.remaining == 0
    }

    pub fn reset(&mut self) {
        self.remaining = self.total;
    }

    #[inline]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }

    #[inline]
    pub const fn total(&self) -> u32 {
        self.total
    }

    #[inline]
    pub const fn is_expired(&self) -> bool {
        self.remaining == 0
    }

    /// Remaining share of the total in `[0, 1]`. A zero-length countdown is
    /// always fully spent.
    pub fn fraction_remaining(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.remaining as f64 / self.total as f64
    }
}
