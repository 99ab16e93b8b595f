//! Bulk pulse counting over a fixed number of presses.

use super::{PulseCounts, Simulator};

impl Simulator {
    /// Run `presses` sequential button presses, accumulating delivered
    /// low/high totals. Module state persists across presses.
    pub fn press_many(&mut self, presses: u64) -> PulseCounts {
        let mut totals = PulseCounts::default();
        for _ in 0..presses {
            totals += self.press_button();
        }
        totals
    }

    /// The bulk-counting answer for exactly `presses` presses, by direct
    /// simulation: total low pulses times total high pulses.
    pub fn pulse_product_direct(&mut self, presses: u64) -> u128 {
        self.press_many(presses).product()
    }
}
