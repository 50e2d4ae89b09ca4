//! Bounded number selection used to compose a pool's games.
//!
//! Lotofácil-style default: choose 15 distinct numbers out of 1..=25. The
//! selection never exceeds its limit, never holds duplicates, and only a
//! complete selection can be confirmed.

use crate::error::{BolaoError, Result};
use std::collections::BTreeSet;

pub const DEFAULT_UNIVERSE: u8 = 25;
pub const DEFAULT_PICKS: usize = 15;

#[derive(Debug, Clone)]
pub struct NumberPicker {
    universe: u8,
    picks: usize,
    selected: BTreeSet<u8>,
    disabled: bool,
}

impl Default for NumberPicker {
    fn default() -> Self {
        Self {
            universe: DEFAULT_UNIVERSE,
            picks: DEFAULT_PICKS,
            selected: BTreeSet::new(),
            disabled: false,
        }
    }
}

impl NumberPicker {
    /// Picker over `1..=universe` requiring exactly `picks` selections.
    pub fn new(universe: u8, picks: usize) -> Result<Self> {
        if universe == 0 || picks == 0 || picks > universe as usize {
            return Err(BolaoError::invalid_input(format!(
                "cannot pick {picks} numbers out of a 1..={universe} grid"
            )));
        }
        Ok(Self {
            universe,
            picks,
            selected: BTreeSet::new(),
            disabled: false,
        })
    }

    pub fn universe(&self) -> u8 {
        self.universe
    }

    pub fn picks(&self) -> usize {
        self.picks
    }

    pub fn count(&self) -> usize {
        self.selected.len()
    }

    pub fn is_full(&self) -> bool {
        self.selected.len() == self.picks
    }

    pub fn is_selected(&self, n: u8) -> bool {
        self.selected.contains(&n)
    }

    /// Current selection, ascending.
    pub fn selected(&self) -> Vec<u8> {
        self.selected.iter().copied().collect()
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    /// Removes `n` if selected (always legal), adds it if there is room.
    /// Adding to a full selection, an out-of-range number, or any toggle
    /// while disabled is a no-op. Returns whether the selection changed.
    pub fn toggle(&mut self, n: u8) -> bool {
        if self.disabled || n < 1 || n > self.universe {
            return false;
        }
        if self.selected.remove(&n) {
            return true;
        }
        if self.selected.len() < self.picks {
            self.selected.insert(n);
            true
        } else {
            false
        }
    }

    /// Emits the completed selection, sorted ascending, and resets the
    /// picker to empty. `None` unless the selection is exactly full.
    pub fn confirm(&mut self) -> Option<Vec<u8>> {
        if self.disabled || self.selected.len() != self.picks {
            return None;
        }
        Some(std::mem::take(&mut self.selected).into_iter().collect())
    }

    /// Empties the selection (no-op while disabled).
    pub fn clear(&mut self) {
        if !self.disabled {
            self.selected.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_never_exceeds_limit_or_duplicates() {
        let mut picker = NumberPicker::default();
        // toggle everything twice over, in an awkward order
        for round in 0..2 {
            for n in (1..=25).rev() {
                picker.toggle(n);
                assert!(picker.count() <= 15, "round {round}, n {n}");
            }
        }
        let selected = picker.selected();
        let mut deduped = selected.clone();
        deduped.dedup();
        assert_eq!(selected, deduped);
    }

    #[test]
    fn sixteenth_selection_is_ignored() {
        let mut picker = NumberPicker::default();
        for n in 1..=15 {
            assert!(picker.toggle(n));
        }
        assert!(picker.is_full());
        assert!(!picker.toggle(16));
        assert_eq!(picker.count(), 15);
        assert_eq!(picker.selected(), (1..=15).collect::<Vec<u8>>());
    }

    #[test]
    fn removal_is_always_legal_even_when_full() {
        let mut picker = NumberPicker::default();
        for n in 1..=15 {
            picker.toggle(n);
        }
        assert!(picker.toggle(7));
        assert_eq!(picker.count(), 14);
        assert!(!picker.is_selected(7));
        assert!(picker.toggle(20));
        assert!(picker.is_full());
    }

    #[test]
    fn confirm_requires_exactly_full_selection() {
        let mut picker = NumberPicker::default();
        for n in 1..=14 {
            picker.toggle(n);
        }
        assert_eq!(picker.confirm(), None);
        picker.toggle(25);
        let emitted = picker.confirm().unwrap();
        assert_eq!(emitted.len(), 15);
        assert!(emitted.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(picker.count(), 0);
    }

    #[test]
    fn confirm_emits_sorted_regardless_of_toggle_order() {
        let mut picker = NumberPicker::default();
        for n in [25, 3, 18, 1, 9, 14, 22, 5, 11, 7, 2, 19, 16, 4, 12] {
            picker.toggle(n);
        }
        let emitted = picker.confirm().unwrap();
        let mut sorted = emitted.clone();
        sorted.sort_unstable();
        assert_eq!(emitted, sorted);
    }

    #[test]
    fn out_of_range_numbers_are_rejected() {
        let mut picker = NumberPicker::default();
        assert!(!picker.toggle(0));
        assert!(!picker.toggle(26));
        assert_eq!(picker.count(), 0);
    }

    #[test]
    fn disabled_picker_ignores_every_operation() {
        let mut picker = NumberPicker::default();
        for n in 1..=15 {
            picker.toggle(n);
        }
        picker.set_disabled(true);
        assert!(!picker.toggle(1));
        assert_eq!(picker.confirm(), None);
        picker.clear();
        assert_eq!(picker.count(), 15);
    }

    #[test]
    fn clear_resets_unconditionally_when_enabled() {
        let mut picker = NumberPicker::default();
        picker.toggle(1);
        picker.toggle(2);
        picker.clear();
        assert_eq!(picker.count(), 0);
    }

    #[test]
    fn custom_dimensions_are_validated() {
        assert!(NumberPicker::new(60, 6).is_ok());
        assert!(NumberPicker::new(0, 1).is_err());
        assert!(NumberPicker::new(10, 0).is_err());
        assert!(NumberPicker::new(10, 11).is_err());
    }
}
