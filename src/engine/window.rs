use serde::Serialize;

/// Largest number of rows the count selector offers.
pub const MAX_RESULT_COUNT: usize = 20;

/// First `min(requested, rows.len())` rows.
pub fn window<T: Clone>(rows: &[T], requested: usize) -> Vec<T> {
    rows.iter().take(requested).cloned().collect()
}

/// Upper bound for the count selector given how many rows matched.
///
/// Never below one, even when nothing matched.
pub fn current_max(matched: usize) -> usize {
    matched.clamp(1, MAX_RESULT_COUNT)
}

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct CountOption {
    pub value: usize,
    pub disabled: bool,
}

pub fn count_options(max: usize) -> Vec<CountOption> {
    (1..=MAX_RESULT_COUNT)
        .map(|value| CountOption {
            value,
            disabled: value > max,
        })
        .collect()
}

/// Display-count state for one results session.
///
/// Remembers the last count the user picked and re-clamps it against the
/// current maximum, so shrinking and regrowing the matched set brings the
/// user's own choice back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResultCountSelection {
    chosen: usize,
    max: usize,
}

impl ResultCountSelection {
    pub fn new(chosen: usize) -> Self {
        Self {
            chosen: chosen.clamp(1, MAX_RESULT_COUNT),
            max: MAX_RESULT_COUNT,
        }
    }

    // Options above the current max are disabled, so a pick beyond it is clamped.
    pub fn choose(&mut self, count: usize) {
        self.chosen = count.clamp(1, self.max);
    }

    pub fn set_available(&mut self, matched: usize) {
        self.max = current_max(matched);
    }

    pub fn chosen(&self) -> usize {
        self.chosen
    }

    pub fn max(&self) -> usize {
        self.max
    }

    pub fn effective(&self) -> usize {
        self.chosen.min(self.max)
    }

    pub fn options(&self) -> Vec<CountOption> {
        count_options(self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_length_is_min_of_request_and_len() {
        let rows: Vec<u32> = (0..7).collect();
        for n in 0..12 {
            assert_eq!(window(&rows, n).len(), n.min(rows.len()));
        }
        assert_eq!(window(&rows, 3), vec![0, 1, 2]);
        assert!(window::<u32>(&[], 5).is_empty());
    }

    #[test]
    fn shrinking_then_regrowing_restores_the_choice() {
        let mut selection = ResultCountSelection::new(8);
        selection.set_available(20);
        selection.choose(15);
        assert_eq!(selection.effective(), 15);

        selection.set_available(5);
        assert_eq!(selection.effective(), 5);

        selection.set_available(20);
        assert_eq!(selection.effective(), 15);
    }

    #[test]
    fn empty_match_keeps_a_max_of_one() {
        let mut selection = ResultCountSelection::new(8);
        selection.set_available(0);
        assert_eq!(selection.max(), 1);
        assert_eq!(selection.effective(), 1);
        assert_eq!(selection.chosen(), 8);
    }

    #[test]
    fn options_above_max_are_disabled() {
        let mut selection = ResultCountSelection::new(8);
        selection.set_available(5);
        let options = selection.options();
        assert_eq!(options.len(), MAX_RESULT_COUNT);
        assert!(options.iter().filter(|o| o.value <= 5).all(|o| !o.disabled));
        assert!(options.iter().filter(|o| o.value >= 6).all(|o| o.disabled));
    }

    #[test]
    fn choosing_beyond_max_clamps() {
        let mut selection = ResultCountSelection::new(8);
        selection.set_available(4);
        selection.choose(12);
        assert_eq!(selection.chosen(), 4);
        selection.choose(0);
        assert_eq!(selection.chosen(), 1);
    }
}
