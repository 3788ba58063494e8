/// Index of the highlighted row in a list that is rebuilt on every refresh.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected_index: Option<usize>,
}

impl SelectionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn next(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => (idx + 1).min(len - 1),
            None => 0,
        });
    }

    pub fn prev(&mut self, len: usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => idx.saturating_sub(1),
            None => 0,
        });
    }

    /// Keeps the selection inside `0..len` after the list changed size.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stops_at_end() {
        let mut selection = SelectionState::new();
        selection.next(2);
        assert_eq!(selection.get(), Some(0));
        selection.next(2);
        selection.next(2);
        assert_eq!(selection.get(), Some(1));
    }

    #[test]
    fn test_prev_stops_at_start() {
        let mut selection = SelectionState::new();
        selection.next(3);
        selection.next(3);
        selection.prev(3);
        selection.prev(3);
        assert_eq!(selection.get(), Some(0));
    }

    #[test]
    fn test_clamp_after_shrink() {
        let mut selection = SelectionState::new();
        for _ in 0..5 {
            selection.next(5);
        }
        assert_eq!(selection.get(), Some(4));
        selection.clamp(2);
        assert_eq!(selection.get(), Some(1));
        selection.clamp(0);
        assert_eq!(selection.get(), None);
        selection.clamp(3);
        assert_eq!(selection.get(), Some(0));
    }
}
