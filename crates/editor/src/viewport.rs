//! Vertical scrolling of the text area.

/// Scroll state: index of the first display row shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Viewport {
    scroll: usize,
}

impl Viewport {
    pub fn new() -> Self {
        Self::default()
    }

    /// First visible display row
    pub fn scroll(&self) -> usize {
        self.scroll
    }

    /// Bring `cursor_row` into a window of `visible_rows` rows.
    ///
    /// Scrolls the minimum distance in one step; a zero-height window is
    /// treated as one row.
    pub fn adjust(&mut self, cursor_row: usize, visible_rows: usize) {
        let visible_rows = visible_rows.max(1);
        if cursor_row < self.scroll {
            self.scroll = cursor_row;
        } else if cursor_row >= self.scroll + visible_rows {
            self.scroll = cursor_row + 1 - visible_rows;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_down_to_reveal() {
        let mut viewport = Viewport::new();
        viewport.adjust(10, 5);
        assert_eq!(viewport.scroll(), 6);
        viewport.adjust(10, 5);
        assert_eq!(viewport.scroll(), 6);
    }

    #[test]
    fn test_scroll_up_to_reveal() {
        let mut viewport = Viewport::new();
        viewport.adjust(100, 5);
        viewport.adjust(3, 5);
        assert_eq!(viewport.scroll(), 3);
    }

    #[test]
    fn test_unchanged_inside_window() {
        let mut viewport = Viewport::new();
        viewport.adjust(20, 10);
        assert_eq!(viewport.scroll(), 11);
        viewport.adjust(15, 10);
        assert_eq!(viewport.scroll(), 11);
        viewport.adjust(11, 10);
        assert_eq!(viewport.scroll(), 11);
    }

    #[test]
    fn test_zero_height_window() {
        let mut viewport = Viewport::new();
        viewport.adjust(4, 0);
        assert_eq!(viewport.scroll(), 4);
        viewport.adjust(6, 0);
        assert_eq!(viewport.scroll(), 6);
    }
}
