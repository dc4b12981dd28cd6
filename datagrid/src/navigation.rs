//! Keyboard navigation.

/// A keyboard command understood by the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavCommand {
    /// Move one row up.
    Up,
    /// Move one row down.
    Down,
    /// Move one page up, landing on a page start.
    PageUp,
    /// Move one page down, landing on a page start.
    PageDown,
    /// Jump to the first row.
    First,
    /// Jump to the last row.
    Last,
    /// Activate the selected row.
    Activate,
}

/// Compute the row a movement command lands on.
///
/// `current` defaults to the first row when nothing is selected. Movement
/// clamps to the view and never wraps; paging snaps to the start of the page
/// containing the clamped target. Returns `None` for an empty view and for
/// [`NavCommand::Activate`], which does not move.
pub fn target_index(
    command: NavCommand,
    current: Option<usize>,
    len: usize,
    page_size: usize,
) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let last = len - 1;
    let current = current.unwrap_or(0).min(last);
    let page_size = page_size.max(1);
    let target = match command {
        NavCommand::Up => current.saturating_sub(1),
        NavCommand::Down => (current + 1).min(last),
        NavCommand::PageUp => page_start(current.saturating_sub(page_size), page_size),
        NavCommand::PageDown => page_start(current.saturating_add(page_size).min(last), page_size),
        NavCommand::First => 0,
        NavCommand::Last => last,
        NavCommand::Activate => return None,
    };
    Some(target)
}

fn page_start(index: usize, page_size: usize) -> usize {
    index / page_size * page_size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_up_down_clamp() {
        assert_eq!(target_index(NavCommand::Up, Some(0), 5, 10), Some(0));
        assert_eq!(target_index(NavCommand::Up, Some(3), 5, 10), Some(2));
        assert_eq!(target_index(NavCommand::Down, Some(4), 5, 10), Some(4));
        assert_eq!(target_index(NavCommand::Down, None, 5, 10), Some(1));
        assert_eq!(target_index(NavCommand::Up, None, 5, 10), Some(0));
    }

    #[test]
    fn test_page_down_snaps_to_page_start() {
        assert_eq!(target_index(NavCommand::PageDown, Some(7), 25, 10), Some(10));
        assert_eq!(target_index(NavCommand::PageDown, Some(10), 25, 10), Some(20));
        assert_eq!(target_index(NavCommand::PageDown, Some(20), 25, 10), Some(20));
    }

    #[test]
    fn test_page_up_snaps_to_page_start() {
        assert_eq!(target_index(NavCommand::PageUp, Some(17), 25, 10), Some(0));
        assert_eq!(target_index(NavCommand::PageUp, Some(24), 25, 10), Some(10));
        assert_eq!(target_index(NavCommand::PageUp, Some(3), 25, 10), Some(0));
    }

    #[test]
    fn test_first_last() {
        assert_eq!(target_index(NavCommand::First, Some(9), 12, 5), Some(0));
        assert_eq!(target_index(NavCommand::Last, None, 12, 5), Some(11));
    }

    #[test]
    fn test_stale_index_is_clamped() {
        assert_eq!(target_index(NavCommand::Up, Some(40), 5, 10), Some(3));
    }

    #[test]
    fn test_empty_view_and_activate_do_not_move() {
        assert_eq!(target_index(NavCommand::Down, Some(0), 0, 10), None);
        assert_eq!(target_index(NavCommand::PageDown, None, 0, 10), None);
        assert_eq!(target_index(NavCommand::Activate, Some(1), 5, 10), None);
    }

    #[test]
    fn test_zero_page_size_moves_one_row() {
        assert_eq!(target_index(NavCommand::PageDown, Some(2), 5, 0), Some(3));
    }
}
