use datagrid::prelude::*;

#[derive(Debug, Clone, PartialEq)]
struct Entry {
    name: &'static str,
    priority: i64,
}

impl GridRecord for Entry {
    type Key = &'static str;

    fn key(&self) -> &'static str {
        self.name
    }
}

fn entries() -> Vec<Entry> {
    vec![
        Entry {
            name: "Alpha",
            priority: 1,
        },
        Entry {
            name: "Beta",
            priority: 2,
        },
        Entry {
            name: "Gamma",
            priority: 3,
        },
    ]
}

fn columns() -> Vec<ColumnDescriptor<Entry>> {
    vec![
        ColumnDescriptor::new("Name")
            .sort_by(|e: &Entry| Some(e.name.into()))
            .text_filter(|e: &Entry| e.name.to_string()),
        ColumnDescriptor::new("Priority")
            .numeric()
            .sort_by(|e: &Entry| Some(e.priority.into()))
            .number_filter(|e: &Entry| e.priority as f64),
    ]
}

fn names(grid: &Grid<Entry>) -> Vec<&'static str> {
    grid.rows().map(|e| e.name).collect()
}

#[test]
fn test_text_filter_is_case_insensitive() {
    let mut grid = Grid::new(columns()).with_rows(entries());
    grid.set_filter_value(0, "al");
    assert_eq!(names(&grid), vec!["Alpha"]);
}

#[test]
fn test_number_range_keeps_source_order() {
    let mut grid = Grid::new(columns()).with_rows(entries());
    grid.set_filter_min(1, Some("2".into()));
    assert_eq!(names(&grid), vec!["Beta", "Gamma"]);
}

#[test]
fn test_sort_ascending_then_descending() {
    let rows = vec![
        Entry {
            name: "b",
            priority: 2,
        },
        Entry {
            name: "a",
            priority: 1,
        },
        Entry {
            name: "c",
            priority: 3,
        },
    ];
    let mut grid = Grid::new(columns()).with_rows(rows);

    assert_eq!(grid.toggle_sort(1), Some(SortState::ascending(1)));
    let priorities: Vec<i64> = grid.rows().map(|e| e.priority).collect();
    assert_eq!(priorities, vec![1, 2, 3]);

    assert_eq!(grid.toggle_sort(1), Some(SortState::descending(1)));
    let priorities: Vec<i64> = grid.rows().map(|e| e.priority).collect();
    assert_eq!(priorities, vec![3, 2, 1]);
}

#[derive(Debug, Clone)]
struct Numbered(usize);

impl GridRecord for Numbered {
    type Key = usize;

    fn key(&self) -> usize {
        self.0
    }
}

#[test]
fn test_keyboard_paging_lands_on_page_start() {
    let columns = vec![
        ColumnDescriptor::new("N")
            .sort_by(|n: &Numbered| Some((n.0 as i64).into())),
    ];
    let config = GridConfig::default().with_page_size(10);
    let mut grid = Grid::with_config(columns, config)
        .unwrap()
        .with_rows((0..25).map(Numbered).collect());

    grid.toggle(7);
    assert_eq!(grid.selected_index(), Some(7));
    assert_eq!(grid.navigate(NavCommand::PageDown), RowAction::Selected);
    assert_eq!(grid.selected_index(), Some(10));
}

#[test]
fn test_empty_source() {
    let mut grid = Grid::new(columns());
    for command in [
        NavCommand::Up,
        NavCommand::Down,
        NavCommand::PageUp,
        NavCommand::PageDown,
        NavCommand::First,
        NavCommand::Last,
        NavCommand::Activate,
    ] {
        assert_eq!(grid.navigate(command), RowAction::Ignored);
    }
    assert_eq!(grid.selected_count(), 0);
    assert_eq!(grid.export_csv(), "Name,Priority\n");
}

#[test]
fn test_keyboard_activate_invokes_handler() {
    use std::sync::{Arc, Mutex};

    let seen = Arc::new(Mutex::new(None));
    let sink = Arc::clone(&seen);
    let mut grid = Grid::new(columns())
        .with_rows(entries())
        .on_activate(move |e: &Entry| *sink.lock().unwrap() = Some(e.name));

    assert_eq!(grid.navigate(NavCommand::Activate), RowAction::Ignored);
    grid.navigate(NavCommand::Down);
    assert_eq!(grid.navigate(NavCommand::Activate), RowAction::Activated);
    assert_eq!(*seen.lock().unwrap(), Some("Beta"));
}

#[test]
fn test_single_selection_control_clears() {
    let mut grid = Grid::new(columns()).with_rows(entries());
    assert_eq!(grid.toggle(1), RowAction::Selected);
    assert_eq!(grid.toggle(2), RowAction::Selected);
    assert_eq!(grid.selected_count(), 1);
    assert_eq!(grid.toggle(2), RowAction::Deselected);
    assert_eq!(grid.selected_index(), None);
}
