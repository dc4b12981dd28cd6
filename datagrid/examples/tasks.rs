//! Grid Example
//!
//! Drives a grid of generated tasks through a short scripted session:
//! filtering, sorting, keyboard navigation, selection and CSV export.
//! Logs go to `datagrid-tasks.log`.

use std::fs::File;
use std::io;

use chrono::NaiveDate;
use datagrid::prelude::*;
use log::LevelFilter;
use simplelog::{Config, WriteLogger};

/// A task record for the grid.
#[derive(Clone, Debug)]
struct Task {
    id: u32,
    title: String,
    owner: String,
    status: String,
    estimate: f64,
    due: NaiveDate,
}

impl GridRecord for Task {
    type Key = u32;

    fn key(&self) -> u32 {
        self.id
    }
}

const STATUSES: [&str; 4] = ["todo", "doing", "review", "done"];

/// Create sample tasks for the grid.
fn create_sample_tasks() -> Vec<Task> {
    let verbs = ["Fix", "Write", "Review", "Ship", "Design"];
    let things = ["login", "export", "docs", "release notes", "parser", "cache"];
    let owners = ["Alice", "Bob", "Charlie", "Diana"];

    (1..=60u32)
        .map(|i| {
            let n = i as usize;
            Task {
                id: i,
                title: format!(
                    "{} {}",
                    verbs[n % verbs.len()],
                    things[n % things.len()]
                ),
                owner: owners[n % owners.len()].to_string(),
                status: STATUSES[n % STATUSES.len()].to_string(),
                estimate: f64::from(i % 8) + 0.5,
                due: NaiveDate::from_ymd_opt(2025, 1 + i % 12, 1 + i % 28)
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Create column definitions.
fn create_columns() -> Vec<ColumnDescriptor<Task>> {
    vec![
        ColumnDescriptor::new("ID")
            .numeric()
            .sort_by(|t: &Task| Some(t.id.into())),
        ColumnDescriptor::new("Title")
            .sort_by(|t: &Task| Some(t.title.clone().into()))
            .text_filter(|t: &Task| t.title.clone()),
        ColumnDescriptor::new("Owner")
            .sort_by(|t: &Task| Some(t.owner.clone().into()))
            .text_filter(|t: &Task| t.owner.clone()),
        ColumnDescriptor::new("Status")
            .sort_by(|t: &Task| Some(t.status.clone().into()))
            .select_filter(STATUSES, |t: &Task| t.status.clone()),
        ColumnDescriptor::new("Estimate")
            .numeric()
            .sort_by(|t: &Task| Some(t.estimate.into()))
            .csv_by(|t: &Task| Some(format!("{:.1}h", t.estimate)))
            .number_filter(|t: &Task| t.estimate),
        ColumnDescriptor::new("Due")
            .sort_by(|t: &Task| Some(t.due.into()))
            .date_filter(|t: &Task| t.due),
    ]
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("datagrid-tasks.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let config = GridConfig::default().with_page_size(5);
    let mut grid = Grid::with_config(create_columns(), config)?
        .with_rows(create_sample_tasks())
        .on_activate(|task: &Task| println!("Activated #{}: {}", task.id, task.title));

    println!("{} tasks, {} pages", grid.len(), grid.page_count());

    grid.set_filter_value(3, "review");
    grid.set_filter_min(4, Some("2".into()));
    grid.set_filter_range(5, Some("2025-03-01".into()), Some("2025-12-31".into()));
    println!("After filters: {} tasks", grid.len());

    grid.toggle_sort(5);
    grid.toggle_sort(5);
    println!("Sorted by due date, newest first");

    grid.navigate(NavCommand::Down);
    grid.navigate(NavCommand::PageDown);
    println!(
        "Selected row {:?} on page {} of {}",
        grid.selected_index(),
        grid.page() + 1,
        grid.page_count()
    );
    grid.navigate(NavCommand::Activate);

    grid.toggle_column("Owner");
    println!();
    print!("{}", grid.export_visible_csv());

    println!();
    grid.write_csv(&mut io::stdout().lock())?;

    Ok(())
}
