use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", "NAME", "DETAILS", "STATUS"]);
        for task in tasks {
            table.add_row(row![task.id.unwrap_or(0), task.name, task.details, task.status]);
        }
        table.printstd();

        Ok(())
    }
}
