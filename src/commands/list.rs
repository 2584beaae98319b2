use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::view::View;
use crate::{msg_info, msg_print};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new(&config)?;

    render(&mut tasks)
}

/// Reloads every row and renders the full table. Mutating commands call
/// this after each change; nothing is cached between operations.
pub fn render(tasks: &mut Tasks) -> Result<()> {
    let all = tasks.fetch_all()?;

    if all.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    msg_print!(Message::TasksHeader, true);
    View::tasks(&all)
}
