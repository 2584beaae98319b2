use super::list;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskStatus};
use crate::msg_success;
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task name
    name: String,

    /// Free-form task details
    #[arg(short, long, default_value = "")]
    details: String,

    /// Initial status: "todo", "in-progress", or "done"
    #[arg(short, long, default_value = "todo")]
    status: TaskStatus,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new(&config)?;

    let task = Task::new(&args.name, &args.details, args.status);
    let id = tasks.insert(&task)?;

    msg_success!(Message::TaskCreated(id));
    list::render(&mut tasks)
}
