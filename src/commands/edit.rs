use super::list;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::TaskStatus;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// ID of the task to edit
    id: i64,

    /// New task name
    #[arg(short, long)]
    name: Option<String>,

    /// New task details
    #[arg(short, long)]
    details: Option<String>,

    /// New status: "todo", "in-progress", or "done"
    #[arg(short, long)]
    status: Option<TaskStatus>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new(&config)?;

    // Load the current row so unspecified fields keep their values.
    let Some(mut task) = tasks.get_by_id(args.id)? else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    };

    if args.name.is_none() && args.details.is_none() && args.status.is_none() {
        msg_info!(Message::NoChangesDetected);
        return Ok(());
    }

    if let Some(name) = args.name {
        task.name = name;
    }
    if let Some(details) = args.details {
        task.details = details;
    }
    if let Some(status) = args.status {
        task.status = status;
    }

    tasks.update(&task)?;

    msg_success!(Message::TaskUpdated(args.id));
    list::render(&mut tasks)
}
