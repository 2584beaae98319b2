use super::list;
use crate::db::tasks::Tasks;
use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_info, msg_success};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// ID of the task to delete
    id: i64,

    /// Skip the confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let mut tasks = Tasks::new(&config)?;

    let Some(task) = tasks.get_by_id(args.id)? else {
        msg_bail_anyhow!(Message::TaskNotFoundWithId(args.id));
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.name.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    tasks.delete(args.id)?;

    msg_success!(Message::TaskDeleted(args.id));
    list::render(&mut tasks)
}
