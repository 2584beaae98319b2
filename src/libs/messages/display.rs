//! Display implementation converting `Message` variants into terminal text.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created successfully", id),
            Message::TaskUpdated(id) => format!("Task #{} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted successfully", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found", id),
            Message::TasksHeader => "📋 Tasks".to_string(),
            Message::NoTasksFound => "No tasks yet. Add one with `tasq add <name>`".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete task '{}'?", name),
            Message::DeleteCancelled => "Nothing deleted".to_string(),
            Message::NoChangesDetected => "No changes provided, task left as is".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigInitHeader => "🔧 Tasq configuration".to_string(),
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::PromptDbPath => "Database file location".to_string(),
        };

        write!(f, "{}", text)
    }
}
