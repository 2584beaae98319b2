#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use tasq::db::tasks::Tasks;
    use tasq::libs::config::Config;
    use tasq::libs::error::TaskError;
    use tasq::libs::task::{Task, TaskStatus};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct TaskTestContext {
        _temp_dir: TempDir,
        config: Config,
    }

    impl TestContext for TaskTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let config = Config {
                db_path: Some(PathBuf::from(temp_dir.path().join("tasq.db"))),
            };
            TaskTestContext {
                _temp_dir: temp_dir,
                config,
            }
        }
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_and_fetch_all(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let id = tasks.insert(&Task::new("Test task", "Some details", TaskStatus::ToDo)).unwrap();

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].id, Some(id));
        assert_eq!(all[0].name, "Test task");
        assert_eq!(all[0].details, "Some details");
        assert_eq!(all[0].status, TaskStatus::ToDo);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_assigns_unique_ascending_ids(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        for i in 1..=5 {
            tasks.insert(&Task::new(&format!("Task {}", i), "", TaskStatus::ToDo)).unwrap();
        }

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 5);
        let ids: Vec<i64> = all.iter().filter_map(|t| t.id).collect();
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(ids, sorted);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_insert_empty_name_fails_validation(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let result = tasks.insert(&Task::new("", "details", TaskStatus::ToDo));
        assert!(matches!(result, Err(TaskError::Validation(_))));

        // Whitespace-only names count as empty too.
        let result = tasks.insert(&Task::new("   ", "", TaskStatus::ToDo));
        assert!(matches!(result, Err(TaskError::Validation(_))));

        // Nothing was persisted.
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_rewrites_fields_and_leaves_others(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let first = tasks.insert(&Task::new("First", "a", TaskStatus::ToDo)).unwrap();
        let second = tasks.insert(&Task::new("Second", "b", TaskStatus::ToDo)).unwrap();

        let mut task = tasks.get_by_id(first).unwrap().unwrap();
        task.name = "Updated name".to_string();
        task.details = "Updated details".to_string();
        task.status = TaskStatus::Done;
        tasks.update(&task).unwrap();

        let updated = tasks.get_by_id(first).unwrap().unwrap();
        assert_eq!(updated.name, "Updated name");
        assert_eq!(updated.details, "Updated details");
        assert_eq!(updated.status, TaskStatus::Done);

        // The other row is untouched.
        let other = tasks.get_by_id(second).unwrap().unwrap();
        assert_eq!(other.name, "Second");
        assert_eq!(other.details, "b");
        assert_eq!(other.status, TaskStatus::ToDo);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_update_nonexistent_id_is_not_found(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let mut task = Task::new("Ghost", "", TaskStatus::ToDo);
        task.id = Some(42);

        let result = tasks.update(&task);
        assert!(matches!(result, Err(TaskError::NotFound(42))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_removes_exactly_one_row(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let first = tasks.insert(&Task::new("Keep me", "", TaskStatus::ToDo)).unwrap();
        let second = tasks.insert(&Task::new("Delete me", "", TaskStatus::Done)).unwrap();

        tasks.delete(second).unwrap();

        let remaining = tasks.fetch_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, Some(first));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_delete_nonexistent_id_is_not_found(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let result = tasks.delete(99);
        assert!(matches!(result, Err(TaskError::NotFound(99))));
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_fetch_all_on_empty_table_is_empty(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        let all = tasks.fetch_all().unwrap();
        assert!(all.is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_get_by_id_missing_returns_none(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        assert!(tasks.get_by_id(1).unwrap().is_none());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_full_task_lifecycle(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        // Create
        let id = tasks.insert(&Task::new("Buy milk", "2%", TaskStatus::ToDo)).unwrap();
        assert_eq!(id, 1);
        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].name, "Buy milk");
        assert_eq!(all[0].details, "2%");
        assert_eq!(all[0].status, TaskStatus::ToDo);

        // Update
        tasks
            .update(&Task {
                id: Some(id),
                name: "Buy milk".to_string(),
                details: "Whole".to_string(),
                status: TaskStatus::Done,
            })
            .unwrap();
        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].details, "Whole");
        assert_eq!(all[0].status, TaskStatus::Done);

        // Delete
        tasks.delete(id).unwrap();
        assert!(tasks.fetch_all().unwrap().is_empty());
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_round_trips_through_storage(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        for status in TaskStatus::all() {
            tasks.insert(&Task::new(status.as_str(), "", status)).unwrap();
        }

        let all = tasks.fetch_all().unwrap();
        let statuses: Vec<TaskStatus> = all.iter().map(|t| t.status).collect();
        assert_eq!(statuses, vec![TaskStatus::ToDo, TaskStatus::InProgress, TaskStatus::Done]);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_status_written_behind_store_boundary(ctx: &mut TaskTestContext) {
        let mut tasks = Tasks::new(&ctx.config).unwrap();

        // The status column carries no constraint, so a raw connection
        // can write text the store never produces. Reading it back is a
        // store error, not a panic.
        let conn = rusqlite::Connection::open(ctx.config.db_path.as_ref().unwrap()).unwrap();
        conn.execute("INSERT INTO tasks (task_name, details, status) VALUES ('Sneaky', '', 'Cancelled')", [])
            .unwrap();

        let result = tasks.fetch_all();
        assert!(matches!(result, Err(TaskError::Store(_))));

        // NULL status falls back to the default.
        conn.execute("UPDATE tasks SET status = NULL WHERE task_name = 'Sneaky'", []).unwrap();

        let all = tasks.fetch_all().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].status, TaskStatus::ToDo);
    }

    #[test_context(TaskTestContext)]
    #[test]
    fn test_reopening_store_keeps_data(ctx: &mut TaskTestContext) {
        let id = {
            let mut tasks = Tasks::new(&ctx.config).unwrap();
            tasks.insert(&Task::new("Persistent", "", TaskStatus::InProgress)).unwrap()
        };

        // A second handle against the same file sees the same data.
        let mut tasks = Tasks::new(&ctx.config).unwrap();
        let task = tasks.get_by_id(id).unwrap().unwrap();
        assert_eq!(task.name, "Persistent");
        assert_eq!(task.status, TaskStatus::InProgress);
    }
}
