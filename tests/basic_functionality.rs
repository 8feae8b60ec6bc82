#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::db::Db;
    use tudu::db::tasks::Tasks;
    use tudu::libs::task::{Task, TaskStatus};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct BasicTestContext {
        _temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for BasicTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            BasicTestContext {
                _temp_dir: temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(BasicTestContext)]
    #[test]
    fn test_database_initialization(_ctx: &mut BasicTestContext) {
        assert!(Db::new().is_ok());

        // Opening the store repeatedly is idempotent.
        let _first = Tasks::new().unwrap();
        let _second = Tasks::new().unwrap();
    }

    #[test_context(BasicTestContext)]
    #[test]
    fn test_new_task_defaults(_ctx: &mut BasicTestContext) {
        let task = Task::new("Fresh task");
        assert!(task.id.is_none());
        assert!(task.date.is_none());
        assert_eq!(task.status, TaskStatus::Pending);
        assert_eq!(task.description, "Fresh task");
    }

    #[test_context(BasicTestContext)]
    #[test]
    fn test_status_text_round_trip(_ctx: &mut BasicTestContext) {
        assert_eq!("Pending".parse::<TaskStatus>().unwrap(), TaskStatus::Pending);
        assert_eq!("Completed".parse::<TaskStatus>().unwrap(), TaskStatus::Completed);
        assert_eq!(TaskStatus::Pending.to_string(), "Pending");
        assert_eq!(TaskStatus::Completed.to_string(), "Completed");
        assert!("Done".parse::<TaskStatus>().is_err());
    }

    #[test_context(BasicTestContext)]
    #[test]
    fn test_status_survives_storage(_ctx: &mut BasicTestContext) {
        let mut tasks = Tasks::new().unwrap();
        let id = tasks.create("Persisted status").unwrap().id.unwrap();
        tasks.set_status(id, TaskStatus::Completed).unwrap();

        let stored = Tasks::new().unwrap().get_by_id(id).unwrap().unwrap();
        assert_eq!(stored.status, TaskStatus::Completed);
    }
}
