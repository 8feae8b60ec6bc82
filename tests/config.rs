#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::tasks::Tasks;
    use tudu::libs::config::Config;

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext {
                temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_returns_defaults_when_file_missing(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert!(config.data_dir.is_none());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(ctx: &mut ConfigTestContext) {
        let config = Config {
            data_dir: Some(ctx.temp_dir.path().join("custom")),
        };
        config.save().unwrap();

        let reread = Config::read().unwrap();
        assert_eq!(reread, config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_store_honors_data_dir_override(ctx: &mut ConfigTestContext) {
        let custom_dir = ctx.temp_dir.path().join("dbhome");
        Config {
            data_dir: Some(custom_dir.clone()),
        }
        .save()
        .unwrap();

        Tasks::new().unwrap().create("Located elsewhere").unwrap();

        assert!(custom_dir.join("todo.db").exists());
    }
}
