#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use tudu::db::tasks::Tasks;
    use tudu::libs::export::{ExportFormat, Exporter};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ExportTestContext {
        temp_dir: TempDir,
        _guard: MutexGuard<'static, ()>,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ExportTestContext {
                temp_dir,
                _guard: guard,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create("Write report").unwrap();
        tasks.create("Send invoice").unwrap();

        let output_path = ctx.temp_dir.path().join("tasks.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export().unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.starts_with("id,task,date,status"));
        assert!(content.contains("Write report"));
        assert!(content.contains("Pending"));
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let mut tasks = Tasks::new().unwrap();
        tasks.create("Only task").unwrap();

        let output_path = ctx.temp_dir.path().join("tasks.json");
        Exporter::new(ExportFormat::Json, Some(output_path.clone())).export().unwrap();

        assert!(output_path.exists());
        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
        let rows = parsed.as_array().unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["task"], "Only task");
        assert_eq!(rows[0]["status"], "Pending");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        Tasks::new().unwrap().create("Spreadsheet task").unwrap();

        let output_path = ctx.temp_dir.path().join("tasks.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone())).export().unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_store_writes_nothing(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone())).export().unwrap();

        assert!(!output_path.exists());
    }
}
