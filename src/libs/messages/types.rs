#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskCompleted(i64),
    TaskAlreadyCompleted(i64),
    TaskRenamed(String),
    TaskDeleted(i64),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksFound,
    EmptyTaskDescription,
    ConfirmDeleteTask(String),
    PromptTaskDescription,
    PromptNewDescription,
    SelectTask,
    SelectAction,
    OperationCancelled,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigReadError(String),
    ConfigParseError(String),
    PromptDataDir,

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    NoTasksToExport,
}
