use thiserror::Error;

/// Failures of the local key-value store that holds test results.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not encode results: {0}")]
    Json(#[from] serde_json::Error),

    /// No backing store (e.g. `localStorage` disabled in the browser).
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Problems found while loading or validating the static test catalogue.
#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("could not parse catalogue: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("test `{0}` has no questions")]
    EmptyTest(String),

    #[error("test `{test_id}` declares {declared} questions but has {actual}")]
    QuestionCountMismatch {
        test_id: String,
        declared: usize,
        actual: usize,
    },

    #[error("question `{question_id}` of test `{test_id}` has correct answer {index} out of {options} options")]
    CorrectAnswerOutOfRange {
        test_id: String,
        question_id: String,
        index: usize,
        options: usize,
    },

    #[error("duplicate test id `{0}`")]
    DuplicateTestId(String),

    #[error("duplicate question id `{question_id}` in test `{test_id}`")]
    DuplicateQuestionId { test_id: String, question_id: String },

    #[error("test `{test_id}` uses unknown category `{category}`")]
    UnknownCategory { test_id: String, category: String },
}
