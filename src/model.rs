use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "Oson",
            Difficulty::Medium => "O'rtacha",
            Difficulty::Hard => "Qiyin",
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub icon: String,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Question {
    pub id: String,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

impl Question {
    pub fn is_correct(&self, selected: Option<usize>) -> bool {
        selected == Some(self.correct_answer)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Test {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: String,
    pub question_count: usize,
    /// Minutes.
    pub duration: u32,
    pub difficulty: Difficulty,
    pub questions: Vec<Question>,
}

impl Test {
    pub fn duration_secs(&self) -> u32 {
        self.duration * 60
    }
}

/// Outcome of one question in a submitted attempt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnswerRecord {
    pub question_id: String,
    #[serde(with = "unanswered_sentinel")]
    pub selected_answer: Option<usize>,
    pub is_correct: bool,
}

/// A completed attempt. Field names follow the layout persisted under `testResults`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TestResult {
    pub id: String,
    pub test_id: String,
    pub test_title: String,
    pub score: u32,
    pub total_questions: usize,
    pub correct_answers: usize,
    /// Seconds.
    pub time_taken: u32,
    pub completed_at: DateTime<Utc>,
    pub answers: Vec<AnswerRecord>,
}

/// Unanswered questions are stored as `-1`, never a valid option index.
pub(crate) mod unanswered_sentinel {
    use serde::{Deserialize, Deserializer, Serializer};

    pub const UNANSWERED: i64 = -1;

    pub fn serialize<S: Serializer>(value: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(idx) => s.serialize_i64(*idx as i64),
            None => s.serialize_i64(UNANSWERED),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<usize>, D::Error> {
        let raw = i64::deserialize(d)?;
        Ok(usize::try_from(raw).ok())
    }
}

/// Screens of the app. Each one maps to a route path.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub enum AppState {
    #[default]
    Home,
    Tests {
        category: Option<String>,
    },
    Quiz {
        test_id: String,
    },
    Results,
    ResultDetail {
        result_id: String,
    },
    Profile,
}

impl AppState {
    /// Parses `/`, `/tests?category=x`, `/quiz/<id>`, `/results`, `/results/<id>`, `/profile`.
    /// Unknown paths land on home.
    pub fn from_path(path: &str) -> Self {
        let path = path.trim().trim_start_matches('#');
        let (path, query) = match path.split_once('?') {
            Some((p, q)) => (p, Some(q)),
            None => (path, None),
        };
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        match segments.as_slice() {
            [] => AppState::Home,
            ["tests"] => AppState::Tests {
                category: query.and_then(|q| query_param(q, "category")),
            },
            ["quiz", id] => AppState::Quiz {
                test_id: (*id).to_string(),
            },
            ["results"] => AppState::Results,
            ["results", id] => AppState::ResultDetail {
                result_id: (*id).to_string(),
            },
            ["profile"] => AppState::Profile,
            _ => AppState::Home,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppState::Home => "/".to_string(),
            AppState::Tests { category: None } => "/tests".to_string(),
            AppState::Tests {
                category: Some(cat),
            } => format!("/tests?category={cat}"),
            AppState::Quiz { test_id } => format!("/quiz/{test_id}"),
            AppState::Results => "/results".to_string(),
            AppState::ResultDetail { result_id } => format!("/results/{result_id}"),
            AppState::Profile => "/profile".to_string(),
        }
    }
}

fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .filter_map(|pair| pair.split_once('='))
        .find(|(k, _)| *k == key)
        .map(|(_, v)| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
