// src/view_models.rs

use chrono::{DateTime, Local, Utc};

use crate::model::Difficulty;
use crate::scoring::ScoreBand;

#[derive(Clone, Debug)]
pub struct CategoryInfo {
    pub id: String,
    pub name: String,
    pub icon: String,
    pub test_count: usize,
}

#[derive(Clone, Debug)]
pub struct TestCardInfo {
    pub id: String,
    pub category_icon: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub question_count: usize,
    pub duration_min: u32,
}

#[derive(Clone, Debug)]
pub struct ResultRow {
    pub id: String,
    pub test_title: String,
    pub score: u32,
    pub correct_answers: usize,
    pub total_questions: usize,
    pub time_taken: u32,
    pub completed_at: DateTime<Utc>,
}

/// How one option is drawn in the answer review.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OptionMark {
    Correct,
    WrongPick,
    Plain,
}

#[derive(Clone, Debug)]
pub struct ReviewRow {
    pub number: usize,
    pub question: String,
    pub is_correct: bool,
    pub options: Vec<(String, OptionMark)>,
}

impl CategoryInfo {
    pub fn label(&self) -> String {
        format!("{} {}\n{} ta test", self.icon, self.name, self.test_count)
    }
}

impl ResultRow {
    pub fn band(&self) -> ScoreBand {
        ScoreBand::of(self.score)
    }

    pub fn summary_line(&self) -> String {
        format!(
            "{}/{} · {} · {}",
            self.correct_answers,
            self.total_questions,
            format_minutes_seconds(self.time_taken),
            format_date(self.completed_at)
        )
    }
}

/// Option letter: A, B, C…
pub fn option_letter(index: usize) -> char {
    (b'A' + (index % 26) as u8) as char
}

/// `mm:ss`, as on the quiz timer.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// `m:ss`, as in the result list.
pub fn format_minutes_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

pub fn format_duration_long(seconds: u32) -> String {
    format!("{} daqiqa {} soniya", seconds / 60, seconds % 60)
}

pub fn format_date(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%d.%m %H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_formats() {
        assert_eq!(format_clock(900), "15:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_minutes_seconds(125), "2:05");
        assert_eq!(format_duration_long(125), "2 daqiqa 5 soniya");
    }

    #[test]
    fn option_letters() {
        assert_eq!(option_letter(0), 'A');
        assert_eq!(option_letter(3), 'D');
    }

}
