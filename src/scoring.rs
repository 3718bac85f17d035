use chrono::{DateTime, Utc};

use crate::model::{AnswerRecord, Test, TestResult};

/// `round(100 * correct / total)` with halves rounded up; 0 for an empty test.
pub fn percentage(correct: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    ((200 * correct + total) / (2 * total)) as u32
}

/// Integer mean rounded half up.
fn rounded_div(sum: u64, count: u64) -> u64 {
    if count == 0 {
        0
    } else {
        (2 * sum + count) / (2 * count)
    }
}

/// Grades an answer sheet. `answers[i]` is the option picked for question `i`;
/// missing entries count as unanswered.
pub fn grade(
    test: &Test,
    answers: &[Option<usize>],
    elapsed_secs: u32,
    completed_at: DateTime<Utc>,
) -> TestResult {
    let records: Vec<AnswerRecord> = test
        .questions
        .iter()
        .enumerate()
        .map(|(i, q)| {
            let selected = answers.get(i).copied().flatten();
            AnswerRecord {
                question_id: q.id.clone(),
                selected_answer: selected,
                is_correct: q.is_correct(selected),
            }
        })
        .collect();

    let correct_answers = records.iter().filter(|a| a.is_correct).count();
    let total_questions = test.questions.len();

    TestResult {
        id: format!("result-{}", completed_at.timestamp_millis()),
        test_id: test.id.clone(),
        test_title: test.title.clone(),
        score: percentage(correct_answers, total_questions),
        total_questions,
        correct_answers,
        time_taken: elapsed_secs,
        completed_at,
        answers: records,
    }
}

/// Aggregates shown on the home and profile screens.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    pub tests_taken: usize,
    pub average_score: u32,
    pub best_score: u32,
    pub total_minutes: u64,
}

impl Stats {
    pub fn from_results(results: &[TestResult]) -> Self {
        let tests_taken = results.len();
        let score_sum: u64 = results.iter().map(|r| u64::from(r.score)).sum();
        let total_secs: u64 = results.iter().map(|r| u64::from(r.time_taken)).sum();

        Self {
            tests_taken,
            average_score: rounded_div(score_sum, tests_taken as u64) as u32,
            best_score: results.iter().map(|r| r.score).max().unwrap_or(0),
            total_minutes: rounded_div(total_secs, 60),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreBand {
    High,
    Medium,
    Low,
}

impl ScoreBand {
    pub fn of(score: u32) -> Self {
        if score >= 80 {
            ScoreBand::High
        } else if score >= 60 {
            ScoreBand::Medium
        } else {
            ScoreBand::Low
        }
    }
}

pub fn score_message(score: u32) -> &'static str {
    match score {
        90.. => "A'lo natija!",
        80..=89 => "Yaxshi natija!",
        60..=79 => "Qoniqarli",
        40..=59 => "O'rtacha",
        _ => "Ko'proq mashq qiling",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Difficulty, Question};
    use chrono::TimeZone;

    fn ten_question_test() -> Test {
        let questions = (0..10)
            .map(|i| Question {
                id: format!("q{}", i + 1),
                question: format!("Savol {}", i + 1),
                options: vec!["a".into(), "b".into(), "c".into(), "d".into()],
                correct_answer: i % 4,
            })
            .collect();
        Test {
            id: "math-1".into(),
            title: "Algebra asoslari".into(),
            description: String::new(),
            category: "math".into(),
            question_count: 10,
            duration: 15,
            difficulty: Difficulty::Easy,
            questions,
        }
    }

    fn at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 9, 30, 0).unwrap()
    }

    #[test]
    fn all_correct_scores_100_and_none_correct_scores_0() {
        let test = ten_question_test();
        let right: Vec<Option<usize>> = test.questions.iter().map(|q| Some(q.correct_answer)).collect();
        let result = grade(&test, &right, 120, at());
        assert_eq!(result.score, 100);
        assert_eq!(result.correct_answers, 10);

        let wrong: Vec<Option<usize>> = test
            .questions
            .iter()
            .map(|q| Some((q.correct_answer + 1) % 4))
            .collect();
        let result = grade(&test, &wrong, 120, at());
        assert_eq!(result.score, 0);
        assert_eq!(result.correct_answers, 0);
    }

    #[test]
    fn correctness_flags_add_up_to_correct_answers() {
        let test = ten_question_test();
        let mut answers = vec![None; 10];
        answers[0] = Some(0); // correct
        answers[1] = Some(1); // correct
        answers[2] = Some(0); // wrong
        answers[5] = Some(1); // correct
        let result = grade(&test, &answers, 42, at());

        let flagged = result.answers.iter().filter(|a| a.is_correct).count();
        assert_eq!(flagged, result.correct_answers);
        assert_eq!(result.correct_answers, 3);
        assert_eq!(result.score, 30);
        assert_eq!(result.answers.len(), test.question_count);
        assert_eq!(result.answers[3].selected_answer, None);
        assert!(!result.answers[3].is_correct);
        assert_eq!(result.time_taken, 42);
        assert_eq!(result.id, format!("result-{}", at().timestamp_millis()));
    }

    #[test]
    fn short_answer_sheet_counts_missing_as_unanswered() {
        let test = ten_question_test();
        let result = grade(&test, &[Some(0)], 1, at());
        assert_eq!(result.answers.len(), 10);
        assert_eq!(result.correct_answers, 1);
    }

    #[test]
    fn percentage_rounds_half_up() {
        assert_eq!(percentage(1, 3), 33);
        assert_eq!(percentage(2, 3), 67);
        assert_eq!(percentage(1, 8), 13); // 12.5
        assert_eq!(percentage(0, 0), 0);
    }

    #[test]
    fn stats_over_results() {
        let test = ten_question_test();
        let mut a = grade(&test, &[], 90, at());
        a.score = 70;
        let mut b = a.clone();
        b.score = 85;
        b.time_taken = 60;

        let stats = Stats::from_results(&[a, b]);
        assert_eq!(stats.tests_taken, 2);
        assert_eq!(stats.average_score, 78); // 77.5
        assert_eq!(stats.best_score, 85);
        assert_eq!(stats.total_minutes, 3); // 150 s = 2.5 min

        assert_eq!(Stats::from_results(&[]), Stats::default());
    }

    #[test]
    fn score_bands_and_messages() {
        assert_eq!(ScoreBand::of(80), ScoreBand::High);
        assert_eq!(ScoreBand::of(79), ScoreBand::Medium);
        assert_eq!(ScoreBand::of(59), ScoreBand::Low);
        assert_eq!(score_message(95), "A'lo natija!");
        assert_eq!(score_message(40), "O'rtacha");
        assert_eq!(score_message(10), "Ko'proq mashq qiling");
    }
}
