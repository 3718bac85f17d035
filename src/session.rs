use chrono::{DateTime, Utc};

use crate::model::{Question, Test, TestResult};
use crate::scoring::grade;

/// Seconds left below which the timer is drawn as a warning.
pub const TIME_WARNING_SECS: u32 = 60;

/// One-second countdown fed by a monotonic clock (egui's `input.time`).
#[derive(Clone, Debug)]
pub struct Countdown {
    remaining_secs: u32,
    anchor: Option<f64>,
}

impl Countdown {
    pub fn new(total_secs: u32) -> Self {
        Self {
            remaining_secs: total_secs,
            anchor: None,
        }
    }

    pub fn remaining_secs(&self) -> u32 {
        self.remaining_secs
    }

    pub fn is_expired(&self) -> bool {
        self.remaining_secs == 0
    }

    pub fn tick(&mut self) {
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
    }

    /// Applies every whole second elapsed since the previous reading. The
    /// first reading only sets the anchor. Returns the number of ticks applied.
    pub fn advance_to(&mut self, now: f64) -> u32 {
        let Some(anchor) = self.anchor else {
            self.anchor = Some(now);
            return 0;
        };
        let elapsed = now - anchor;
        if elapsed < 1.0 {
            return 0;
        }
        let whole = elapsed.floor();
        let ticks = whole.min(f64::from(u32::MAX)) as u32;
        self.anchor = Some(anchor + whole);
        for _ in 0..ticks.min(self.remaining_secs) {
            self.tick();
        }
        ticks
    }
}

/// A quiz in progress: answers so far, the current question and the timer.
#[derive(Clone, Debug)]
pub struct QuizSession {
    test: Test,
    current: usize,
    answers: Vec<Option<usize>>,
    countdown: Countdown,
    submitted: bool,
}

impl QuizSession {
    pub fn new(test: Test) -> Self {
        let answers = vec![None; test.questions.len()];
        let countdown = Countdown::new(test.duration_secs());
        Self {
            test,
            current: 0,
            answers,
            countdown,
            submitted: false,
        }
    }

    pub fn test(&self) -> &Test {
        &self.test
    }

    pub fn answers(&self) -> &[Option<usize>] {
        &self.answers
    }

    pub fn question_count(&self) -> usize {
        self.test.questions.len()
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.test.questions.get(self.current)
    }

    pub fn selected(&self, index: usize) -> Option<usize> {
        self.answers.get(index).copied().flatten()
    }

    pub fn is_first(&self) -> bool {
        self.current == 0
    }

    pub fn is_last(&self) -> bool {
        self.current + 1 >= self.question_count()
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    /// Records `option` for the current question. Returns false when ignored.
    pub fn select_answer(&mut self, option: usize) -> bool {
        if self.submitted {
            return false;
        }
        let Some(question) = self.test.questions.get(self.current) else {
            return false;
        };
        if option >= question.options.len() {
            return false;
        }
        self.answers[self.current] = Some(option);
        true
    }

    pub fn go_to(&mut self, index: usize) {
        self.current = index.min(self.question_count().saturating_sub(1));
    }

    pub fn next(&mut self) {
        self.go_to(self.current + 1);
    }

    pub fn previous(&mut self) {
        self.current = self.current.saturating_sub(1);
    }

    pub fn answered_count(&self) -> usize {
        self.answers.iter().filter(|a| a.is_some()).count()
    }

    pub fn unanswered_count(&self) -> usize {
        self.question_count() - self.answered_count()
    }

    /// Answered fraction in `0.0..=1.0`.
    pub fn progress(&self) -> f32 {
        if self.question_count() == 0 {
            return 0.0;
        }
        self.answered_count() as f32 / self.question_count() as f32
    }

    pub fn remaining_secs(&self) -> u32 {
        self.countdown.remaining_secs()
    }

    pub fn elapsed_secs(&self) -> u32 {
        self.test.duration_secs() - self.countdown.remaining_secs()
    }

    pub fn is_time_warning(&self) -> bool {
        self.countdown.remaining_secs() < TIME_WARNING_SECS
    }

    pub fn is_expired(&self) -> bool {
        self.countdown.is_expired()
    }

    pub fn tick(&mut self) {
        if !self.submitted {
            self.countdown.tick();
        }
    }

    pub fn advance_clock(&mut self, now: f64) {
        if !self.submitted {
            self.countdown.advance_to(now);
        }
    }

    /// Grades the current answer set. Only the first call yields a result.
    pub fn submit(&mut self, completed_at: DateTime<Utc>) -> Option<TestResult> {
        if self.submitted {
            return None;
        }
        self.submitted = true;
        Some(grade(
            &self.test,
            &self.answers,
            self.elapsed_secs(),
            completed_at,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Difficulty;

    fn three_question_test(duration_min: u32) -> Test {
        let questions = (0..3)
            .map(|i| Question {
                id: format!("q{}", i + 1),
                question: format!("Savol {}", i + 1),
                options: vec!["A".into(), "B".into(), "C".into()],
                correct_answer: i,
            })
            .collect();
        Test {
            id: "demo".into(),
            title: "Demo".into(),
            description: String::new(),
            category: "math".into(),
            question_count: 3,
            duration: duration_min,
            difficulty: Difficulty::Medium,
            questions,
        }
    }

    #[test]
    fn starts_unanswered_with_full_time() {
        let session = QuizSession::new(three_question_test(2));
        assert_eq!(session.answers(), &[None, None, None]);
        assert_eq!(session.remaining_secs(), 120);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.unanswered_count(), 3);
        assert!(!session.is_time_warning());
    }

    #[test]
    fn navigation_is_clamped() {
        let mut session = QuizSession::new(three_question_test(1));
        session.previous();
        assert!(session.is_first());
        session.next();
        session.next();
        session.next();
        assert_eq!(session.current_index(), 2);
        assert!(session.is_last());
        session.go_to(10);
        assert_eq!(session.current_index(), 2);
        session.go_to(1);
        assert_eq!(session.current_question().map(|q| q.id.as_str()), Some("q2"));
    }

    #[test]
    fn selection_replaces_and_ignores_invalid_options() {
        let mut session = QuizSession::new(three_question_test(1));
        assert!(session.select_answer(2));
        assert!(session.select_answer(1));
        assert!(!session.select_answer(3));
        assert_eq!(session.selected(0), Some(1));
        assert_eq!(session.answered_count(), 1);
        assert!((session.progress() - 1.0 / 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn countdown_expiry_grades_partial_answers() {
        let mut session = QuizSession::new(three_question_test(1));
        session.select_answer(0); // q1 correct
        session.go_to(1);
        session.select_answer(0); // q2 wrong

        for _ in 0..60 {
            session.tick();
        }
        assert!(session.is_expired());
        assert!(session.is_time_warning());

        let result = session.submit(Utc::now()).expect("first submit");
        assert_eq!(result.time_taken, 60);
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.answers[2].selected_answer, None);
        assert!(!result.answers[2].is_correct);
        assert_eq!(result.score, 33);
    }

    #[test]
    fn submits_only_once_and_freezes_answers() {
        let mut session = QuizSession::new(three_question_test(1));
        session.tick();
        assert!(session.submit(Utc::now()).is_some());
        assert!(session.submit(Utc::now()).is_none());
        assert!(!session.select_answer(0));
        session.tick();
        assert_eq!(session.remaining_secs(), 59);
    }

    #[test]
    fn clock_readings_become_whole_second_ticks() {
        let mut countdown = Countdown::new(10);
        assert_eq!(countdown.advance_to(100.0), 0);
        assert_eq!(countdown.advance_to(100.6), 0);
        assert_eq!(countdown.advance_to(101.2), 1);
        assert_eq!(countdown.advance_to(103.9), 2);
        assert_eq!(countdown.remaining_secs(), 7);
        assert_eq!(countdown.advance_to(200.0), 97);
        assert!(countdown.is_expired());
    }
}
