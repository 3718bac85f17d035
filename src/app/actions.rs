use super::*;
use chrono::{DateTime, Utc};

impl QuizApp {
    pub fn select_answer(&mut self, option: usize) {
        if let Some(session) = self.session.as_mut() {
            session.select_answer(option);
        }
    }

    pub fn next_question(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.next();
        }
    }

    pub fn previous_question(&mut self) {
        if let Some(session) = self.session.as_mut() {
            session.previous();
        }
    }

    pub fn go_to_question(&mut self, index: usize) {
        if let Some(session) = self.session.as_mut() {
            session.go_to(index);
        }
    }

    /// Opens the "finish the test?" dialog.
    pub fn request_submit(&mut self) {
        if self.session.as_ref().is_some_and(|s| !s.is_submitted()) {
            self.confirm_submit = true;
        }
    }

    pub fn cancel_submit(&mut self) {
        self.confirm_submit = false;
    }

    pub fn submit_quiz(&mut self) {
        self.submit_quiz_at(Utc::now());
    }

    /// Grades the running session, stores the result and opens its detail view.
    pub fn submit_quiz_at(&mut self, completed_at: DateTime<Utc>) {
        self.confirm_submit = false;
        let Some(result) = self
            .session
            .as_mut()
            .and_then(|session| session.submit(completed_at))
        else {
            return;
        };

        log::info!(
            "submitted `{}`: {}/{} correct, score {}",
            result.test_id,
            result.correct_answers,
            result.total_questions,
            result.score
        );

        let result_id = result.id.clone();
        let unsaved = match self.store.save(result.clone()) {
            Ok(()) => None,
            Err(e) => {
                log::error!("could not save result {result_id}: {e}");
                Some(result)
            }
        };

        self.open_result(&result_id);

        // Keep the attempt visible for this run even though it was not persisted.
        if let Some(result) = unsaved {
            self.results.insert(0, result);
            self.message = "⚠ Natija saqlanmadi: xotira mavjud emas.".into();
        }
    }

    /// Feeds the frame clock to the running quiz and submits once time is up.
    /// Returns true while a countdown is running.
    pub fn tick_timer(&mut self, now: f64) -> bool {
        let expired = match self.session.as_mut() {
            Some(session) if !session.is_submitted() => {
                session.advance_clock(now);
                session.is_expired()
            }
            _ => return false,
        };

        if expired {
            log::info!("time is up, submitting automatically");
            self.submit_quiz();
            return false;
        }
        true
    }

    pub fn request_clear_results(&mut self) {
        self.confirm_clear = true;
    }

    pub fn cancel_clear_results(&mut self) {
        self.confirm_clear = false;
    }

    pub fn clear_results(&mut self) {
        self.confirm_clear = false;
        match self.store.clear() {
            Ok(()) => {
                self.results.clear();
                self.message.clear();
            }
            Err(e) => {
                log::error!("could not clear results: {e}");
                self.message = "⚠ Natijalarni o'chirib bo'lmadi.".into();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StorageError;
    use crate::storage::{KeyValueStore, MemoryStore};
    use chrono::TimeZone;

    /// Backend that refuses every write.
    struct ReadOnlyStore;

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set_item(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }
        fn remove_item(&mut self, _key: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable("read-only".into()))
        }
    }

    fn app_with(store: ResultStore) -> QuizApp {
        QuizApp::with_store(Catalogue::embedded().expect("catalogue"), store)
    }

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 10, 18, 10, minute, 0).unwrap()
    }

    fn answer_all_correctly(app: &mut QuizApp) {
        let correct: Vec<usize> = app
            .session
            .as_ref()
            .expect("session")
            .test()
            .questions
            .iter()
            .map(|q| q.correct_answer)
            .collect();
        for (i, option) in correct.into_iter().enumerate() {
            app.go_to_question(i);
            app.select_answer(option);
        }
    }

    #[test]
    fn manual_submit_saves_and_opens_the_detail() {
        let mut app = app_with(ResultStore::new(MemoryStore::default()));
        app.start_quiz("math-1");
        answer_all_correctly(&mut app);
        app.request_submit();
        assert!(app.confirm_submit);

        app.submit_quiz_at(at(0));
        let id = format!("result-{}", at(0).timestamp_millis());
        assert_eq!(app.state, AppState::ResultDetail { result_id: id.clone() });
        assert!(app.session.is_none());
        assert!(!app.confirm_submit);

        let stored = app.result_by_id(&id).expect("stored result");
        assert_eq!(stored.score, 100);
        assert_eq!(app.store.load().len(), 1);
    }

    #[test]
    fn timer_expiry_auto_submits_partial_answers() {
        let mut app = app_with(ResultStore::default());
        app.start_quiz("english-1");
        app.select_answer(1); // e1 correct

        assert!(app.tick_timer(0.0));
        assert!(app.tick_timer(30.0));
        // 15 minutes of wall time later
        assert!(!app.tick_timer(15.0 * 60.0 + 0.5));

        assert!(matches!(app.state, AppState::ResultDetail { .. }));
        let result = &app.results[0];
        assert_eq!(result.correct_answers, 1);
        assert_eq!(result.score, 10);
        assert_eq!(result.time_taken, 15 * 60);
        assert_eq!(
            result.answers.iter().filter(|a| a.selected_answer.is_none()).count(),
            9
        );
    }

    #[test]
    fn no_timer_outside_a_quiz() {
        let mut app = app_with(ResultStore::default());
        assert!(!app.tick_timer(1.0));
        app.submit_quiz();
        assert!(app.results.is_empty());
    }

    #[test]
    fn most_recent_result_is_listed_first() {
        let mut app = app_with(ResultStore::default());
        for (minute, test_id) in [(1, "math-1"), (2, "history-1")] {
            app.start_quiz(test_id);
            app.submit_quiz_at(at(minute));
        }
        app.open_results();
        let titles: Vec<&str> = app.results.iter().map(|r| r.test_id.as_str()).collect();
        assert_eq!(titles, ["history-1", "math-1"]);
    }

    #[test]
    fn clearing_empties_history() {
        let mut app = app_with(ResultStore::default());
        app.start_quiz("math-1");
        app.submit_quiz_at(at(3));
        app.request_clear_results();
        app.clear_results();
        assert!(app.results.is_empty());
        app.open_profile();
        assert!(app.results.is_empty());
        assert_eq!(app.stats().tests_taken, 0);
    }

    #[test]
    fn failed_save_keeps_the_attempt_for_this_run() {
        let mut app = app_with(ResultStore::new(ReadOnlyStore));
        app.start_quiz("math-1");
        app.submit_quiz_at(at(4));
        assert_eq!(app.results.len(), 1);
        assert!(!app.message.is_empty());

        app.clear_results();
        assert_eq!(app.results.len(), 1);
    }
}
