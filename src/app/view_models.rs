use super::*;
use crate::view_models::OptionMark;

impl QuizApp {
    pub fn category_infos(&self) -> Vec<CategoryInfo> {
        self.catalogue
            .categories()
            .iter()
            .map(|c| CategoryInfo {
                id: c.id.clone(),
                name: c.name.clone(),
                icon: c.icon.clone(),
                test_count: self.catalogue.category_test_count(&c.id),
            })
            .collect()
    }

    pub fn test_cards(&self) -> Vec<TestCardInfo> {
        self.filtered_tests()
            .into_iter()
            .map(|t| TestCardInfo {
                id: t.id.clone(),
                category_icon: self
                    .catalogue
                    .category(&t.category)
                    .map(|c| c.icon.clone())
                    .unwrap_or_default(),
                title: t.title.clone(),
                description: t.description.clone(),
                difficulty: t.difficulty,
                question_count: t.question_count,
                duration_min: t.duration,
            })
            .collect()
    }

    pub fn result_rows(&self) -> Vec<ResultRow> {
        self.results
            .iter()
            .map(|r| ResultRow {
                id: r.id.clone(),
                test_title: r.test_title.clone(),
                score: r.score,
                correct_answers: r.correct_answers,
                total_questions: r.total_questions,
                time_taken: r.time_taken,
                completed_at: r.completed_at,
            })
            .collect()
    }

    /// Per-question review of a result. None when the result or its test is gone.
    pub fn review_rows(&self, result_id: &str) -> Option<Vec<ReviewRow>> {
        let result = self.result_by_id(result_id)?;
        let test = self.test_by_id(&result.test_id)?;

        Some(
            test.questions
                .iter()
                .enumerate()
                .map(|(i, q)| {
                    let answer = result.answers.get(i);
                    let is_correct = answer.is_some_and(|a| a.is_correct);
                    let selected = answer.and_then(|a| a.selected_answer);
                    let options = q
                        .options
                        .iter()
                        .enumerate()
                        .map(|(oi, text)| {
                            let mark = if oi == q.correct_answer {
                                OptionMark::Correct
                            } else if selected == Some(oi) && !is_correct {
                                OptionMark::WrongPick
                            } else {
                                OptionMark::Plain
                            };
                            (text.clone(), mark)
                        })
                        .collect();
                    ReviewRow {
                        number: i + 1,
                        question: q.question.clone(),
                        is_correct,
                        options,
                    }
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    #[test]
    fn category_cards_count_their_tests() {
        let app = QuizApp::with_store(Catalogue::embedded().unwrap(), ResultStore::default());
        let infos = app.category_infos();
        assert_eq!(infos.len(), 6);
        assert!(infos.iter().all(|c| c.test_count == 1));
    }

    #[test]
    fn review_marks_correct_and_wrong_picks() {
        let mut app = QuizApp::with_store(Catalogue::embedded().unwrap(), ResultStore::default());
        app.start_quiz("math-1");
        app.select_answer(1); // q1 wrong, correct is 0
        let at = Utc.with_ymd_and_hms(2026, 10, 18, 11, 0, 0).unwrap();
        app.submit_quiz_at(at);

        let id = format!("result-{}", at.timestamp_millis());
        let rows = app.review_rows(&id).expect("review");
        assert_eq!(rows.len(), 10);
        assert!(!rows[0].is_correct);
        assert_eq!(rows[0].options[0].1, OptionMark::Correct);
        assert_eq!(rows[0].options[1].1, OptionMark::WrongPick);
        assert_eq!(rows[0].options[2].1, OptionMark::Plain);
        // unanswered: only the correct option is highlighted
        assert!(rows[1].options.iter().all(|(_, m)| *m != OptionMark::WrongPick));

        assert!(app.review_rows("result-0").is_none());
    }

    #[test]
    fn test_cards_follow_the_filter() {
        let mut app = QuizApp::with_store(Catalogue::embedded().unwrap(), ResultStore::default());
        app.open_tests(Some("biology".into()));
        let cards = app.test_cards();
        assert_eq!(cards.len(), 1);
        assert_eq!(cards[0].id, "biology-1");
        assert_eq!(cards[0].category_icon, "🧬");

        app.set_category_filter(None);
        assert_eq!(app.test_cards().len(), 6);
    }
}
