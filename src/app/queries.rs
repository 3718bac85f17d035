use super::*;
use crate::model::Test;
use crate::scoring::Stats;

impl QuizApp {
    pub fn test_by_id(&self, id: &str) -> Option<&Test> {
        self.catalogue.test_by_id(id)
    }

    pub fn result_by_id(&self, id: &str) -> Option<&TestResult> {
        self.results.iter().find(|r| r.id == id)
    }

    pub fn selected_category(&self) -> Option<&str> {
        match &self.state {
            AppState::Tests { category } => category.as_deref(),
            _ => None,
        }
    }

    /// Catalogue entries for the current category filter and search box.
    pub fn filtered_tests(&self) -> Vec<&Test> {
        self.catalogue
            .filter(self.selected_category(), &self.search_query)
    }

    pub fn stats(&self) -> Stats {
        Stats::from_results(&self.results)
    }
}
