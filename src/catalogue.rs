use std::collections::HashSet;

use crate::data::{CatalogueFile, read_catalogue_embedded, read_catalogue_str};
use crate::error::CatalogueError;
use crate::model::{Category, Test};

/// The immutable set of categories and tests the app offers.
#[derive(Debug, Clone, Default)]
pub struct Catalogue {
    categories: Vec<Category>,
    tests: Vec<Test>,
}

impl Catalogue {
    /// Parses and validates the catalogue shipped inside the binary.
    pub fn embedded() -> Result<Self, CatalogueError> {
        Self::from_file(read_catalogue_embedded()?)
    }

    pub fn from_yaml(content: &str) -> Result<Self, CatalogueError> {
        Self::from_file(read_catalogue_str(content)?)
    }

    pub fn from_file(file: CatalogueFile) -> Result<Self, CatalogueError> {
        let catalogue = Self {
            categories: file.categories,
            tests: file.tests,
        };
        catalogue.validate()?;
        Ok(catalogue)
    }

    pub fn validate(&self) -> Result<(), CatalogueError> {
        let category_ids: HashSet<&str> = self.categories.iter().map(|c| c.id.as_str()).collect();
        let mut test_ids = HashSet::new();

        for test in &self.tests {
            if !test_ids.insert(test.id.as_str()) {
                return Err(CatalogueError::DuplicateTestId(test.id.clone()));
            }
            if !category_ids.contains(test.category.as_str()) {
                return Err(CatalogueError::UnknownCategory {
                    test_id: test.id.clone(),
                    category: test.category.clone(),
                });
            }
            if test.questions.is_empty() {
                return Err(CatalogueError::EmptyTest(test.id.clone()));
            }
            if test.question_count != test.questions.len() {
                return Err(CatalogueError::QuestionCountMismatch {
                    test_id: test.id.clone(),
                    declared: test.question_count,
                    actual: test.questions.len(),
                });
            }

            let mut question_ids = HashSet::new();
            for q in &test.questions {
                if !question_ids.insert(q.id.as_str()) {
                    return Err(CatalogueError::DuplicateQuestionId {
                        test_id: test.id.clone(),
                        question_id: q.id.clone(),
                    });
                }
                if q.correct_answer >= q.options.len() {
                    return Err(CatalogueError::CorrectAnswerOutOfRange {
                        test_id: test.id.clone(),
                        question_id: q.id.clone(),
                        index: q.correct_answer,
                        options: q.options.len(),
                    });
                }
            }
        }
        Ok(())
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn tests(&self) -> &[Test] {
        &self.tests
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn test_by_id(&self, id: &str) -> Option<&Test> {
        self.tests.iter().find(|t| t.id == id)
    }

    pub fn tests_by_category(&self, category: &str) -> Vec<&Test> {
        self.tests.iter().filter(|t| t.category == category).collect()
    }

    pub fn category_test_count(&self, category: &str) -> usize {
        self.tests_by_category(category).len()
    }

    /// Tests matching the category (None = all) whose title or description
    /// contains `query`, case-insensitively.
    pub fn filter(&self, category: Option<&str>, query: &str) -> Vec<&Test> {
        let needle = query.trim().to_lowercase();
        self.tests
            .iter()
            .filter(|t| category.is_none_or(|c| t.category == c))
            .filter(|t| {
                needle.is_empty()
                    || t.title.to_lowercase().contains(&needle)
                    || t.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}
