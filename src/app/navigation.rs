use super::*;

impl QuizApp {
    /// Switches screen. Entering a quiz starts a fresh session; leaving it
    /// drops the session and with it the countdown.
    pub fn navigate(&mut self, target: AppState) {
        self.confirm_submit = false;
        self.confirm_clear = false;
        self.message.clear();
        // The search box belongs to one visit of the catalogue
        if !matches!(self.state, AppState::Tests { .. }) || !matches!(target, AppState::Tests { .. }) {
            self.search_query.clear();
        }

        match &target {
            AppState::Quiz { test_id } => {
                self.session = self.catalogue.test_by_id(test_id).cloned().map(QuizSession::new);
                if self.session.is_none() {
                    log::warn!("quiz requested for unknown test `{test_id}`");
                }
            }
            AppState::Home
            | AppState::Results
            | AppState::ResultDetail { .. }
            | AppState::Profile => {
                self.session = None;
                self.reload_results();
            }
            AppState::Tests { .. } => {
                self.session = None;
            }
        }

        log::debug!("navigate to {}", target.path());
        self.state = target;
    }

    pub fn go_home(&mut self) {
        self.navigate(AppState::Home);
    }

    pub fn open_tests(&mut self, category: Option<String>) {
        self.navigate(AppState::Tests { category });
    }

    pub fn start_quiz(&mut self, test_id: &str) {
        self.navigate(AppState::Quiz {
            test_id: test_id.to_owned(),
        });
    }

    pub fn open_results(&mut self) {
        self.navigate(AppState::Results);
    }

    pub fn open_result(&mut self, result_id: &str) {
        self.navigate(AppState::ResultDetail {
            result_id: result_id.to_owned(),
        });
    }

    pub fn open_profile(&mut self) {
        self.navigate(AppState::Profile);
    }

    /// Changes the catalogue filter without leaving the catalogue.
    pub fn set_category_filter(&mut self, category: Option<String>) {
        self.state = AppState::Tests { category };
    }

    /// Reconciles the route with the page location (`#/results/…`).
    ///
    /// A location that moved away from the last synced path wins (back and
    /// forward buttons, an edited URL). Otherwise returns the app's path when
    /// it has to be written to the location.
    pub fn sync_with_location(&mut self, hash: &str) -> Option<String> {
        let target = AppState::from_path(hash);
        let location_path = target.path();
        if !self.synced_path.is_empty() && location_path != self.synced_path {
            log::debug!("location changed to {location_path}");
            self.synced_path = location_path;
            if target != self.state {
                self.navigate(target);
            }
            return None;
        }

        let path = self.state.path();
        if path == self.synced_path {
            return None;
        }
        self.synced_path = path.clone();
        Some(path)
    }
}
