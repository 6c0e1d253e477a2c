use modeshare::{choice, prelude::*};
use tokio::sync::{Mutex, RwLock};

pub struct AppState {
    pub graphql_url: String,
    pub defaults: choice::Config,
    pub client: reqwest::Client,
    /// None until the option lists have been loaded.
    pub options: RwLock<Option<OptionLists>>,
    /// The session's only controller. Never hold this while waiting on `options`.
    pub controller: Mutex<UserChoiceController>,
    pub stats: RwLock<DailyStats>,
}

impl AppState {
    pub fn new(graphql_url: String, date_range: DateRange) -> Self {
        let defaults = choice::Config::default();
        let state = UserChoiceState::with_config(date_range, &defaults);
        Self {
            graphql_url,
            defaults,
            client: reqwest::Client::new(),
            options: RwLock::new(None),
            controller: Mutex::new(UserChoiceController::new(state)),
            stats: RwLock::new(DailyStats::new()),
        }
    }

    /// Snapshot of the current choices.
    pub async fn choices(&self) -> UserChoiceState {
        self.controller.lock().await.state().clone()
    }
}
