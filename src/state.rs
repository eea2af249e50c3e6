use crate::store::IncidentStore;
use std::sync::Arc;
use tokio::sync::Mutex;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: Arc<Mutex<IncidentStore>>,
}

impl AppState {
    pub fn new(store: IncidentStore) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }
}
