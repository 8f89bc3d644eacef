use std::{collections::VecDeque, sync::Arc};

use tokio::sync::Mutex;

use crate::infrastructure::tui::{Event, TuiLike};

/// Where the runner pulls terminal events from
pub enum EventSource {
    Real(Arc<Mutex<dyn TuiLike + Send>>),
    Test(VecDeque<Event>),
}

impl EventSource {
    pub fn real(tui: Arc<Mutex<dyn TuiLike + Send>>) -> Self {
        EventSource::Real(tui)
    }

    pub fn test(events: impl IntoIterator<Item = Event>) -> Self {
        EventSource::Test(events.into_iter().collect())
    }

    /// Next event, or `None` once the source is exhausted or closed
    pub async fn next(&mut self) -> Option<Event> {
        match self {
            EventSource::Real(tui) => {
                let mut guard = tui.lock().await;
                guard.next().await
            }
            EventSource::Test(queue) => queue.pop_front(),
        }
    }
}
