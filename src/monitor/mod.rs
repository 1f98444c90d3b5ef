// Regulation update monitoring

pub mod feed;

pub use feed::{BundledFeed, FeedError, UpdateFeed};

use std::sync::{Arc, Mutex};

use crate::models::RegulationUpdate;

/// Tracks regulation updates and their read state for the current app run.
///
/// Held as Tauri managed state. The snapshot is replaced on every feed pull,
/// with read flags carried over by update id so a refresh never marks a
/// notice unread again.
#[derive(Clone)]
pub struct RegulationMonitor {
    feed: Arc<dyn UpdateFeed>,
    updates: Arc<Mutex<Vec<RegulationUpdate>>>,
}

impl Default for RegulationMonitor {
    fn default() -> Self {
        Self::new(Arc::new(BundledFeed))
    }
}

impl RegulationMonitor {
    pub fn new(feed: Arc<dyn UpdateFeed>) -> Self {
        Self {
            feed,
            updates: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Pulls the feed and replaces the snapshot, preserving read flags of
    /// already known update ids.
    pub fn check_updates(&self) -> Result<Vec<RegulationUpdate>, FeedError> {
        let mut fetched = self.feed.fetch()?;

        let mut updates = self.updates.lock().unwrap();
        for update in fetched.iter_mut() {
            if updates.iter().any(|u| u.id == update.id && u.is_read) {
                update.is_read = true;
            }
        }
        *updates = fetched.clone();

        log::info!("regulation feed returned {} update(s)", fetched.len());
        Ok(fetched)
    }

    /// Marks one update read. Returns false when the id is unknown.
    pub fn mark_as_read(&self, update_id: &str) -> bool {
        let mut updates = self.updates.lock().unwrap();
        match updates.iter_mut().find(|u| u.id == update_id) {
            Some(update) => {
                update.is_read = true;
                true
            }
            None => false,
        }
    }

    pub fn unread_updates(&self) -> Vec<RegulationUpdate> {
        let updates = self.updates.lock().unwrap();
        updates.iter().filter(|u| !u.is_read).cloned().collect()
    }

    /// Updates whose regulation code matches exactly.
    pub fn updates_for_regulation(&self, code: &str) -> Vec<RegulationUpdate> {
        let updates = self.updates.lock().unwrap();
        updates
            .iter()
            .filter(|u| u.regulation_code == code)
            .cloned()
            .collect()
    }

    pub fn snapshot(&self) -> Vec<RegulationUpdate> {
        self.updates.lock().unwrap().clone()
    }
}
