//! Screen lifetimes for asynchronous entry loads

use crate::domain::JournalEntry;
use crate::infrastructure::EntryStore;
use tokio_util::sync::CancellationToken;

/// The scope a load belongs to. Once a screen is dismissed (or dropped) any
/// load still in flight for it resolves to `None` and its result is dropped.
#[derive(Debug)]
pub struct Screen {
    name: &'static str,
    token: CancellationToken,
}

impl Screen {
    pub fn new(name: &'static str) -> Self {
        Screen {
            name,
            token: CancellationToken::new(),
        }
    }

    pub fn dismiss(&self) {
        self.token.cancel();
    }

    pub fn is_dismissed(&self) -> bool {
        self.token.is_cancelled()
    }

    /// Token that dismisses this screen from elsewhere
    pub fn dismiss_handle(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Load every entry from `store` on behalf of this screen.
    ///
    /// Resolves exactly once: `None` when the screen went away first,
    /// otherwise the full collection. Store failures become an empty list.
    pub async fn load_entries<S>(&self, store: &S) -> Option<Vec<JournalEntry>>
    where
        S: EntryStore + ?Sized,
    {
        if self.is_dismissed() {
            return None;
        }

        let result = tokio::select! {
            biased;
            _ = self.token.cancelled() => None,
            result = store.load_entries() => Some(result),
        };

        let Some(result) = result else {
            tracing::debug!(screen = self.name, "screen dismissed before load finished");
            return None;
        };

        match result {
            Ok(entries) => Some(entries),
            Err(e) => {
                tracing::warn!(screen = self.name, error = %e, "failed to load entries");
                Some(Vec::new())
            }
        }
    }
}

impl Drop for Screen {
    fn drop(&mut self) {
        self.token.cancel();
    }
}
