use std::sync::Arc;

use tokio::sync::Mutex;

pub mod book_places;
pub mod find_club;
pub mod list_competitions;

use crate::domain::booking::RejectionReason;

/// Shared state behind every command service.
///
/// All bookings go through one write lock, held across the whole
/// read-validate-apply-write span, because the record store only supports
/// whole-collection replacement. Clones share the lock, so cloning the
/// service for concurrent callers is safe.
pub struct DomainLogic<S> {
    store: Arc<S>,
    write_lock: Arc<Mutex<()>>,
}

impl<S> DomainLogic<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            write_lock: Arc::new(Mutex::new(())),
        }
    }
}

impl<S> Clone for DomainLogic<S> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            write_lock: self.write_lock.clone(),
        }
    }
}

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The request failed one of the admission rules. Nothing was persisted.
    #[error(transparent)]
    Rejected(#[from] RejectionReason),

    #[error("no club named {0:?}")]
    UnknownClub(String),
    #[error("no competition named {0:?}")]
    UnknownCompetition(String),

    #[error("record store error: {0:?}")]
    Store(#[from] crate::ports::record_store::Error),

    /// The club collection was written but the competition collection was
    /// not, so the two files disagree until an operator reconciles them.
    #[error("partial commit: clubs written, competitions not: {source:?}")]
    PartialCommit {
        source: crate::ports::record_store::Error,
    },
}
