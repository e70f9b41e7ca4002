use crate::domain::{Club, Competition};

/// Durable storage for the club and competition collections.
///
/// The store only knows whole collections: reads return every record and
/// writes replace every record. Partial-record persistence is not part of
/// the contract, so an adapter backed by indexed storage still has to
/// present replace-all semantics here.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RecordStorePort {
    async fn load_clubs(&self) -> Result<Vec<Club>, Error>;
    async fn load_competitions(&self) -> Result<Vec<Competition>, Error>;
    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), Error>;
    async fn save_competitions(&self, competitions: Vec<Competition>) -> Result<(), Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The backing store could not complete a read or write.
    ///
    /// This wraps whatever the concrete adapter failed on: I/O, malformed
    /// stored data, a poisoned lock. The operation that triggered it must
    /// not be considered committed.
    #[error("storage failure: {0:?}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}
