use crate::{
    domain::{Club, Competition},
    ports::record_store::{Error, RecordStorePort},
};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory record store, for tests and single-process embedding.
#[derive(Clone, Debug, Default)]
pub struct MemoryRecordStore {
    clubs: Arc<Mutex<Vec<Club>>>,
    competitions: Arc<Mutex<Vec<Competition>>>,
}

impl MemoryRecordStore {
    pub fn new(clubs: Vec<Club>, competitions: Vec<Competition>) -> Self {
        Self {
            clubs: Arc::new(Mutex::new(clubs)),
            competitions: Arc::new(Mutex::new(competitions)),
        }
    }
}

#[async_trait::async_trait]
impl RecordStorePort for MemoryRecordStore {
    async fn load_clubs(&self) -> Result<Vec<Club>, Error> {
        Ok(self.clubs.lock()?.clone())
    }

    async fn load_competitions(&self) -> Result<Vec<Competition>, Error> {
        Ok(self.competitions.lock()?.clone())
    }

    async fn save_clubs(&self, clubs: Vec<Club>) -> Result<(), Error> {
        *self.clubs.lock()? = clubs;
        Ok(())
    }

    async fn save_competitions(&self, competitions: Vec<Competition>) -> Result<(), Error> {
        *self.competitions.lock()? = competitions;
        Ok(())
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus
/// we erase the error and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

/// We need to create a custom `From` implementation here for an error that's
/// specific to this adapter.
impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Storage(Box::new(ErasedPoisonError(err.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use speculoos::prelude::*;
    use std::collections::BTreeMap;

    fn sample_competition() -> Competition {
        Competition::new(
            "Spring Open",
            NaiveDate::from_ymd_opt(2024, 3, 27)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
            25,
        )
    }

    #[tokio::test]
    async fn test_save_then_load() {
        let store = MemoryRecordStore::default();
        let club = Club::new("Iron Works", "contact@ironworks.co", 13, BTreeMap::new());

        let res = store.save_clubs(vec![club.clone()]).await;
        assert_that!(res).is_ok();

        let res = store.load_clubs().await;
        assert_that!(res).is_ok().is_equal_to(vec![club]);
    }

    #[tokio::test]
    async fn test_save_replaces_whole_collection() {
        let store = MemoryRecordStore::new(vec![], vec![sample_competition()]);

        // Writing an empty collection must not leave the old records behind.
        let res = store.save_competitions(vec![]).await;
        assert_that!(res).is_ok();

        let res = store.load_competitions().await;
        assert_that!(res).is_ok().is_equal_to(vec![]);
    }
}
