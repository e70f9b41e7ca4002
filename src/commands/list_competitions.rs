use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use chrono::Utc;
use tower::Service;

use crate::{
    domain::{booking, Competition},
    ports::record_store::RecordStorePort,
};

use super::{DomainLogic, Error};

/// Display listing of every competition, with `taken_place` brought up to
/// date against the clock. Read-only: the refreshed flags stay in memory.
pub struct ListCompetitionsRequest;

impl<S> Service<ListCompetitionsRequest> for DomainLogic<S>
where
    S: RecordStorePort + Send + Sync + 'static,
{
    type Response = Vec<Competition>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, _req: ListCompetitionsRequest) -> Self::Future {
        let store = self.store.clone();
        Box::pin(async move {
            let mut competitions = store.load_competitions().await?;
            booking::normalize_taken_place(&mut competitions, Utc::now().naive_utc());
            Ok(competitions)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::record_store::memory::MemoryRecordStore;
    use chrono::Duration;
    use speculoos::prelude::*;
    use std::sync::Arc;
    use tower::{BoxError, ServiceExt};

    #[tokio::test]
    async fn test_flags_are_normalized_without_writing_back() -> Result<(), BoxError> {
        let now = Utc::now().naive_utc();
        // Past competition stored with a stale false flag.
        let competitions = vec![
            Competition::new("Winter Gala", now - Duration::days(90), 5),
            Competition::new("Spring Open", now + Duration::days(30), 25),
        ];
        let store = MemoryRecordStore::new(vec![], competitions);
        let domain = DomainLogic::new(Arc::new(store.clone()));

        let res = domain.oneshot(ListCompetitionsRequest).await?;

        assert_that!(res[0].taken_place).is_true();
        assert_that!(res[1].taken_place).is_false();

        // The store still holds the stale flag: listing is a pure read.
        let stored = store.load_competitions().await?;
        assert_that!(stored[0].taken_place).is_false();
        Ok(())
    }
}
