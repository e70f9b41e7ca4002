use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use tower::Service;

use crate::{domain::Club, ports::record_store::RecordStorePort};

use super::{DomainLogic, Error};

/// Sign-in lookup: resolve a club from the email typed at the front door.
pub struct FindClubRequest {
    pub email: String,
}

impl<S> Service<FindClubRequest> for DomainLogic<S>
where
    S: RecordStorePort + Send + Sync + 'static,
{
    /// `None` for an unknown email; the caller renders the message.
    type Response = Option<Club>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: FindClubRequest) -> Self::Future {
        let store = self.store.clone();
        Box::pin(async move {
            let clubs = store.load_clubs().await?;
            Ok(clubs.into_iter().find(|club| club.email == req.email))
        })
    }
}
