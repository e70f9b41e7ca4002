use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use chrono::Utc;
use tower::Service;
use uuid::Uuid;

use crate::{
    domain::{
        booking::{self, ValidationResult},
        Booking, Club, Competition,
    },
    ports::record_store::RecordStorePort,
};

use super::{DomainLogic, Error};

/// A prospective reservation: which club, which competition, how many places.
pub struct BookPlacesRequest {
    pub club_name: String,
    pub competition_name: String,
    pub places_required: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub struct BookPlacesResponse {
    /// Receipt for the committed reservation.
    pub booking: Booking,
    /// The club after paying for the places.
    pub club: Club,
    /// The full competition collection after the booking, with `taken_place`
    /// flags normalized, ready for the caller to render.
    pub competitions: Vec<Competition>,
}

impl<S> Service<BookPlacesRequest> for DomainLogic<S>
where
    S: RecordStorePort + Send + Sync + 'static,
{
    type Response = BookPlacesResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>> + Send>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: BookPlacesRequest) -> Self::Future {
        let store = self.store.clone();
        let write_lock = self.write_lock.clone();
        Box::pin(async move {
            // One booking at a time: the store can only replace whole
            // collections, so the read and the write must not interleave
            // with another booking's.
            let _guard = write_lock.lock().await;

            let mut clubs = store.load_clubs().await?;
            let mut competitions = store.load_competitions().await?;

            let club_idx = clubs
                .iter()
                .position(|club| club.name == req.club_name)
                .ok_or_else(|| Error::UnknownClub(req.club_name.clone()))?;
            let competition_idx = competitions
                .iter()
                .position(|competition| competition.name == req.competition_name)
                .ok_or_else(|| Error::UnknownCompetition(req.competition_name.clone()))?;

            let now = Utc::now().naive_utc();
            booking::normalize_taken_place(&mut competitions, now);

            match booking::validate(
                &clubs[club_idx],
                &competitions[competition_idx],
                req.places_required,
                now,
            ) {
                ValidationResult::Rejected(reason) => {
                    tracing::debug!(
                        club = %req.club_name,
                        competition = %req.competition_name,
                        places = req.places_required,
                        %reason,
                        "booking rejected"
                    );
                    return Err(reason.into());
                }
                ValidationResult::Admitted => {}
            }

            let (club, competition) = booking::apply(
                clubs[club_idx].clone(),
                competitions[competition_idx].clone(),
                req.places_required,
            );
            clubs[club_idx] = club.clone();
            competitions[competition_idx] = competition;

            // Clubs first, competitions second. A failure in between leaves
            // the pair inconsistent on disk, which the caller must be able
            // to tell apart from an ordinary storage failure.
            store.save_clubs(clubs).await?;
            store
                .save_competitions(competitions.clone())
                .await
                .map_err(|source| Error::PartialCommit { source })?;

            let booking = Booking {
                booking_id: Uuid::new_v4(),
                club_name: req.club_name,
                competition_name: req.competition_name,
                places: req.places_required,
            };
            tracing::info!(
                booking_id = %booking.booking_id,
                club = %booking.club_name,
                competition = %booking.competition_name,
                places = booking.places,
                "booking committed"
            );

            Ok(BookPlacesResponse {
                booking,
                club,
                competitions,
            })
        })
    }
}
