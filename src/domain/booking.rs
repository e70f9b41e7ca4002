use chrono::NaiveDateTime;

use super::{Club, Competition};

/// Maximum number of places a single club may hold at one competition,
/// counting places reserved by earlier bookings. System-wide policy value,
/// not configurable per competition.
pub const PLACES_PER_CLUB_LIMIT: u32 = 12;

/// Why a reservation request was refused.
///
/// Rejections are expected, user-facing outcomes; each variant carries the
/// numbers the caller needs to render a specific message.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RejectionReason {
    /// The caller asked for zero places. Negative counts cannot be
    /// expressed at this level; the outer layer rejects them at parse time.
    #[error("a reservation must be for at least one place")]
    InvalidRequest,

    /// Granting the request would push the club past the 12-place limit
    /// at this competition.
    #[error("club already holds {already} place(s) here; {requested} more would exceed the 12-place limit")]
    TooManyPlaces { already: u32, requested: u32 },

    /// The club's points balance does not cover the request.
    #[error("{requested} place(s) requested but only {points} point(s) available")]
    InsufficientPoints { points: u32, requested: u32 },

    /// The competition does not have enough places left.
    #[error("{requested} place(s) requested but only {available} left at the competition")]
    InsufficientCapacity { available: u32, requested: u32 },

    /// The competition has already started.
    #[error("the competition has already taken place")]
    CompetitionConcluded,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationResult {
    Admitted,
    Rejected(RejectionReason),
}

/// Decides whether a reservation request is admissible.
///
/// The rules run in a fixed order and the first violated one wins, so a
/// request breaking several rules at once always reports the same reason:
/// per-club limit, then points balance, then remaining capacity, then the
/// competition clock. Both the limit and the balance are checked against the
/// pre-transaction state; they are independent constraints.
pub fn validate(
    club: &Club,
    competition: &Competition,
    places_required: u32,
    now: NaiveDateTime,
) -> ValidationResult {
    use RejectionReason::*;

    if places_required == 0 {
        return ValidationResult::Rejected(InvalidRequest);
    }

    let already = club.reserved_at(&competition.name);
    if already + places_required > PLACES_PER_CLUB_LIMIT {
        return ValidationResult::Rejected(TooManyPlaces {
            already,
            requested: places_required,
        });
    }

    if places_required > club.points {
        return ValidationResult::Rejected(InsufficientPoints {
            points: club.points,
            requested: places_required,
        });
    }

    if places_required > competition.number_of_places {
        return ValidationResult::Rejected(InsufficientCapacity {
            available: competition.number_of_places,
            requested: places_required,
        });
    }

    if competition.concluded(now) {
        return ValidationResult::Rejected(CompetitionConcluded);
    }

    ValidationResult::Admitted
}

/// Applies an admitted reservation to the ledger.
///
/// One logical transaction: the competition loses `places_required` places,
/// the club pays the same number of points and records them against the
/// competition. Every other field is untouched.
///
/// Precondition: [`validate`] returned [`ValidationResult::Admitted`] for
/// these exact inputs and the records have not changed since. The caller is
/// responsible for that ordering; this function does not re-check and the
/// subtractions rely on it.
pub fn apply(
    mut club: Club,
    mut competition: Competition,
    places_required: u32,
) -> (Club, Competition) {
    competition.number_of_places -= places_required;
    club.points -= places_required;
    *club
        .reserved_places
        .entry(competition.name.clone())
        .or_insert(0) += places_required;
    (club, competition)
}

/// Recomputes the `taken_place` flag for every competition in the slice.
///
/// In-memory only; the flag is fully derivable from `date`, so it is never
/// worth a write of its own. It reaches disk only when a booking commit
/// rewrites the competition collection anyway.
pub fn normalize_taken_place(competitions: &mut [Competition], now: NaiveDateTime) {
    for competition in competitions {
        competition.taken_place = competition.concluded(now);
    }
}
