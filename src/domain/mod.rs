use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod booking;

/// A member club, holder of the points balance used to pay for reservations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Club {
    /// Unique name of the club within the club collection.
    pub name: String,
    /// Unique email, used for lookup at sign-in.
    pub email: String,
    /// Points balance, shared across all competitions.
    pub points: u32,
    /// Places already reserved, keyed by competition name.
    ///
    /// A missing key reads as zero reservations.
    pub reserved_places: BTreeMap<String, u32>,
}

impl Club {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        points: u32,
        reserved_places: BTreeMap<String, u32>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            points,
            reserved_places,
        }
    }

    /// Number of places this club has already reserved at the named
    /// competition.
    pub fn reserved_at(&self, competition_name: &str) -> u32 {
        self.reserved_places
            .get(competition_name)
            .copied()
            .unwrap_or(0)
    }
}

/// A scheduled competition with a depleting pool of reservable places.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Competition {
    /// Unique name of the competition within the competition collection.
    pub name: String,
    /// Scheduled starting instant.
    #[serde(with = "date_format")]
    pub date: NaiveDateTime,
    /// Places still available to be reserved.
    ///
    /// This is a remaining-capacity counter, not a fixed total.
    pub number_of_places: u32,
    /// Cached projection of `date <= now`, recomputed lazily on read.
    pub taken_place: bool,
}

impl Competition {
    pub fn new(name: impl Into<String>, date: NaiveDateTime, number_of_places: u32) -> Self {
        Self {
            name: name.into(),
            date,
            number_of_places,
            taken_place: false,
        }
    }

    /// Whether the competition has started (and can no longer be booked)
    /// as of `now`.
    pub fn concluded(&self, now: NaiveDateTime) -> bool {
        self.date <= now
    }
}

/// Receipt for a committed reservation.
///
/// Minted by the booking command once both collections have been persisted;
/// never stored itself.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Booking {
    pub booking_id: Uuid,
    pub club_name: String,
    pub competition_name: String,
    /// Places reserved by this booking.
    pub places: u32,
}

/// Codec for the `"YYYY-MM-DD HH:MM:SS"` date strings used by the stored
/// competition records.
pub(crate) mod date_format {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    const FORMAT: &str = "%Y-%m-%d %H:%M:%S";

    pub fn serialize<S>(date: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&date.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&value, FORMAT).map_err(serde::de::Error::custom)
    }
}
