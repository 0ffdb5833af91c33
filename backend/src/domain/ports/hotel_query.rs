//! Driving port for hotel reads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::{Error, Hotel, HotelDraft, HotelOfficials};

/// Driving port for hotel read operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelQuery: Send + Sync {
    /// Fetch one hotel; `not_found` when it does not exist.
    async fn get_hotel(&self, id: Uuid) -> Result<Hotel, Error>;

    /// Officials projection of one hotel; `not_found` when it does not exist.
    async fn list_officials(&self, id: Uuid) -> Result<HotelOfficials, Error>;

    /// Hotels located at `location`.
    async fn find_by_location(&self, location: String) -> Result<Vec<Hotel>, Error>;
}

fn fixture_timestamp() -> DateTime<Utc> {
    DateTime::<Utc>::UNIX_EPOCH
}

fn fixture_hotel(id: Uuid, location: Option<String>) -> Hotel {
    Hotel::from_draft(
        id,
        HotelDraft {
            official_name: "Gustave".to_owned(),
            official_surname: "H.".to_owned(),
            company_title: "Grand Budapest Hotel".to_owned(),
            location,
        },
        fixture_timestamp(),
    )
}

/// Fixture query implementation answering every lookup with a sample hotel.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelQuery;

#[async_trait]
impl HotelQuery for FixtureHotelQuery {
    async fn get_hotel(&self, id: Uuid) -> Result<Hotel, Error> {
        Ok(fixture_hotel(id, None))
    }

    async fn list_officials(&self, id: Uuid) -> Result<HotelOfficials, Error> {
        Ok(HotelOfficials::from(fixture_hotel(id, None)))
    }

    async fn find_by_location(&self, location: String) -> Result<Vec<Hotel>, Error> {
        Ok(vec![fixture_hotel(Uuid::nil(), Some(location))])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_echoes_requested_id() {
        let id = Uuid::new_v4();
        let officials = FixtureHotelQuery
            .list_officials(id)
            .await
            .expect("fixture lookup succeeds");
        assert_eq!(officials.hotel_id, id);
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_location_search_echoes_filter() {
        let hotels = FixtureHotelQuery
            .find_by_location("Nebelsbad".to_owned())
            .await
            .expect("fixture search succeeds");
        assert_eq!(hotels.len(), 1);
        assert_eq!(
            hotels.first().and_then(|hotel| hotel.location.as_deref()),
            Some("Nebelsbad")
        );
    }
}
