//! Driving port for hotel mutations.

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use crate::domain::{Error, Hotel, HotelDraft};

/// Driving port for hotel write operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HotelCommand: Send + Sync {
    /// Create a hotel, assigning its identity and timestamps.
    ///
    /// # Examples
    ///
    /// ```rust,no_run
    /// # use hotel_service::domain::HotelDraft;
    /// # use hotel_service::domain::ports::{FixtureHotelCommand, HotelCommand};
    /// # async fn example() -> Result<(), hotel_service::domain::Error> {
    /// let hotel = FixtureHotelCommand
    ///     .create_hotel(HotelDraft {
    ///         official_name: "Ada".into(),
    ///         official_surname: "Lovelace".into(),
    ///         company_title: "Analytical Inns".into(),
    ///         location: None,
    ///     })
    ///     .await?;
    /// assert!(!hotel.id.is_nil());
    /// # Ok(())
    /// # }
    /// ```
    async fn create_hotel(&self, draft: HotelDraft) -> Result<Hotel, Error>;

    /// Delete a hotel. Unknown identifiers are not an error.
    async fn delete_hotel(&self, id: Uuid) -> Result<(), Error>;
}

/// Fixture command implementation for tests that do not need persistence.
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureHotelCommand;

#[async_trait]
impl HotelCommand for FixtureHotelCommand {
    async fn create_hotel(&self, draft: HotelDraft) -> Result<Hotel, Error> {
        Ok(Hotel::from_draft(Uuid::new_v4(), draft, Utc::now()))
    }

    async fn delete_hotel(&self, _id: Uuid) -> Result<(), Error> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[tokio::test]
    async fn fixture_assigns_identity() {
        let hotel = FixtureHotelCommand
            .create_hotel(HotelDraft {
                official_name: "Ada".into(),
                official_surname: "Lovelace".into(),
                company_title: "Analytical Inns".into(),
                location: Some("London".into()),
            })
            .await
            .expect("fixture create succeeds");

        assert!(!hotel.id.is_nil());
        assert_eq!(hotel.location.as_deref(), Some("London"));
    }

    #[rstest]
    #[tokio::test]
    async fn fixture_delete_accepts_unknown_ids() {
        FixtureHotelCommand
            .delete_hotel(Uuid::new_v4())
            .await
            .expect("fixture delete succeeds");
    }
}
