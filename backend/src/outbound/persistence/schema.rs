//! Diesel table definitions.
//!
//! Kept in sync with `backend/migrations` by hand; regenerate with
//! `diesel print-schema` after changing a migration.

diesel::table! {
    /// Hotel records.
    hotels (id) {
        /// Primary key assigned by the hotel service.
        id -> Uuid,
        official_name -> Varchar,
        official_surname -> Varchar,
        company_title -> Varchar,
        /// Free-form location, indexed for exact-match search.
        location -> Nullable<Varchar>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Contacts attached to hotels.
    contacts (id) {
        id -> Uuid,
        /// References `hotels.id`; rows cascade when the hotel is deleted.
        hotel_id -> Uuid,
        contact_type -> Varchar,
        content -> Text,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(contacts -> hotels (hotel_id));
diesel::allow_tables_to_appear_in_same_query!(contacts, hotels);
