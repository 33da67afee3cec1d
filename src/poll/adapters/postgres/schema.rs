//! Diesel schema for poll persistence.

diesel::table! {
    /// Poll records with a denormalized status column for indexed lookup.
    polls (id) {
        /// Poll record identifier.
        id -> Uuid,
        /// Lifecycle status, kept in step with the payload on every write.
        #[max_length = 20]
        status -> Varchar,
        /// Full serialized record.
        payload -> Jsonb,
        /// Creation timestamp, duplicated for ordered listing.
        created_at -> Timestamptz,
        /// Last update timestamp.
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Post identifiers consumed by past generation cycles.
    used_posts (post_id) {
        /// Social-network post identifier.
        #[max_length = 255]
        post_id -> Varchar,
    }
}

diesel::allow_tables_to_appear_in_same_query!(polls, used_posts);
