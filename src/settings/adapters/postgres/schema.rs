//! Diesel schema for settings persistence.

diesel::table! {
    /// Single-row storage for the application settings record.
    app_settings (id) {
        /// Fixed row identifier; exactly one row exists.
        id -> Int4,
        /// Serialized settings payload.
        payload -> Jsonb,
    }
}
