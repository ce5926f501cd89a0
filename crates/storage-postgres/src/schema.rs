// Mirrors the externally managed tables. Keep in sync with the loader's DDL.

diesel::table! {
    series_registry (slug) {
        slug -> Text,
        title -> Text,
        frequency -> Text,
        units -> Text,
    }
}

diesel::table! {
    observations (series_slug, date) {
        series_slug -> Text,
        date -> Date,
        value -> Float8,
    }
}

diesel::joinable!(observations -> series_registry (series_slug));

diesel::allow_tables_to_appear_in_same_query!(observations, series_registry,);
