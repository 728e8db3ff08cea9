pub mod storage {

    /// File holding the full gallery snapshot as one JSON document.
    pub const STORE_FILE: &str = "store.json";
}

pub mod intervals {
    use std::time::Duration;

    /// Period between carousel advances.
    pub const CAROUSEL_TICK: Duration = Duration::from_millis(5000);
}

pub mod limits {

    /// Artworks shown in the "recent" strip on the home page.
    pub const RECENT_ARTWORKS: usize = 6;

    /// Upcoming events listed under the calendar.
    pub const UPCOMING_EVENTS: usize = 4;
}
