//! The seam between the engine and whatever presents it. The router only
//! ever talks to these traits; the crate's terminal implementation lives in
//! `cli`, tests use recording fakes.

pub mod calendar;
pub mod carousel;
pub mod views;

pub use calendar::CalendarState;
pub use carousel::Carousel;
pub use views::{
    AdminView, ArtistCard, ArtistPageView, ArtworkCard, ArtworkPageView, CalendarDay,
    CalendarView, CartView, CarouselSlide, CarouselView, CuratorView, EventPageView, EventRow,
    HeaderUser, HeaderView, HomeView, PendingCurator, SearchView, UpcomingEvent,
};

use crate::models::Role;

/// Render-trigger hooks invoked after each relevant state change. The
/// engine decides *what* is on a page; implementations decide how it looks.
pub trait PageRenderer {
    fn render_header(&mut self, view: &HeaderView);
    fn render_home(&mut self, view: &HomeView);
    fn render_carousel(&mut self, view: &CarouselView);
    fn render_calendar(&mut self, view: &CalendarView);
    fn render_search(&mut self, view: &SearchView);
    fn render_artist(&mut self, view: &ArtistPageView);
    fn render_artwork(&mut self, view: &ArtworkPageView);
    fn render_event(&mut self, view: &EventPageView);
    fn render_login(&mut self);
    fn render_register(&mut self, role: Role);
    fn render_cart(&mut self, view: &CartView);
    fn render_admin(&mut self, view: &AdminView);
    fn render_curator(&mut self, view: &CuratorView);

    /// Placeholder for a lookup that came back empty; `what` names the
    /// missing thing ("Artist", "Artwork", "Event").
    fn render_not_found(&mut self, what: &str);

    /// One-line user-visible message (the original's `alert`).
    fn notify(&mut self, message: &str);
}

/// Blocking field collection, one field at a time (modal prompts in the
/// original). `None` means the user cancelled.
pub trait FieldCollector {
    fn prompt(&mut self, label: &str) -> Option<String>;

    /// Prompt with an empty-string fallback for optional fields.
    fn prompt_or_default(&mut self, label: &str) -> String {
        self.prompt(label).unwrap_or_default()
    }
}
