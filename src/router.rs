//! Fragment router and page dispatch. States are route fragments;
//! transitions come from navigation or from mutation handlers that write
//! the store, persist, and re-render the widgets they touched.

use chrono::{Local, NaiveDate};
use tracing::{debug, error, warn};

use crate::constants::limits::RECENT_ARTWORKS;
use crate::db::{Snapshot, Store};
use crate::models::{Role, User, artwork::price_or_zero};
use crate::services::{
    self, ArtworkDraft, Credentials, EventArtworkDraft, EventDraft, RegistrationForm,
};
use crate::session::Session;
use crate::ui::{
    AdminView, ArtistCard, ArtistPageView, ArtworkCard, ArtworkPageView, CalendarState, Carousel,
    CartView, CuratorView, EventPageView, EventRow, FieldCollector, HeaderView, HomeView,
    PageRenderer, PendingCurator, SearchView,
};

/// One state of the UI, parsed from a URL fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Search(String),
    Artist(String),
    Artwork(String),
    Event(String),
    Login,
    Register(Role),
    Cart,
    Admin,
    Curator,
}

impl Route {
    /// Parses a fragment per the route grammar. Anything unrecognized
    /// behaves as home.
    #[must_use]
    pub fn parse(fragment: &str) -> Self {
        let hash = fragment.trim().trim_start_matches('#');
        if hash.is_empty() || hash.starts_with("home") {
            return Self::Home;
        }
        if let Some(raw) = hash.strip_prefix("search-") {
            let query = urlencoding::decode(raw).map_or_else(|_| raw.to_string(), Into::into);
            return Self::Search(query);
        }
        if let Some(id) = hash.strip_prefix("artist-") {
            return Self::Artist(id.to_string());
        }
        if let Some(id) = hash.strip_prefix("art-") {
            return Self::Artwork(id.to_string());
        }
        if let Some(id) = hash.strip_prefix("event-") {
            return Self::Event(id.to_string());
        }
        if hash == "login" {
            return Self::Login;
        }
        if let Some(rest) = hash.strip_prefix("register") {
            let role = rest
                .strip_prefix("?role=")
                .map_or(Role::Visitor, |r| match r {
                    "artist" => Role::Artist,
                    "curator" => Role::Curator,
                    _ => Role::Visitor,
                });
            return Self::Register(role);
        }
        match hash {
            "cart" => Self::Cart,
            "admin" => Self::Admin,
            "curator" => Self::Curator,
            _ => Self::Home,
        }
    }

    /// The fragment this route round-trips to.
    #[must_use]
    pub fn fragment(&self) -> String {
        match self {
            Self::Home => "#home".to_string(),
            Self::Search(q) => format!("#search-{}", urlencoding::encode(q)),
            Self::Artist(id) => format!("#artist-{id}"),
            Self::Artwork(id) => format!("#art-{id}"),
            Self::Event(id) => format!("#event-{id}"),
            Self::Login => "#login".to_string(),
            Self::Register(role) => format!("#register?role={role}"),
            Self::Cart => "#cart".to_string(),
            Self::Admin => "#admin".to_string(),
            Self::Curator => "#curator".to_string(),
        }
    }
}

/// Application state: the live snapshot, the session user, the current
/// route, and the page-scoped widget state (calendar cursor, carousel).
/// The renderer and field collector are injected capabilities; the engine
/// never touches a concrete UI toolkit.
pub struct App {
    store: Store,
    session: Session,
    renderer: Box<dyn PageRenderer>,
    collector: Box<dyn FieldCollector>,
    snapshot: Snapshot,
    current_user: Option<User>,
    route: Route,
    calendar: CalendarState,
    carousel: Carousel,
}

impl App {
    #[must_use]
    pub fn new(
        store: Store,
        session: Session,
        renderer: Box<dyn PageRenderer>,
        collector: Box<dyn FieldCollector>,
    ) -> Self {
        Self {
            store,
            session,
            renderer,
            collector,
            snapshot: Snapshot::default(),
            current_user: None,
            route: Route::Home,
            calendar: CalendarState::new(today()),
            carousel: Carousel::default(),
        }
    }

    /// Seeds the store, restores the session, and renders the initial
    /// route. Failures are logged and swallowed so the host UI stays
    /// usable over an empty snapshot.
    pub fn bootstrap(&mut self) {
        if let Err(e) = self.try_bootstrap() {
            error!("App initialization failed: {e:#}");
        }
    }

    fn try_bootstrap(&mut self) -> anyhow::Result<()> {
        self.snapshot = self.store.ensure_seed_merged()?;
        self.current_user = self.session.current_user()?;
        self.navigate("#home");
        Ok(())
    }

    #[must_use]
    pub const fn route(&self) -> &Route {
        &self.route
    }

    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    #[must_use]
    pub const fn current_user(&self) -> Option<&User> {
        self.current_user.as_ref()
    }

    /// Routes a fragment change, programmatic or user-driven.
    pub fn navigate(&mut self, fragment: &str) {
        let route = Route::parse(fragment);
        debug!(fragment, route = ?route, "Navigating");
        self.route = route;
        self.render_route();
    }

    /// Renders the current route from scratch, header first.
    pub fn render_route(&mut self) {
        let header = HeaderView::build(&self.snapshot, self.current_user.as_ref());
        self.renderer.render_header(&header);

        match self.route.clone() {
            Route::Home => self.render_home(),
            Route::Search(query) => self.render_search(&query),
            Route::Artist(id) => self.render_artist_page(&id),
            Route::Artwork(id) => self.render_artwork_page(&id),
            Route::Event(id) => self.render_event_page(&id),
            Route::Login => self.renderer.render_login(),
            Route::Register(role) => self.renderer.render_register(role),
            Route::Cart => self.render_cart_page(),
            Route::Admin => self.render_admin_panel(),
            Route::Curator => self.render_curator_panel(),
        }
    }

    fn render_home(&mut self) {
        // Home navigation resets the calendar to the current month and
        // replaces the carousel, cancelling any stale cycle.
        self.calendar.reset(today());
        self.carousel = Carousel::from_snapshot(&self.snapshot);

        let recent = self
            .snapshot
            .artworks
            .iter()
            .take(RECENT_ARTWORKS)
            .map(|a| ArtworkCard::build(&self.snapshot, a))
            .collect();
        let can_upload = self.current_user.as_ref().is_some_and(|u| {
            u.role == Role::Artist && u.verified && u.artist_id.is_some()
        });
        let home = HomeView { recent, can_upload };
        self.renderer.render_home(&home);

        let carousel = self.carousel.view(&self.snapshot);
        self.renderer.render_carousel(&carousel);
        self.render_calendar();
    }

    fn render_calendar(&mut self) {
        let view = self.calendar.view(&self.snapshot);
        self.renderer.render_calendar(&view);
    }

    fn render_search(&mut self, query: &str) {
        let results = services::search(&self.snapshot, query);
        let view = SearchView {
            query: query.to_string(),
            artworks: results
                .artworks
                .iter()
                .map(|a| ArtworkCard::build(&self.snapshot, a))
                .collect(),
            artists: results.artists.iter().map(ArtistCard::from).collect(),
        };
        self.renderer.render_search(&view);
    }

    fn render_artist_page(&mut self, id: &str) {
        let Some(artist) = self.snapshot.artist_by_id(id).cloned() else {
            self.renderer.render_not_found("Artist");
            return;
        };
        let artworks = self
            .snapshot
            .artworks
            .iter()
            .filter(|a| a.artist_id == artist.id)
            .map(|a| ArtworkCard::build(&self.snapshot, a))
            .collect();
        let is_owner = self.current_user.as_ref().is_some_and(|u| {
            u.role == Role::Artist && u.artist_id.as_deref() == Some(id)
        });
        let view = ArtistPageView { artist, artworks, is_owner };
        self.renderer.render_artist(&view);
    }

    fn render_artwork_page(&mut self, id: &str) {
        let Some(artwork) = self.snapshot.artwork_by_id(id).cloned() else {
            self.renderer.render_not_found("Artwork");
            return;
        };
        let artist = self
            .snapshot
            .artist_by_id(&artwork.artist_id)
            .map(ArtistCard::from);
        let view = ArtworkPageView { artwork, artist };
        self.renderer.render_artwork(&view);
    }

    fn render_event_page(&mut self, id: &str) {
        let Some(event) = self.snapshot.event_by_id(id).cloned() else {
            self.renderer.render_not_found("Event");
            return;
        };
        let hero_image = event
            .items
            .first()
            .and_then(|item| self.snapshot.artwork_by_id(item))
            .map(|a| a.image.clone());
        let items = event
            .items
            .iter()
            .filter_map(|item| self.snapshot.artwork_by_id(item))
            .map(|a| ArtworkCard::build(&self.snapshot, a))
            .collect();
        let view = EventPageView { event, hero_image, items };
        self.renderer.render_event(&view);
    }

    fn render_cart_page(&mut self) {
        let view = CartView::build(&self.snapshot);
        self.renderer.render_cart(&view);
    }

    fn render_admin_panel(&mut self) {
        if !self.require_admin() {
            return;
        }
        let view = AdminView {
            pending_artists: self
                .snapshot
                .artists
                .iter()
                .filter(|a| !a.verified)
                .map(ArtistCard::from)
                .collect(),
            pending_curators: self
                .snapshot
                .users
                .iter()
                .filter(|u| u.role == Role::Curator && !u.verified)
                .map(|u| PendingCurator {
                    user_id: u.id.clone(),
                    name: u.name.clone(),
                    bio: u.bio.clone().unwrap_or_default(),
                    photo: u.photo.clone().unwrap_or_default(),
                })
                .collect(),
        };
        self.renderer.render_admin(&view);
    }

    fn render_curator_panel(&mut self) {
        if !self.require_curator() {
            return;
        }
        let events = self
            .snapshot
            .events
            .iter()
            .map(|e| EventRow {
                thumbnail: e
                    .items
                    .first()
                    .and_then(|id| self.snapshot.artwork_by_id(id))
                    .map(|a| a.image.clone()),
                event: e.clone(),
            })
            .collect();
        self.renderer.render_curator(&CuratorView { events });
    }

    /* ====== Widget actions ====== */

    /// Host timer callback: advances the carousel one slide. Only the home
    /// page carries a carousel, so ticks elsewhere are ignored.
    pub fn tick_carousel(&mut self) {
        if self.route != Route::Home || self.carousel.is_empty() {
            return;
        }
        self.carousel.advance();
        let view = self.carousel.view(&self.snapshot);
        self.renderer.render_carousel(&view);
    }

    pub fn calendar_prev_month(&mut self) {
        self.calendar.prev_month();
        self.render_calendar();
    }

    pub fn calendar_next_month(&mut self) {
        self.calendar.next_month();
        self.render_calendar();
    }

    /* ====== Role gates ====== */

    fn require_login(&mut self) -> Option<User> {
        if let Some(user) = self.current_user.clone() {
            return Some(user);
        }
        self.renderer.notify("Please login first.");
        self.navigate("#login");
        None
    }

    fn require_admin(&mut self) -> bool {
        if self.current_user.as_ref().is_some_and(|u| u.role == Role::Admin) {
            return true;
        }
        self.renderer.notify("Admin login required.");
        self.navigate("#login");
        false
    }

    fn require_curator(&mut self) -> bool {
        if self
            .current_user
            .as_ref()
            .is_some_and(|u| u.role == Role::Curator)
        {
            return true;
        }
        self.renderer.notify("Curator login required.");
        self.navigate("#login");
        false
    }

    /* ====== Session handlers ====== */

    /// Role-specific login. On success the session is set and the app
    /// navigates home, or to the curator panel for curators.
    pub fn login(&mut self, role: Role, credentials: &Credentials) {
        match services::auth::login(&self.snapshot, role, credentials) {
            Ok(user) => {
                let message = format!("{role} logged in.");
                self.set_session_user(Some(user));
                self.renderer.notify(&message);
                match role {
                    Role::Curator => self.navigate("#curator"),
                    _ => self.navigate("#home"),
                }
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    /// The shared visitor/admin form: tries the visitor role, then admin.
    pub fn login_visitor_or_admin(&mut self, credentials: &Credentials) {
        if services::auth::login(&self.snapshot, Role::Visitor, credentials).is_ok() {
            self.login(Role::Visitor, credentials);
        } else {
            self.login(Role::Admin, credentials);
        }
    }

    pub fn register(&mut self, form: RegistrationForm) {
        match services::auth::register(&mut self.snapshot, form) {
            Ok(outcome) => {
                self.persist();
                if outcome.auto_login {
                    self.set_session_user(Some(outcome.user));
                    self.renderer.notify("Visitor registered and signed in.");
                    self.navigate("#home");
                } else {
                    let role = outcome.user.role;
                    self.renderer
                        .notify(&format!("{role} registered. Await admin verification."));
                    self.navigate("#login");
                }
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    pub fn sign_out(&mut self) {
        self.set_session_user(None);
        self.renderer.notify("Signed out.");
        self.navigate("#home");
    }

    fn set_session_user(&mut self, user: Option<User>) {
        if let Err(e) = self.session.set_current_user(user.as_ref()) {
            warn!("Failed to persist session: {e:#}");
        }
        self.current_user = user;
    }

    /* ====== Admin handlers ====== */

    pub fn approve_artist(&mut self, artist_id: &str) {
        if !self.require_admin() {
            return;
        }
        match services::catalog::approve_artist(&mut self.snapshot, artist_id) {
            Ok(()) => {
                self.persist();
                self.renderer.notify("Artist approved.");
                self.render_route();
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    pub fn approve_curator(&mut self, user_id: &str) {
        if !self.require_admin() {
            return;
        }
        match services::catalog::approve_curator(&mut self.snapshot, user_id) {
            Ok(()) => {
                self.persist();
                self.renderer.notify("Curator approved.");
                self.render_route();
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    /* ====== Artist handlers ====== */

    /// Collects artwork fields one at a time and appends the upload. Only
    /// the owning, verified artist session may upload; a cancelled or
    /// empty title aborts the whole operation.
    pub fn upload_artwork(&mut self, artist_id: &str) {
        if !self.is_owner_artist(artist_id) {
            self.renderer.notify("Only the artist may upload here.");
            return;
        }
        let Some(title) = self
            .collector
            .prompt("Artwork title:")
            .filter(|t| !t.trim().is_empty())
        else {
            self.renderer.notify("Upload cancelled: title is required.");
            return;
        };
        let image = self.collector.prompt_or_default("Image URL (or leave blank for placeholder):");
        let description = self.collector.prompt_or_default("Short description:");
        let price = price_or_zero(&self.collector.prompt_or_default("Price (number, e.g. 450):"));
        let featured = self
            .collector
            .prompt_or_default("Feature this artwork on the carousel? (yes/no):")
            .trim()
            .to_lowercase()
            .starts_with('y');

        let draft = ArtworkDraft { title, image, description, price, featured };
        match services::catalog::upload_artwork(&mut self.snapshot, artist_id, draft) {
            Ok(_) => {
                self.persist();
                self.renderer.notify("Artwork uploaded.");
                self.render_route();
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    /// Deletes an artwork (owner only), cascading through event item lists.
    /// If the deleted artwork is the page being viewed, falls back home.
    pub fn delete_artwork(&mut self, artwork_id: &str) {
        let Some(artwork) = self.snapshot.artwork_by_id(artwork_id) else {
            self.renderer.notify("Artwork not found.");
            return;
        };
        let owner_id = artwork.artist_id.clone();
        if !self.is_owner_artist(&owner_id) {
            self.renderer.notify("Only the owning artist may delete this artwork.");
            return;
        }
        match services::catalog::delete_artwork(&mut self.snapshot, artwork_id) {
            Ok(_) => {
                self.persist();
                self.renderer.notify("Artwork removed.");
                if self.route_references(artwork_id) {
                    self.navigate("#home");
                } else {
                    self.render_route();
                }
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    fn is_owner_artist(&self, artist_id: &str) -> bool {
        self.current_user.as_ref().is_some_and(|u| {
            u.role == Role::Artist && u.verified && u.artist_id.as_deref() == Some(artist_id)
        })
    }

    fn route_references(&self, artwork_id: &str) -> bool {
        matches!(&self.route, Route::Artwork(id) if id == artwork_id)
    }

    /* ====== Curator handlers ====== */

    /// Collects event fields plus any number of new artworks, which are
    /// synthesized under the curator's own artist profile.
    pub fn create_event(&mut self) {
        if !self.require_curator() {
            return;
        }
        let Some(curator) = self.current_user.clone() else {
            return;
        };
        let Some(title) = self
            .collector
            .prompt("Event title:")
            .filter(|t| !t.trim().is_empty())
        else {
            return;
        };
        let Some(date) = self
            .collector
            .prompt("Date (YYYY-MM-DD):")
            .filter(|d| !d.trim().is_empty())
        else {
            return;
        };
        let time = self.collector.prompt_or_default("Time (e.g. 6:00 PM):");
        let venue = self.collector.prompt_or_default("Venue:");
        let curator_photo = self.collector.prompt_or_default("Curator photo URL (optional):");
        let count = self
            .collector
            .prompt_or_default("How many artworks would you like to add to this event? (enter a number)")
            .trim()
            .parse::<usize>()
            .unwrap_or(0);

        let mut artworks = Vec::new();
        for i in 1..=count {
            let title = self.collector.prompt_or_default(&format!("Artwork #{i} title:"));
            if title.trim().is_empty() {
                continue;
            }
            let image = self.collector.prompt_or_default(&format!("Artwork #{i} image URL:"));
            let description = self
                .collector
                .prompt_or_default(&format!("Artwork #{i} short description (optional):"));
            let price =
                price_or_zero(&self.collector.prompt_or_default(&format!("Artwork #{i} price (number):")));
            artworks.push(EventArtworkDraft { title, image, description, price });
        }

        let draft = EventDraft { title, venue, date, time, curator_photo };
        services::events::create_event(&mut self.snapshot, &curator, draft, artworks);
        self.persist();
        self.renderer.notify("Event created.");
        self.render_route();
        self.render_calendar();
    }

    pub fn delete_event(&mut self, event_id: &str) {
        if !self.require_curator() {
            return;
        }
        match services::events::delete_event(&mut self.snapshot, event_id) {
            Ok(_) => {
                self.persist();
                self.renderer.notify("Event removed.");
                self.render_route();
                self.render_calendar();
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    /* ====== Cart handlers ====== */

    pub fn add_to_cart(&mut self, artwork_id: &str) {
        let Some(user) = self.require_login() else {
            return;
        };
        let Some(artwork) = self.snapshot.artwork_by_id(artwork_id).cloned() else {
            self.renderer.notify("Artwork not found.");
            return;
        };
        match services::cart::add(&mut self.snapshot, &user, &artwork) {
            Ok(()) => {
                self.persist();
                self.renderer.notify("Added to cart.");
                let header = HeaderView::build(&self.snapshot, self.current_user.as_ref());
                self.renderer.render_header(&header);
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    pub fn buy_now(&mut self) {
        let Some(user) = self.require_login() else {
            return;
        };
        match services::cart::buy_now(&mut self.snapshot, &user) {
            Ok(()) => {
                self.persist();
                self.renderer.notify("Purchase simulated. Thank you!");
                let header = HeaderView::build(&self.snapshot, self.current_user.as_ref());
                self.renderer.render_header(&header);
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    pub fn checkout(&mut self) {
        let Some(user) = self.require_login() else {
            return;
        };
        match services::cart::checkout(&mut self.snapshot, &user) {
            Ok(()) => {
                self.persist();
                self.renderer.notify("Checkout simulated. Order placed.");
                self.render_route();
            }
            Err(e) => self.renderer.notify(&e.to_string()),
        }
    }

    /// Persists the live snapshot; a storage failure is logged, never
    /// propagated into the UI.
    fn persist(&mut self) {
        if let Err(e) = self.store.save(&self.snapshot) {
            error!("Failed to persist snapshot: {e:#}");
        }
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse("#home"), Route::Home);
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#artist-a1"), Route::Artist("a1".to_string()));
        assert_eq!(Route::parse("#art-art_12_3"), Route::Artwork("art_12_3".to_string()));
        assert_eq!(Route::parse("#event-e2"), Route::Event("e2".to_string()));
        assert_eq!(Route::parse("#login"), Route::Login);
        assert_eq!(Route::parse("#cart"), Route::Cart);
        assert_eq!(Route::parse("#admin"), Route::Admin);
        assert_eq!(Route::parse("#curator"), Route::Curator);
    }

    #[test]
    fn test_parse_search_decodes_query() {
        assert_eq!(
            Route::parse("#search-golden%20hour"),
            Route::Search("golden hour".to_string())
        );
    }

    #[test]
    fn test_parse_register_roles() {
        assert_eq!(Route::parse("#register?role=artist"), Route::Register(Role::Artist));
        assert_eq!(Route::parse("#register?role=curator"), Route::Register(Role::Curator));
        assert_eq!(Route::parse("#register"), Route::Register(Role::Visitor));
        assert_eq!(Route::parse("#register?role=bogus"), Route::Register(Role::Visitor));
    }

    #[test]
    fn test_unrecognized_falls_back_home() {
        assert_eq!(Route::parse("#nonsense"), Route::Home);
        assert_eq!(Route::parse("#cartel"), Route::Home);
    }
}
