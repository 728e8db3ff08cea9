//! Plain-text presentation layer for the interactive shell.

use std::io::{BufRead, Write};

use crate::models::Role;
use crate::ui::{
    AdminView, ArtistPageView, ArtworkCard, ArtworkPageView, CalendarView, CartView, CarouselView,
    CuratorView, EventPageView, FieldCollector, HeaderView, HomeView, PageRenderer, SearchView,
};

#[derive(Default)]
pub struct TerminalRenderer;

fn artwork_row(card: &ArtworkCard) {
    println!(
        "  [{}] {} — by {} — ₹{}",
        card.id,
        card.title,
        card.artist_name.as_deref().unwrap_or("Unknown"),
        card.price
    );
}

impl PageRenderer for TerminalRenderer {
    fn render_header(&mut self, view: &HeaderView) {
        match &view.user {
            Some(user) => println!(
                "== Galleria | Hi, {} ({}) | Cart ({}) ==",
                user.name, user.role, view.cart_count
            ),
            None => println!("== Galleria | Login / Register | Cart ({}) ==", view.cart_count),
        }
    }

    fn render_home(&mut self, view: &HomeView) {
        println!("Welcome to the Virtual Art Gallery");
        println!("Recent Art Pieces:");
        if view.recent.is_empty() {
            println!("  No artworks yet.");
        }
        for card in &view.recent {
            artwork_row(card);
        }
        if view.can_upload {
            println!("  (upload <artist-id> to add a new artwork)");
        }
    }

    fn render_carousel(&mut self, view: &CarouselView) {
        if view.slides.is_empty() {
            println!("No featured artworks yet.");
            return;
        }
        if let Some(slide) = view.slides.get(view.index) {
            println!(
                "Featured: {} — {}",
                slide.title,
                slide.artist_name.as_deref().unwrap_or("Unknown")
            );
        }
    }

    fn render_calendar(&mut self, view: &CalendarView) {
        println!("{}", view.month_title);
        let highlighted: Vec<String> = view
            .days
            .iter()
            .filter(|d| d.highlighted)
            .map(|d| d.day.to_string())
            .collect();
        if !highlighted.is_empty() {
            println!("  Event days: {}", highlighted.join(", "));
        }
        println!("Upcoming events:");
        for ev in &view.upcoming {
            println!("  [{}] {} — {} • {}", ev.id, ev.title, ev.date, ev.time);
        }
    }

    fn render_search(&mut self, view: &SearchView) {
        println!("Search Results for \"{}\"", view.query);
        if view.artworks.is_empty() {
            println!("  No art pieces match your search.");
        }
        for card in &view.artworks {
            artwork_row(card);
        }
        if view.artists.is_empty() {
            println!("  No artists match your search.");
        }
        for artist in &view.artists {
            println!("  [{}] {} — {}", artist.id, artist.name, artist.bio);
        }
    }

    fn render_artist(&mut self, view: &ArtistPageView) {
        println!("{}", view.artist.name);
        println!("  {}", view.artist.bio);
        println!("Artworks by {}:", view.artist.name);
        for card in &view.artworks {
            artwork_row(card);
        }
        if view.is_owner {
            println!("  (upload/delete available: this is your profile)");
        }
    }

    fn render_artwork(&mut self, view: &ArtworkPageView) {
        let artist = view.artist.as_ref().map_or("Unknown", |a| a.name.as_str());
        println!("{} — by {}", view.artwork.title, artist);
        println!("  ₹{}", view.artwork.price);
        println!("  {}", view.artwork.description);
        if view.artwork.videos.is_empty() {
            println!("  No videos.");
        } else {
            for video in &view.artwork.videos {
                println!("  video: {video}");
            }
        }
    }

    fn render_event(&mut self, view: &EventPageView) {
        let ev = &view.event;
        println!("{}", ev.title);
        println!("  {} • {} • {}", ev.venue, ev.date, ev.time);
        println!("  Curator: {}", ev.curator.name);
        println!("Items on display:");
        for card in &view.items {
            artwork_row(card);
        }
    }

    fn render_login(&mut self) {
        println!("Login: visitor/admin share one form; artist and curator have their own.");
        println!("  login <role> <email> <password>");
    }

    fn render_register(&mut self, role: Role) {
        println!("Register ({role})");
        match role {
            Role::Visitor => println!("  Visitor accounts are active immediately."),
            _ => println!("  Accounts require admin verification."),
        }
    }

    fn render_cart(&mut self, view: &CartView) {
        println!("Your Cart");
        if view.entries.is_empty() {
            println!("  Your cart is empty.");
            return;
        }
        for entry in &view.entries {
            println!("  {} — ₹{}", entry.title, entry.price);
        }
        println!("  Total: ₹{}", view.total);
    }

    fn render_admin(&mut self, view: &AdminView) {
        println!("Admin Panel");
        println!("Artist Verifications:");
        if view.pending_artists.is_empty() {
            println!("  No pending artist verifications.");
        }
        for artist in &view.pending_artists {
            println!("  [{}] {} — {}", artist.id, artist.name, artist.bio);
        }
        println!("Curator Verifications:");
        if view.pending_curators.is_empty() {
            println!("  No pending curator verifications.");
        }
        for curator in &view.pending_curators {
            println!("  [{}] {} — {}", curator.user_id, curator.name, curator.bio);
        }
    }

    fn render_curator(&mut self, view: &CuratorView) {
        println!("Curator Panel");
        if view.events.is_empty() {
            println!("  No events yet.");
        }
        for row in &view.events {
            let ev = &row.event;
            println!("  [{}] {} — {} • {} • {}", ev.id, ev.title, ev.date, ev.time, ev.venue);
        }
    }

    fn render_not_found(&mut self, what: &str) {
        println!("{what} not found.");
    }

    fn notify(&mut self, message: &str) {
        println!("* {message}");
    }
}

/// Reads one line per field from stdin; EOF counts as cancelled.
#[derive(Default)]
pub struct StdinCollector;

impl FieldCollector for StdinCollector {
    fn prompt(&mut self, label: &str) -> Option<String> {
        print!("{label} ");
        std::io::stdout().flush().ok()?;
        let mut line = String::new();
        let read = std::io::stdin().lock().read_line(&mut line).ok()?;
        if read == 0 {
            return None;
        }
        Some(line.trim_end_matches(['\n', '\r']).to_string())
    }
}
