//! Featured-artwork carousel state. The engine is single-threaded, so the
//! host drives advancement: it calls [`Carousel::advance`] once per tick
//! period ([`crate::constants::intervals::CAROUSEL_TICK`]). Each home
//! render builds a fresh `Carousel` that replaces the previous one, which
//! is what cancels a stale cycle; hosts must key their timer to the
//! current instance so ticks never stack across re-renders.

use crate::db::Snapshot;
use super::views::{CarouselSlide, CarouselView};

#[derive(Debug, Clone, Default)]
pub struct Carousel {
    slide_ids: Vec<String>,
    index: usize,
}

impl Carousel {
    /// Captures the featured artworks in store order.
    #[must_use]
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            slide_ids: snapshot
                .artworks
                .iter()
                .filter(|a| a.featured)
                .map(|a| a.id.clone())
                .collect(),
            index: 0,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.slide_ids.is_empty()
    }

    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Advances to the next slide, wrapping modulo the featured count.
    pub fn advance(&mut self) {
        if !self.slide_ids.is_empty() {
            self.index = (self.index + 1) % self.slide_ids.len();
        }
    }

    #[must_use]
    pub fn view(&self, snapshot: &Snapshot) -> CarouselView {
        let slides = self
            .slide_ids
            .iter()
            .filter_map(|id| snapshot.artwork_by_id(id))
            .map(|art| CarouselSlide {
                art_id: art.id.clone(),
                title: art.title.clone(),
                image: art.image.clone(),
                artist_name: snapshot
                    .artist_by_id(&art.artist_id)
                    .map(|a| a.name.clone()),
            })
            .collect();
        CarouselView {
            slides,
            index: self.index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::seed;

    #[test]
    fn test_advance_wraps_modulo_featured_count() {
        let snapshot = seed::snapshot();
        let mut carousel = Carousel::from_snapshot(&snapshot);
        // Seed has two featured artworks.
        assert_eq!(carousel.view(&snapshot).slides.len(), 2);
        assert_eq!(carousel.index(), 0);
        carousel.advance();
        assert_eq!(carousel.index(), 1);
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }

    #[test]
    fn test_empty_carousel_never_advances() {
        let mut carousel = Carousel::from_snapshot(&crate::db::Snapshot::default());
        assert!(carousel.is_empty());
        carousel.advance();
        assert_eq!(carousel.index(), 0);
    }
}
