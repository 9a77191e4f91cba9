//! Page composer: the scrollable landing page, its chrome and modals.
//!
//! The page is a single absolutely-positioned column of stacked
//! sections, translated vertically by the scroll systems. Everything
//! the visitor reads is either a [`TranslationKey`] filled from the
//! locale catalogs or a literal from the content record that doubles
//! as its own key.
//!
//! Two modals (screenshot gallery, wishlist form) float above the page;
//! while either is open the page itself is locked in place.
//!
//! [`TranslationKey`]: crate::engine::locale::translator::TranslationKey

use bevy::prelude::*;
use content::site::SiteContent;

/// Colour palette shared by the UI and the 3D backdrop.
pub mod theme;

/// The stacked page sections and their layout table.
pub mod sections;

/// Fixed top navigation bar and the overlay menu.
pub mod navigation;

/// Screenshot gallery modal with its auto-advancing carousel.
pub mod gallery;

/// Wishlist modal rendering the lead-capture form.
pub mod wishlist;

/// Keyboard handling for the form's text fields.
pub mod text_input;

/// The language-neutral content record, inserted once at startup.
#[derive(Resource)]
pub struct Site(pub SiteContent);

impl Default for Site {
    fn default() -> Self {
        Site(SiteContent::medvault())
    }
}

/// Which modals are open. An open modal captures scroll and keyboard
/// input away from the page.
#[derive(Resource, Default)]
pub struct ModalState {
    pub gallery_open: bool,
    pub wishlist_open: bool,
}

impl ModalState {
    pub fn any_open(&self) -> bool {
        self.gallery_open || self.wishlist_open
    }
}
