//! Appointment booking entry: ZIP search and the featured center.

use serde::Serialize;

use crate::generators::{featured_center, is_complete_zip, ZIP_LEN};
use crate::models::{FeaturedCenter, UserProfile};
use crate::navigation::Route;

#[derive(Debug, Clone, Serialize)]
pub struct BookingView {
    pub zip_code: String,
    /// The search button is enabled only for a complete ZIP code.
    pub can_search: bool,
    pub featured: FeaturedCenter,
    /// Where "Book" leads: the map, carrying the ZIP as it stands.
    pub map_path: String,
}

/// Keep digits only, at most five.
pub fn sanitize_zip(raw: &str) -> String {
    raw.chars().filter(char::is_ascii_digit).take(ZIP_LEN).collect()
}

/// Booking screen for the current profile. `zip_input` is the search box
/// content; the featured center only follows it once it is complete.
pub fn booking(profile: &UserProfile, zip_input: Option<&str>) -> BookingView {
    let zip_code = match zip_input {
        Some(raw) => sanitize_zip(raw),
        None => profile.zip_code.clone(),
    };
    let featured = if is_complete_zip(&zip_code) {
        featured_center(&zip_code)
    } else {
        featured_center(&profile.zip_code)
    };

    BookingView {
        can_search: is_complete_zip(&zip_code),
        map_path: map_path(&zip_code),
        zip_code,
        featured,
    }
}

fn map_path(zip: &str) -> String {
    if zip.is_empty() {
        Route::Map.path().to_string()
    } else {
        format!("{}?zip={zip}", Route::Map.path())
    }
}
