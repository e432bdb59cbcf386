//! Color source backed by the public placeholder photo API.
//!
//! Client-side (hydrate): real HTTP call via `gloo-net`.
//! Server-side (SSR): stub returning an error since the fetch is only
//! meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures surface as `Err(String)` so the caller can show them in the
//! status bar. No card is added when the color lookup fails.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::Photo;

/// Listing whose entries carry a hex color code in the last URL segment.
pub const PHOTOS_ENDPOINT: &str = "https://jsonplaceholder.typicode.com/photos";

#[cfg(any(test, feature = "hydrate"))]
fn photos_request_failed_message(status: u16) -> String {
    format!("photos request failed: {status}")
}

/// Extract the trailing path segment of `url`, e.g. `"771796"` from
/// `https://via.placeholder.com/600/771796`.
#[must_use]
pub fn color_code_from_url(url: &str) -> Option<&str> {
    let code = url.trim_end_matches('/').rsplit('/').next()?;
    if code.is_empty() || code.contains(':') { None } else { Some(code) }
}

/// CSS color string (`#` + code) for a photo URL.
#[must_use]
pub fn color_from_url(url: &str) -> Option<String> {
    color_code_from_url(url).map(|code| format!("#{code}"))
}

/// Map a unit sample in `[0, 1)` onto an index in `0..len`.
///
/// Out-of-range and non-finite samples are clamped. Returns `None` for an
/// empty listing.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn pick_index(len: usize, sample: f64) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let unit = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let idx = (unit * len as f64).floor() as usize;
    Some(idx.min(len - 1))
}

/// Choose a color from `photos` using `sample` as the random draw.
///
/// # Errors
///
/// Returns an error string when the listing is empty or the chosen entry has
/// no usable color segment.
pub fn pick_color(photos: &[Photo], sample: f64) -> Result<String, String> {
    let idx = pick_index(photos.len(), sample).ok_or_else(|| "photos listing was empty".to_owned())?;
    let url = photos.get(idx).map_or("", |p| p.url.as_str());
    color_from_url(url).ok_or_else(|| format!("no color code in url: {url}"))
}

/// Fetch the photo listing and pick one entry's color at random.
///
/// # Errors
///
/// Returns an error string if the request fails, the server answers with a
/// non-OK status, the body does not decode, or no color can be derived.
pub async fn fetch_random_color() -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(PHOTOS_ENDPOINT)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(photos_request_failed_message(resp.status()));
        }
        let photos: Vec<Photo> = resp.json().await.map_err(|e| e.to_string())?;
        pick_color(&photos, js_sys::Math::random())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
