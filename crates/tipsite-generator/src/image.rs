//! Hero image placeholders.
//!
//! Image paths are mapped to external placeholder images through a fixed
//! table keyed on the exact path string.

use tracing::debug;

/// URL used for any non-empty image path missing from the table.
pub const GENERIC_PLACEHOLDER: &str =
    "https://placehold.co/800x400/cccccc/333333?text=Image+Placeholder";

const NETWORK_MONITORING: &str =
    "https://placehold.co/800x400/4a90e2/white?text=Network+Monitoring";
const INTUNE_MANAGEMENT: &str = "https://placehold.co/800x400/00a4ef/white?text=Intune+Management";
const WINDOWS_SERVER: &str = "https://placehold.co/800x400/107c10/white?text=Windows+Server";

/// Known image paths and their placeholder URLs.
pub const IMAGE_PLACEHOLDERS: &[(&str, &str)] = &[
    ("Images/network-monitoring.jpg", NETWORK_MONITORING),
    ("Images/intune-mgmt.jpg", INTUNE_MANAGEMENT),
    ("Images/windows-server.jpg", WINDOWS_SERVER),
    ("Images/network-monitoring-dash.jpg", NETWORK_MONITORING),
    ("Images/intune-mdm-console.jpg", INTUNE_MANAGEMENT),
    ("Images/windows-server-dashboard.jpg", WINDOWS_SERVER),
];

/// Resolve an image path to the URL inserted into the page.
///
/// Empty input gives an empty string; unknown paths (including near-misses
/// of table entries) give [`GENERIC_PLACEHOLDER`].
#[must_use]
pub fn placeholder_url(image: &str) -> &'static str {
    if image.is_empty() {
        return "";
    }

    match IMAGE_PLACEHOLDERS.iter().find(|(path, _)| *path == image) {
        Some((_, url)) => *url,
        None => {
            debug!(image, "no placeholder for image, using generic");
            GENERIC_PLACEHOLDER
        }
    }
}
