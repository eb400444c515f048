//! Warm-up throbber: spinner and rotating status message.
//!
//! The purely decorative sibling of the runner: no interactivity, no
//! scoring, just motion while the backend readiness line is on screen.

use std::time::{SystemTime, UNIX_EPOCH};

/// Braille spinner characters for animated loading indicators.
const SPINNER: [char; 10] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Status messages cycled while the backend warms up.
const WARMUP_MESSAGES: [&str; 8] = [
    "Warming up backend services...",
    "Provisioning model runtime...",
    "Loading artifact templates...",
    "Priming generation pipeline...",
    "Syncing workspace manifests...",
    "Indexing export targets...",
    "Negotiating API sessions...",
    "Almost there...",
];

/// Returns the current time in milliseconds since UNIX epoch.
fn current_millis() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// Returns the current spinner character based on system time.
/// The spinner cycles every 100ms, completing a full rotation every second.
pub fn spinner_char() -> char {
    let millis = current_millis();
    SPINNER[((millis / 100) % 10) as usize]
}

/// Returns the current warm-up message, rotating every few seconds.
pub fn warmup_message() -> &'static str {
    let slot = (current_millis() / 4000) as usize;
    WARMUP_MESSAGES[slot % WARMUP_MESSAGES.len()]
}
