use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// Vertical scroll offset (px) past which the nav bar gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

/// Share of a region's area that must be on screen before it starts revealing.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Length of the opacity/offset transition once a region is revealed.
pub const REVEAL_TRANSITION_MS: u32 = 1000;

pub const DOCUMENT_TITLE: &str = "KiwiKrypto | 1:1 Crypto Consultation";
