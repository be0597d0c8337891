//! Tuning constants for the page. Everything the motion and particle layers
//! treat as a magic number lives here.

/// localStorage key holding the visitor's cookie decision.
pub const COOKIE_CONSENT_KEY: &str = "cookieConsent";

/// Delay before the cookie banner appears on a first visit.
pub const COOKIE_BANNER_DELAY_MS: u32 = 2_000;

/// Scroll offset past which the navbar switches to its compact style.
pub const NAV_SCROLL_THRESHOLD: f64 = 100.0;

/// Fixed navbar height compensated for when smooth-scrolling to an anchor.
pub const ANCHOR_SCROLL_OFFSET: f64 = 80.0;

/// One particle per this many square pixels of viewport.
pub const PARTICLE_AREA_DIVISOR: f64 = 15_000.0;

/// Particles closer than this get a connecting line.
pub const CONNECTION_DISTANCE: f64 = 150.0;

/// Stat counters run for this long, in this many discrete steps.
pub const COUNTER_DURATION_MS: u32 = 2_000;
pub const COUNTER_STEPS: u32 = 100;

/// Viewport fraction at which a counter starts animating.
pub const COUNTER_TRIGGER_FRACTION: f64 = 0.8;
