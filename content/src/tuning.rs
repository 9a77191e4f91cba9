//! Shared tuning constants for the landing experience.

/// Number of points in the morphing particle field. Constant for the
/// lifetime of the scene; the per-frame O(N) scan stays well inside the
/// frame budget at this size.
pub const PARTICLE_COUNT: usize = 4000;

/// Base morph damping per reference frame. The per-frame factor is
/// normalised by delta time so morph speed is frame-rate independent.
pub const DAMPING_FACTOR: f32 = 0.05;

/// Frame rate at which [`DAMPING_FACTOR`] applies exactly once per frame.
pub const REFERENCE_FRAME_RATE: f32 = 60.0;

/// Target tint per section index: teal, violet, emerald (sRGB).
pub const SECTION_PALETTE: [[f32; 3]; 3] = [
    [0.078, 0.722, 0.651], // #14b8a6
    [0.545, 0.361, 0.965], // #8b5cf6
    [0.063, 0.725, 0.506], // #10b981
];

/// Cloud yaw speed in radians per second for section 0.
pub const ROTATION_SPEED_PRIMARY: f32 = 0.1;

/// Cloud yaw speed in radians per second for every other section.
pub const ROTATION_SPEED_SECONDARY: f32 = 0.2;

/// Material tint interpolation rate, multiplied by delta time.
pub const COLOR_LERP_RATE: f32 = 2.0;

/// Backdrop starfield point count and shell radii.
pub const STARFIELD_COUNT: usize = 3000;
pub const STARFIELD_INNER_RADIUS: f32 = 60.0;
pub const STARFIELD_OUTER_RADIUS: f32 = 100.0;

/// Fraction of an anchor that must be visible before its section index
/// is published.
pub const SECTION_VISIBILITY_THRESHOLD: f32 = 0.5;

/// Scroll offset in logical pixels past which the navigation bar
/// condenses onto a solid background.
pub const NAV_CONDENSE_OFFSET: f32 = 50.0;

/// Logical pixels per line-based wheel tick.
pub const WHEEL_LINE_HEIGHT: f32 = 48.0;

/// Seconds between automatic gallery carousel advances.
pub const CAROUSEL_INTERVAL_SECS: f32 = 4.0;

/// Delay before the wishlist form resets after the modal closes, long
/// enough for the closing animation to finish.
pub const FORM_RESET_DELAY_SECS: f32 = 0.5;

/// Inbox the lead relay forwards submissions to.
pub const RECIPIENT_EMAIL: &str = "ankonahamed@gmail.com";

/// Fixed subject line attached to every relayed lead.
pub const LEAD_SUBJECT: &str = "New MedVault AI Early Access Request";

/// Externally hosted package opened by the direct-download action.
pub const DOWNLOAD_PACKAGE_URL: &str = "https://releases.medvault.app/medvault-latest.apk";

/// Key under which the chosen locale is persisted.
pub const LOCALE_STORAGE_KEY: &str = "i18nextLng";
