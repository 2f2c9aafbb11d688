// Shared tuning constants for the scroll-spy and the ambient field.

// Scroll-spy
pub const SPY_THRESHOLD_DESKTOP_PX: f64 = 100.0; // threshold line below the viewport top
pub const SPY_THRESHOLD_MOBILE_PX: f64 = 150.0; // taller fixed header on narrow screens
pub const MOBILE_BREAKPOINT_PX: f64 = 768.0; // widths below this are "mobile"
pub const SCROLLED_THRESHOLD_PX: f64 = 50.0; // header collapses past this scroll offset

// Reveal-on-scroll
pub const REVEAL_VISIBLE_FRACTION: f64 = 0.2; // share of a section that must be on screen

// Pointer effects
pub const CURSOR_SIZE_PX: f64 = 24.0;
pub const CURSOR_SCROLLED_SCALE: f64 = 0.7;
pub const PARALLAX_STRENGTH: f32 = 40.0;
pub const PARALLAX_MIN_WIDTH_PX: f64 = 1024.0;

// Ambient field population
pub const FIELD_AREA_PER_POINT: f32 = 20_000.0; // px^2 of viewport per point
pub const FIELD_MAX_POINTS: usize = 150;
pub const FIELD_RADIUS_MIN: f32 = 1.0;
pub const FIELD_RADIUS_MAX: f32 = 4.0;
pub const FIELD_SPEED_MIN: f32 = 6.0; // px per second
pub const FIELD_SPEED_MAX: f32 = 18.0;
pub const FIELD_OPACITY_MIN: f32 = 0.1;
pub const FIELD_OPACITY_MAX: f32 = 0.4;
pub const FIELD_WRAP_MARGIN_PX: f32 = 5.0;

// Ambient field timing
pub const FIELD_TARGET_FPS: f64 = 30.0;
pub const FIELD_MAX_STEP_MS: f64 = 250.0; // longest single step after a stall

// Connections
pub const CONNECT_POINT_LIMIT: usize = 50; // only the first N points are tested pairwise
pub const CONNECT_DISTANCE_FRACTION: f32 = 0.15; // of the shorter viewport side
pub const CONNECT_DISTANCE_MIN_PX: f32 = 60.0;
pub const CONNECT_DISTANCE_MAX_PX: f32 = 140.0;
pub const CONNECT_OPACITY_CAP: f32 = 0.4;
pub const CONNECT_LINE_WIDTH: f32 = 0.5;
pub const CONNECT_COLOR: [u8; 3] = [140, 140, 255];
