// DOM hooks and timing used by the web front-end.
// These must match the ids and classes in `static/index.html` and
// `static/site.css`.

// Element ids
pub const FIELD_CANVAS_ID: &str = "field-canvas";
pub const HEADER_ID: &str = "site-header";
pub const CURSOR_ID: &str = "cursor-dot";
pub const SPLASH_ID: &str = "splash";
pub const HERO_PARALLAX_ID: &str = "hero-parallax";

// Selectors
pub const NAV_BUTTON_SELECTOR: &str = "[data-section]"; // every scroll-to trigger
pub const NAV_HIGHLIGHT_SELECTOR: &str = "nav [data-section]"; // only these get .active
pub const NAV_SECTION_ATTR: &str = "data-section";

// Classes toggled at runtime
pub const ACTIVE_CLASS: &str = "active";
pub const SCROLLED_CLASS: &str = "scrolled";
pub const REVEALED_CLASS: &str = "revealed";
pub const HIDDEN_CLASS: &str = "hidden";

// CSS custom properties driven from pointer movement
pub const PARALLAX_X_VAR: &str = "--parallax-x";
pub const PARALLAX_Y_VAR: &str = "--parallax-y";

// Loading splash stays up this long after start
pub const SPLASH_MS: i32 = 1500;
