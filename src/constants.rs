// DOM names shared by the web front end.

// Optional host element carrying `data-*` tuning overrides
pub const ROOT_ELEMENT_ID: &str = "cursor-root";
pub const DATA_ATTR_PREFIX: &str = "data-";

// Follower layer elements, indexed [core, glow, trail]
pub const LAYER_CLASSES: [&str; 3] = ["cursor-core", "cursor-glow", "cursor-trail"];
pub const LAYER_Z_INDEX: u32 = 9999;

// Colors used by the inline styles (rgb without alpha)
pub const CORE_RGB: [u8; 3] = [255, 255, 255];
pub const GLOW_RGB: [u8; 3] = [120, 170, 255];

// CSS transition for size/opacity changes (position is driven per frame)
pub const SIZE_TRANSITION: &str = "width 0.2s ease-out, height 0.2s ease-out, opacity 0.3s ease-out, box-shadow 0.2s ease-out";

// Magnetic elements
pub const MAGNETIC_SELECTOR: &str = ".magnetic";

// Scroll spy
pub const SECTION_SELECTOR: &str = "section[id]";
pub const ACTIVE_SECTION_ATTR: &str = "data-active-section";
pub const ACTIVE_LINK_CLASS: &str = "active";
