pub mod custom_cursor;
pub mod icons;
pub mod nav_bar;
pub mod search_overlay;
pub mod theme_toggle;

pub use custom_cursor::CustomCursor;
pub use icons::Icon;
pub use nav_bar::NavBar;
pub use search_overlay::SearchOverlay;
pub use theme_toggle::ThemeToggle;
