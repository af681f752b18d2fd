pub mod app_state;
pub mod cursor;
pub mod product;
pub mod route;
pub mod search_state;
pub mod theme;
pub mod voice;

pub use app_state::{Navigator, ThemeContext};
pub use product::{Category, Product, CATALOG};
pub use route::Route;
pub use search_state::{SearchSession, SearchState};
pub use theme::{ThemeMode, ThemeStore};
