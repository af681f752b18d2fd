use leptos::prelude::*;
use talwar_ui::{logging, platform, App, SiteConfig};

fn main() {
    let config = SiteConfig::from_window();
    logging::setup_logging(&config);

    // A legacy URL reloads the page under its hash route
    if platform::location::redirect_legacy_path() {
        return;
    }

    leptos::mount::mount_to_body(move || view! { <App config=config /> });
}
