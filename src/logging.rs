use tracing_wasm::WASMLayerConfigBuilder;

use crate::config::SiteConfig;

/// Route panics and `tracing` output to the browser console. Call once, before mounting.
pub fn setup_logging(config: &SiteConfig) {
    console_error_panic_hook::set_once();

    let level = config.max_log_level().unwrap_or(tracing::Level::INFO);
    tracing_wasm::set_as_global_default_with_config(
        WASMLayerConfigBuilder::new().set_max_level(level).build(),
    );

    tracing::info!(%level, brand = %config.brand_name, "logging initialized");
}
