#[cfg(not(target_arch = "wasm32"))]
static TRACING_INIT: std::sync::Once = std::sync::Once::new();

/// Installs the global tracing subscriber once. `RUST_LOG` overrides the
/// default directive.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(crate::config::DEFAULT_LOG_DIRECTIVE));

        if fmt().with_env_filter(filter).try_init().is_ok() {
            tracing::info!("client report tracing initialized");
        }
    });
}

/// The web build logs through the Dioxus console logger installed at launch.
#[cfg(target_arch = "wasm32")]
pub fn init_tracing() {}
