mod app;
mod config;
mod logging;
mod platform;

mod domain {
    pub mod entities {
        pub mod event;
        pub mod report;
        pub mod snapshot;
    }
    pub mod services {
        pub mod format;
        pub mod recalc;
    }
}

mod infra {
    pub mod memory;
    #[cfg(not(target_arch = "wasm32"))]
    pub mod sqlite {
        pub mod queries;
        pub mod repo;
        pub mod schema;
    }
    #[cfg(target_arch = "wasm32")]
    pub mod web {
        pub mod local_storage;
    }
}

mod ui {
    pub mod state {
        pub mod app_state;
    }
}

mod usecase {
    pub mod ports {
        pub mod store;
    }
    pub mod services {
        pub mod persistence_service;
        pub mod report_service;
    }
}

#[cfg(test)]
mod tests;

use app::App;

#[cfg(feature = "desktop")]
fn main() {
    logging::init_tracing();

    let mut cfg = dioxus::desktop::Config::new()
        .with_window(dioxus::desktop::WindowBuilder::new().with_title(config::WINDOW_TITLE));
    match config::default_webview_data_dir() {
        Ok(webview_data_dir) => cfg = cfg.with_data_directory(webview_data_dir),
        Err(err) => tracing::warn!(error = %err, "using default webview data directory"),
    }

    dioxus::LaunchBuilder::desktop().with_cfg(cfg).launch(App);
}

#[cfg(not(feature = "desktop"))]
fn main() {
    logging::init_tracing();
    dioxus::launch(App);
}
