#[cfg(not(target_arch = "wasm32"))]
pub mod desktop {
    pub mod dialog;
    pub mod store;
}

#[cfg(target_arch = "wasm32")]
pub mod web {
    pub mod dialog;
    pub mod store;
}

#[cfg(not(target_arch = "wasm32"))]
pub use desktop::{dialog::confirm_reset, store::open_default_store};
#[cfg(target_arch = "wasm32")]
pub use web::{dialog::confirm_reset, store::open_default_store};
