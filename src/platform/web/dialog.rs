pub fn confirm_reset() -> bool {
    web_sys::window()
        .and_then(|window| {
            window
                .confirm_with_message(
                    "Are you sure you want to reset the report? This will clear all saved data.",
                )
                .ok()
        })
        .unwrap_or(false)
}
