//! Browser entry point. Built by trunk with `--features csr`.

#[cfg(feature = "csr")]
fn main() {
    console_error_panic_hook::set_once();
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Debug);
    leptos::mount::mount_to_body(spinwheel::app::App);
}

#[cfg(not(feature = "csr"))]
fn main() {}
