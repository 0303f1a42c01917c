//! Employee Roster entry point
//!
//! The web build is driven by `bindings::start` in the library. Natively this
//! binary loads a roster into memory and prints it, which is handy for
//! checking the seed data and the translation tables.

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    use employee_roster::{Roster, platform};

    env_logger::init();
    log::info!("Employee roster (native) starting...");
    log::info!("Native mode keeps data in memory - build for wasm32 to use LocalStorage");

    let mut roster = Roster::new(platform::default_storage());

    // Optional first argument picks the language
    if let Some(code) = std::env::args().nth(1) {
        if !roster.i18n.set_language(&code) {
            log::warn!(
                "Unsupported language {code:?}, keeping {}",
                roster.i18n.current_language()
            );
        }
    }

    let i18n = &roster.i18n;
    println!(
        "{} ({}) [{}]",
        i18n.t("employeeList"),
        roster.store.len(),
        i18n.t(roster.settings.view_mode.label_key())
    );
    println!(
        "{:>4}  {:<12} {:<12} {:<12} {:<10} {}",
        "#",
        i18n.t("firstName"),
        i18n.t("lastName"),
        i18n.t("department"),
        i18n.t("position"),
        i18n.t("email")
    );
    for e in roster.store.employees() {
        println!(
            "{:>4}  {:<12} {:<12} {:<12} {:<10} {}",
            e.id,
            e.first_name,
            e.last_name,
            e.department,
            i18n.t(e.position.label_key()),
            e.email
        );
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is bindings::start, this is just to satisfy the compiler
}
