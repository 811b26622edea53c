//! Implementation of the `loctab system` command.

use loctab::Culture;
use miette::Result;

/// Run the system command.
pub fn run_system() -> Result<i32> {
    let raw = sys_locale::get_locale();
    let culture = Culture::system();

    println!("Reported: {}", raw.as_deref().unwrap_or("(none)"));
    println!("Culture:  {}", culture);
    Ok(exitcode::OK)
}
