//! timesheet main entrypoint.

use timesheet::run;
use timesheet::ui::messages;

fn main() {
    if let Err(e) = run() {
        if e.is_user_error() {
            messages::warning(&e);
        } else {
            messages::error(format!("Error: {e}"));
        }
        std::process::exit(1);
    }
}
