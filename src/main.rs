//! mealtally main entrypoint.

use mealtally::run;

fn main() {
    if let Err(e) = run() {
        mealtally::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
