//! vjsgen binary entry point.

use vjsgen::ui::output;

fn main() {
    if let Err(err) = vjsgen::cli::run() {
        output::error(format!("{:#}", err));
        std::process::exit(1);
    }
}
