//! rSupply main entrypoint.

use rsupply::run;

fn main() {
    println!();
    if let Err(e) = run() {
        rsupply::ui::messages::error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
