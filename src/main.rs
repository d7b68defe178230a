use std::process::exit;

use address_book::cli;

fn main() {
    dotenv::dotenv().ok();
    env_logger::init();

    if let Err(e) = cli::run_app() {
        eprintln!("Error: {e}");
        exit(1);
    }
}
