use std::{io, process};

use select_sort::Config;

fn main() {
    env_logger::init();

    let config = Config::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Err(e) = select_sort::run(&config, &mut out) {
        eprintln!("Application error: {:#}", e);
        process::exit(1);
    }
}
