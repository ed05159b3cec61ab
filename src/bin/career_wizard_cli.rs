use std::{env, process};

use career_wizard::{cli, init, utils::build_info};

fn main() {
    init();

    if env::args().skip(1).any(|arg| arg == "--version" || arg == "-V") {
        println!("{}", build_info::current());
        return;
    }

    if let Err(err) = cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}
