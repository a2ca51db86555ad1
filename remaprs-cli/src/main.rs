mod handlers;

use clap::{Command, arg, error::ErrorKind};

pub mod consts {
    pub const VERSION: &str = env!("CARGO_PKG_VERSION");
    pub const BIN_NAME: &str = "remaprs";
}

fn build_parser() -> Command {
    Command::new(consts::BIN_NAME)
        .bin_name(consts::BIN_NAME)
        .version(consts::VERSION)
        .author("Databio")
        .about("Translate integer ranges through chained piecewise remapping tables without enumerating individual values.")
        .arg(arg!(<FILE> "Input document: a values line followed by blank-separated mapping blocks"))
}

fn main() {
    let matches = match build_parser().try_get_matches() {
        Ok(matches) => matches,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            print!("{}", e);
            std::process::exit(0);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = handlers::run_remap(&matches) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
