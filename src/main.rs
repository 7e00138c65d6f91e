//! ytclip CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = ytclip::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
