use std::process::exit;
use tasq::commands::Cli;
use tasq::msg_error;

fn main() {
    if let Err(e) = Cli::menu() {
        msg_error!(format!("{:#}", e));
        exit(1);
    }
}
