//! rPcLogger main entrypoint.

use rpclogger::run;
use rpclogger::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        if e.is_input_error() {
            error(format!("Input error: {e}"));
        } else {
            error(format!("Error: {e}"));
        }
        std::process::exit(1);
    }
}
