//! Entrypoint.

fn main() {
    if let Err(err) = keploybot::initialize_command_line() {
        eprintln!("ERROR: {err:?}");
        std::process::exit(1);
    }
}
