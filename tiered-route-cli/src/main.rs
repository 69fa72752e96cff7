//! Entry point for the `tiered-route` command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr before exiting"
)]
fn main() {
    if let Err(err) = tiered_route_cli::run() {
        eprintln!("tiered-route: {err}");
        std::process::exit(1);
    }
}
