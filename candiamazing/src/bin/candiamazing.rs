//! candiamazing command-line entry point.
//!
//! # Usage
//!
//! ```bash
//! candiamazing --help
//! candiamazing flux_to_mag 3631 8.9
//! RUST_LOG=debug candiamazing mag_to_flux 10 8.9
//! ```

use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let code = candiamazing::cli::run(std::env::args_os(), &mut io::stdout(), &mut io::stderr());
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}
