use std::{env, io, process};

use altcat::{Error, core::Error as CoreError};
use nix::errno::Errno;

fn main() {
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = env::args_os();
    let program = args
        .next()
        .map(|program| program.to_string_lossy().into_owned())
        .unwrap_or_else(|| String::from("altcat"));

    match altcat::run(io::stdout(), args) {
        Ok(()) => {}
        Err(Error::Usage) => {
            eprintln!("Invalid arguments.");
            eprintln!("{program} FILE [FILE...]");
            process::exit(1);
        }
        // A failed transfer puts the OS error straight onto the exit status; the errno
        // value is the whole diagnostic, so nothing is printed. A short transfer has no
        // errno of its own and is reported as an I/O error.
        Err(Error::Core(CoreError::Transfer { e })) => process::exit(e as i32),
        Err(Error::Core(CoreError::ShortTransfer { .. })) => process::exit(Errno::EIO as i32),
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    }
}
