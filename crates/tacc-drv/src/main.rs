use std::process::ExitCode;

use anyhow::{bail, Result};

use tacc_drv::{Config, Session};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let mut args = std::env::args_os().skip(1);
    let source_path = match args.next() {
        Some(path) => path,
        None => bail!("usage: tacc <source-file>"),
    };
    if args.next().is_some() {
        bail!("usage: tacc <source-file>");
    }

    // `StageError`'s own `Display` already produces the
    // "Error during compilation pipeline at stage <stage>: <msg>" line,
    // so it's propagated as-is rather than wrapped.
    let mut session = Session::new(Config::new(source_path));
    session.compile()?;
    Ok(())
}
