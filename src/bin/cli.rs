// src/bin/cli.rs
use color_eyre::eyre::{Result, WrapErr};
use duo_stats::cli;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cmd = cli::parse_args(std::env::args().skip(1))
        .wrap_err("Bad arguments (try --help)")?;
    let out = cli::execute(cmd).wrap_err("Comparison failed")?;
    print!("{out}");
    Ok(())
}
