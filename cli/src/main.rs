use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use ipmnemonic::{classify, Checked, Mnemonic, Mnemonizer};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;

use cli::{Cli, Commands};

/// Printed in place of a mnemonic for input that is not an address.
const NO_MNEMONIC: &str = "-";

fn main() -> Result<ExitCode> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    if let Some(Commands::GenerateSalt) = cli.command {
        println!("{}", Mnemonizer::generate_salt());
        return Ok(ExitCode::SUCCESS);
    }

    let checked = Mnemonizer::from_arg(cli.salt.as_deref());
    let mnem = if cli.strict {
        checked
            .into_strict()
            .context("a salt of at least 40 characters is required in strict mode")?
    } else {
        checked.into_inner()
    };
    tracing::debug!(salt_len = mnem.salt_len(), "mnemonizer ready");

    let mut out = BufWriter::new(io::stdout().lock());
    let mut all_valid = true;

    if cli.addresses.is_empty() {
        for line in io::stdin().lock().split(b'\n') {
            let mut line = line.context("failed to read from stdin")?;
            if line.last() == Some(&b'\r') {
                line.pop();
            }
            let address = String::from_utf8_lossy(&line);
            all_valid &= emit(&mut out, &address, mnem.apply_bytes(&line), cli.kind)?;
        }
    } else {
        for address in &cli.addresses {
            all_valid &= emit(&mut out, address, mnem.apply_arg(Some(address)), cli.kind)?;
        }
    }
    out.flush().context("failed to write to stdout")?;

    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

/// Writes one result line and returns whether the address produced a mnemonic.
fn emit(
    out: &mut impl Write,
    address: &str,
    result: Checked<Option<Mnemonic>>,
    with_kind: bool,
) -> Result<bool> {
    let mnemonic = result.into_inner();
    let text = mnemonic.map_or_else(|| NO_MNEMONIC.to_string(), |m| m.to_string());
    let written = if with_kind {
        writeln!(out, "{address}\t{}\t{text}", classify(address))
    } else {
        writeln!(out, "{text}")
    };
    written.context("failed to write to stdout")?;
    Ok(mnemonic.is_some())
}
