//! zasm hosting harness CLI.
//!
//! Loads the kernel, userspace, and filesystem images, captures stdin into
//! the input block device, and runs the hosted Z80 program to halt. Stdout
//! carries either the program's console output or, with `--memdump`, the
//! final 64 KiB memory image; stderr carries diagnostics.

mod z80;

use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use zhost_core::common::HostError;
use zhost_core::config::{Config, OutputMode};
use zhost_core::sim::loader;
use zhost_core::sim::{RunSummary, Runner};
use zhost_core::soc::Machine;

use crate::z80::Z80Core;

#[derive(Parser, Debug)]
#[command(
    name = "zhost",
    author,
    version,
    about = "Host the zasm Z80 cross-assembler image against emulated block devices",
    long_about = "Runs a pre-built Z80 image (kernel glue at 0x0000, userspace at 0x4800) with \
stdin and an embedded filesystem exposed as seekable block devices over ports 0-3.\n\n\
Examples:\n  zhost --kernel glue.bin --user zasm.bin --fs includes.cfs < in.asm > out.bin\n  \
zhost --kernel glue.bin --user zasm.bin --memdump < in.asm > memory.bin"
)]
struct Cli {
    /// Kernel (ROM glue) image, mapped at 0x0000.
    #[arg(long)]
    kernel: PathBuf,

    /// Userspace image (the assembler itself), mapped at 0x4800.
    #[arg(long)]
    user: PathBuf,

    /// Filesystem image preloaded into the fsdev block device.
    #[arg(long)]
    fs: Option<PathBuf>,

    /// JSON configuration file (defaults apply when omitted).
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dump the final 64 KiB memory image to stdout instead of console output.
    #[arg(long)]
    memdump: bool,

    /// Debug diagnostics on stderr (tell/seek trace, halt register summary).
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("[!] FATAL: {e}");
        process::exit(1);
    }
}

/// Installs the stderr diagnostics channel.
///
/// Out-of-range port reports are `warn` events and always pass the default
/// filter; `--verbose` (or `RUST_LOG`) opens up the `debug` trace.
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "zhost_core=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .init();
}

/// Bootstraps the machine and runs it to halt.
fn run(cli: Cli) -> Result<RunSummary, HostError> {
    let mut config = match &cli.config {
        Some(path) => Config::from_json(&std::fs::read_to_string(path)?)?,
        None => Config::default(),
    };
    if cli.memdump {
        config.output = OutputMode::MemoryDump;
    }

    let kernel = loader::read_image(&cli.kernel)?;
    let user = loader::read_image(&cli.user)?;
    let fs_image = match &cli.fs {
        Some(path) => loader::read_image(path)?,
        None => Vec::new(),
    };

    let mut machine = Machine::new(&config, Box::new(io::stdout()));
    loader::load_images(&mut machine, &kernel, &user, &fs_image)?;
    let captured = loader::drain_input(&mut machine, io::stdin().lock())?;
    tracing::debug!(bytes = captured, "captured external input");

    let mut runner = Runner::new(machine, Z80Core::new(), config.output);
    Ok(runner.run())
}
