//! Command-line front end for the rotor cipher engine.

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use enigma_machine::config::MachineConfig;
use enigma_machine::utils::alphabet::parse_positions;
use enigma_machine::EnigmaMachine;

#[derive(Parser)]
#[command(name = "enigma")]
#[command(about = "Rotor cipher machine simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt or decrypt text (the operation is its own inverse)
    Convert(TextArgs),
    /// Run plugboard and forward rotor pass only, without the reflector
    Forward(TextArgs),
    /// Print the signal path of every keystroke
    Trace(TextArgs),
    /// Print the full-alphabet stage table for a number of keystrokes
    Lampboard {
        #[command(flatten)]
        machine: MachineArgs,

        /// Number of keystrokes to show
        #[arg(short = 'n', long, default_value = "1")]
        presses: usize,
    },
}

#[derive(Args)]
struct MachineArgs {
    /// Machine description (TOML); Enigma I, rotors I-II-III, reflector B if omitted
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Initial rotor positions, fastest first: letters ("AAA") or numbers ("0,0,0")
    #[arg(short, long)]
    positions: Option<String>,
}

#[derive(Args)]
struct TextArgs {
    #[command(flatten)]
    machine: MachineArgs,

    /// Text to process; read from stdin if omitted
    text: Option<String>,
}

impl MachineArgs {
    fn build(&self) -> Result<EnigmaMachine> {
        let config = match &self.config {
            Some(path) => MachineConfig::load(path)
                .with_context(|| format!("loading machine config {}", path.display()))?,
            None => MachineConfig::historical_default(),
        };
        let mut machine = config.build().context("building machine")?;
        if let Some(settings) = &self.positions {
            let positions = parse_positions(settings).context("parsing rotor positions")?;
            machine
                .set_positions(&positions)
                .context("applying rotor positions")?;
        }
        Ok(machine)
    }
}

impl TextArgs {
    fn text(&self) -> Result<String> {
        match &self.text {
            Some(text) => Ok(text.clone()),
            None => {
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("reading text from stdin")?;
                Ok(buf)
            }
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Commands::Convert(args) => {
            let mut machine = args.machine.build()?;
            println!("{}", machine.encrypt_or_decrypt(&args.text()?));
        }
        Commands::Forward(args) => {
            let mut machine = args.machine.build()?;
            println!("{}", machine.forward_only(&args.text()?));
        }
        Commands::Trace(args) => {
            let mut machine = args.machine.build()?;
            for c in args.text()?.chars() {
                if let Some(trace) = machine.press_traced(c) {
                    println!("{}", trace);
                }
            }
        }
        Commands::Lampboard { machine, presses } => {
            let mut machine = machine.build()?;
            for _ in 0..presses {
                println!("{}\n", machine.lampboard());
            }
        }
    }

    Ok(())
}
