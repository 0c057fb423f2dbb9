use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::info;

use vip8_core::constants::{DEFAULT_IPS, DEFAULT_TIMER_HZ};
use vip8_core::Machine;

mod keymap;
mod run;

/// CHIP-8 virtual machine.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// ROM file to load at 0x200
    rom: PathBuf,

    /// Instruction rate, in instructions per second
    #[arg(long, default_value_t = DEFAULT_IPS)]
    ips: u64,

    /// Delay/sound timer cadence, in Hz
    #[arg(long, default_value_t = DEFAULT_TIMER_HZ)]
    timer_hz: u64,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let rom = fs::read(&args.rom)
        .with_context(|| format!("couldn't read ROM file `{}`", args.rom.display()))?;
    let mut machine = Machine::new();
    machine.load_rom(&rom)?;
    info!("loaded {} byte ROM from {}", rom.len(), args.rom.display());

    let timing = run::Timing {
        ips: args.ips,
        timer_hz: args.timer_hz,
    };
    run::run(machine, timing)
}
