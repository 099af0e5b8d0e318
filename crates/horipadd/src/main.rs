mod bus;
mod cli;
mod logging;
mod sink;

use std::process::ExitCode;

use clap::Parser;
use colored::Colorize;
use crossbeam_channel::unbounded;

use horipad_link::{Supervisor, Timings};

use crate::bus::I2cTransport;
use crate::cli::Cli;
use crate::sink::UinputSink;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::setup(cli.debug, cli.no_color);

    // Handle Ctrl+C / SIGTERM to exit cleanly
    let (stop_tx, stop_rx) = unbounded::<()>();
    ctrlc::set_handler(move || {
        let _ = stop_tx.send(());
    })
    .expect("failed to set Ctrl+C handler");

    let mut bus = match I2cTransport::open(cli.bus) {
        Ok(bus) => bus,
        Err(e) => {
            print_error!("failed to open i2c bus {0}: {e}", cli.bus);
            return ExitCode::FAILURE;
        }
    };
    let mut sink = match UinputSink::create(cli.debug) {
        Ok(sink) => sink,
        Err(e) => {
            print_error!("failed to create uinput device: {e}");
            return ExitCode::FAILURE;
        }
    };

    print_info!("horipadd started. Bridging i2c bus {0} to a virtual gamepad.", cli.bus);
    let mut supervisor = Supervisor::new(Timings::default(), cli.reset_on_reconnect);
    supervisor.run(&mut bus, &mut sink, &stop_rx);

    // Dropping the sink destroys the uinput node.
    print_info!("horipadd stopped.");
    ExitCode::SUCCESS
}
