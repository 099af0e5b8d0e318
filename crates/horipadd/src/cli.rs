use clap::Parser;

/// Bridge a Hori I2C Fighting Commander to a virtual uinput gamepad.
#[derive(Parser)]
#[command(version, about, long_about = None)]
pub(crate) struct Cli {
    /// I2C bus index to probe (maps to /dev/i2c-<N>)
    #[arg(short = 'y', long = "bus", default_value_t = 1)]
    pub bus: u8,

    /// Print raw frames and live button state
    #[arg(short = 'd', long = "debug")]
    pub debug: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Re-arm edge tracking after a reconnect instead of comparing
    /// against pre-disconnect state
    #[arg(long)]
    pub reset_on_reconnect: bool,
}
