use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use carelink::config::{Settings, DEFAULT_DEVICE_ID, DEVICE_MODEL};
use carelink::data;
use carelink::display;
use carelink::error::CarelinkError;
use carelink::store::ProfileStore;
use carelink::sync::{DeviceLink, SyncTarget};
use carelink::tui::run_tui;

#[derive(Parser)]
#[command(
    name = "carelink",
    version,
    about = "Terminal companion app for an elder-care monitoring device",
    long_about = "CareLink pairs a caregiver with an intelligent care device worn \
                  by an elderly family member. It shows the device's live read on \
                  the patient, today's activity timeline, and keeps the patient \
                  profile synced down to the device."
)]
struct Cli {
    /// Device identifier to pair with
    #[arg(long, env = "CARELINK_DEVICE_ID", global = true)]
    device_id: Option<String>,

    /// Skip the simulated network delays
    #[arg(long, global = true)]
    fast: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Print the patient profile
    Profile,

    /// Push data to the device and print the result
    Sync {
        /// What to push
        #[arg(value_enum, default_value_t = SyncArg::Everything)]
        target: SyncArg,
    },

    /// Show current configuration
    Config,
}

/// CLI spelling of the sync targets
#[derive(Debug, Clone, Copy, ValueEnum)]
enum SyncArg {
    Profile,
    Medications,
    Faces,
    Notes,
    Everything,
}

impl From<SyncArg> for SyncTarget {
    fn from(arg: SyncArg) -> Self {
        match arg {
            SyncArg::Profile => SyncTarget::Profile,
            SyncArg::Medications => SyncTarget::Medications,
            SyncArg::Faces => SyncTarget::Faces,
            SyncArg::Notes => SyncTarget::Notes,
            SyncArg::Everything => SyncTarget::Everything,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::with_overrides(cli.device_id, cli.fast)?;

    match cli.command {
        Some(Commands::Tui) | None => run_tui(settings)?,
        Some(Commands::Profile) => {
            let store = ProfileStore::new(data::seed_profile());
            let profile = store.current();
            println!("{}", display::format_profile(profile));
            println!("{}", display::format_medication_list(profile));
            println!("{}", display::format_loved_one_list(profile));
            println!("{}", display::format_note_list(profile));
        }
        Some(Commands::Sync { target }) => {
            let store = ProfileStore::new(data::seed_profile());
            let link = DeviceLink::new(&settings);
            let target: SyncTarget = target.into();

            println!("Syncing {} to device {}...", target, link.device_id());
            let response = link.sync(target, store.current());
            if !response.success {
                return Err(CarelinkError::Sync(response.message).into());
            }
            println!("[ok] {} ({})", response.message, response.timestamp);
        }
        Some(Commands::Config) => {
            println!("Device model:  {DEVICE_MODEL}");
            println!("Device ID:     {}", settings.device_id);
            println!("Default ID:    {DEFAULT_DEVICE_ID}");
            println!("Fast sync:     {}", settings.fast_sync);
            println!("Tick rate:     {}ms", settings.tick_rate_ms);
            println!("Status reset:  {}s", settings.status_reset_secs);
        }
    }

    Ok(())
}
