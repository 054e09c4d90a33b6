mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "bolsillo",
    version,
    about = "Hide application windows into the notification area"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the default configuration files
    Init,
    /// Start the daemon
    Start,
    /// Stop the daemon (restores all hidden windows)
    Stop,
    /// Show whether the daemon is running and what it has hidden
    Status,
    /// Restore every hidden window
    RestoreAll,
    /// Manage the auto-hide target list
    Target {
        #[command(subcommand)]
        command: TargetCommands,
    },
    /// Manage automatic startup on Windows logon
    Autostart {
        #[command(subcommand)]
        command: AutostartCommands,
    },
    /// Debugging and inspection tools
    Debug {
        #[command(subcommand)]
        command: DebugCommands,
    },
    /// Run the daemon (internal — not for direct use)
    #[command(hide = true)]
    Daemon,
}

#[derive(Subcommand)]
enum TargetCommands {
    /// Add an executable path to the auto-hide list
    Add { path: String },
    /// Remove an executable path from the auto-hide list
    Remove { path: String },
    /// List the auto-hide targets
    List,
}

#[derive(Subcommand)]
enum AutostartCommands {
    /// Start Bolsillo automatically on logon
    Enable,
    /// Do not start Bolsillo on logon
    Disable,
    /// Show whether autostart is enabled
    Status,
}

#[derive(Subcommand)]
enum DebugCommands {
    /// List the application windows the auto-hide matcher can see
    List,
    /// Watch window events in real time
    Events,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Start => commands::start::execute(),
        Commands::Stop => commands::stop::execute(),
        Commands::Status => commands::status::execute(),
        Commands::RestoreAll => commands::restore_all::execute(),
        Commands::Daemon => commands::daemon::execute(),
        Commands::Target { command } => match command {
            TargetCommands::Add { path } => commands::target::add(&path),
            TargetCommands::Remove { path } => commands::target::remove(&path),
            TargetCommands::List => commands::target::list(),
        },
        Commands::Autostart { command } => match command {
            AutostartCommands::Enable => commands::autostart::enable(),
            AutostartCommands::Disable => commands::autostart::disable(),
            AutostartCommands::Status => commands::autostart::status(),
        },
        Commands::Debug { command } => match command {
            DebugCommands::List => commands::debug::list::execute(),
            DebugCommands::Events => commands::debug::events::execute(),
        },
    }
}
