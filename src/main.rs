use clap::Parser;
use taskpad::cli::commands::Cli;
use taskpad::cli::handlers;
use taskpad::io::paths::resolve_data_dir;

fn main() {
    let cli = Cli::parse();
    let data_dir = resolve_data_dir(cli.data_dir.as_deref());

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = taskpad::tui::run(&data_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli, &data_dir) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
