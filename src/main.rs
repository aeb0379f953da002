use anyhow::Result;
use std::path::PathBuf;
use tasklist::config::Config;
use tasklist::logger::Logger;

const USAGE: &str = "\
Usage: tasklist [OPTIONS]

Options:
  --generate-config [PATH]  Write a default config file and exit
  -h, --help                Print this help
  -V, --version             Print version";

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        Some("-h") | Some("--help") => {
            println!("{}", USAGE);
            return Ok(());
        }
        Some("-V") | Some("--version") => {
            println!("tasklist {}", env!("CARGO_PKG_VERSION"));
            return Ok(());
        }
        Some("--generate-config") => {
            let path = match args.get(1) {
                Some(path) => PathBuf::from(path),
                None => Config::get_default_config_path()?,
            };
            return Config::generate_default_config(path);
        }
        Some(other) => {
            eprintln!("❌ Error: unknown argument '{}'\n\n{}", other, USAGE);
            std::process::exit(2);
        }
        None => {}
    }

    let config = Config::load()?;
    let logger = Logger::from_config(&config.logging)?;

    // Run the TUI application
    tasklist::ui::run_app(config, logger).await?;

    Ok(())
}
