use clap::Parser;
use tokio::io::{stdin, BufReader};

use fwa_detect::client::cli_client::{analyze_once, run_repl, CliArgs};
use fwa_detect::client::config::{ClientConfig, CLI_LOG_LEVEL};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliArgs::parse();
    let config = ClientConfig::from_env(CLI_LOG_LEVEL);
    fwa_detect::utils::logger::init(&config.log_level);
    config.log_summary();
    let service = args.service(&config)?;

    match args.one_shot_text() {
        Some(text) => {
            let analysis = analyze_once(&service, &text).await?;
            println!("{}", analysis);
        }
        None => {
            let (mut out, mut err) = (std::io::stdout(), std::io::stderr());
            run_repl(&service, BufReader::new(stdin()), &mut out, &mut err).await?;
        }
    }
    Ok(())
}
