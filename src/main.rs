use clap::Parser;
use tagdesk::cli_app::{handle_command, Cli};

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    handle_command(cli, std::io::stdin(), std::io::stdout()).await;
}
