use bridgewatch::adapter::inbound::cli::{self, output, Cli};
use clap::Parser;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    let cli = Cli::parse();

    let code = match cli::execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&e.to_string());
            1
        }
    };

    std::process::exit(code);
}
