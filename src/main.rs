use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "whatif",
    about = "Investment projection HTTP service (baseline vs what-if monthly compounding)"
)]
struct Cli {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,
}

#[tokio::main]
async fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = whatif::api::run_http_server(cli.port).await {
        eprintln!("Server error: {e}");
        std::process::exit(1);
    }
}
