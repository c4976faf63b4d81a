//! `onestar` binary entrypoint.

#[tokio::main]
async fn main() {
    std::process::exit(onestar_cli::run().await);
}
