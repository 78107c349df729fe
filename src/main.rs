#[tokio::main]
async fn main() {
    if let Err(e) = careportal::run().await {
        tracing::error!("{e}");
        eprintln!("careportal: {e}");
        std::process::exit(1);
    }
}
