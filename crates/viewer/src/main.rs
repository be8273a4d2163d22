//! NCP story viewer - composition root binary.

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    ncpview_viewer::app::run().await
}
