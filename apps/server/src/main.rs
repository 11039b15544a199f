use anyhow::Context;
use folio::kernel::config::load_config;
use folio_logger::Logger;
use folio_server::Server;

#[folio_runtime::main(high_performance)]
async fn main() -> anyhow::Result<()> {
    let _log = Logger::builder()
        .name(env!("CARGO_PKG_NAME"))
        .env_filter("info,folio=debug,tower_http=info")
        .init()?;

    let cfg = load_config(Some("server")).context("Critical: Configuration is malformed")?;

    Server::builder().config(cfg).build()?.run().await
}
