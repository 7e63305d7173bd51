use std::{net::SocketAddr, sync::Arc};

use clap::Parser;
use dietwise_api::{
    application::{
        http::server::http_server::{router, state, with_metrics},
        logging::init_logging,
    },
    args::Args,
};
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    dotenv::dotenv().ok();

    let args = Arc::new(Args::parse());
    init_logging(&args.log)?;

    let state = state(args.clone())?;
    let router = with_metrics(router(state)?, &args.server.root_path);

    let addr: SocketAddr = format!("{}:{}", args.server.host, args.server.port).parse()?;
    info!("Dietwise listening on {addr}");

    axum_server::bind(addr)
        .serve(router.into_make_service())
        .await?;

    Ok(())
}
