use crate::dashboard::{DashboardContext, DashboardGateway};
use anyhow::{Result, bail};
use pingora::prelude::*;
use pingora::server::Server;
use std::sync::Arc;

/// Run the dashboard until the process is stopped.
pub fn run(ctx: DashboardContext) -> Result<()> {
    let listen = ctx.config.listen.clone();
    let log_path = ctx.log_path.clone();
    let server = build_pingora_server(ctx)?;

    tracing::info!(
        %listen,
        log = %log_path.display(),
        "dashboard listening"
    );

    server.run_forever();
}

/// Build the Pingora server with a single HTTP service on the configured address.
pub fn build_pingora_server(ctx: DashboardContext) -> Result<Server> {
    if ctx.config.listen.trim().is_empty() {
        bail!("dashboard listen address is empty");
    }

    // "None" keeps Pingora on its default settings.
    let mut server = Server::new(None)?;
    server.bootstrap();

    let listen = ctx.config.listen.clone();
    let gateway = DashboardGateway::new(Arc::new(ctx));

    let mut svc = http_proxy_service(&server.configuration, gateway);
    svc.add_tcp(&listen);

    server.add_service(svc);

    Ok(server)
}
