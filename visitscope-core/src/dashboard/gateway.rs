use crate::dashboard::{DashboardContext, DashboardHandler};
use async_trait::async_trait;
use pingora::prelude::{HttpPeer, ProxyHttp, Session};
use pingora::{Custom, Error};
use std::sync::Arc;

pub struct DashboardGateway {
    handler: DashboardHandler,
}

impl DashboardGateway {
    pub fn new(ctx: Arc<DashboardContext>) -> Self {
        Self {
            handler: DashboardHandler::new(ctx),
        }
    }
}

#[async_trait]
impl ProxyHttp for DashboardGateway {
    type CTX = ();

    fn new_ctx(&self) -> Self::CTX {}

    async fn upstream_peer(
        &self,
        _session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<Box<HttpPeer>> {
        Err(Error::new(Custom(
            "DashboardGateway attempted to proxy upstream (bug)",
        )))
    }

    async fn request_filter(
        &self,
        session: &mut Session,
        _ctx: &mut Self::CTX,
    ) -> pingora::Result<bool> {
        // Terminal: every request is answered here.
        self.handler.handle(session).await
    }
}
