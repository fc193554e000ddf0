use crate::access_log::load_log;
use crate::dashboard::endpoint::DashboardEndpoint;
use crate::dashboard::{DashboardContext, DashboardSnapshot, locations_payload, render_page};
use crate::static_files::serve_static;
use anyhow::Context;
use bytes::Bytes;
use http::{Method, StatusCode, header};
use pingora::prelude::Session;
use pingora_http::ResponseHeader;
use std::sync::Arc;

const HTML: &str = "text/html; charset=utf-8";
const JSON: &str = "application/json";

pub struct DashboardHandler {
    ctx: Arc<DashboardContext>,
}

impl DashboardHandler {
    pub fn new(ctx: Arc<DashboardContext>) -> Self {
        Self { ctx }
    }

    pub(crate) async fn handle(&self, session: &mut Session) -> pingora::Result<bool> {
        let method = session.req_header().method.clone();
        let path = session.req_header().uri.path().to_owned();

        if method != Method::GET && method != Method::HEAD {
            let mut resp = ResponseHeader::build(StatusCode::METHOD_NOT_ALLOWED, None)?;
            resp.insert_header(header::ALLOW, "GET, HEAD")?;
            resp.insert_header(header::CONTENT_LENGTH, "0")?;
            session.write_response_header(Box::new(resp), true).await?;
            return Ok(true);
        }

        let head = method == Method::HEAD;
        let endpoint = DashboardEndpoint::from_path(&path, &self.ctx.config.static_prefix);

        match endpoint {
            Some(DashboardEndpoint::Page) => {
                let result = self.build_in_background(render_page_body).await;
                self.send_result(session, head, HTML, result).await?;
            }

            Some(DashboardEndpoint::Locations) => {
                let result = self.build_in_background(locations_body).await;
                self.send_result(session, head, JSON, result).await?;
            }

            Some(DashboardEndpoint::Static) => {
                let static_resp = serve_static(
                    &self.ctx.config.static_dir,
                    &self.ctx.config.static_prefix,
                    &path,
                )
                .await;

                let mut resp = ResponseHeader::build(static_resp.status, None)?;
                for (name, value) in static_resp.headers.iter() {
                    resp.insert_header(name, value)?;
                }

                let body = (!head && !static_resp.body.is_empty()).then_some(static_resp.body);
                self.write(session, resp, body).await?;
            }

            None => {
                tracing::debug!(%path, "no dashboard route");
                let body = error_body("not found");
                self.send_response(session, head, StatusCode::NOT_FOUND, JSON, body)
                    .await?;
            }
        }

        Ok(true)
    }

    /// Parse the log and build a response body off the async workers.
    async fn build_in_background(
        &self,
        build: fn(&DashboardContext) -> anyhow::Result<Vec<u8>>,
    ) -> anyhow::Result<Vec<u8>> {
        let ctx = self.ctx.clone();
        tokio::task::spawn_blocking(move || build(&ctx))
            .await
            .context("dashboard worker panicked")?
    }

    async fn send_result(
        &self,
        session: &mut Session,
        head: bool,
        content_type: &str,
        result: anyhow::Result<Vec<u8>>,
    ) -> pingora::Result<()> {
        match result {
            Ok(body) => {
                self.send_response(session, head, StatusCode::OK, content_type, body)
                    .await
            }
            Err(e) => {
                let message = format!("{e:#}");
                tracing::error!(error = %message, "dashboard request failed");
                let body = error_body(&message);
                self.send_response(
                    session,
                    head,
                    StatusCode::INTERNAL_SERVER_ERROR,
                    JSON,
                    body,
                )
                .await
            }
        }
    }

    async fn send_response(
        &self,
        session: &mut Session,
        head: bool,
        status: StatusCode,
        content_type: &str,
        body: Vec<u8>,
    ) -> pingora::Result<()> {
        let mut resp = ResponseHeader::build(status, None)?;
        resp.insert_header(header::CONTENT_TYPE, content_type)?;
        resp.insert_header(header::CONTENT_LENGTH, body.len().to_string())?;
        resp.insert_header(header::CACHE_CONTROL, "no-store")?;

        let body = (!head).then(|| Bytes::from(body));
        self.write(session, resp, body).await
    }

    async fn write(
        &self,
        session: &mut Session,
        resp: ResponseHeader,
        body: Option<Bytes>,
    ) -> pingora::Result<()> {
        match body {
            Some(body) => {
                session.write_response_header(Box::new(resp), false).await?;
                session.write_response_body(Some(body), true).await?;
            }
            None => {
                session.write_response_header(Box::new(resp), true).await?;
            }
        }
        Ok(())
    }
}

fn render_page_body(ctx: &DashboardContext) -> anyhow::Result<Vec<u8>> {
    let loaded = load_log(&ctx.log_path)?;
    let snapshot = DashboardSnapshot::build(&loaded.state, &ctx.config, ctx.resolver.as_ref());
    let html = render_page(&snapshot, &ctx.config.static_prefix)
        .context("failed to render dashboard page")?;
    Ok(html.into_bytes())
}

fn locations_body(ctx: &DashboardContext) -> anyhow::Result<Vec<u8>> {
    let loaded = load_log(&ctx.log_path)?;
    let body = locations_payload(&loaded.state, ctx.resolver.as_ref())
        .context("failed to serialize locations")?;
    Ok(body)
}

pub(crate) fn error_body(message: &str) -> Vec<u8> {
    serde_json::json!({ "error": message }).to_string().into_bytes()
}
