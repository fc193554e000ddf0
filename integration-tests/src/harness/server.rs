use crate::harness::init_test_tracing;
use reqwest::blocking::{Client, RequestBuilder};
use std::net::TcpStream;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use visitscope_core::conf::DashboardConfig;
use visitscope_core::dashboard::{DashboardContext, build_pingora_server};
use visitscope_core::geoip::{GeoLocation, StaticResolver};

/// Handle to a running dashboard test server.
pub struct TestServer {
    base_url: String,
    client: Client,
}

impl TestServer {
    /// Start a dashboard over `fixtures/access.log`.
    pub fn start() -> Self {
        Self::start_with_log(fixture_path("access.log"))
    }

    /// Start a dashboard over an arbitrary log path, which need not exist.
    ///
    /// Every server gets its own port, so tests can run in parallel.
    pub fn start_with_log(log_path: PathBuf) -> Self {
        init_test_tracing();

        let listen_port = free_port();

        let config = DashboardConfig {
            listen: format!("127.0.0.1:{listen_port}"),
            static_dir: fixture_path("static"),
            ..DashboardConfig::default()
        };

        let ctx = DashboardContext {
            log_path,
            config,
            resolver: Arc::new(stub_resolver()),
        };

        let server = build_pingora_server(ctx).expect("failed to build dashboard server");

        // Run server in background thread
        thread::spawn(move || {
            server.run_forever();
        });

        let base_url = format!("http://127.0.0.1:{listen_port}");

        // Wait for server to accept connections
        wait_for_server(&base_url);

        let client = Client::builder()
            .timeout(Duration::from_secs(5))
            .build()
            .expect("failed to build client");

        Self { base_url, client }
    }

    /// Convenience helper for GET requests.
    pub fn get(&self, path: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", self.base_url, path))
    }

    pub fn request(&self, method: reqwest::Method, path: &str) -> RequestBuilder {
        self.client
            .request(method, format!("{}{}", self.base_url, path))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

pub fn fixture_path(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(name)
}

/// Locations for two of the fixture addresses; everything else is a miss.
fn stub_resolver() -> StaticResolver {
    StaticResolver::new()
        .with(
            "8.8.8.8",
            GeoLocation {
                city: "Mountain View".to_string(),
                country: "United States".to_string(),
                latitude: 37.386,
                longitude: -122.0838,
            },
        )
        .with(
            "1.1.1.1",
            GeoLocation {
                city: "Brisbane".to_string(),
                country: "Australia".to_string(),
                latitude: -27.4679,
                longitude: 153.0281,
            },
        )
}

/// Poll until the server responds (or panic).
fn wait_for_server(listen_addr: &str) {
    let addr = listen_addr.strip_prefix("http://").unwrap_or(listen_addr);

    let deadline = Instant::now() + Duration::from_secs(5);

    loop {
        match TcpStream::connect(addr) {
            Ok(_) => return,
            Err(_) => {
                if Instant::now() > deadline {
                    panic!("server failed to start at {}", listen_addr);
                }
                thread::sleep(Duration::from_millis(25));
            }
        }
    }
}

/// Allocate a free port on localhost.
fn free_port() -> u16 {
    std::net::TcpListener::bind("127.0.0.1:0")
        .unwrap()
        .local_addr()
        .unwrap()
        .port()
}
