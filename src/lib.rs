use crate::error::Error;
use crate::route::route_infallible;
use clap::Parser;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper_util::rt::TokioIo;
use lazy_static::lazy_static;
use prometheus::{register_int_counter_vec, IntCounterVec};
use std::future::Future;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::net::TcpListener;
use url::Url;

pub use crate::state::SharedState;

pub mod contact;
pub mod error;
mod pages;
mod profile;
mod render;
pub mod req;
pub mod route;
pub mod state;
pub mod ui;

lazy_static! {
    pub(crate) static ref HTTP_COUNTER: IntCounterVec = register_int_counter_vec!(
        "folio_http_requests_total",
        "Number of http requests by resource",
        &["resource"]
    )
    .expect("metric is registered once");
    pub(crate) static ref RELAY_COUNTER: IntCounterVec = register_int_counter_vec!(
        "folio_relay_total",
        "Number of contact messages forwarded to the form relay by outcome",
        &["outcome"]
    )
    .expect("metric is registered once");
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Arguments {
    /// The socket address this service will bind on.
    #[arg(short, long, env = "FOLIO_LOCAL_ADDR", default_value = "127.0.0.1:3000")]
    pub local_addr: SocketAddr,

    /// Directory containing the resume (`Kedarnath_Tattapure_Resume.pdf`) and the profile
    /// picture (`images/profile.png`).
    #[arg(short, long, env = "FOLIO_ASSETS_DIR", default_value = "assets")]
    pub assets_dir: PathBuf,

    /// Endpoint of the form relay service receiving contact messages.
    #[arg(long, env = "RELAY_URL", default_value = "https://api.web3forms.com/submit")]
    pub relay_url: Url,

    /// Access key of the form relay, sent along every contact message. It stays on the server,
    /// pages never contain it.
    #[arg(long, env = "RELAY_ACCESS_KEY", hide_env_values = true)]
    pub relay_access_key: String,

    /// Timeout of the call to the form relay, when missing the transport default applies.
    #[arg(long)]
    pub relay_timeout_secs: Option<u64>,

    /// Milliseconds a sent or failed status is shown before the form goes back to idle.
    #[arg(long, default_value = "3000")]
    pub status_reset_ms: u64,

    /// Number of recent submissions whose status is remembered.
    #[arg(long, default_value = "1000")]
    pub submission_cache_size: usize,
}

pub async fn inner_main(args: Arguments) -> Result<(), Error> {
    let addr = args.local_addr;
    log::debug!("local address {:?}", addr);
    if !args.assets_dir.is_dir() {
        log::warn!(
            "assets dir {} does not exist, resume and profile picture will be missing",
            args.assets_dir.display()
        );
    }

    let shared_state = Arc::new(SharedState::new(args)?);
    log::info!("form relay endpoint {}", shared_state.relay.endpoint());
    let listener = TcpListener::bind(addr).await?;

    log::info!("Listening on http://{}", addr);

    let shutdown = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            log::error!("cannot listen for ctrl-c: {}", e);
        }
    };
    serve(listener, shared_state, shutdown).await
}

/// Accept connections on `listener` until `shutdown` completes.
pub async fn serve(
    listener: TcpListener,
    shared_state: Arc<SharedState>,
    shutdown: impl Future<Output = ()>,
) -> Result<(), Error> {
    tokio::pin!(shutdown);

    loop {
        let (stream, remote) = tokio::select! {
            accepted = listener.accept() => accepted?,
            _ = &mut shutdown => break,
        };
        log::trace!("connection from {}", remote);

        let io = TokioIo::new(stream);
        let shared_state = shared_state.clone();

        tokio::spawn(async move {
            let service = service_fn(move |req| route_infallible(req, shared_state.clone()));
            if let Err(e) = http1::Builder::new().serve_connection(io, service).await {
                log::debug!("connection from {} closed: {}", remote, e);
            }
        });
    }

    log::info!("shutting down");
    shared_state.submissions.shutdown().await;
    Ok(())
}

pub fn create_local_socket(port: u16) -> SocketAddr {
    SocketAddr::new(IpAddr::V4(Ipv4Addr::new(127, 0, 0, 1)), port)
}
