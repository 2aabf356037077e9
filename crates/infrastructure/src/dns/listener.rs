use super::codec::MessageCodec;
use super::resolver::QueryResolver;
use hickory_proto::op::Message;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

/// Receive buffer size. Larger datagrams are cut short and will usually fail
/// to decode.
pub const MAX_DATAGRAM_SIZE: usize = 512;

/// One receive loop over one UDP socket. Every decoded query runs in its own
/// task and answers through the shared socket.
pub struct DnsListener {
    socket: Arc<UdpSocket>,
    resolver: Arc<QueryResolver>,
    limiter: Option<Arc<Semaphore>>,
}

impl DnsListener {
    pub fn new(socket: UdpSocket, resolver: Arc<QueryResolver>) -> Self {
        Self {
            socket: Arc::new(socket),
            resolver,
            limiter: None,
        }
    }

    /// Caps the number of queries in flight. `None` keeps fan-out unbounded.
    pub fn with_concurrency_limit(mut self, limit: Option<usize>) -> Self {
        self.limiter = limit.map(|permits| Arc::new(Semaphore::new(permits)));
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    pub async fn run(self, shutdown: CancellationToken) {
        let mut buf = [0u8; MAX_DATAGRAM_SIZE];

        info!(
            local_addr = ?self.socket.local_addr().ok(),
            max_in_flight = ?self.limiter.as_ref().map(|s| s.available_permits()),
            "DNS listener started"
        );

        loop {
            let (len, from) = tokio::select! {
                _ = shutdown.cancelled() => break,
                received = self.socket.recv_from(&mut buf) => match received {
                    Ok(received) => received,
                    Err(e) => {
                        warn!(error = %e, "UDP recv error");
                        continue;
                    }
                },
            };

            let Some(message) = Self::decode(&buf[..len], from) else {
                continue;
            };

            let permit = match &self.limiter {
                Some(limiter) => tokio::select! {
                    _ = shutdown.cancelled() => break,
                    acquired = Arc::clone(limiter).acquire_owned() => match acquired {
                        Ok(permit) => Some(permit),
                        Err(_) => break,
                    },
                },
                None => None,
            };

            let socket = Arc::clone(&self.socket);
            let resolver = Arc::clone(&self.resolver);
            tokio::spawn(async move {
                let _permit = permit;
                let Some(response) = Self::respond(&resolver, message) else {
                    return;
                };
                if let Err(e) = socket.send_to(&response, from).await {
                    warn!(client = %from, error = %e, "UDP send error");
                }
            });
        }

        info!("DNS listener stopped");
    }

    /// Runs one datagram through decode, resolve and encode without touching
    /// the socket.
    pub fn handle_datagram(&self, bytes: &[u8], from: SocketAddr) -> Option<Vec<u8>> {
        let message = Self::decode(bytes, from)?;
        Self::respond(&self.resolver, message)
    }

    fn decode(bytes: &[u8], from: SocketAddr) -> Option<Message> {
        let message = match MessageCodec::decode(bytes) {
            Ok(message) => message,
            Err(e) => {
                debug!(client = %from, error = %e, "Dropping undecodable datagram");
                return None;
            }
        };

        if message.queries().is_empty() {
            debug!(client = %from, id = message.id(), "Dropping message without questions");
            return None;
        }
        Some(message)
    }

    fn respond(resolver: &QueryResolver, message: Message) -> Option<Vec<u8>> {
        let response = resolver.resolve(message)?;
        match MessageCodec::encode(&response) {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                error!(id = response.id(), error = %e, "Failed to encode response");
                None
            }
        }
    }
}
