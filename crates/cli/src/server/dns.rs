use recordbook_infrastructure::dns::{DnsListener, QueryResolver};
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

pub fn bind_dns_listener(
    bind_addr: &str,
    resolver: Arc<QueryResolver>,
    max_concurrent_queries: Option<usize>,
) -> anyhow::Result<DnsListener> {
    let socket_addr: SocketAddr = bind_addr.parse()?;
    let socket = tokio::net::UdpSocket::from_std(create_udp_socket(socket_addr)?)?;

    info!(
        bind_address = %socket_addr,
        max_concurrent_queries = ?max_concurrent_queries,
        "DNS listener bound"
    );

    Ok(DnsListener::new(socket, resolver).with_concurrency_limit(max_concurrent_queries))
}

fn create_udp_socket(socket_addr: SocketAddr) -> anyhow::Result<std::net::UdpSocket> {
    let domain = if socket_addr.is_ipv4() {
        Domain::IPV4
    } else {
        Domain::IPV6
    };

    let socket = Socket::new(domain, Type::DGRAM, Some(Protocol::UDP))?;
    if socket_addr.is_ipv6() {
        socket.set_only_v6(false)?;
    }
    socket.set_reuse_address(true)?;
    socket.set_recv_buffer_size(512 * 1024)?;
    socket.set_send_buffer_size(512 * 1024)?;
    socket.bind(&socket_addr.into())?;
    socket.set_nonblocking(true)?;
    Ok(socket.into())
}
