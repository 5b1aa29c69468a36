//! HTTP server task
//!
//! One connection at a time: accept, read the request head, answer with
//! the slot table, close.

use defmt::*;
use embassy_net::tcp::{Error as TcpError, TcpSocket};
use embassy_net::Stack;
use embassy_time::{Duration, Timer};
use embedded_io_async::Write;
use parklot_core::lot::Lot;
use parklot_core::remote::RemoteEndpoint;

use super::now_ms;

const HTTP_PORT: u16 = 80;
const MAX_REQUEST_SIZE: usize = 1024;

/// Web task - serves the remote reservation page
#[embassy_executor::task]
pub async fn web_task(stack: Stack<'static>, lot: &'static Lot) {
    let mut rx_buf = [0u8; MAX_REQUEST_SIZE];
    let mut tx_buf = [0u8; 2048];
    let mut endpoint = RemoteEndpoint::new();

    info!("Web task started (port={})", HTTP_PORT);

    stack.wait_config_up().await;
    if let Some(config) = stack.config_v4() {
        info!("Serving on http://{}/", config.address.address());
    }

    loop {
        // Link may have dropped since the last connection
        stack.wait_config_up().await;

        let mut socket = TcpSocket::new(stack, &mut rx_buf, &mut tx_buf);
        socket.set_timeout(Some(Duration::from_secs(10)));

        match socket.accept(HTTP_PORT).await {
            Ok(()) => {
                if let Err(e) = serve(&mut socket, &mut endpoint, lot).await {
                    warn!("HTTP connection error: {:?}", e);
                }
            }
            Err(e) => {
                warn!("HTTP accept error: {:?}", e);
                Timer::after(Duration::from_millis(200)).await;
            }
        }

        socket.abort();
    }
}

/// Handle one connection
async fn serve(
    socket: &mut TcpSocket<'_>,
    endpoint: &mut RemoteEndpoint,
    lot: &Lot,
) -> Result<(), TcpError> {
    let mut buf = [0u8; MAX_REQUEST_SIZE];
    let mut total = 0usize;

    // Read until the end of the headers or the buffer is full
    loop {
        let n = socket.read(&mut buf[total..]).await?;
        if n == 0 {
            break;
        }
        total += n;
        if total >= MAX_REQUEST_SIZE || buf[..total].windows(4).any(|w| w == b"\r\n\r\n") {
            break;
        }
    }

    if total == 0 {
        return Ok(());
    }

    let request = match core::str::from_utf8(&buf[..total]) {
        Ok(text) => text,
        Err(e) => core::str::from_utf8(&buf[..e.valid_up_to()]).unwrap_or_default(),
    };
    trace!("HTTP request: {}", request.lines().next().unwrap_or_default());

    let reply = endpoint.handle_request(lot, request, now_ms());

    if let Some(id) = reply.reserved {
        info!("Slot {} reserved remotely", id);
    }

    socket.write_all(reply.response.as_bytes()).await?;
    socket.flush().await?;
    Ok(())
}
