//! UART transmit task
//!
//! The only traffic towards the host is the PING acknowledgment.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use crate::channels::REPLY_CHANNEL;

/// Reply TX task - writes queued replies to the host
#[embassy_executor::task]
pub async fn reply_tx_task(mut tx: BufferedUartTx) {
    info!("Reply TX task started");

    loop {
        let reply = REPLY_CHANNEL.receive().await;

        if let Err(e) = tx.write_all(reply.as_bytes()).await {
            warn!("Failed to send {:?}: {:?}", reply, e);
        } else {
            trace!("{:?} sent", reply);
        }
    }
}
