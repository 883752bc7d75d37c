use std::io::ErrorKind;
use std::net::SocketAddr;

use anyhow::Context;
use bytes::BytesMut;
use futures::future::select_all;
use tokio::net::{TcpListener, TcpStream};
use tracing::{debug, error, info, warn};

use crate::config::Config;
use crate::http::{handler, writer};
use crate::server::table::ConnectionTable;

/// The multiplexing server: one listener, one connection table, one loop.
pub struct Server {
    listener: TcpListener,
    table: ConnectionTable<TcpStream>,
    config: Config,
}

/// What a readiness wait resolved to.
enum Activity {
    Incoming(TcpStream, SocketAddr),
    Readable(usize),
    PollFailed(usize, std::io::Error),
}

/// Classification of one single-shot read attempt.
#[derive(Debug)]
enum ReadOutcome {
    /// Bytes arrived; serve the request.
    Request(usize),
    /// Orderly zero-byte disconnect.
    Disconnect,
    /// Spurious readiness; keep the slot for the next cycle.
    Retry,
    /// Peer reset the connection.
    Reset,
    /// Any other read failure, contained to this connection.
    Failed(std::io::Error),
}

fn classify_read(result: std::io::Result<usize>) -> ReadOutcome {
    match result {
        Ok(0) => ReadOutcome::Disconnect,
        Ok(n) => ReadOutcome::Request(n),
        Err(e) if e.kind() == ErrorKind::WouldBlock => ReadOutcome::Retry,
        Err(e) if e.kind() == ErrorKind::ConnectionReset => ReadOutcome::Reset,
        Err(e) => ReadOutcome::Failed(e),
    }
}

/// Binds per the config and runs until a fatal error.
pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    let server = Server::bind(cfg.clone()).await?;
    server.run().await
}

impl Server {
    pub async fn bind(config: Config) -> anyhow::Result<Self> {
        let listener = TcpListener::bind(&config.listen_addr)
            .await
            .with_context(|| format!("binding {}", config.listen_addr))?;
        info!("Listening on {}", listener.local_addr()?);

        let table = ConnectionTable::new(config.max_clients);

        Ok(Self {
            listener,
            table,
            config,
        })
    }

    /// The bound address; useful when the config asked for port 0.
    pub fn local_addr(&self) -> anyhow::Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// Runs the event loop forever.
    ///
    /// Only infrastructure failures return: readiness-wait and accept errors
    /// are fatal, while per-connection I/O failures are contained to their
    /// slot and logged.
    pub async fn run(mut self) -> anyhow::Result<()> {
        loop {
            let activity = self.wait_for_activity().await?;
            match activity {
                Activity::Incoming(conn, peer) => self.track_connection(conn, peer),
                Activity::Readable(slot) => self.service_slot(slot).await,
                Activity::PollFailed(slot, e) => self.discard_slot(slot, &e),
            }
        }
    }

    /// Blocks until the listener can accept or an occupied slot can read.
    async fn wait_for_activity(&self) -> anyhow::Result<Activity> {
        let readable: Vec<_> = self
            .table
            .occupied()
            .map(|(slot, conn)| Box::pin(async move { (slot, conn.readable().await) }))
            .collect();

        if readable.is_empty() {
            let (conn, peer) = self
                .listener
                .accept()
                .await
                .context("accepting connection")?;
            return Ok(Activity::Incoming(conn, peer));
        }

        tokio::select! {
            accepted = self.listener.accept() => {
                let (conn, peer) = accepted.context("accepting connection")?;
                Ok(Activity::Incoming(conn, peer))
            }

            ((slot, ready), _, _) = select_all(readable) => {
                // A poll failure on one connection stays with that slot;
                // only an accept or runtime failure brings the loop down.
                match ready {
                    Ok(()) => Ok(Activity::Readable(slot)),
                    Err(e) => Ok(Activity::PollFailed(slot, e)),
                }
            }
        }
    }

    fn track_connection(&mut self, conn: TcpStream, peer: SocketAddr) {
        match self.table.insert(conn) {
            Ok(slot) => {
                info!(
                    "Client {peer} connected (slot {slot}, {} of {} clients)",
                    self.table.len(),
                    self.table.capacity()
                );
            }
            Err(conn) => {
                // Dropping the socket here closes it immediately, instead
                // of accepting it and losing track as the table fills.
                warn!("Client {peer} rejected: connection table full");
                drop(conn);
            }
        }
    }

    /// Single-shot handler: one read, one response, close, release the slot.
    async fn service_slot(&mut self, slot: usize) {
        let mut buf = BytesMut::zeroed(self.config.read_buffer_size);

        let outcome = match self.table.get(slot) {
            Some(conn) => classify_read(conn.try_read(&mut buf)),
            None => return,
        };

        match outcome {
            ReadOutcome::Retry => {}

            ReadOutcome::Disconnect => {
                drop(self.table.remove(slot));
                info!("Client in slot {slot} disconnected");
            }

            ReadOutcome::Reset => {
                drop(self.table.remove(slot));
                info!("Client in slot {slot} reset the connection");
            }

            ReadOutcome::Failed(e) => self.discard_slot(slot, &e),

            ReadOutcome::Request(n) => {
                if let Some(mut conn) = self.table.remove(slot) {
                    self.answer(&mut conn, &buf[..n], slot).await;
                }
            }
        }
    }

    /// Releases a slot whose connection failed; the loop keeps serving.
    fn discard_slot(&mut self, slot: usize, e: &std::io::Error) {
        drop(self.table.remove(slot));
        error!("Connection in slot {slot} failed: {e}");
    }

    async fn answer(&self, conn: &mut TcpStream, raw: &[u8], slot: usize) {
        debug!("Request from slot {slot}:\n{}", String::from_utf8_lossy(raw));

        let response = handler::respond(raw, &self.config.server_root).await;

        debug!(
            "Response to slot {slot}:\n{}",
            String::from_utf8_lossy(&response.to_bytes())
        );

        // A write failure ends this connection only; the loop keeps serving.
        if let Err(e) = writer::send(conn, &response).await {
            error!("Sending response to slot {slot} failed: {e}");
        } else {
            info!("Served client in slot {slot}; closing connection");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error, ErrorKind};

    fn test_config() -> Config {
        Config {
            listen_addr: "127.0.0.1:0".to_string(),
            server_root: std::path::PathBuf::from("webroot"),
            max_clients: 4,
            read_buffer_size: 1024,
        }
    }

    #[test]
    fn classify_read_maps_every_case() {
        assert!(matches!(classify_read(Ok(0)), ReadOutcome::Disconnect));
        assert!(matches!(classify_read(Ok(17)), ReadOutcome::Request(17)));
        assert!(matches!(
            classify_read(Err(Error::from(ErrorKind::WouldBlock))),
            ReadOutcome::Retry
        ));
        assert!(matches!(
            classify_read(Err(Error::from(ErrorKind::ConnectionReset))),
            ReadOutcome::Reset
        ));
        assert!(matches!(
            classify_read(Err(Error::from(ErrorKind::BrokenPipe))),
            ReadOutcome::Failed(_)
        ));
    }

    #[tokio::test]
    async fn spurious_readiness_keeps_the_slot() {
        let mut server = Server::bind(test_config()).await.unwrap();
        let addr = server.listener.local_addr().unwrap();

        // Connect but send nothing: the read comes back WouldBlock and the
        // slot must stay occupied for the next cycle.
        let client = TcpStream::connect(addr).await.unwrap();
        let (conn, _) = server.listener.accept().await.unwrap();
        let slot = server.table.insert(conn).unwrap();

        server.service_slot(slot).await;

        assert!(server.table.get(slot).is_some());
        assert_eq!(server.table.len(), 1);
        drop(client);
    }

    #[tokio::test]
    async fn discarding_a_failed_slot_frees_it() {
        let mut server = Server::bind(test_config()).await.unwrap();
        let addr = server.listener.local_addr().unwrap();

        let _client = TcpStream::connect(addr).await.unwrap();
        let (conn, _) = server.listener.accept().await.unwrap();
        let slot = server.table.insert(conn).unwrap();

        server.discard_slot(slot, &Error::from(ErrorKind::BrokenPipe));

        assert!(server.table.get(slot).is_none());
        assert!(server.table.is_empty());
    }
}

