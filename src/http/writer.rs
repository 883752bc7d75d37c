use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;

use crate::http::response::Response;

/// Writes a response in full, then half-closes the send side.
///
/// The shutdown sends the peer a FIN so it knows no more data follows; the
/// caller drops the stream afterwards for the full close.
pub async fn send(stream: &mut TcpStream, response: &Response) -> anyhow::Result<()> {
    let buf = response.to_bytes();

    stream.write_all(&buf).await?;
    stream.shutdown().await?;

    Ok(())
}
