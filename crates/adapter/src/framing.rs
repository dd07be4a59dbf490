//! Wire framing - fixed-width ASCII length header
//!
//! Every message is a 16-byte header holding the payload length as
//! ASCII decimal, right-padded with spaces, followed by that many
//! payload bytes. A header that does not parse is an
//! `InvalidData` error; callers drop the connection on any framing
//! error rather than trying to resynchronize.

use std::io;

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

/// Size of the length header in bytes.
pub const HEADER_LEN: usize = 16;

/// Upper bound on a single payload; anything larger is treated as a
/// corrupt header.
pub const MAX_PAYLOAD: usize = 1024 * 1024;

/// Encode a payload length into the fixed-width header.
pub fn encode_header(len: usize) -> io::Result<[u8; HEADER_LEN]> {
    if len > MAX_PAYLOAD {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("payload of {} bytes exceeds frame limit", len),
        ));
    }
    let digits = len.to_string();
    let mut header = [b' '; HEADER_LEN];
    header[..digits.len()].copy_from_slice(digits.as_bytes());
    Ok(header)
}

/// Parse the fixed-width header back into a payload length.
pub fn parse_header(header: &[u8; HEADER_LEN]) -> io::Result<usize> {
    let text = std::str::from_utf8(header)
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "length header is not ASCII"))?;
    let trimmed = text.trim_end_matches(' ');
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("length header {:?} is not a decimal number", trimmed),
        ));
    }
    let len: usize = trimmed
        .parse()
        .map_err(|_| io::Error::new(io::ErrorKind::InvalidData, "length header out of range"))?;
    if len > MAX_PAYLOAD {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("frame of {} bytes exceeds limit", len),
        ));
    }
    Ok(len)
}

/// Read one framed message.
pub async fn read_frame<R>(reader: &mut R) -> io::Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_LEN];
    reader.read_exact(&mut header).await?;
    let len = parse_header(&header)?;

    let mut payload = vec![0u8; len];
    reader.read_exact(&mut payload).await?;
    Ok(payload)
}

/// Write one framed message.
pub async fn write_frame<W>(writer: &mut W, payload: &[u8]) -> io::Result<()>
where
    W: AsyncWrite + Unpin,
{
    let header = encode_header(payload.len())?;
    writer.write_all(&header).await?;
    writer.write_all(payload).await?;
    writer.flush().await?;
    Ok(())
}
