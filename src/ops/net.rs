//! Data transmission over TCP.

use std::io::Write;
use std::net::TcpStream;

use tracing::debug;

use super::{ActivityFields, ActivityKind, ActivityRecord};
use crate::errors::OpsResult;

/// Send `data` to `destination:port` over a fresh TCP connection.
///
/// The stream lives only within this function, so the socket is closed on
/// every exit path. Connect and write failures are captured into the record
/// the same way the file operations capture a missing target.
pub fn transmit_data(destination: &str, port: u16, data: &[u8]) -> OpsResult<ActivityRecord> {
    debug!("transmit: {} bytes to {}:{}", data.len(), destination, port);

    let mut stream = match TcpStream::connect((destination, port)) {
        Ok(stream) => stream,
        Err(err) => {
            return Ok(transmit_failed(
                destination,
                port,
                format!("Connection failed: {err}"),
            ))
        }
    };

    let source = match stream.local_addr() {
        Ok(addr) => addr,
        Err(err) => {
            return Ok(transmit_failed(
                destination,
                port,
                format!("Connection failed: {err}"),
            ))
        }
    };

    if let Err(err) = stream.write_all(data) {
        return Ok(transmit_failed(
            destination,
            port,
            format!("Write failed: {err}"),
        ));
    }

    Ok(ActivityRecord::new(
        ActivityKind::TransmitData,
        ActivityFields::Transmit {
            destination_address: destination.to_string(),
            destination_port: port,
            source_address: source.ip().to_string(),
            source_port: source.port(),
            amount_of_data_sent: data.len(),
            protocol: "TCP",
        },
    ))
}

fn transmit_failed(destination: &str, port: u16, error: String) -> ActivityRecord {
    ActivityRecord::new(
        ActivityKind::TransmitData,
        ActivityFields::TransmitFailed {
            destination_address: destination.to_string(),
            destination_port: port,
            error,
        },
    )
}
