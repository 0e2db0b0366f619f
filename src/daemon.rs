//! Command intake over a Unix-domain socket.
//!
//! Clients are served one at a time and every refresh runs to completion on
//! the accept thread before the next message is read. A failed refresh is
//! logged and the daemon keeps serving.

use std::io::{self, BufRead, BufReader, Read};
use std::os::unix::net::UnixListener;

use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::command::RefreshCommand;
use crate::config::SocketLocation;
use crate::image_pipeline::{ImageReader, PanelSink, RefreshPipeline};

/// What happened on one client connection.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ConnectionStats {
    pub refreshed: usize,
    pub failed: usize,
    pub ignored: usize,
}

pub struct Daemon<R: ImageReader, S: PanelSink> {
    listener: UnixListener,
    socket: SocketLocation,
    pipeline: RefreshPipeline<R, S>,
}

impl<R: ImageReader, S: PanelSink> Daemon<R, S> {
    pub fn bind(socket: SocketLocation, pipeline: RefreshPipeline<R, S>) -> io::Result<Self> {
        let listener = match &socket {
            SocketLocation::Path(path) => {
                match std::fs::remove_file(path) {
                    Ok(()) => debug!("Removed stale socket {}", path.display()),
                    Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                    Err(e) => return Err(e),
                }
                UnixListener::bind(path)?
            }
            SocketLocation::Abstract(name) => bind_abstract(name)?,
        };
        info!("Listening on {}", socket);
        Ok(Self {
            listener,
            socket,
            pipeline,
        })
    }

    /// Accepts clients forever. Accept failures are logged and skipped.
    pub fn serve(&mut self) -> ! {
        loop {
            if let Err(e) = self.accept_once() {
                warn!("accept error: {}", e);
            }
        }
    }

    /// Accepts a single client and serves it until it disconnects.
    pub fn accept_once(&mut self) -> io::Result<ConnectionStats> {
        let (stream, _) = self.listener.accept()?;
        debug!("Client connected");
        let stats = self.handle_client(stream);
        debug!(?stats, "Client disconnected");
        Ok(stats)
    }

    /// Reads concatenated JSON messages from `stream` and runs each refresh
    /// command in order. Malformed input is skipped up to the next `{` and
    /// parsing resumes there.
    pub fn handle_client<T: Read>(&mut self, stream: T) -> ConnectionStats {
        let mut stats = ConnectionStats::default();
        let mut reader = BufReader::new(stream);

        loop {
            let error = {
                let mut messages =
                    serde_json::Deserializer::from_reader(&mut reader).into_iter::<Value>();
                loop {
                    match messages.next() {
                        None => return stats,
                        Some(Ok(value)) => self.dispatch(&value, &mut stats),
                        Some(Err(e)) => break e,
                    }
                }
            };

            if error.is_io() {
                warn!("read error: {}", error);
                return stats;
            }
            debug!("Skipping malformed message: {}", error);
            stats.ignored += 1;

            match skip_to_next_object(&mut reader) {
                Ok(true) => continue,
                Ok(false) => return stats,
                Err(e) => {
                    warn!("read error: {}", e);
                    return stats;
                }
            }
        }
    }

    fn dispatch(&mut self, value: &Value, stats: &mut ConnectionStats) {
        let Some(command) = RefreshCommand::from_value(value) else {
            debug!("Ignoring message: {}", value);
            stats.ignored += 1;
            return;
        };

        match self.pipeline.render_and_display(&command.image) {
            Ok(()) => stats.refreshed += 1,
            Err(e) => {
                error!("Refresh of {} failed: {}", command.image.display(), e);
                stats.failed += 1;
            }
        }
    }

    pub fn pipeline(&self) -> &RefreshPipeline<R, S> {
        &self.pipeline
    }
}

impl<R: ImageReader, S: PanelSink> Drop for Daemon<R, S> {
    fn drop(&mut self) {
        if let SocketLocation::Path(path) = &self.socket {
            match std::fs::remove_file(path) {
                Ok(()) => {}
                Err(e) if e.kind() == io::ErrorKind::NotFound => {}
                Err(e) => warn!("Cannot remove socket {}: {}", path.display(), e),
            }
        }
    }
}

/// Discards input up to the next `{`. Returns false at end of stream.
fn skip_to_next_object<B: BufRead>(reader: &mut B) -> io::Result<bool> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Ok(false);
        }
        match buf.iter().position(|&b| b == b'{') {
            Some(i) => {
                reader.consume(i);
                return Ok(true);
            }
            None => {
                let n = buf.len();
                reader.consume(n);
            }
        }
    }
}

#[cfg(target_os = "linux")]
fn bind_abstract(name: &str) -> io::Result<UnixListener> {
    use std::os::linux::net::SocketAddrExt;
    use std::os::unix::net::SocketAddr;

    let addr = SocketAddr::from_abstract_name(name.as_bytes())?;
    UnixListener::bind_addr(&addr)
}

#[cfg(not(target_os = "linux"))]
fn bind_abstract(name: &str) -> io::Result<UnixListener> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("abstract socket @{} requires Linux", name),
    ))
}
