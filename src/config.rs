//! Daemon configuration types

use std::path::PathBuf;

use crate::image_pipeline::PanelGeometry;

pub const DEFAULT_SOCKET_PATH: &str = "/tmp/epd-refreshd.sock";

/// Where the command socket is bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SocketLocation {
    /// Filesystem socket; a stale file is unlinked before binding
    Path(PathBuf),
    /// Linux abstract namespace, no filesystem entry
    Abstract(String),
}

impl SocketLocation {
    /// Parses a CLI argument. A leading `@` selects the abstract namespace.
    pub fn parse(arg: &str) -> Self {
        match arg.strip_prefix('@') {
            Some(name) => SocketLocation::Abstract(name.to_string()),
            None => SocketLocation::Path(PathBuf::from(arg)),
        }
    }
}

impl std::fmt::Display for SocketLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SocketLocation::Path(path) => write!(f, "{}", path.display()),
            SocketLocation::Abstract(name) => write!(f, "@{}", name),
        }
    }
}

/// Panel output selected at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SinkKind {
    /// Log frame summaries only
    Log,
    /// Raw frame bytes written to a file or device node
    Framebuffer(PathBuf),
    /// PBM preview image
    Pbm(PathBuf),
}

#[derive(Debug, Clone)]
pub struct DaemonConfig {
    pub socket: SocketLocation,
    pub geometry: PanelGeometry,
    pub sink: SinkKind,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            socket: SocketLocation::Path(PathBuf::from(DEFAULT_SOCKET_PATH)),
            geometry: PanelGeometry::EPD_7IN5,
            sink: SinkKind::Log,
        }
    }
}

impl DaemonConfig {
    pub fn builder() -> DaemonConfigBuilder {
        DaemonConfigBuilder::default()
    }
}

/// Builder for DaemonConfig
#[derive(Default)]
pub struct DaemonConfigBuilder {
    socket: Option<SocketLocation>,
    geometry: Option<PanelGeometry>,
    sink: Option<SinkKind>,
}

impl DaemonConfigBuilder {
    pub fn socket(mut self, socket: SocketLocation) -> Self {
        self.socket = Some(socket);
        self
    }

    pub fn geometry(mut self, geometry: PanelGeometry) -> Self {
        self.geometry = Some(geometry);
        self
    }

    pub fn sink(mut self, sink: SinkKind) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn build(self) -> DaemonConfig {
        let default = DaemonConfig::default();
        DaemonConfig {
            socket: self.socket.unwrap_or(default.socket),
            geometry: self.geometry.unwrap_or(default.geometry),
            sink: self.sink.unwrap_or(default.sink),
        }
    }
}
