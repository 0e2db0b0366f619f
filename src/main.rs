use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use epd_refreshd::config::{DEFAULT_SOCKET_PATH, DaemonConfig, SinkKind, SocketLocation};
use epd_refreshd::daemon::Daemon;
use epd_refreshd::image_pipeline::{
    FramebufferSink, LogSink, PanelSink, PbmSink, RefreshPipeline,
};
use epd_refreshd::logger;

/// Listens for refresh commands and renders PNG images onto an e-paper panel.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Socket to listen on; prefix with '@' for the Linux abstract namespace
    #[arg(default_value = DEFAULT_SOCKET_PATH)]
    socket: String,

    /// Be more verbose (repeat for trace output)
    #[arg(short, long, action = clap::ArgAction::Count)]
    debug: u8,

    /// Write raw frames to this file or device node
    #[arg(long, value_name = "PATH", conflicts_with = "pbm")]
    framebuffer: Option<PathBuf>,

    /// Write each frame as a PBM preview image
    #[arg(long, value_name = "PATH")]
    pbm: Option<PathBuf>,

    /// Render a single image and exit instead of listening
    #[arg(long, value_name = "IMAGE")]
    once: Option<PathBuf>,
}

impl Args {
    fn config(&self) -> DaemonConfig {
        let sink = match (&self.framebuffer, &self.pbm) {
            (Some(path), _) => SinkKind::Framebuffer(path.clone()),
            (None, Some(path)) => SinkKind::Pbm(path.clone()),
            (None, None) => SinkKind::Log,
        };
        DaemonConfig::builder()
            .socket(SocketLocation::parse(&self.socket))
            .sink(sink)
            .build()
    }
}

fn open_sink(kind: &SinkKind) -> Box<dyn PanelSink> {
    match kind {
        SinkKind::Log => Box::new(LogSink::new()),
        SinkKind::Framebuffer(path) => Box::new(FramebufferSink::new(path)),
        SinkKind::Pbm(path) => Box::new(PbmSink::new(path)),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init(args.debug);

    let config = args.config();
    info!("Starting {} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    info!(
        "Panel {}x{}, output {:?}",
        config.geometry.width(),
        config.geometry.height(),
        config.sink
    );

    let mut pipeline = RefreshPipeline::new(open_sink(&config.sink), config.geometry);

    if let Some(image) = &args.once {
        return pipeline
            .render_and_display(image)
            .with_context(|| format!("refresh of {} failed", image.display()));
    }

    let mut daemon = Daemon::bind(config.socket.clone(), pipeline)
        .with_context(|| format!("cannot listen on {}", config.socket))?;
    daemon.serve()
}
