//! Panel output module
//!
//! Sinks that accept finished frames. Hardware drivers live behind
//! [`PanelSink`]; the sinks here let the daemon run on a host.

mod sink;
mod log_sink;
mod framebuffer_sink;
mod pbm_sink;

pub use sink::PanelSink;
pub use log_sink::LogSink;
pub use framebuffer_sink::FramebufferSink;
pub use pbm_sink::PbmSink;
