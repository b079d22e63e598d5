//! Background rendering for interactive exploration.
//!
//! The GUI shell owns the viewport and submits a [`RenderRequest`] snapshot
//! per pass; a single worker thread renders the newest request and hands the
//! finished frame to a [`FramePresenterPort`].
//!
//! # Architecture
//!
//! The interactive controller follows the ports & adapters pattern:
//! - **Input**: `RenderRequest` snapshots describing what to render
//! - **Output**: `FramePresenterPort` trait for receiving rendered frames
//! - **Core**: Uses `render_cancelable` from `core/` for actual computation

pub mod data;
pub mod ports;
mod render_worker;

pub use data::frame_data::FrameData;
pub use data::render_request::RenderRequest;
pub use ports::presenter::FramePresenterPort;
pub use render_worker::RenderWorker;
