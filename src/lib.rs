//! # kipy
//!
//! **Pure-Rust client for KiCad's IPC API.**
//! Typed request/reply dispatch over the host's nng socket, wrappers over the
//! API's protobuf messages, and board/project facades.
//!
//! ## Quickstart
//!
//! ```no_run
//! use kipy::KiCad;
//!
//! fn main() -> Result<(), kipy::KiCadError> {
//!     let kicad = KiCad::connect()?;
//!     kicad.ping()?;
//!     println!("KiCad: {}", kicad.get_version()?.full_version);
//!
//!     let board = kicad.get_board()?;
//!     for track in board.get_tracks()? {
//!         println!("{:?} {} -> {}", track.layer(), track.start(), track.end());
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Creating items
//!
//! ```no_run
//! use kipy::model::board::{BoardItem, BoardLayer, Track};
//! use kipy::{KiCad, Vector2};
//!
//! # fn run() -> Result<(), kipy::KiCadError> {
//! let board = KiCad::connect()?.get_board()?;
//! let mut track = Track::new();
//! track.set_start(Vector2::from_xy_mm(10.0, 10.0));
//! track.set_end(Vector2::from_xy_mm(20.0, 10.0));
//! track.set_width(kipy::units::from_mm(0.25));
//! track.set_layer(BoardLayer::BlFCu);
//!
//! let commit = board.begin_commit()?;
//! let created = board.create_items(&[BoardItem::from(track)])?;
//! board.push_commit(commit, "Add track")?;
//! assert_eq!(created.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! Architecture layers:
//! - transport
//! - envelope
//! - client (typed dispatcher)
//! - wrappers
//! - facades

/// Async front end running the blocking client on a worker thread.
#[cfg(feature = "async")]
pub mod asynchronous;
/// Board document facade.
pub mod board;
/// Typed command dispatcher and its builder.
pub mod client;
/// Envelope helpers for packing and unpacking `Any` payloads.
pub mod envelope;
/// Error types returned by this crate.
pub mod error;
/// Plain value types for positions, angles and boxes.
pub mod geometry;
/// Session facade.
pub mod kicad;
mod log;
#[cfg(test)]
mod mock;
/// Wrappers over the API's protobuf messages.
pub mod model;
/// Project facade.
pub mod project;
/// Protobuf message catalog of the KiCad API.
///
/// Most applications should use [`crate::model`] wrappers instead.
pub mod proto;
/// Request/reply transport.
///
/// Most applications should not need to use this module directly.
pub mod transport;
/// Nanometer/millimeter conversion.
pub mod units;
/// Wrapper traits shared by every model type.
pub mod wrapper;

#[cfg(feature = "async")]
pub use crate::asynchronous::KiCadClientAsync;
pub use crate::board::{Board, Commit, DeletionResult, ItemResult};
pub use crate::client::{ClientBuilder, KiCadClient};
pub use crate::error::{ItemError, KiCadError};
pub use crate::geometry::{Angle, Box2, Vector2};
pub use crate::kicad::KiCad;
pub use crate::model::board::{unwrap_item, BoardItem};
pub use crate::model::common::{
    DocumentSpecifier, DocumentType, FrameType, KiCadObjectType, MapMergeMode, ProjectInfo,
    RunActionStatus, VersionInfo,
};
pub use crate::project::Project;
pub use crate::transport::{NngTransport, Transport};
pub use crate::wrapper::{Wrapper, WrapperMut};
