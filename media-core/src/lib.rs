//! # Media Core - SIP/WebRTC Media Pipeline Contracts
//!
//! The contract layer for real-time audio/video media pipelines: codec and
//! format identifiers, format-negotiation data, and the source/sink/encoder
//! abstractions that let transport logic (RTP send/receive) compose with
//! arbitrary codec implementations without mutual knowledge of each other's
//! internals.
//!
//! This crate owns no scheduler and performs no I/O. It defines value types
//! and trait contracts that must hold under whatever concurrency model the
//! host pipeline uses: typically one or more background capture/receive
//! threads driving sample-delivery events plus a control thread issuing
//! lifecycle calls.
//!
//! ## Quick Start
//!
//! ```
//! use media_core::format::{AudioCodec, AudioFormat, WellKnownFormat};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! // A well known format comes fully populated from the RFC 3551 table.
//! let pcmu = AudioFormat::from_well_known(WellKnownFormat::Pcmu)?;
//! assert_eq!(pcmu.format_id(), 0);
//! assert_eq!(pcmu.clock_rate(), 8000);
//!
//! // A dynamic format is matched by name during offer/answer correlation.
//! let opus = AudioFormat::dynamic(111, "opus", 48000, 2)?;
//! assert_eq!(opus.codec(), AudioCodec::Opus);
//! # Ok(())
//! # }
//! ```
#![warn(rust_2018_idioms)]

pub mod codec;
pub mod endpoint;
pub mod format;
pub mod pipeline;

pub use shared::error::{Error, Result};
