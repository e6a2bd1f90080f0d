//! Seek table extraction from the start of Matroska and WebM streams.
//!
//! An adaptive streaming demuxer usually has only the first few kilobytes of
//! a Matroska file when it has to decide whether and where it can seek.
//! [CueParser] reads the metadata in front of the first Cluster as it is
//! buffered, and collects the TimestampScale, Duration and the Cues into a
//! [CueTable].
//!
//! ```
//! use matroska_cues::{CueParser, Progress};
//!
//! let mut parser = CueParser::new();
//! let buffered: Vec<u8> = vec![0x1A, 0x45];
//!
//! // not enough bytes to even check the EBML header
//! assert_eq!(parser.feed(&buffered), Ok(Progress::NeedMoreData));
//! ```

pub mod cues;
pub mod ebml;
pub mod elements;
pub mod parser;
pub mod window;

#[cfg(test)]
mod test_utils;

pub use crate::cues::{CuePoint, CueTable};
pub use crate::ebml::{Error, ErrorClass, ErrorKind};
pub use crate::parser::{CueParser, ParserStatus, Progress};
pub use crate::window::ByteWindow;
