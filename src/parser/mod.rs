//! Incremental extraction of the seek table from the start of a Matroska
//! stream.
//!
//! [CueParser::feed] is called each time more bytes are buffered. It walks
//! the element tree from where the previous call stopped, descending into the
//! Segment, Info, Cues and CuePoint masters and skipping everything else,
//! until the first Cluster or the end of the Cues element.


use log::{debug, error, trace};

use crate::cues::{CueTable, Dispatch};
use crate::ebml::{read_header, vint::decode_raw, Error, ErrorKind};
use crate::elements::{self, EBML_HEADER};
use crate::window::ByteWindow;

const EBML_ID_LEN: usize = 4;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum ParserStatus {
    #[default]
    Init,
    /// Waiting for the 4 octets of the EBML header ID.
    ExpectHeader,
    ExtractMetadata,
    Finished,
}

/// Outcome of a successful [CueParser::feed] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Progress {
    /// Buffer more bytes and feed again.
    NeedMoreData,
    /// The cue table is final.
    Done,
}

/// Seek table parser for one stream.
#[derive(Debug, Clone, Default)]
pub struct CueParser {
    status: ParserStatus,
    /// Bytes consumed since the start of the stream.
    total_consumed: u64,
    /// Where the next element header starts in the byte window.
    resume_offset: usize,
    /// `total_consumed` at the EBML header.
    base: u64,
    table: CueTable,
}

impl CueParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resets the parser. Fails, after resetting, if cue points from a
    /// previous stream were never released with [clear](Self::clear).
    pub fn init(&mut self) -> Result<(), Error> {
        let pending = self.table.len();
        *self = Self::default();

        if pending > 0 {
            error!("init with {} unreleased cue points", pending);
            return Err(Error::new(0, ErrorKind::UnreleasedCues(pending)));
        }

        Ok(())
    }

    /// Hands the cue table over to the caller and resets the parser.
    pub fn clear(&mut self) -> CueTable {
        let table = std::mem::take(&mut self.table);
        debug!("releasing {} cue points", table.len());
        *self = Self::default();
        table
    }

    pub fn status(&self) -> ParserStatus {
        self.status
    }

    pub fn total_consumed(&self) -> u64 {
        self.total_consumed
    }

    pub fn resume_offset(&self) -> usize {
        self.resume_offset
    }

    pub fn table(&self) -> &CueTable {
        &self.table
    }

    pub fn into_table(self) -> CueTable {
        self.table
    }

    /// Parses as far as the bytes in `source` allow.
    ///
    /// After [Progress::NeedMoreData], `source` must be extended, not
    /// trimmed, before the next call. Once [Progress::Done] was returned
    /// further calls do nothing.
    pub fn feed<W: ByteWindow + ?Sized>(&mut self, source: &W) -> Result<Progress, Error> {
        loop {
            match self.status {
                ParserStatus::Init => {
                    trace!("starting Matroska cue extraction");
                    self.status = ParserStatus::ExpectHeader;
                }
                ParserStatus::ExpectHeader => {
                    if !self.check_header(source)? {
                        return Ok(Progress::NeedMoreData);
                    }
                    self.status = ParserStatus::ExtractMetadata;
                }
                ParserStatus::ExtractMetadata => match self.extract(source)? {
                    Progress::NeedMoreData => return Ok(Progress::NeedMoreData),
                    Progress::Done => {
                        debug!(
                            "cue extraction done: {} cue points, {} bytes consumed",
                            self.table.len(),
                            self.total_consumed
                        );
                        self.status = ParserStatus::Finished;
                    }
                },
                ParserStatus::Finished => return Ok(Progress::Done),
            }
        }
    }

    fn check_header<W: ByteWindow + ?Sized>(&self, source: &W) -> Result<bool, Error> {
        if source.available() < EBML_ID_LEN {
            debug!("{} bytes available, waiting for the EBML header", source.available());
            return Ok(false);
        }

        let window = source
            .window(EBML_ID_LEN)
            .filter(|w| w.len() == EBML_ID_LEN)
            .ok_or(Error::new(0, ErrorKind::WindowUnavailable(EBML_ID_LEN)))?;
        let id = decode_raw(window, EBML_ID_LEN).map_err(|kind| Error::new(0, kind))?;

        if id != u64::from(EBML_HEADER) {
            debug!("not an EBML stream, starts with {:#010X}", id);
            return Err(Error::new(EBML_HEADER, ErrorKind::NotEbml));
        }

        Ok(true)
    }

    fn extract<W: ByteWindow + ?Sized>(&mut self, source: &W) -> Result<Progress, Error> {
        let available = source.available();
        if available < self.resume_offset {
            return Err(Error::new(
                0,
                ErrorKind::WindowShrunk {
                    available,
                    resume: self.resume_offset,
                },
            ));
        }

        let window = source
            .window(available)
            .filter(|w| w.len() == available)
            .ok_or(Error::new(0, ErrorKind::WindowUnavailable(available)))?;

        loop {
            let input = &window[self.resume_offset..];

            let header = match read_header(input)? {
                Some(header) => header,
                None => {
                    debug!(
                        "header incomplete at offset {}, {} bytes left",
                        self.resume_offset,
                        input.len()
                    );
                    return Ok(Progress::NeedMoreData);
                }
            };

            trace!(
                "{} ({:#X}) at {}, size {}",
                elements::name(header.id),
                header.id,
                self.total_consumed,
                header.size
            );

            let position = self.total_consumed - self.base;
            let consumed = match self.table.dispatch(&header, input, position)? {
                Some(Dispatch::Header(len)) => {
                    self.base = self.total_consumed;
                    len
                }
                Some(Dispatch::Consumed(len)) => len,
                Some(Dispatch::ClusterReached) => return Ok(Progress::Done),
                None => {
                    debug!(
                        "{} at offset {} incomplete, {} bytes left",
                        elements::name(header.id),
                        self.resume_offset,
                        input.len()
                    );
                    return Ok(Progress::NeedMoreData);
                }
            };

            self.resume_offset += consumed;
            self.total_consumed += consumed as u64;

            if self.table.cues_complete(self.total_consumed - self.base) {
                debug!("end of Cues reached at {}", self.total_consumed);
                return Ok(Progress::Done);
            }
        }
    }
}
