//! The seek table collected from the Segment Information and Cues elements.

use log::{debug, trace, warn};

use crate::ebml::{EbmlParsable, ElementHeader, Error, ErrorKind};
use crate::elements::{self, *};

/// Matroska's default TimestampScale, in nanoseconds.
pub const DEFAULT_TIME_SCALE: u64 = 1_000_000;

/// One seek table entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CuePoint {
    /// Timestamp in TimestampScale units.
    pub time: u64,
    pub track: u64,
    /// Offset of the cluster relative to the Segment payload start.
    pub cluster_position: u64,
}

/// Seek table and Segment metadata.
///
/// Offsets are counted from the first octet of the EBML header.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CueTable {
    /// Cue points in document order. No sorting is done.
    pub points: Vec<CuePoint>,
    /// TimestampScale in nanoseconds, 0 if not seen.
    pub time_scale: u64,
    /// Raw big-endian value of the Duration payload.
    pub duration: u64,
    /// The Duration payload read as a float, when it has a float width.
    pub duration_float: Option<f64>,
    /// Offset of the Segment payload.
    pub segment_offset: u64,
    /// Offset of the SeekHead element.
    pub segment_head_offset: u64,
    /// Offset just past the Cues element, once a sized Cues was entered.
    pub cues_end: Option<u64>,
}

/// What the stream parser does after an element header was dispatched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dispatch {
    /// The EBML header was skipped; offsets are measured from its start.
    Header(usize),
    /// Advance by this many octets: the header only when descending into a
    /// master element, the whole element otherwise.
    Consumed(usize),
    /// The first Cluster starts here. Extraction is complete.
    ClusterReached,
}

impl CueTable {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn time_scale_or_default(&self) -> u64 {
        match self.time_scale {
            0 => DEFAULT_TIME_SCALE,
            scale => scale,
        }
    }

    /// Cue time in nanoseconds.
    pub fn time_ns(&self, point: &CuePoint) -> u64 {
        point.time.saturating_mul(self.time_scale_or_default())
    }

    /// Stream offset of the cluster a cue points to, `None` if the cue's
    /// position runs past the end of any stream.
    pub fn cluster_offset(&self, point: &CuePoint) -> Option<u64> {
        self.segment_offset.checked_add(point.cluster_position)
    }

    /// The latest cue not after `target_ns`, optionally restricted to one
    /// track. Ties go to the cue found first.
    pub fn seek(&self, target_ns: u64, track: Option<u64>) -> Option<&CuePoint> {
        self.points
            .iter()
            .filter(|p| track.map_or(true, |t| p.track == t))
            .filter(|p| self.time_ns(p) <= target_ns)
            .fold(None, |best: Option<&CuePoint>, p| match best {
                Some(b) if b.time >= p.time => Some(b),
                _ => Some(p),
            })
    }

    /// Whether the whole Cues element lies before `position`.
    pub(crate) fn cues_complete(&self, position: u64) -> bool {
        self.cues_end.map_or(false, |end| position >= end)
    }

    /// Updates the table from one element header.
    ///
    /// `input` starts at the first octet of the element and `position` is its
    /// offset in the stream. `Ok(None)` means the octets this element needs
    /// are not all in `input` yet; the table is left untouched then.
    pub(crate) fn dispatch(
        &mut self,
        header: &ElementHeader,
        input: &[u8],
        position: u64,
    ) -> Result<Option<Dispatch>, Error> {
        let descend = Some(Dispatch::Consumed(header.payload_offset()));

        let res = match header.id {
            EBML_HEADER => whole(header, input)?.map(Dispatch::Header),
            SEGMENT => {
                self.segment_offset = position + header.payload_offset() as u64;
                descend
            }
            SEEK_HEAD => {
                let len = whole(header, input)?;
                if len.is_some() {
                    self.segment_head_offset = position;
                }
                len.map(Dispatch::Consumed)
            }
            INFO | CUE_TRACK_POSITIONS => descend,
            CUES => {
                self.cues_end = header.element_len().map(|len| position + len);
                if self.cues_end.is_none() {
                    debug!("Cues of unknown size at {}, reading up to a Cluster", position);
                }
                descend
            }
            CUE_POINT => {
                self.points.push(CuePoint::default());
                debug!("cue point {} at {}", self.points.len(), position);
                descend
            }
            TIMESTAMP_SCALE | DURATION | CUE_TIME | CUE_TRACK | CUE_CLUSTER_POSITION => {
                match payload(header, input)? {
                    Some(data) => {
                        self.set_field(header.id, data)?;
                        Some(Dispatch::Consumed(header.payload_offset() + data.len()))
                    }
                    None => None,
                }
            }
            CLUSTER => {
                debug!("first Cluster at {}", position);
                Some(Dispatch::ClusterReached)
            }
            id => {
                trace!("skipping {} ({:#X}), size {}", elements::name(id), id, header.size);
                whole(header, input)?.map(Dispatch::Consumed)
            }
        };

        Ok(res)
    }

    fn set_field(&mut self, id: u32, data: &[u8]) -> Result<(), Error> {
        let val = u64::try_parse(data).map_err(|kind| Error::new(id, kind))?;

        match id {
            TIMESTAMP_SCALE => self.time_scale = val,
            DURATION => {
                self.duration = val;
                self.duration_float = f64::try_parse(data).ok();
            }
            _ => match self.points.last_mut() {
                Some(point) if id == CUE_TIME => point.time = val,
                Some(point) if id == CUE_TRACK => point.track = val,
                Some(point) => point.cluster_position = val,
                None => warn!("{} outside of a CuePoint, ignored", elements::name(id)),
            },
        }

        Ok(())
    }
}

/// Length of the whole element, if it is all in `input`.
fn whole(header: &ElementHeader, input: &[u8]) -> Result<Option<usize>, Error> {
    let len = header
        .element_len()
        .ok_or(Error::new(header.id, ErrorKind::UnknownSize))?;
    let len = usize::try_from(len).map_err(|_| {
        log::error!("Element Data Size does not fit into usize");
        Error::new(header.id, ErrorKind::ElementTooLarge)
    })?;

    Ok((len <= input.len()).then_some(len))
}

/// Payload of the element, if it is all in `input`.
fn payload<'a>(header: &ElementHeader, input: &'a [u8]) -> Result<Option<&'a [u8]>, Error> {
    Ok(whole(header, input)?.map(|len| &input[header.payload_offset()..len]))
}
