use log::trace;
use nom::{Err::Incomplete, Needed, Offset};

use super::error::{ebml_err, Error, ErrorKind};
use super::vint::{decode_masked, decode_raw, vint_width, UNKNOWN_SIZE};

pub type EbmlResult<'a, T> = nom::IResult<&'a [u8], T, Error>;

pub trait EbmlParsable: Sized {
    fn try_parse(data: &[u8]) -> Result<Self, ErrorKind>;
}

// An empty unsigned integer element reads as 0.
impl EbmlParsable for u64 {
    fn try_parse(data: &[u8]) -> Result<Self, ErrorKind> {
        match data.len() {
            0 => Ok(0),
            len if len > std::mem::size_of::<u64>() => Err(ErrorKind::UintTooWide),
            len => decode_raw(data, len),
        }
    }
}

impl EbmlParsable for f64 {
    fn try_parse(data: &[u8]) -> Result<Self, ErrorKind> {
        if let Ok(bytes) = <[u8; 4]>::try_from(data) {
            Ok(f64::from(f32::from_be_bytes(bytes)))
        } else if let Ok(bytes) = <[u8; 8]>::try_from(data) {
            Ok(f64::from_be_bytes(bytes))
        } else {
            Err(ErrorKind::FloatWidthIncorrect)
        }
    }
}

/// Element ID and Data Size, as read from the start of an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader {
    pub id: u32,
    /// Payload length, or [UNKNOWN_SIZE].
    pub size: u64,
    /// Octets taken by the ID and size fields. The payload starts here,
    /// relative to the first octet of the element.
    pub header_len: usize,
}

impl ElementHeader {
    pub fn payload_offset(&self) -> usize {
        self.header_len
    }

    pub fn is_unknown_size(&self) -> bool {
        self.size == UNKNOWN_SIZE
    }

    /// Header plus payload length. `None` for unknown-sized elements.
    pub fn element_len(&self) -> Option<u64> {
        if self.is_unknown_size() {
            None
        } else {
            Some(self.header_len as u64 + self.size)
        }
    }
}

// The ID are represented in the specification as their binary representation
// do not drop the marker bit.
pub fn vid(input: &[u8]) -> EbmlResult<u32> {
    if input.is_empty() {
        return Err(Incomplete(Needed::new(1)));
    }

    let width = match vint_width(input[0]) {
        Ok(width) => width,
        Err(kind) => return ebml_err(0, kind),
    };

    if width > 4 {
        return ebml_err(0, ErrorKind::IDTooWide);
    }

    // an element header is never the last octet of a stream
    if input.len() <= width {
        return Err(Incomplete(Needed::new(width + 1 - input.len())));
    }

    match decode_raw(input, width) {
        Ok(id) => Ok((&input[width..], id as u32)),
        Err(kind) => ebml_err(0, kind),
    }
}

pub fn vint(input: &[u8]) -> EbmlResult<u64> {
    if input.is_empty() {
        return Err(Incomplete(Needed::new(1)));
    }

    let width = match vint_width(input[0]) {
        Ok(width) => width,
        Err(kind) => return ebml_err(0, kind),
    };

    if input.len() <= width {
        return Err(Incomplete(Needed::new(width + 1 - input.len())));
    }

    match decode_masked(input, width) {
        Ok(val) => {
            trace!("vint {:08b} width {} result {:#x}", input[0], width, val);
            Ok((&input[width..], val))
        }
        Err(kind) => ebml_err(0, kind),
    }
}

pub fn element_header(input: &[u8]) -> EbmlResult<ElementHeader> {
    let (i, id) = vid(input)?;
    let (i, size) = vint(i).map_err(|e| e.map(|e| Error { id, ..e }))?;

    Ok((
        i,
        ElementHeader {
            id,
            size,
            header_len: input.offset(i),
        },
    ))
}

/// Reads one element header from the start of `window`.
///
/// `Ok(None)` means the window ends inside the header; nothing is consumed
/// and the same window, extended, has to be offered again.
pub fn read_header(window: &[u8]) -> Result<Option<ElementHeader>, Error> {
    match element_header(window) {
        Ok((_, header)) => Ok(Some(header)),
        Err(Incomplete(_)) => Ok(None),
        Err(nom::Err::Error(e)) | Err(nom::Err::Failure(e)) => Err(e),
    }
}
