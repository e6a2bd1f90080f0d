#[derive(PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[error("element {id:#X}: {kind}")]
pub struct Error {
    /// The Element ID where the error occurred. 0 if not available.
    ///
    /// For an overview of Element IDs, see the list of
    /// [EBML Element IDs] or [Matroska Element IDs].
    ///
    /// [EBML Element IDs]: https://www.rfc-editor.org/rfc/rfc8794.html#name-ebml-element-ids-registry
    /// [Matroska Element IDs]: https://www.ietf.org/archive/id/draft-ietf-cellar-matroska-15.html#section-27.1-11
    pub id: u32,

    /// See [ErrorKind] for more information.
    pub kind: ErrorKind,
}

impl Error {
    pub fn new(id: u32, kind: ErrorKind) -> Self {
        Self { id, kind }
    }

    pub fn class(&self) -> ErrorClass {
        self.kind.class()
    }
}

/// Describes what went wrong.
#[derive(Debug, PartialEq, Eq, Clone, Copy, thiserror::Error)]
#[non_exhaustive]
pub enum ErrorKind {
    /// The first octet of a variable-size integer is zero, so no VINT_MARKER
    /// was found within 8 bits.
    #[error("variable-size integer has no length marker")]
    VintTooWide,

    /// A codec call asked for a width outside 1..=8 octets, or for more
    /// octets than it was given.
    #[error("invalid variable-size integer width {0}")]
    InvalidWidth(usize),

    /// The VINT_WIDTH of this Element ID is more than 4, which is not allowed
    /// as per the Matroska specification.
    #[error("element ID is wider than 4 octets")]
    IDTooWide,

    /// An unsigned integer element has declared a length of more than 8
    /// octets, which is not allowed.
    #[error("unsigned integer element is wider than 8 octets")]
    UintTooWide,

    /// A float element has declared a length that is not 0, 4 or 8 octets.
    #[error("float element width is not 4 or 8 octets")]
    FloatWidthIncorrect,

    /// The element has the reserved "unknown" data size, but has to be
    /// skipped or read whole.
    #[error("element of unknown size cannot be skipped")]
    UnknownSize,

    /// The Element Data Size did not fit within a [usize].
    #[error("element data size does not fit into usize")]
    ElementTooLarge,

    /// The stream does not start with the EBML Header Element ID.
    #[error("stream does not start with an EBML header")]
    NotEbml,

    /// The byte window no longer covers the saved resume offset.
    #[error("byte window of {available} bytes is shorter than resume offset {resume}")]
    WindowShrunk { available: usize, resume: usize },

    /// The byte window provider did not hand out the bytes it announced.
    #[error("byte window provider returned no view of {0} bytes")]
    WindowUnavailable(usize),

    /// The parser was re-initialized while still holding cue points.
    #[error("{0} cue points were not released before init")]
    UnreleasedCues(usize),
}

/// How a caller should react to an [Error].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorClass {
    /// The stream is not EBML. Abandon it.
    NotSupported,
    /// The caller or its byte source broke the calling contract.
    Param,
    /// The stream is malformed at the current position.
    Decode,
}

impl ErrorKind {
    pub fn class(&self) -> ErrorClass {
        match self {
            ErrorKind::NotEbml => ErrorClass::NotSupported,
            ErrorKind::InvalidWidth(_)
            | ErrorKind::WindowShrunk { .. }
            | ErrorKind::WindowUnavailable(_)
            | ErrorKind::UnreleasedCues(_) => ErrorClass::Param,
            _ => ErrorClass::Decode,
        }
    }
}

/// Create an error with the given ID and [ErrorKind].
pub fn ebml_err<'a, T>(id: u32, kind: ErrorKind) -> nom::IResult<&'a [u8], T, Error> {
    Err(nom::Err::Error(Error { id, kind }))
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Error")
            .field("id", &format!("{:#0X}", self.id))
            .field("kind", &self.kind)
            .finish()
    }
}
