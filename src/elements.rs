//! Element IDs of the EBML and Matroska elements met before the first Cluster.
//!
//! IDs keep their VINT_MARKER bit, matching how the specifications list them.

// EBML
pub const EBML_HEADER: u32 = 0x1A45DFA3;
pub const VOID: u32 = 0xEC;
pub const CRC32: u32 = 0xBF;

// https://datatracker.ietf.org/doc/html/draft-lhomme-cellar-matroska-03#section-7.3.3
pub const SEGMENT: u32 = 0x18538067;

// Segment children
pub const SEEK_HEAD: u32 = 0x114D9B74;
pub const INFO: u32 = 0x1549A966;
pub const TRACKS: u32 = 0x1654AE6B;
pub const CUES: u32 = 0x1C53BB6B;
pub const CLUSTER: u32 = 0x1F43B675;
pub const CHAPTERS: u32 = 0x1043A770;
pub const TAGS: u32 = 0x1254C367;
pub const ATTACHMENTS: u32 = 0x1941A469;

// Info children
pub const TIMESTAMP_SCALE: u32 = 0x2AD7B1;
pub const DURATION: u32 = 0x4489;

// https://datatracker.ietf.org/doc/html/draft-lhomme-cellar-matroska-03#section-7.3.30
pub const CUE_POINT: u32 = 0xBB;
pub const CUE_TIME: u32 = 0xB3;
pub const CUE_TRACK_POSITIONS: u32 = 0xB7;
pub const CUE_TRACK: u32 = 0xF7;
pub const CUE_CLUSTER_POSITION: u32 = 0xF1;

/// Human readable element name, for logging.
pub fn name(id: u32) -> &'static str {
    match id {
        EBML_HEADER => "EBML",
        VOID => "Void",
        CRC32 => "CRC-32",
        SEGMENT => "Segment",
        SEEK_HEAD => "SeekHead",
        INFO => "Info",
        TRACKS => "Tracks",
        CUES => "Cues",
        CLUSTER => "Cluster",
        CHAPTERS => "Chapters",
        TAGS => "Tags",
        ATTACHMENTS => "Attachments",
        TIMESTAMP_SCALE => "TimestampScale",
        DURATION => "Duration",
        CUE_POINT => "CuePoint",
        CUE_TIME => "CueTime",
        CUE_TRACK_POSITIONS => "CueTrackPositions",
        CUE_TRACK => "CueTrack",
        CUE_CLUSTER_POSITION => "CueClusterPosition",
        _ => "unknown",
    }
}
