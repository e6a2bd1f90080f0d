//! Builders for EBML test streams.

use cookie_factory::{combinator::slice, gen_simple, sequence::tuple};

const UNKNOWN_SIZE_8: [u8; 8] = [0x01, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF, 0xFF];

pub(crate) fn vid_bytes(id: u32) -> Vec<u8> {
    let skip = (id.leading_zeros() / 8) as usize;
    id.to_be_bytes()[skip..].to_vec()
}

// Smallest width whose all-ones value is not `size`.
pub(crate) fn vint_bytes(size: u64) -> Vec<u8> {
    let width = (1..8).find(|w| size < (1u64 << (7 * w)) - 1).unwrap_or(8);
    let marked = size | 1u64 << (7 * width);
    marked.to_be_bytes()[8 - width..].to_vec()
}

pub(crate) fn element(id: u32, data: &[u8]) -> Vec<u8> {
    let size = vint_bytes(data.len() as u64);
    gen_simple(tuple((slice(vid_bytes(id)), slice(size), slice(data))), Vec::new())
        .expect("can serialize element")
}

pub(crate) fn master(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    element(id, &children.concat())
}

pub(crate) fn unknown_size(id: u32, children: &[Vec<u8>]) -> Vec<u8> {
    gen_simple(
        tuple((
            slice(vid_bytes(id)),
            slice(UNKNOWN_SIZE_8),
            slice(children.concat()),
        )),
        Vec::new(),
    )
    .expect("can serialize element")
}

pub(crate) fn uint(id: u32, val: u64) -> Vec<u8> {
    let skip = ((val.leading_zeros() / 8) as usize).min(7);
    element(id, &val.to_be_bytes()[skip..])
}
