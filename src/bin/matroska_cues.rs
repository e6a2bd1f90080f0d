use std::fs::File;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{bail, Context};
use circular::Buffer;
use clap::Parser;

use matroska_cues::{CueParser, Progress};

/// Print the seek table found before the first Cluster of a Matroska file.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Matroska or WebM file
    input: PathBuf,

    /// Bytes read from the file between two parser calls
    #[arg(short, long, default_value_t = 4096)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let args = Args::parse();

    run(&args)
}

fn run(args: &Args) -> anyhow::Result<()> {
    let mut file =
        File::open(&args.input).with_context(|| format!("opening {}", args.input.display()))?;

    let chunk_size = args.chunk_size.max(1);
    let mut b = Buffer::with_capacity(chunk_size);
    let mut parser = CueParser::new();

    loop {
        // nothing is consumed until the parser is done, so grow instead
        if b.available_space() == 0 {
            let capacity = b.capacity() * 2;
            b.grow(capacity);
        }

        let space = b.space();
        let len = space.len().min(chunk_size);
        let sz = file.read(&mut space[..len])?;
        b.fill(sz);

        match parser.feed(&b)? {
            Progress::Done => break,
            Progress::NeedMoreData if sz == 0 => {
                bail!("end of file after {} bytes, before the first Cluster", b.available_data())
            }
            Progress::NeedMoreData => {}
        }
    }

    let table = parser.table();
    println!("+ Segment at {}", table.segment_offset);
    println!("|+ Seek head at {}", table.segment_head_offset);
    println!("|+ timestamp scale: {}", table.time_scale_or_default());
    match table.duration_float {
        Some(duration) => println!("|+ duration: {}", duration),
        None => println!("|+ duration (raw): {}", table.duration),
    }
    println!("|+ Cues, {} points", table.len());

    for point in &table.points {
        let cluster = match table.cluster_offset(point) {
            Some(offset) => offset.to_string(),
            None => String::from("invalid"),
        };
        println!(
            "| + track {} at {} ns: cluster at {}",
            point.track,
            table.time_ns(point),
            cluster
        );
    }

    Ok(())
}
