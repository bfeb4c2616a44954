use crate::analyze::discover::LogSource;

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Opens the selected log for line-by-line reading.
///
/// Gzip decompression is transparent and keyed off the filename suffix; the
/// caller sees plain text lines either way. The underlying file handle is
/// dropped together with the returned reader on every exit path.
pub fn open_log(source: &LogSource) -> io::Result<Box<dyn BufRead>> {
    let file = File::open(&source.path)?;

    Ok(if source.gzipped {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    })
}
