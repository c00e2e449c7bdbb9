use std::io::BufRead;
use std::path::Path;

use radsim_core::utils::get_dynamic_reader;

use crate::error::{ReaderError, Result};

/// Read the sequence of a single contig out of a FASTA file.
///
/// The file is streamed line by line, so only the requested contig is kept in
/// memory. Gzipped files (ending in `.gz`) are decompressed on the fly.
///
/// The contig name is the first whitespace-delimited token of the header line,
/// so `>NC_036780.1 Maylandia zebra chromosome 1` is found as `NC_036780.1`.
/// Sequence case is preserved.
///
/// # Arguments
///
/// * `path` - path to the FASTA file
/// * `contig` - name of the contig (chromosome) to extract
///
/// # Errors
///
/// This function will return an error if:
/// - The file cannot be opened or read
/// - No header in the file names `contig`
pub fn read_fasta<T: AsRef<Path>>(path: T, contig: &str) -> Result<String> {
    let path = path.as_ref();
    let reader =
        get_dynamic_reader(path).map_err(|e| ReaderError::FileRead(format!("{:#}", e)))?;

    log::debug!("Scanning {} for contig {}", path.display(), contig);

    read_fasta_from_reader(reader, contig)?.ok_or_else(|| ReaderError::ContigNotFound {
        contig: contig.to_string(),
        path: path.display().to_string(),
    })
}

/// Extract a contig from any buffered FASTA stream. Returns `None` when the contig is absent.
pub fn read_fasta_from_reader<R: BufRead>(mut reader: R, contig: &str) -> Result<Option<String>> {
    let mut line = String::new();
    let mut sequence: Option<String> = None;

    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }

        if let Some(header) = line.strip_prefix('>') {
            if sequence.is_some() {
                // the requested contig ended
                break;
            }
            let name = header.split_whitespace().next().unwrap_or_default();
            if name == contig {
                sequence = Some(String::new());
            }
            continue;
        }

        if let Some(seq) = sequence.as_mut() {
            seq.push_str(line.trim_end());
        }
    }

    Ok(sequence)
}
