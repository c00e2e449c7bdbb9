//! Streaming VCF genotype reader.
//!
//! Only the columns a RAD-seq simulation needs are parsed: CHROM, POS and the
//! `GT` value of every sample. Records are produced lazily, one line at a time,
//! so a caller can stop early without reading the rest of the file.

use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use radsim_core::models::{Genotype, VariantRecord};
use radsim_core::utils::{get_dynamic_reader, get_dynamic_reader_w_stdin};

use crate::error::{ReaderError, Result};

const CHROM_COL: usize = 0;
const POS_COL: usize = 1;
const FORMAT_COL: usize = 8;
const FIRST_SAMPLE_COL: usize = 9;
const MIN_FIELDS: usize = 8;

pub struct VcfReader<R: BufRead> {
    reader: R,
    samples: Vec<String>,
    line_buf: String,
    line_no: usize,
    finished: bool,
}

impl VcfReader<BufReader<Box<dyn Read>>> {
    ///
    /// Open a VCF file, plain or gzipped, and read its header.
    ///
    pub fn from_path<T: AsRef<Path>>(path: T) -> Result<Self> {
        let reader = get_dynamic_reader(path.as_ref())
            .map_err(|e| ReaderError::FileRead(format!("{:#}", e)))?;
        VcfReader::new(reader)
    }

    ///
    /// Like [`VcfReader::from_path`], but `-` reads from stdin.
    ///
    pub fn from_path_or_stdin(path: &str) -> Result<Self> {
        let reader = get_dynamic_reader_w_stdin(path)
            .map_err(|e| ReaderError::FileRead(format!("{:#}", e)))?;
        VcfReader::new(reader)
    }
}

impl<R: BufRead> VcfReader<R> {
    ///
    /// Wrap a buffered reader. The meta lines and the `#CHROM` header are consumed
    /// immediately; records are read on iteration.
    ///
    pub fn new(reader: R) -> Result<Self> {
        let mut vcf = VcfReader {
            reader,
            samples: Vec::new(),
            line_buf: String::new(),
            line_no: 0,
            finished: false,
        };
        vcf.read_header()?;
        Ok(vcf)
    }

    /// Sample names, in column order.
    pub fn samples(&self) -> &[String] {
        &self.samples
    }

    fn next_line(&mut self) -> Result<bool> {
        self.line_buf.clear();
        let n = self.reader.read_line(&mut self.line_buf)?;
        if n > 0 {
            self.line_no += 1;
        }
        Ok(n > 0)
    }

    fn read_header(&mut self) -> Result<()> {
        while self.next_line()? {
            let line = self.line_buf.trim_end_matches(['\n', '\r']);
            if line.starts_with("##") || line.is_empty() {
                continue;
            }
            if line.starts_with("#CHROM") {
                self.samples = line
                    .split('\t')
                    .skip(FIRST_SAMPLE_COL)
                    .map(|s| s.to_string())
                    .collect();
                log::debug!("VCF header lists {} samples", self.samples.len());
                return Ok(());
            }
            return Err(ReaderError::MissingVcfHeader);
        }
        Err(ReaderError::MissingVcfHeader)
    }

    fn parse_error(&self, reason: impl Into<String>) -> ReaderError {
        ReaderError::VcfParse {
            line: self.line_no,
            reason: reason.into(),
        }
    }

    fn parse_record(&self, line: &str) -> Result<VariantRecord> {
        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() < MIN_FIELDS {
            return Err(self.parse_error(format!(
                "expected at least {} fields, found {}",
                MIN_FIELDS,
                fields.len()
            )));
        }

        let chrom = fields[CHROM_COL];
        let pos = fields[POS_COL]
            .parse::<i64>()
            .ok()
            .filter(|&pos| pos >= 1)
            .ok_or_else(|| self.parse_error(format!("invalid POS field: {}", fields[POS_COL])))?;

        let sample_fields = fields.get(FIRST_SAMPLE_COL..).unwrap_or_default();
        if sample_fields.len() != self.samples.len() {
            return Err(self.parse_error(format!(
                "expected {} sample columns, found {}",
                self.samples.len(),
                sample_fields.len()
            )));
        }

        let gt_index = fields
            .get(FORMAT_COL)
            .and_then(|format| format.split(':').position(|key| key == "GT"));

        let genotypes = match gt_index {
            Some(idx) => sample_fields
                .iter()
                .map(|sample| {
                    let gt = sample.split(':').nth(idx).unwrap_or_default();
                    gt.parse::<Genotype>()
                        .map_err(|e| self.parse_error(e.to_string()))
                })
                .collect::<Result<Vec<Genotype>>>()?,
            None => vec![Genotype::Missing; sample_fields.len()],
        };

        Ok(VariantRecord::new(chrom, pos, genotypes))
    }
}

impl<R: BufRead> Iterator for VcfReader<R> {
    type Item = Result<VariantRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            match self.next_line() {
                Ok(true) => {}
                Ok(false) => {
                    self.finished = true;
                    return None;
                }
                Err(e) => {
                    self.finished = true;
                    return Some(Err(e));
                }
            }

            let line = self.line_buf.trim_end_matches(['\n', '\r']);
            if line.is_empty() {
                continue;
            }

            let record = self.parse_record(line);
            if record.is_err() {
                self.finished = true;
            }
            return Some(record);
        }
    }
}
