/// Length of a sequencing read, in bases.
pub const DEFAULT_READ_LENGTH: i64 = 100;

/// ddRad fragments must be strictly longer than this.
pub const DEFAULT_MIN_SIZE: i64 = 300;

/// ddRad fragments must be strictly shorter than this.
pub const DEFAULT_MAX_SIZE: i64 = 700;

/// Upper bound on read length and fragment sizes, so window arithmetic
/// on any chromosome offset stays in range.
pub const MAX_PARAM_SIZE: i64 = i32::MAX as i64;

/// Chromosome 1 of the Lake Malawi cichlid (M. zebra) reference assembly.
pub const DEFAULT_CHROM: &str = "NC_036780.1";
