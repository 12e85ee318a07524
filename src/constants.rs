// Bases appended from the start of a circular sequence when batch searching;
// longer than any supported recognition site
pub const BATCH_WRAP_LEN: usize = 10;

// Trailing bases probed for longer sites starting at the same position
pub const MAX_EXTENSION_PROBE: usize = 4;

// Columns in an enzyme table (see `table`)
pub const TABLE_COLUMNS: usize = 9;
