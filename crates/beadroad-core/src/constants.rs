//! Shared constants for the bead-road analysis engine.

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Number of columns on a bead-road board.
pub const BOARD_COLUMNS: usize = 15;

/// Number of rows on a bead-road board.
pub const BOARD_ROWS: usize = 6;

/// Width in columns of a pattern position template.
pub const PATTERN_WIDTH: usize = 2;

/// Rows sampled by a pattern position template (top half / bottom half).
pub const PATTERN_HEIGHT: usize = 3;

/// Number of cells sampled by one pattern position.
pub const PATTERN_CELLS: usize = PATTERN_WIDTH * PATTERN_HEIGHT;

/// Pattern positions consulted per zone when composing codes.
pub const ZONE_TEMPLATE_COUNT: usize = 4;

/// Default zone width in columns.
pub const DEFAULT_ZONE_WIDTH: usize = 3;

/// Default taxonomy document path.
pub const DEFAULT_TAXONOMY_PATH: &str = "pattern.json";

/// Default history size below which the whole log is sampled, and the
/// fixed-size fallback sample above it.
pub const DEFAULT_SAMPLE_LIMIT: usize = 100;

/// Default width of the recency window used by statistics sampling.
pub const DEFAULT_RECENT_WINDOW_MINUTES: u32 = 180;

/// Default number of records shown by recent-activity views.
pub const DEFAULT_RECENT_DISPLAY: usize = 3;

/// Default SQLite history database path.
pub const DEFAULT_DB_PATH: &str = "pattern_analysis.db";

/// Pair buckets, in canonical order.
pub const PAIR_BUCKETS: [&str; 4] = ["aa", "ab", "ba", "bb"];

/// Triple buckets, in canonical order.
pub const TRIPLE_BUCKETS: [&str; 8] = ["aaa", "aab", "aba", "abb", "baa", "bab", "bba", "bbb"];
