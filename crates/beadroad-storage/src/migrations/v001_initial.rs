//! V001: pattern record log and board summary log.

pub const MIGRATION_SQL: &str = r#"
-- One row per classified zone. Timestamps are UTC epoch seconds, minute aligned.
CREATE TABLE IF NOT EXISTS pattern_records (
    round INTEGER PRIMARY KEY AUTOINCREMENT,
    recorded_at INTEGER NOT NULL,
    group_range TEXT NOT NULL,
    pair TEXT NOT NULL,
    pair_result TEXT NOT NULL,
    triple TEXT NOT NULL,
    triple_result TEXT NOT NULL,
    prev_pair TEXT,
    prev_triple TEXT,
    transition TEXT,
    transition_count INTEGER NOT NULL DEFAULT 1,
    pair_a_count INTEGER NOT NULL DEFAULT 0,
    pair_b_count INTEGER NOT NULL DEFAULT 0,
    pair_switches INTEGER NOT NULL DEFAULT 0,
    triple_a_count INTEGER NOT NULL DEFAULT 0,
    triple_b_count INTEGER NOT NULL DEFAULT 0,
    triple_switches INTEGER NOT NULL DEFAULT 0
) STRICT;

CREATE INDEX IF NOT EXISTS idx_pattern_records_recorded_at
    ON pattern_records(recorded_at);
CREATE INDEX IF NOT EXISTS idx_pattern_records_transition
    ON pattern_records(transition, round) WHERE transition IS NOT NULL;

-- Whole-board shorthand strings.
CREATE TABLE IF NOT EXISTS group_sequences (
    round INTEGER PRIMARY KEY AUTOINCREMENT,
    recorded_at INTEGER NOT NULL,
    summary TEXT NOT NULL
) STRICT;

CREATE INDEX IF NOT EXISTS idx_group_sequences_recorded_at
    ON group_sequences(recorded_at);
"#;
