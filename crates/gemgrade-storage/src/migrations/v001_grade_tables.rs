//! V001: per-shape grade tables.
//! kgs_<shape> holds the primary and tertiary grades keyed by the three
//! proportion values; bowtie_<shape> holds halves-angle ranges per crown angle.

pub const MIGRATION_SQL: &str = r#"
CREATE TABLE IF NOT EXISTS kgs_pear_8 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_pear_8_key
    ON kgs_pear_8(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_pear_8 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_pear_8_crown
    ON bowtie_pear_8(crown_angle);

CREATE TABLE IF NOT EXISTS kgs_pear_4 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_pear_4_key
    ON kgs_pear_4(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_pear_4 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_pear_4_crown
    ON bowtie_pear_4(crown_angle);

CREATE TABLE IF NOT EXISTS kgs_oval_8 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_oval_8_key
    ON kgs_oval_8(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_oval_8 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_oval_8_crown
    ON bowtie_oval_8(crown_angle);

CREATE TABLE IF NOT EXISTS kgs_oval_4 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_oval_4_key
    ON kgs_oval_4(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_oval_4 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_oval_4_crown
    ON bowtie_oval_4(crown_angle);

CREATE TABLE IF NOT EXISTS kgs_marq_8 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_marq_8_key
    ON kgs_marq_8(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_marq_8 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_marq_8_crown
    ON bowtie_marq_8(crown_angle);

CREATE TABLE IF NOT EXISTS kgs_marq_4 (
    id INTEGER PRIMARY KEY,
    table_width REAL NOT NULL,
    crown_angle REAL NOT NULL,
    pavilion_depth REAL NOT NULL,
    kgs_grade,
    fish_eye_grade
);
CREATE INDEX IF NOT EXISTS idx_kgs_marq_4_key
    ON kgs_marq_4(table_width, crown_angle, pavilion_depth);

CREATE TABLE IF NOT EXISTS bowtie_marq_4 (
    id INTEGER PRIMARY KEY,
    crown_angle REAL NOT NULL,
    halves_min REAL NOT NULL,
    halves_max REAL NOT NULL,
    bowtie_grade
);
CREATE INDEX IF NOT EXISTS idx_bowtie_marq_4_crown
    ON bowtie_marq_4(crown_angle);

"#;
