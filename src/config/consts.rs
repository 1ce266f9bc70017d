/// Banner printed before anything else
pub const BANNER: &str = "=== CODE NEXUS - DATA PROCESSOR FOUNDATION ===";
/// Header of the polymorphic section
pub const POLYMORPHIC_HEADER: &str = "=== Polymorphic Processing Demo ===";
/// Line introducing the polymorphic results
pub const POLYMORPHIC_INTRO: &str = "Processing multiple data types through same interface...";

/// Showcase input for the numeric processor
pub const SHOWCASE_NUMBERS: [i64; 3] = [10, 20, 30];
/// Showcase input for the text processor
pub const SHOWCASE_TEXT: &str = "Hello Nexus World";
/// Showcase input for the log processor
pub const SHOWCASE_LOG_LINE: &str = "ERROR: Connection timeout";

/// Label used in logs when the built-in cases run
pub const BUILTIN_CASES_SOURCE: &str = "built-in cases";
