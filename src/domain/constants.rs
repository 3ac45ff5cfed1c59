/// Youngest accepted age, inclusive.
pub const MIN_AGE: i128 = 18;

/// Oldest accepted age, inclusive.
pub const MAX_AGE: i128 = 120;

/// Built-in roster validated by `agecheck demo`, in report order.
pub const DEMO_ROSTER: [(&str, i128); 3] = [("Alice", 25), ("Bob", 15), ("Charlie", 130)];

pub const CODE_INPUT_INVALID: &str = "INPUT_INVALID";
pub const CODE_INTERNAL: &str = "INTERNAL";
