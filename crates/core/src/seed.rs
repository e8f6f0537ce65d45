/// Categories every freshly seeded store starts with, in iteration order.
pub const DEFAULT_CATEGORY_NAMES: &[&str] = &["Personal", "Work", "Shopping"];
