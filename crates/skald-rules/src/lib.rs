mod classify;
mod due;
mod extract;
mod negation;
mod owner;

pub use classify::{is_actionable, MIN_LINE_LEN};
pub use due::{extract_due_date, resolve_due_date};
pub use extract::extract_rule_based;
pub use negation::is_negative;
pub use owner::extract_owner;
