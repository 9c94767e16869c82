pub mod render;

pub use render::{display_allergen_audit, display_label, format_label};
