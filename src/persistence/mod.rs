mod export;
mod files;

pub use export::{label_csv_rows, write_label_csv, write_label_csv_to};
pub use files::{load_daily_values, load_formulation, save_label};
