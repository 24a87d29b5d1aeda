//! Theme enumeration, inspection and application

pub mod applier;
pub mod catalog;
pub mod current;

pub use applier::{ACTIVE_SECTION, ApplyOutcome, apply_theme, apply_theme_and_save};
pub use catalog::list_theme_names;
pub use current::CurrentTheme;
