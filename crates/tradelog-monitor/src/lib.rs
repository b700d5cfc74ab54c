//! Presentation layer: logging setup, translations and the terminal dashboard.

mod dashboard;
mod i18n;
mod logging;
mod palette;

pub use dashboard::{Control, Dashboard, DashboardState};
pub use i18n::Translations;
pub use logging::setup_logging;
pub use palette::Palette;
