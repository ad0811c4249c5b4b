mod nav_bar;
mod progress_bar;
mod strip;

pub use nav_bar::NavBarWidget;
pub use progress_bar::ProgressBarWidget;
pub use strip::{wrap_text, StripWidget};
