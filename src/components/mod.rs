//! UI Components
//!
//! Leptos views over the shared `AppStore`.

mod carousel;
mod category_nav;
mod idea_card;
mod idea_grid;
mod idea_modal;
mod newsletter_form;
mod stats_bar;
mod submit_modal;
mod toast;
mod toolbar;

pub use carousel::{measure_item_width, Carousel};
pub use category_nav::CategoryNav;
pub use idea_card::IdeaCard;
pub use idea_grid::IdeaGrid;
pub use idea_modal::IdeaModal;
pub use newsletter_form::NewsletterForm;
pub use stats_bar::StatsBar;
pub use submit_modal::SubmitModal;
pub use toast::ToastStack;
pub use toolbar::Toolbar;
