//! UI Components
//!
//! Reusable Leptos components shared across pages.

pub mod chart;
pub mod chat_sidebar;
pub mod composer;
pub mod loading;
pub mod nav;
pub mod toast;

pub use chart::{DonutChart, LabelledPoint, LineChart, Slice, TrainingChart};
pub use chat_sidebar::ChatSidebar;
pub use composer::{read_file_to_data_url, Composer};
pub use loading::{InlineLoading, TypingIndicator};
pub use nav::Nav;
pub use toast::Toast;
