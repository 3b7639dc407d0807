//! Page Components
//!
//! One module per routed view.

pub mod about;
pub mod analysis;
pub mod auth;
pub mod chat;
pub mod dashboard;
pub mod home;
pub mod new_chat;
pub mod train;
pub mod training;
pub mod versions;

pub use about::{About, AboutProject, AboutTeam};
pub use analysis::Analysis;
pub use auth::Auth;
pub use chat::ChatView;
pub use dashboard::Dashboard;
pub use home::Home;
pub use new_chat::NewChat;
pub use train::TrainModel;
pub use training::{TrainingLayout, TrainingOverview};
pub use versions::Versions;
