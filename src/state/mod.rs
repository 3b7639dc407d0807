//! State Management
//!
//! Global application state, the chat and training stores behind it, and
//! the browser-persisted bits (session cookie, theme).

pub mod chats;
pub mod global;
pub mod session;
pub mod theme;
pub mod training;

pub use chats::{can_submit, derive_title, Chat, ChatList, ChatPhase, Message, Role, SCRIPTED_REPLY};
pub use global::{provide_global_state, GlobalState};
pub use theme::{apply_theme, load_theme, Theme};
pub use training::{
    epoch_log_line, epoch_step, model_for_uploads, start_log_line, ComputeDevice, EpochStat,
    ModelVersion, Optimizer, TrainingParams, UploadKind, UploadTracker, VersionSet,
    COMPLETE_LOG_LINE, STOP_LOG_LINE, UPLOAD_CHUNK_BYTES,
};
