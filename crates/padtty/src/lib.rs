pub mod app;
pub mod domain;
pub mod infra;
pub mod runtime;
pub mod ui;

// Re-exports for convenience
pub use app::Workspace;
pub use app::console::CommandInterpreter;
pub use app::dialog::{DialogRequest, DialogService, QueuedDialogs};
pub use app::store::{WorkspaceError, WorkspaceStore};
pub use domain::entry::{Entry, EntryKind};
