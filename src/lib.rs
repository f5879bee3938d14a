// remote-caret: poll a command source and drive an editor's cursor,
// selection and viewport. Transport, editor host and diagnostics are
// consumed through the traits in source, editor and diag.

pub mod action;
pub mod actions;
pub mod config;
pub mod diag;
pub mod dispatch;
pub mod editor;
pub mod poller;
pub mod protocol;
pub mod registry;
pub mod session;
pub mod source;

pub use action::{ActionExecutor, ActionKind};
pub use config::PollConfig;
pub use diag::DiagnosticsSink;
pub use dispatch::Dispatcher;
pub use editor::{EditorHost, EditorSurface};
pub use poller::Poller;
pub use protocol::{decode, Command, Decoded};
pub use registry::Registry;
pub use session::Session;
pub use source::{CommandSource, HttpSource};
