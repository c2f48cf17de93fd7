//! Wire row types and the session identity.

pub mod directory;
pub mod note;
pub mod session;
pub mod task;

pub use directory::{Admin, DirectoryEntry, Intern};
pub use note::{EnrichedNote, Note, NoteTarget};
pub use session::{CurrentUser, SessionSlot};
pub use task::{Task, TaskWithIntern};
