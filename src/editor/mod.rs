pub mod session;
pub mod session_state;

pub use session::EditorSession;
pub use session_state::*;
