pub mod language;
pub mod movie;
pub mod session;

pub use language::Language;
pub use movie::{Movie, MovieCategory, Video};
pub use session::SessionUser;
