pub mod calendar;
pub mod event;
pub mod pinned;
pub mod user;

pub use calendar::*;
pub use event::*;
pub use pinned::*;
pub use user::*;
