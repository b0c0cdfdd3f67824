//! Domain entities for both applications.
//!
//! Each persisted entity has a companion `New*` type carrying the fields
//! an insert needs; ids and defaulted timestamps are assigned by the
//! repository layer.

mod news;
mod note;
mod user;

pub use news::{Comment, NewComment, NewNewsItem, NewsItem};
pub use note::{NewNote, Note};
pub use user::{NewUser, User};
