//! Resource services - the operations the external framework maps verbs to.

mod posts;

pub use posts::PostService;
