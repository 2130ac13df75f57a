pub mod morphtag;
pub mod tag;
pub mod unicode;
