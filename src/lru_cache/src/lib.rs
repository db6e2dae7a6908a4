mod error;
mod lru_cache;
pub mod lru_list;

pub use crate::error::CreateError;
pub use crate::lru_cache::LruCache;
pub use crate::lru_list::LruList;
