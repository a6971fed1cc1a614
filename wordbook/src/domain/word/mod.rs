mod model;
mod repository;

pub use model::{WordEntry, WordRecord};
pub use repository::{SqliteWordRepository, WordRepository};
