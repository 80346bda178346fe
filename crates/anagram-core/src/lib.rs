pub mod dictionary;
pub mod error;
pub mod loader;
pub mod lookup;
pub mod preprocess;

pub use dictionary::{BuildOptions, DEFAULT_DELIMITER, DictionaryIndex, signature};
pub use error::LoadError;
pub use loader::WordListLoader;
pub use lookup::find;
