pub mod category;
pub mod counts;

pub use category::{Category, CategoryGroup};
pub use counts::CountTable;
