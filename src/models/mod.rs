mod bill;
mod category;

pub use bill::Bill;
pub use category::Category;
