pub mod product_handler;

pub use product_handler::list_products_by_category;
