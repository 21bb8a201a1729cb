mod category_item;

pub use category_item::CategoryItem;
