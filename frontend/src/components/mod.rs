pub mod category_list;
pub mod footer;
pub mod header;
pub mod pagination;
pub mod search_bar;
pub mod tool_grid;
