pub mod items;

pub use items::{CreateItemRequest, ItemDetails, ItemListQuery, ItemResponse, UpdateItemRequest};
