pub(crate) mod common;
pub mod fsops;
pub(crate) mod render;
pub(crate) mod store;

pub use common::error::StoreError;
pub use render::render_table;
pub use store::{RecordStore, row::Row, table_file::TableData};
