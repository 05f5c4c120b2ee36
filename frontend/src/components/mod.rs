pub mod footer;
pub mod nav;
pub mod pagination;
pub mod stats_table;
