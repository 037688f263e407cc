pub mod table_store;
