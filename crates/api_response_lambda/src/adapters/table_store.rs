/// Enumerates the tables available in the backing store.
pub trait TableLister {
    fn list_tables(&self) -> Result<Vec<String>, String>;
}
