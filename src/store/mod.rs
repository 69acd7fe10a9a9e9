pub mod entry;
pub mod journal_store;
pub mod tabular;
