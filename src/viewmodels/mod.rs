pub mod entry_viewmodel;

pub use entry_viewmodel::EntryListViewModel;
