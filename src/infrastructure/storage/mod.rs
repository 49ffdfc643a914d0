mod local_log_store;

pub use local_log_store::LocalLogStore;
