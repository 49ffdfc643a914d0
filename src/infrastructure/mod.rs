pub mod observability;
pub mod persistence;
pub mod process;
pub mod storage;
pub mod system;
