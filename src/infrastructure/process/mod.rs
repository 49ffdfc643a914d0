mod tokio_process_launcher;

pub use tokio_process_launcher::{TokioProcessHandle, TokioProcessLauncher};
