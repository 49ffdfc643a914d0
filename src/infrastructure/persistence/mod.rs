mod in_memory_job_registry;
mod pg_database_probe;
mod pg_pool;

pub use in_memory_job_registry::InMemoryJobRegistry;
pub use pg_database_probe::PgDatabaseProbe;

pub use pg_pool::create_pool;
