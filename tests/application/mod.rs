mod log_access_service_test;
mod system_status_service_test;
