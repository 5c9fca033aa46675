pub mod calendar_client;
