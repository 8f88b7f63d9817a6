pub mod blob_service;
