pub mod media_storage;
pub mod storage_gcs;
pub mod storage_memory;
