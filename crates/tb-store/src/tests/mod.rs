mod json_file_store;
mod memory_store;
