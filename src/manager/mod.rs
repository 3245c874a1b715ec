pub mod manager_client;
pub mod manager_config;
pub mod manager_inventory;
pub mod method_call;
