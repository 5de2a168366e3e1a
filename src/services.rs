pub mod resource_client;
