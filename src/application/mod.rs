pub mod order_query;
pub mod order_store;
pub mod revenue;
