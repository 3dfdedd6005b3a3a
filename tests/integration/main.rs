//! HTTP integration tests over the in-memory data store.

mod helpers;

mod health_test;
mod moto_test;
mod pagination_test;
mod status_test;
mod user_test;
mod yard_test;
mod zone_test;
