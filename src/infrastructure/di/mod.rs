pub mod service_container;
pub mod test_container;

pub use service_container::ServiceContainer;
