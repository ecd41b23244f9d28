pub mod service_type;

pub use service_type::ServiceType;
