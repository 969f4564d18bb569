pub mod brand;
pub mod vehicle_type;
