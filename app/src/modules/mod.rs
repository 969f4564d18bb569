pub mod brand;
pub mod common;
pub mod vehicle_type;

#[cfg(test)]
pub mod test_support;
