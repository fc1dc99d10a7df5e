pub mod bookings;
pub mod schema;
