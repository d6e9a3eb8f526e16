pub mod bookings;
pub mod cars;
pub mod extras;
pub mod locations;
pub mod password_reset_tokens;
pub mod promotions;
pub mod refresh_tokens;
pub mod users;
