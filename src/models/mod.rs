pub mod booking;
pub mod car;
pub mod extra;
pub mod location;
pub mod password_reset_token;
pub mod promotion;
pub mod refresh_token;
pub mod user;

pub use booking::{Booking, BookingDetail, BookingStatus};
pub use car::Car;
pub use extra::Extra;
pub use location::Location;
pub use password_reset_token::PasswordResetToken;
pub use promotion::Promotion;
pub use refresh_token::RefreshToken;
pub use user::User;
