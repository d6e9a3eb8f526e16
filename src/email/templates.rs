use chrono::{DateTime, Utc};

use crate::models::Booking;

fn fmt_date(ts: DateTime<Utc>) -> String {
    ts.format("%B %-d, %Y").to_string()
}

fn fmt_price(cents: i64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

pub fn render_welcome(name: &str, base_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Welcome to Carbooker</h2>
    <p>Hi {name},</p>
    <p>Your account has been created. Browse our fleet and book your next ride at:</p>
    <p><a href="{base_url}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Browse Cars</a></p>
    <p style="color: #666; font-size: 14px;">If you didn't expect this email, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_password_reset(reset_url: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Password Reset</h2>
    <p>A password reset was requested for your Carbooker account.</p>
    <p><a href="{reset_url}" style="display: inline-block; padding: 10px 20px; background: #0070f3; color: white; text-decoration: none; border-radius: 4px;">Reset Password</a></p>
    <p style="color: #666; font-size: 14px;">This link expires in 1 hour. If you didn't request this, you can ignore it.</p>
</body>
</html>"#
    )
}

pub fn render_booking_received(name: &str, car_name: &str, booking: &Booking) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Booking received</h2>
    <p>Hi {name},</p>
    <p>We received your booking for <strong>{car_name}</strong>, {pickup} to {dropoff},
    for a total of <strong>{total}</strong>. We'll email you again once it is confirmed.</p>
    <p style="color: #666; font-size: 14px;">Booking reference: {id}</p>
</body>
</html>"#,
        pickup = fmt_date(booking.pickup_at),
        dropoff = fmt_date(booking.dropoff_at),
        total = fmt_price(booking.total_cents),
        id = booking.id,
    )
}

pub fn render_booking_confirmed(name: &str, car_name: &str, booking: &Booking) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Your booking is confirmed</h2>
    <p>Hi {name},</p>
    <p>Your <strong>{car_name}</strong> is reserved from {pickup} to {dropoff}.
    Bring your driver's license to the pickup desk.</p>
    <p style="color: #666; font-size: 14px;">Booking reference: {id}</p>
</body>
</html>"#,
        pickup = fmt_date(booking.pickup_at),
        dropoff = fmt_date(booking.dropoff_at),
        id = booking.id,
    )
}

pub fn render_booking_cancelled(name: &str, car_name: &str, pickup_at: DateTime<Utc>) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Booking cancelled</h2>
    <p>Hi {name},</p>
    <p>Your booking for <strong>{car_name}</strong> starting {pickup} has been cancelled.</p>
</body>
</html>"#,
        pickup = fmt_date(pickup_at),
    )
}
