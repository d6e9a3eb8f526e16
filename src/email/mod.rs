pub mod templates;

use chrono::{DateTime, Utc};
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};

use crate::config::SmtpConfig;
use crate::models::Booking;

pub struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: String,
}

impl Mailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, String> {
        let creds = Credentials::new(config.user.clone(), config.pass.clone());

        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)
            .map_err(|e| format!("SMTP error: {e}"))?
            .port(config.port)
            .credentials(creds)
            .build();

        Ok(Self {
            transport,
            from: config.from.clone(),
        })
    }

    pub async fn send_welcome(&self, to_email: &str, to_name: &str, base_url: &str) -> Result<(), String> {
        let html = templates::render_welcome(to_name, base_url);
        self.send(to_email, "Welcome to Carbooker", &html).await
    }

    pub async fn send_password_reset(&self, to_email: &str, reset_url: &str) -> Result<(), String> {
        let html = templates::render_password_reset(reset_url);
        self.send(to_email, "Password Reset - Carbooker", &html)
            .await
    }

    pub async fn send_booking_received(
        &self,
        to_email: &str,
        to_name: &str,
        car_name: &str,
        booking: &Booking,
    ) -> Result<(), String> {
        let html = templates::render_booking_received(to_name, car_name, booking);
        self.send(to_email, "We received your booking - Carbooker", &html)
            .await
    }

    pub async fn send_booking_confirmed(
        &self,
        to_email: &str,
        to_name: &str,
        car_name: &str,
        booking: &Booking,
    ) -> Result<(), String> {
        let html = templates::render_booking_confirmed(to_name, car_name, booking);
        self.send(to_email, "Your booking is confirmed - Carbooker", &html)
            .await
    }

    pub async fn send_booking_cancelled(
        &self,
        to_email: &str,
        to_name: &str,
        car_name: &str,
        pickup_at: DateTime<Utc>,
    ) -> Result<(), String> {
        let html = templates::render_booking_cancelled(to_name, car_name, pickup_at);
        self.send(to_email, "Your booking was cancelled - Carbooker", &html)
            .await
    }

    async fn send(&self, to: &str, subject: &str, html_body: &str) -> Result<(), String> {
        let message = Message::builder()
            .from(
                self.from
                    .parse()
                    .map_err(|e| format!("Invalid from address: {e}"))?,
            )
            .to(to.parse().map_err(|e| format!("Invalid to address: {e}"))?)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(html_body.to_string())
            .map_err(|e| format!("Failed to build email: {e}"))?;

        self.transport
            .send(message)
            .await
            .map_err(|e| format!("Failed to send email: {e}"))?;

        Ok(())
    }
}
