use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};

pub mod application;
pub mod connection;

use crate::pkg::internal::alerts;
use crate::{conf::settings, prelude::Result};

pub trait SendEmail {
    fn send(&self, email: &str) -> Result<()>;
}

pub fn send_email(email: &str, subject: &str, body: &str, is_html: bool) -> Result<()> {
    let (name, _) = email.split_once("@").unwrap_or(("unknown", ""));
    let name = name.to_string();
    let email = email.to_string();
    let subject = subject.to_string();
    let body = body.to_string();
    tracing::debug!("sending email to {}", &email);
    tokio::spawn(async move {
        let delivery = {
            let name = name.clone();
            let to = email.clone();
            let subject = subject.clone();
            tokio::task::spawn_blocking(move || deliver(&name, &to, &subject, &body, is_html))
                .await
        };
        match delivery {
            Ok(Ok(())) => tracing::info!("email sent to {}", &email),
            Ok(Err(e)) => {
                tracing::error!("could not send email to {}: {}", &email, &e);
                alerts::notify(&format!("Failed to send \"{}\" to {}", &subject, &email)).await;
            }
            Err(e) => {
                tracing::error!("email task failed to execute: {}", &e);
                alerts::notify(&format!("Failed to send \"{}\" to {}", &subject, &email)).await;
            }
        }
    });
    Ok(())
}

fn deliver(
    name: &str,
    email: &str,
    subject: &str,
    body: &str,
    is_html: bool,
) -> std::result::Result<(), String> {
    let content_type = if is_html {
        ContentType::TEXT_HTML
    } else {
        ContentType::TEXT_PLAIN
    };

    let message = Message::builder()
        .from(
            format!("{} <{}>", &settings.service_name, &settings.from_email)
                .parse()
                .map_err(|e| format!("bad from address: {}", e))?,
        )
        .to(format!("{} <{}>", name, email)
            .parse()
            .map_err(|e| format!("bad to address: {}", e))?)
        .subject(subject)
        .header(content_type)
        .body(body.to_string())
        .map_err(|e| e.to_string())?;

    let creds = Credentials::new(settings.smtp_user.clone(), settings.smtp_pass.clone());

    let mailer = SmtpTransport::relay(&settings.smtp_server)
        .map_err(|e| e.to_string())?
        .port(settings.smtp_port)
        .credentials(creds)
        .build();

    mailer.send(&message).map_err(|e| e.to_string())?;
    Ok(())
}
