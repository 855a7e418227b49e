use std::fmt::{self, Display};

use super::{SendEmail, send_email};

/// Sent to both parties after an accept; each side learns the other's
/// contact address.
#[derive(Debug)]
pub struct ConnectionNotice {
    pub job_title: String,
    pub owner_name: String,
    pub owner_email: String,
    pub applicant_name: String,
    pub applicant_email: String,
}

impl Display for ConnectionNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let html_template = format!(
            r#"
            <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
                <h2 style="color: #333;">Connection Established</h2>

                <p>Hello,</p>

                <p>A connection has been established for the project "{}".</p>

                <h3 style="color: #333; margin-top: 20px;">Contact Information:</h3>
                <p><strong>{}:</strong> {}</p>
                <p><strong>{}:</strong> {}</p>

                <p style="margin-top: 30px; color: #666; font-size: 12px;">
                    This is an automated message. Please do not reply to this email.
                </p>
            </div>
            "#,
            self.job_title,
            self.owner_name,
            self.owner_email,
            self.applicant_name,
            self.applicant_email,
        );
        write!(f, "{}", html_template)
    }
}

impl SendEmail for ConnectionNotice {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            &format!("Connection Established for {}", &self.job_title),
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    #[test]
    fn test_template_exchanges_both_addresses() {
        let html = format!(
            "{}",
            ConnectionNotice {
                job_title: "Rust tooling".into(),
                owner_name: "Bea".into(),
                owner_email: "b@x.com".into(),
                applicant_name: "Ana".into(),
                applicant_email: "a@x.com".into(),
            }
        );
        assert!(html.contains("b@x.com"));
        assert!(html.contains("a@x.com"));
        assert!(html.contains("Rust tooling"));
    }
}
