use std::fmt::{self, Display};

use super::{SendEmail, send_email};

/// Sent to the job owner when a new application lands; carries the two
/// single-use decision links.
#[derive(Debug)]
pub struct ApplicationNotice {
    pub job_title: String,
    pub owner_name: String,
    pub applicant_name: String,
    pub applicant_email: String,
    pub message: String,
    pub profile_links: Vec<String>,
    pub accept_url: String,
    pub reject_url: String,
}

impl Display for ApplicationNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let links_block = if self.profile_links.is_empty() {
            String::new()
        } else {
            let items: String = self
                .profile_links
                .iter()
                .map(|link| format!(r#"<li><a href="{}">{}</a></li>"#, link, link))
                .collect();
            format!(
                r#"<h3 style="color: #333; margin-top: 20px;">Profile Links:</h3><ul>{}</ul>"#,
                items
            )
        };
        let html_template = format!(
            r#"
            <div style="font-family: Arial, sans-serif; max-width: 600px; margin: 0 auto;">
                <h2 style="color: #333;">New Application for {}</h2>

                <p>Hello {},</p>

                <p>You have received a new application for your project "{}".</p>

                <h3 style="color: #333; margin-top: 20px;">Applicant Details:</h3>
                <p><strong>Name:</strong> {}</p>
                <p><strong>Email:</strong> {}</p>

                {}

                <h3 style="color: #333; margin-top: 20px;">Application Message:</h3>
                <p>{}</p>

                <div style="margin-top: 30px; text-align: center;">
                    <a href="{}" style="background-color: #4CAF50; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px; margin-right: 10px;">Interested</a>
                    <a href="{}" style="background-color: #f44336; color: white; padding: 10px 20px; text-decoration: none; border-radius: 5px;">Not Interested</a>
                </div>

                <p style="margin-top: 30px; color: #666; font-size: 12px;">
                    This is an automated message. Please do not reply to this email.
                </p>
            </div>
            "#,
            self.job_title,
            self.owner_name,
            self.job_title,
            self.applicant_name,
            self.applicant_email,
            links_block,
            self.message,
            self.accept_url,
            self.reject_url,
        );
        write!(f, "{}", html_template)
    }
}

impl SendEmail for ApplicationNotice {
    fn send(&self, email: &str) -> crate::prelude::Result<()> {
        send_email(
            email,
            &format!("New Application for {}", &self.job_title),
            &format!("{}", &self),
            true,
        )?;
        Ok(())
    }
}

#[cfg(test)]
pub mod tests {
    use super::*;

    fn notice() -> ApplicationNotice {
        ApplicationNotice {
            job_title: "Rust tooling".into(),
            owner_name: "Bea".into(),
            applicant_name: "Ana".into(),
            applicant_email: "a@x.com".into(),
            message: "I'd love to help build this".into(),
            profile_links: vec!["https://github.com/ana".into()],
            accept_url: "http://localhost:3000/applications/app-1/accept?token=t1".into(),
            reject_url: "http://localhost:3000/applications/app-1/reject?token=t2".into(),
        }
    }

    #[test]
    fn test_template_carries_both_decision_links() {
        let html = format!("{}", notice());
        assert!(html.contains("/applications/app-1/accept?token=t1"));
        assert!(html.contains("/applications/app-1/reject?token=t2"));
        assert!(html.contains("I'd love to help build this"));
        assert!(html.contains("https://github.com/ana"));
    }

    #[test]
    fn test_template_omits_links_section_when_empty() {
        let mut n = notice();
        n.profile_links.clear();
        let html = format!("{}", n);
        assert!(!html.contains("Profile Links"));
    }
}
