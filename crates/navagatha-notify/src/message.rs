//! Message templates
//!
//! Templates render to self-contained HTML with inline styles so they
//! survive strict mail clients.

/// A rendered message ready for delivery
#[derive(Debug, Clone, PartialEq)]
pub struct Outbound {
    pub to: String,
    /// Reply-To for messages sent on behalf of a third party
    pub reply_to: Option<String>,
    pub subject: String,
    pub html: String,
}

/// A submitted job application, rendered into the HR notification mail
#[derive(Debug, Clone)]
pub struct JobApplication {
    pub job_title: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub experience: String,
    pub message: String,
}

impl Outbound {
    /// The login-code mail sent to a staff address
    pub fn login_code(to: &str, code: &str) -> Self {
        let html = format!(
            r#"<div style="font-family: sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto;">
  <h2 style="color: #0F172A;">Login Verification</h2>
  <p>Hello,</p>
  <p>You requested a login code for the Navagatha Tech employee portal.</p>
  <div style="background: #F8FAFC; padding: 25px; border-radius: 12px; border: 1px solid #E2E8F0; margin: 30px 0; text-align: center;">
    <p style="margin: 0; font-size: 14px; color: #64748B;">Your 6-digit verification code is:</p>
    <p style="margin: 10px 0 0; font-weight: bold; font-size: 36px; color: #0F172A; letter-spacing: 8px;">{code}</p>
  </div>
  <p>This code will expire in 5 minutes. If you did not request this, please ignore this email.</p>
  <hr style="border: none; border-top: 1px solid #EEE; margin: 30px 0;" />
  <p style="font-size: 11px; color: #999; text-align: center;">Team Navagatha</p>
</div>"#
        );
        Self {
            to: to.to_string(),
            reply_to: None,
            subject: "Your Login OTP - Navagatha Tech".to_string(),
            html,
        }
    }

    /// The candidate-application mail sent to the HR inbox
    pub fn job_application(to: &str, application: &JobApplication) -> Self {
        let message = if application.message.is_empty() {
            "No message provided."
        } else {
            application.message.as_str()
        };
        let html = format!(
            r#"<div style="font-family: sans-serif; line-height: 1.6; color: #333;">
  <h2 style="color: #0F172A;">New Candidate Application</h2>
  <hr />
  <p><strong>Job Title:</strong> {job_title}</p>
  <p><strong>Candidate Name:</strong> {name}</p>
  <p><strong>Email ID:</strong> {email}</p>
  <p><strong>Phone Number:</strong> {phone}</p>
  <p><strong>Experience:</strong> {experience}</p>
  <p><strong>Cover Letter / Message:</strong></p>
  <p style="background: #F8FAFC; padding: 15px; border-radius: 8px; border: 1px solid #E2E8F0;">{message}</p>
  <hr />
  <p style="font-size: 12px; color: #64748B;">This application was submitted via navagathatech.com/careers</p>
</div>"#,
            job_title = application.job_title,
            name = application.name,
            email = application.email,
            phone = application.phone,
            experience = application.experience,
        );
        Self {
            to: to.to_string(),
            reply_to: Some(application.email.clone()),
            subject: format!(
                "New Job Application: {} - {}",
                application.job_title, application.name
            ),
            html,
        }
    }
}
