//! Notification message rendering.
//!
//! Builds the subject and the text/HTML bodies from a stored submission.
//! Support requests and enquiries get different subject lines and label
//! the kind-specific field differently.

use crate::domain::model::{ContactSubmission, DEFAULT_SUBJECT, SubmissionKind};

/// Subject used for a support request whose subject was left empty.
const FALLBACK_SUPPORT_SUBJECT: &str = "Help Needed";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMail {
    pub subject: String,
    pub text: String,
    pub html: String,
}

pub fn render(submission: &ContactSubmission) -> RenderedMail {
    let (heading, detail_label, detail_value) = match submission.kind {
        SubmissionKind::Support => ("Support Request", "Subject", support_subject(submission)),
        SubmissionKind::Enquiry => {
            ("Client Enquiry", "Project Type", submission.project_type.as_str())
        }
    };

    let subject = match submission.kind {
        SubmissionKind::Support => format!("Support Request: {detail_value}"),
        SubmissionKind::Enquiry => format!("New Enquiry: {detail_value}"),
    };

    let text = format!(
        "You have a new {heading}:\n\n\
         Name: {name}\n\
         Email: {email}\n\
         {detail_label}: {detail_value}\n\
         Message: {message}\n",
        name = submission.sender_name,
        email = submission.sender_email,
        message = submission.message,
    );

    let html = format!(
        "<h3>New {heading}</h3>\n\
         <p><strong>Name:</strong> {name}</p>\n\
         <p><strong>Email:</strong> {email}</p>\n\
         <p><strong>{detail_label}:</strong> {detail}</p>\n\
         <p><strong>Message:</strong></p>\n\
         <p>{message}</p>\n",
        name = escape_html(&submission.sender_name),
        email = escape_html(&submission.sender_email),
        detail = escape_html(detail_value),
        message = escape_html(&submission.message),
    );

    RenderedMail {
        subject,
        text,
        html,
    }
}

fn support_subject(submission: &ContactSubmission) -> &str {
    if submission.subject == DEFAULT_SUBJECT {
        FALLBACK_SUPPORT_SUBJECT
    } else {
        submission.subject.as_str()
    }
}

fn escape_html(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
