//! Static About and Contact pages shown in terminal dialogs.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContactChannel {
    pub name: String,
    pub handle: String,
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InfoSection {
    Heading { text: String },
    Paragraph { text: String },
    Bullets { items: Vec<String> },
    Channel(ContactChannel),
    /// Boxed aside introduced by a `$ command` line.
    Callout { title: Option<String>, command: String, text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InfoPage {
    pub title: String,
    pub sections: Vec<InfoSection>,
}

impl InfoPage {
    /// File name used in the `cat <name>.txt` prompt.
    pub fn file_name(&self) -> String {
        format!("{}.txt", self.title.to_lowercase())
    }
}

fn heading(text: &str) -> InfoSection {
    InfoSection::Heading { text: text.into() }
}

fn paragraph(text: &str) -> InfoSection {
    InfoSection::Paragraph { text: text.into() }
}

fn channel(name: &str, handle: &str, note: &str) -> InfoSection {
    InfoSection::Channel(ContactChannel {
        name: name.into(),
        handle: handle.into(),
        note: note.into(),
    })
}

pub fn about_page() -> InfoPage {
    InfoPage {
        title: "About".into(),
        sections: vec![
            heading("About Stdout Journal"),
            paragraph("Welcome to Stdout Journal, a minimalist, terminal-inspired blog dedicated to software, programming, and technology insights."),
            heading("Our Mission"),
            paragraph("Our mission is to provide clear, concise, and practical content for developers of all skill levels. We believe in the beauty of simplicity and the power of knowledge sharing."),
            heading("The Terminal Aesthetic"),
            paragraph("We've chosen a terminal-inspired design to pay homage to the roots of programming. The command line is where many developers begin their journey, and we wanted to capture that nostalgic yet powerful experience."),
            InfoSection::Callout {
                title: None,
                command: "whoami".into(),
                text: "Stdout Journal was founded in 2023 by a group of passionate developers who wanted to create a unique space for sharing programming knowledge and experiences.".into(),
            },
            heading("Topics We Cover"),
            InfoSection::Bullets {
                items: [
                    "Systems & Backend Development",
                    "Command-line Tools",
                    "Languages & Compilers",
                    "Terminal UI Design",
                    "Developer Tools & Productivity",
                    "Best Practices & Coding Standards",
                ]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            },
            paragraph("Thank you for being part of our community. We're constantly working to improve and expand our content to better serve developers worldwide."),
        ],
    }
}

pub fn contact_page() -> InfoPage {
    InfoPage {
        title: "Contact".into(),
        sections: vec![
            heading("Contact Us"),
            paragraph("We'd love to hear from you! Whether you have questions, feedback, or just want to say hello, there are several ways to get in touch with the Stdout Journal team."),
            channel("Email", "hello@stdoutjournal.dev", "For general inquiries, article submissions, and feedback."),
            channel("GitHub", "github.com/stdoutjournal", "Check out our open-source projects and contribute to our code."),
            channel("Twitter", "@StdoutJournal", "Follow us for the latest updates, tips, and tech news."),
            channel("LinkedIn", "linkedin.com/company/stdoutjournal", "Connect with our team and join our professional network."),
            InfoSection::Callout {
                title: Some("Quick Response".into()),
                command: "response_time".into(),
                text: "We aim to respond to all inquiries within 24-48 hours during business days.".into(),
            },
            paragraph("We value your input and look forward to connecting with you. Don't hesitate to reach out through any of the channels above."),
        ],
    }
}
