use crate::output;
use journal_domain::{about_page, contact_page};

pub fn handle_about() -> anyhow::Result<()> {
    output::output_success(about_page())
}

pub fn handle_contact() -> anyhow::Result<()> {
    output::output_success(contact_page())
}
