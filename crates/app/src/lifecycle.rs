//! The contact lifecycle demonstration: create, list, fetch, rename, update,
//! list, delete, list.

use std::io::Write;

use tracing::info;

use domain::models::ContactBuilder;
use persistence::repositories::ContactRepository;

use crate::error::AppError;

pub const DEMO_FIRST_NAME: &str = "Chris";
pub const DEMO_LAST_NAME: &str = "Ramacciotti";
pub const DEMO_EMAIL: &str = "rama@example.com";
pub const DEMO_PHONE: i64 = 1234567890;
pub const RENAMED_FIRST_NAME: &str = "Ian";

/// Runs the full lifecycle against `repo`, writing the transcript to `out`.
///
/// Returns the identifier the demo contact was stored under.
pub async fn run<W: Write>(repo: &ContactRepository, out: &mut W) -> Result<i64, AppError> {
    let contact = ContactBuilder::new(DEMO_FIRST_NAME, DEMO_LAST_NAME)?
        .with_email(DEMO_EMAIL)
        .with_phone(DEMO_PHONE)
        .build();
    let id = repo.create(&contact).await?;
    info!(contact_id = id, "Saved demo contact");

    heading(out, "Before Update")?;
    print_contacts(repo, out).await?;

    let mut fetched = repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::ContactMissing(id))?;
    fetched.set_first_name(RENAMED_FIRST_NAME);

    heading(out, "Updating...")?;
    repo.update(&fetched).await?;
    heading(out, "Update Complete")?;

    heading(out, "After Update")?;
    print_contacts(repo, out).await?;

    heading(out, "Deleting...")?;
    repo.delete(&fetched).await?;
    info!(contact_id = id, "Deleted demo contact");

    heading(out, "After Delete")?;
    print_contacts(repo, out).await?;

    out.flush()?;
    Ok(id)
}

fn heading<W: Write>(out: &mut W, title: &str) -> std::io::Result<()> {
    write!(out, "\n\n{}\n\n", title)
}

async fn print_contacts<W: Write>(
    repo: &ContactRepository,
    out: &mut W,
) -> Result<(), AppError> {
    for contact in repo.list_all().await? {
        writeln!(out, "{}", contact)?;
    }
    Ok(())
}
