//! Send a contact message as if from the site's form.

use std::io::Write;
use std::sync::Arc;

use meteen_site::services::{ContactService, ContactSubmission, SUCCESS_MESSAGE};
use meteen_site::supabase::DataSource;

use super::CliError;

pub async fn send(
    source: Arc<dyn DataSource>,
    submission: &ContactSubmission,
    out: &mut impl Write,
) -> Result<(), CliError> {
    ContactService::new(source).submit(submission).await?;
    writeln!(out, "{SUCCESS_MESSAGE}")?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use meteen_site::services::FAILURE_MESSAGE;
    use meteen_site::supabase::{MemoryDataSource, Table};

    use super::*;

    fn submission() -> ContactSubmission {
        ContactSubmission {
            name: "Budi".into(),
            email: "budi@example.com".into(),
            subject: Some("Reservasi".into()),
            message: "Meja untuk empat orang".into(),
        }
    }

    #[tokio::test]
    async fn test_send_stores_row_and_acknowledges() {
        let source = MemoryDataSource::new();
        let mut out = Vec::new();
        send(Arc::new(source.clone()), &submission(), &mut out)
            .await
            .unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), format!("{SUCCESS_MESSAGE}\n"));
        assert_eq!(source.rows(Table::ContactMessages).len(), 1);
    }

    #[tokio::test]
    async fn test_rejected_send_shows_generic_message() {
        let source = MemoryDataSource::new();
        source.set_fail_writes(true);
        let mut out = Vec::new();
        let err = send(Arc::new(source), &submission(), &mut out)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), FAILURE_MESSAGE);
    }
}
