use std::time::Duration;

use uuid::Uuid;

use mockview_core::Clock;
use mockview_core::forms::{ContactDraft, ContactForm};

use crate::error::ContactError;

/// Acknowledgement returned after a contact form is accepted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactReceipt {
    pub reference: String,
    pub form: ContactForm,
}

/// Validates and "submits" the contact form. Nothing leaves the process.
#[derive(Clone, Debug)]
pub struct ContactService {
    clock: Clock,
    latency: Duration,
}

impl ContactService {
    #[must_use]
    pub fn new(clock: Clock, latency: Duration) -> Self {
        Self { clock, latency }
    }

    /// # Errors
    ///
    /// Returns `ContactError::Invalid` listing every field problem.
    pub async fn submit(&self, draft: ContactDraft) -> Result<ContactReceipt, ContactError> {
        let form = draft.validate()?;
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        let short = Uuid::new_v4().simple().to_string();
        let reference = format!(
            "MV-{}-{}",
            self.clock.now().format("%Y%m%d"),
            &short[..6].to_uppercase()
        );
        tracing::info!(%reference, "contact form submitted");
        Ok(ContactReceipt { reference, form })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockview_core::forms::Field;
    use mockview_core::time::fixed_clock;

    #[tokio::test]
    async fn receipt_reference_carries_the_date() {
        let service = ContactService::new(fixed_clock(), Duration::ZERO);
        let receipt = service
            .submit(ContactDraft {
                name: "Ada".into(),
                email: "ada@example.com".into(),
                subject: None,
                message: "Do you offer team plans?".into(),
            })
            .await
            .unwrap();
        assert!(receipt.reference.starts_with("MV-20231114-"), "{}", receipt.reference);
        assert_eq!(receipt.reference.len(), "MV-20231114-".len() + 6);
    }

    #[tokio::test]
    async fn invalid_form_is_rejected() {
        let service = ContactService::new(fixed_clock(), Duration::ZERO);
        let ContactError::Invalid(errors) = service
            .submit(ContactDraft::default())
            .await
            .unwrap_err();
        assert!(errors.get(Field::Message).is_some());
    }
}
