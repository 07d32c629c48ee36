use rand::distributions::Alphanumeric;
use rand::{thread_rng, Rng};

/// Placeholder for a real payment processor's confirmation reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionId(String);

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TransactionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

/// Stand-in for the payment provider integration: waits for a fixed simulated processing delay,
/// then hands back a `MOCK_`-prefixed reference. No charge is authorized anywhere.
pub struct MockPaymentClient {
    simulated_delay: std::time::Duration,
}

impl MockPaymentClient {
    pub fn new(simulated_delay: std::time::Duration) -> Self {
        Self { simulated_delay }
    }

    #[tracing::instrument(name = "Processing a mock payment", skip(self))]
    pub async fn process_payment(&self, amount: f64) -> TransactionId {
        tokio::time::sleep(self.simulated_delay).await;
        let reference: String = {
            let mut rng = thread_rng();
            std::iter::repeat_with(|| rng.sample(Alphanumeric))
                .map(char::from)
                .map(|c| c.to_ascii_uppercase())
                .take(6)
                .collect()
        };
        TransactionId(format!("MOCK_{reference}"))
    }
}

/// Build a fixed transaction id for formatter tests; production ids only ever come out of
/// `MockPaymentClient::process_payment`.
#[cfg(test)]
pub(crate) fn test_transaction_id(raw: &str) -> TransactionId {
    TransactionId(raw.to_string())
}
