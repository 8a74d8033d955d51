use serde::{Deserialize, Serialize};

/// One fee record from `GET student/payments` and the admin's per-student
/// payment listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    #[serde(default, rename = "_id")]
    pub id: Option<String>,
    #[serde(default)]
    pub session: Option<String>,
    #[serde(default)]
    pub level: Option<String>,
    #[serde(default)]
    pub amount_expected: Option<f64>,
    #[serde(default)]
    pub amount_paid: Option<f64>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default, rename = "receiptURL")]
    pub receipt_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl Payment {
    pub fn expected(&self) -> f64 {
        self.amount_expected.unwrap_or(0.0)
    }

    pub fn paid(&self) -> f64 {
        self.amount_paid.unwrap_or(0.0)
    }

    /// Outstanding balance, a transient display value computed per render.
    pub fn balance(&self) -> f64 {
        self.expected() - self.paid()
    }

    /// Awaiting an admin verdict (manual transfer receipt under review).
    pub fn is_pending(&self) -> bool {
        self.status.as_deref() == Some("pending")
    }
}

/// `GET admin/payments/config` — the school fee every student owes per
/// session. Editable via `PATCH` on the same path.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeConfig {
    #[serde(default)]
    pub amount: Option<f64>,
}

/// `{ "payments": [...] }` envelope used by the admin per-student listing.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentList {
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// `POST student/payments/initiate-paystack` response. The client redirects
/// to `authorization_url` and Paystack bounces back to the payment-success
/// landing page with the `reference` in the query string.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentInit {
    #[serde(default)]
    pub amount: Option<f64>,
    #[serde(default)]
    pub reference: Option<String>,
    #[serde(default)]
    pub authorization_url: Option<String>,
}

/// `GET student/payments/verify-paystack/:reference` response.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentVerification {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_is_expected_minus_paid() {
        let json = r#"{
            "session": "2025/2026",
            "level": "300",
            "amountExpected": 150000,
            "amountPaid": 90000,
            "status": "part-payment"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.balance(), 60000.0);
    }

    #[test]
    fn missing_amounts_read_as_zero() {
        let payment: Payment = serde_json::from_str("{}").unwrap();
        assert_eq!(payment.expected(), 0.0);
        assert_eq!(payment.balance(), 0.0);
    }

    #[test]
    fn admin_payment_row_decodes_id_and_pending_status() {
        let json = r#"{
            "_id": "p1",
            "session": "2025/2026",
            "amountPaid": 75000,
            "status": "pending",
            "createdAt": "2026-02-03T09:00:00.000Z",
            "receiptURL": "https://cdn.example/r1.pdf"
        }"#;
        let payment: Payment = serde_json::from_str(json).unwrap();
        assert_eq!(payment.id.as_deref(), Some("p1"));
        assert!(payment.is_pending());
        assert!(payment.receipt_url.is_some());
    }

    #[test]
    fn fee_config_and_payment_envelope_default_to_empty() {
        let fee: FeeConfig = serde_json::from_str(r#"{ "amount": 150000 }"#).unwrap();
        assert_eq!(fee.amount, Some(150000.0));

        let list: PaymentList = serde_json::from_str("{}").unwrap();
        assert!(list.payments.is_empty());
    }

    #[test]
    fn init_response_decodes_authorization_url() {
        let json = r#"{
            "amount": 150000,
            "reference": "PSK-123",
            "authorizationUrl": "https://checkout.paystack.com/abc"
        }"#;
        let init: PaymentInit = serde_json::from_str(json).unwrap();
        assert_eq!(init.reference.as_deref(), Some("PSK-123"));
        assert!(init.authorization_url.is_some());
    }
}
