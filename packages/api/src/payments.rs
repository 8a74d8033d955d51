//! Payment endpoints: fee history, Paystack initiation and verification,
//! the manual bank-transfer receipt upload, and the admin's billing surface.

use serde::Serialize;

use crate::client::ApiClient;
use crate::error::ApiError;
use crate::models::{FeeConfig, Payment, PaymentInit, PaymentList, PaymentVerification, ServerMessage};

#[derive(Serialize)]
struct FeeBody {
    amount: f64,
}

#[derive(Serialize)]
struct VerdictBody<'a> {
    status: &'a str,
}

impl ApiClient {
    /// `GET student/payments` — fee records, newest session first.
    pub async fn payments(&self) -> Result<Vec<Payment>, ApiError> {
        self.get_json("student/payments").await
    }

    /// `POST student/payments/initiate-paystack`. The backend creates the
    /// Paystack transaction for the outstanding balance; the client redirects
    /// to the returned authorization URL.
    pub async fn initiate_paystack(&self) -> Result<PaymentInit, ApiError> {
        self.post_empty("student/payments/initiate-paystack").await
    }

    /// `GET student/payments/verify-paystack/:reference`. Verification is
    /// authoritative server-side; the client only displays the outcome.
    pub async fn verify_paystack(&self, reference: &str) -> Result<PaymentVerification, ApiError> {
        self.get_json(&format!("student/payments/verify-paystack/{reference}"))
            .await
    }

    /// `POST student/payments/upload-transfer-receipt` — multipart, field
    /// `receipt`, images or PDF only (the view enforces the type check
    /// before calling).
    pub async fn upload_transfer_receipt(
        &self,
        filename: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<ServerMessage, ApiError> {
        self.post_file(
            "student/payments/upload-transfer-receipt",
            "receipt",
            filename,
            content_type,
            bytes,
        )
        .await
    }

    /// `GET admin/payments/config` — the configured school fee.
    pub async fn school_fee(&self) -> Result<FeeConfig, ApiError> {
        self.get_json("admin/payments/config").await
    }

    /// `PATCH admin/payments/config`.
    pub async fn update_school_fee(&self, amount: f64) -> Result<(), ApiError> {
        self.patch_unit("admin/payments/config", &FeeBody { amount })
            .await
    }

    /// `GET admin/payments/student/:id` — one student's payment history.
    pub async fn student_payments(&self, student_id: &str) -> Result<Vec<Payment>, ApiError> {
        let list: PaymentList = self
            .get_json(&format!("admin/payments/student/{student_id}"))
            .await?;
        Ok(list.payments)
    }

    /// `PATCH admin/payments/:id/verify` — settle a pending payment as
    /// `"paid"` or `"rejected"`.
    pub async fn settle_payment(&self, payment_id: &str, status: &str) -> Result<(), ApiError> {
        self.patch_unit(
            &format!("admin/payments/{payment_id}/verify"),
            &VerdictBody { status },
        )
        .await
    }
}
