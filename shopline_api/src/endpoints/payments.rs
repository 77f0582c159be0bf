use crate::client::require;
use crate::query::PaymentQuery;
use crate::types::{ListResponse, Payment, PaymentActionRequest};
use crate::{Client, Error};

impl Client {
    pub async fn list_payments(&self, query: &PaymentQuery) -> Result<ListResponse<Payment>, Error> {
        self.get_with_query("/payments", query).await
    }

    pub async fn get_payment(&self, id: &str) -> Result<Payment, Error> {
        require(id, "payment id")?;
        self.get(&format!("/payments/{}", id)).await
    }

    /// Payments recorded against one order.
    pub async fn list_order_payments(&self, order_id: &str) -> Result<ListResponse<Payment>, Error> {
        require(order_id, "order id")?;
        self.get(&format!("/orders/{}/payments", order_id)).await
    }

    /// Captures an authorized payment. A blank `amount` captures the full
    /// authorization.
    pub async fn capture_payment(&self, id: &str, amount: &str) -> Result<Payment, Error> {
        require(id, "payment id")?;
        let body = PaymentActionRequest::default().with_amount(amount);
        self.post(&format!("/payments/{}/capture", id), &body).await
    }

    pub async fn void_payment(&self, id: &str) -> Result<Payment, Error> {
        require(id, "payment id")?;
        self.post(&format!("/payments/{}/void", id), &PaymentActionRequest::default())
            .await
    }

    /// Refunds a payment, fully when `amount` is blank.
    pub async fn refund_payment(
        &self,
        id: &str,
        amount: &str,
        reason: &str,
    ) -> Result<Payment, Error> {
        require(id, "payment id")?;
        let body = PaymentActionRequest::default()
            .with_amount(amount)
            .with_reason(reason);
        self.post(&format!("/payments/{}/refund", id), &body).await
    }
}
