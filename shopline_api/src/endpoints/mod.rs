//! Resource methods on [`Client`](crate::Client), one module per API family.

mod customers;
mod merchants;
mod orders;
mod payments;
mod shipments;
mod webhooks;
