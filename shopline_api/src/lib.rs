//! Typed client for the Shopline Open API.

mod client;
mod endpoints;
mod errors;
pub mod paginate;
mod query;
pub mod types;
pub use self::client::{Client, OPEN_API_BASE_URL};
pub use self::errors::Error;
pub use self::query::{
    CustomerQuery, CustomerSearchQuery, MerchantStaffQuery, OrderQuery, OrderSearchQuery,
    PaymentQuery, Query, QueryBuilder, QueryCommon, ShipmentQuery, SortOrder, WebhookQuery,
};
