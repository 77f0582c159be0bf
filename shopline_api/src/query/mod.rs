mod builder;
pub use self::builder::QueryBuilder;

mod common;
pub use self::common::{Query, QueryCommon, SortOrder};

mod customer;
pub use self::customer::{CustomerQuery, CustomerSearchQuery};

mod merchant;
pub use self::merchant::MerchantStaffQuery;

mod order;
pub use self::order::{OrderQuery, OrderSearchQuery};

mod payment;
pub use self::payment::PaymentQuery;

mod shipment;
pub use self::shipment::ShipmentQuery;

mod webhook;
pub use self::webhook::WebhookQuery;
