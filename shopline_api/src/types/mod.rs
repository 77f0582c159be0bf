mod list;
pub use self::list::{ListResponse, Pagination};

mod address;
pub use self::address::Address;

mod customer;
pub use self::customer::{
    Customer, CustomerCreateRequest, CustomerSubscription, CustomerUpdateRequest,
};

mod merchant;
pub use self::merchant::{Merchant, MerchantAddress, MerchantStaff, MerchantsResponse};

mod order;
pub use self::order::{
    Order, OrderCreateRequest, OrderItem, OrderLineItem, OrderSubtotalItem, OrderSummary,
    OrderTags, OrderUpdateRequest, Price,
};

mod payment;
pub use self::payment::{CreditCard, Payment, PaymentActionRequest};

mod shipment;
pub use self::shipment::{Shipment, ShipmentCreateRequest, ShipmentUpdateRequest};

mod webhook;
pub use self::webhook::{Webhook, WebhookCreateRequest, WebhookFormat, WebhookUpdateRequest};
