use super::builder::QueryBuilder;
use super::common::{Query, QueryCommon};

/// Options for `GET /merchant/staff`.
#[derive(Clone, Debug, Default)]
pub struct MerchantStaffQuery {
    pub common: QueryCommon,
    pub role: Option<String>,
    pub active: Option<bool>,
}

impl Query for MerchantStaffQuery {
    fn get_common(&mut self) -> &mut QueryCommon {
        &mut self.common
    }
    fn to_builder(&self) -> QueryBuilder {
        self.common
            .add_to_builder(QueryBuilder::new())
            .string("role", self.role.as_deref().unwrap_or_default())
            .bool_opt("active", self.active)
    }
}

impl MerchantStaffQuery {
    pub fn with_role(mut self, role: &str) -> Self {
        self.role = Some(role.to_string());
        self
    }
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = Some(active);
        self
    }
}
