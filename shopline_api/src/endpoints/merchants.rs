use crate::client::require;
use crate::query::MerchantStaffQuery;
use crate::types::{ListResponse, Merchant, MerchantStaff, MerchantsResponse};
use crate::{Client, Error};

impl Client {
    /// Fetches the merchant the access token belongs to.
    ///
    /// `/merchants` answers with `{"items": [...]}`; the first entry is the
    /// current merchant. An empty list is [`Error::NotFound`].
    pub async fn get_merchant(&self) -> Result<Merchant, Error> {
        let resp = self.get::<MerchantsResponse>("/merchants").await?;
        resp.items
            .into_iter()
            .next()
            .ok_or(Error::NotFound("merchant"))
    }

    /// Lists every merchant visible to the token.
    pub async fn list_merchants(&self) -> Result<Vec<Merchant>, Error> {
        let resp = self.get::<MerchantsResponse>("/merchants").await?;
        Ok(resp.items)
    }

    pub async fn list_merchant_staff(
        &self,
        query: &MerchantStaffQuery,
    ) -> Result<ListResponse<MerchantStaff>, Error> {
        self.get_with_query("/merchant/staff", query).await
    }

    pub async fn get_merchant_staff(&self, id: &str) -> Result<MerchantStaff, Error> {
        require(id, "staff id")?;
        self.get(&format!("/merchant/staff/{}", id)).await
    }
}
