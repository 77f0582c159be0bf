use crate::client::require;
use crate::query::{CustomerQuery, CustomerSearchQuery};
use crate::types::{Customer, CustomerCreateRequest, CustomerUpdateRequest, ListResponse};
use crate::{Client, Error};

impl Client {
    pub async fn list_customers(
        &self,
        query: &CustomerQuery,
    ) -> Result<ListResponse<Customer>, Error> {
        self.get_with_query("/customers", query).await
    }

    pub async fn search_customers(
        &self,
        query: &CustomerSearchQuery,
    ) -> Result<ListResponse<Customer>, Error> {
        self.get_with_query("/customers/search", query).await
    }

    pub async fn get_customer(&self, id: &str) -> Result<Customer, Error> {
        require(id, "customer id")?;
        self.get(&format!("/customers/{}", id)).await
    }

    pub async fn create_customer(&self, req: &CustomerCreateRequest) -> Result<Customer, Error> {
        self.post("/customers", req).await
    }

    pub async fn update_customer(
        &self,
        id: &str,
        req: &CustomerUpdateRequest,
    ) -> Result<Customer, Error> {
        require(id, "customer id")?;
        self.put(&format!("/customers/{}", id), req).await
    }

    pub async fn delete_customer(&self, id: &str) -> Result<(), Error> {
        require(id, "customer id")?;
        self.delete(&format!("/customers/{}", id)).await
    }
}
