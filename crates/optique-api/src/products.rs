//! `/products` endpoints.

use optique_shared::models::{NewProduct, Product, ProductPatch, StockCheck};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /products/?skip&limit`: paginated product list.
    pub async fn list_products(&self, skip: u32, limit: u32) -> Result<Vec<Product>> {
        self.get_json(
            "/products/",
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// `GET /products/{id}`: fetch a single product.
    pub async fn get_product(&self, id: i64) -> Result<Product> {
        self.get_json(&format!("/products/{id}"), &[]).await
    }

    /// `POST /products/`: create a product.
    pub async fn create_product(&self, product: &NewProduct) -> Result<Product> {
        self.post_json("/products/", product).await
    }

    /// `PUT /products/{id}`: partial update; unset fields stay untouched.
    pub async fn update_product(&self, id: i64, patch: &ProductPatch) -> Result<Product> {
        self.put_json(&format!("/products/{id}"), patch).await
    }

    /// `DELETE /products/{id}`.
    pub async fn delete_product(&self, id: i64) -> Result<()> {
        self.delete(&format!("/products/{id}")).await
    }

    /// `GET /products/search/?q`: server-side name search.
    ///
    /// The list pages filter client-side instead; this stays available for
    /// callers that want the backend's search (minimum two characters).
    pub async fn search_products(&self, q: &str) -> Result<Vec<Product>> {
        self.get_json("/products/search/", &[("q", q.to_string())])
            .await
    }

    /// `GET /products/{id}/stock-check?quantity`: ask the backend whether
    /// `quantity` units can be sold.
    pub async fn check_stock(&self, id: i64, quantity: i64) -> Result<StockCheck> {
        self.get_json(
            &format!("/products/{id}/stock-check"),
            &[("quantity", quantity.to_string())],
        )
        .await
    }
}
