//! `/sales` endpoints, including the revenue statistics route.

use chrono::{DateTime, Utc};
use optique_shared::models::{NewSale, Sale, SalePatch, TotalAmount};

use crate::client::ApiClient;
use crate::error::Result;

impl ApiClient {
    /// `GET /sales/?skip&limit`: paginated sale list.
    pub async fn list_sales(&self, skip: u32, limit: u32) -> Result<Vec<Sale>> {
        self.get_json(
            "/sales/",
            &[("skip", skip.to_string()), ("limit", limit.to_string())],
        )
        .await
    }

    /// `GET /sales/{id}`: fetch a single sale.
    pub async fn get_sale(&self, id: i64) -> Result<Sale> {
        self.get_json(&format!("/sales/{id}"), &[]).await
    }

    /// `POST /sales/`: record a sale. The backend verifies and decrements
    /// the product stock and fills in the denormalized prices.
    pub async fn create_sale(&self, sale: &NewSale) -> Result<Sale> {
        self.post_json("/sales/", sale).await
    }

    /// `PUT /sales/{id}`: partial update; quantity changes adjust stock
    /// server-side.
    pub async fn update_sale(&self, id: i64, patch: &SalePatch) -> Result<Sale> {
        self.put_json(&format!("/sales/{id}"), patch).await
    }

    /// `DELETE /sales/{id}`: cancel a sale. The backend restores the
    /// product's stock.
    pub async fn delete_sale(&self, id: i64) -> Result<()> {
        self.delete(&format!("/sales/{id}")).await
    }

    /// `GET /sales/user/{userId}`: sales recorded by one seller.
    pub async fn sales_by_user(&self, user_id: i64) -> Result<Vec<Sale>> {
        self.get_json(&format!("/sales/user/{user_id}"), &[]).await
    }

    /// `GET /sales/product/{productId}`: sales of one product.
    pub async fn sales_by_product(&self, product_id: i64) -> Result<Vec<Sale>> {
        self.get_json(&format!("/sales/product/{product_id}"), &[])
            .await
    }

    /// `GET /sales/date-range/?start_date&end_date`.
    pub async fn sales_by_date_range(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Sale>> {
        self.get_json(
            "/sales/date-range/",
            &[
                ("start_date", start.to_rfc3339()),
                ("end_date", end.to_rfc3339()),
            ],
        )
        .await
    }

    /// `GET /sales/stats/total-amount`: total revenue, optionally bounded
    /// to a date range.
    pub async fn total_amount(
        &self,
        range: Option<(DateTime<Utc>, DateTime<Utc>)>,
    ) -> Result<TotalAmount> {
        let query = match range {
            Some((start, end)) => vec![
                ("start_date", start.to_rfc3339()),
                ("end_date", end.to_rfc3339()),
            ],
            None => Vec::new(),
        };
        self.get_json("/sales/stats/total-amount", &query).await
    }
}
