//! Dashboard: the four stat cards, the latest sales and the low stock alert.

use std::sync::Arc;

use optique_api::{ApiClient, Result as ApiResult};
use optique_shared::models::{Product, Sale, User};

/// Products at or below this stock count show up in the alert panel.
pub const LOW_STOCK_THRESHOLD: i64 = 20;

/// How many of the latest sales the dashboard lists.
pub const RECENT_SALES: usize = 5;

/// Everything the dashboard renders, derived in one pass from the joined
/// backend responses.
#[derive(Debug, Default)]
pub struct DashboardSnapshot {
    pub total_products: usize,
    pub total_sales: usize,
    pub total_users: usize,
    pub total_revenue: f64,
    pub recent_sales: Vec<Sale>,
    pub low_stock: Vec<Product>,
}

impl DashboardSnapshot {
    /// Pure aggregation: counts, the five most recent sales (newest first)
    /// and the products under the low stock threshold.
    pub fn from_parts(
        products: Vec<Product>,
        mut sales: Vec<Sale>,
        users: &[User],
        total_revenue: f64,
    ) -> Self {
        let total_products = products.len();
        let total_sales = sales.len();

        sales.sort_by(|a, b| b.date.cmp(&a.date));
        sales.truncate(RECENT_SALES);

        let low_stock: Vec<Product> = products
            .into_iter()
            .filter(|p| p.stock < LOW_STOCK_THRESHOLD)
            .collect();

        Self {
            total_products,
            total_sales,
            total_users: users.len(),
            total_revenue,
            recent_sales: sales,
            low_stock,
        }
    }
}

/// Fetch the four datasets concurrently and fold them into a snapshot.
/// Any single failure fails the whole dashboard load.
pub async fn fetch_dashboard(api: &Arc<ApiClient>) -> ApiResult<DashboardSnapshot> {
    let (products, sales, users, revenue) = tokio::try_join!(
        api.list_products(0, 100),
        api.list_sales(0, 100),
        api.get_users(),
        api.total_amount(None),
    )?;
    Ok(DashboardSnapshot::from_parts(
        products,
        sales,
        &users,
        revenue.total_amount,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn sale(id: i64, day: u32) -> Sale {
        Sale {
            id,
            product_id: 1,
            user_id: 1,
            quantity: 1,
            date: Utc.with_ymd_and_hms(2025, 3, day, 12, 0, 0).unwrap(),
            product_nom: None,
            user_nom: None,
            prix_unitaire: None,
            prix_total: None,
        }
    }

    fn product(id: i64, stock: i64) -> Product {
        Product {
            id,
            nom: format!("Produit {id}"),
            prix: 100.0,
            stock,
            image_url: None,
        }
    }

    #[test]
    fn recent_sales_are_newest_first_and_capped() {
        let sales: Vec<Sale> = (1..=7).map(|d| sale(d as i64, d)).collect();
        let snapshot = DashboardSnapshot::from_parts(Vec::new(), sales, &[], 0.0);

        assert_eq!(snapshot.total_sales, 7);
        assert_eq!(snapshot.recent_sales.len(), RECENT_SALES);
        let ids: Vec<i64> = snapshot.recent_sales.iter().map(|s| s.id).collect();
        assert_eq!(ids, vec![7, 6, 5, 4, 3]);
    }

    #[test]
    fn low_stock_uses_threshold() {
        let products = vec![product(1, 0), product(2, 19), product(3, 20), product(4, 50)];
        let snapshot = DashboardSnapshot::from_parts(products, Vec::new(), &[], 0.0);

        assert_eq!(snapshot.total_products, 4);
        let ids: Vec<i64> = snapshot.low_stock.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn totals_carry_through() {
        let users = vec![User {
            id: 1,
            nom: "Yasmine".to_string(),
            email: "y@optique.ma".to_string(),
        }];
        let snapshot = DashboardSnapshot::from_parts(Vec::new(), Vec::new(), &users, 950.25);
        assert_eq!(snapshot.total_users, 1);
        assert_eq!(snapshot.total_revenue, 950.25);
    }
}
