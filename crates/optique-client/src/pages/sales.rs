//! Sales page: the sale history plus the data the sale form needs
//! (products to sell, sellers) and the revenue stats cards.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use optique_api::{ApiClient, ApiError, Result as ApiResult};
use optique_shared::helpers::{format_date, format_price};
use optique_shared::models::{NewSale, Product, Sale, SalePatch, User};

use crate::controller::{ListController, ListEntry, ListMessages, ResourceClient};
use crate::ui::Column;

const MESSAGES: ListMessages = ListMessages {
    load_error: "Erreur lors du chargement des données",
    save_error: "Erreur lors de la sauvegarde de la vente",
    delete_error: "Erreur lors de la suppression de la vente",
    created: "Vente créée avec succès !",
    updated: "Vente modifiée avec succès !",
    deleted: "Vente supprimée avec succès !",
};

/// Stat cards above the sale table.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SalesStats {
    pub total_sales: usize,
    pub today_sales: usize,
    pub total_revenue: f64,
}

impl SalesStats {
    /// Derive the cards from the loaded sales and the backend revenue total.
    pub fn compute(sales: &[Sale], total_revenue: f64, today: NaiveDate) -> Self {
        let today_sales = sales
            .iter()
            .filter(|sale| sale.date.date_naive() == today)
            .count();
        Self {
            total_sales: sales.len(),
            today_sales,
            total_revenue,
        }
    }
}

/// Sale form fields, bound as strings and coerced to integers on submit.
#[derive(Debug, Clone, Default)]
pub struct SaleDraft {
    pub product_id: String,
    pub user_id: String,
    pub quantity: String,
}

impl SaleDraft {
    pub fn from_sale(sale: &Sale) -> Self {
        Self {
            product_id: sale.product_id.to_string(),
            user_id: sale.user_id.to_string(),
            quantity: sale.quantity.to_string(),
        }
    }

    fn to_new_sale(&self) -> ApiResult<NewSale> {
        let (product_id, user_id, quantity) = self.parse_ids()?;
        Ok(NewSale {
            product_id,
            user_id,
            quantity,
        })
    }

    fn to_patch(&self) -> ApiResult<SalePatch> {
        let (product_id, user_id, quantity) = self.parse_ids()?;
        Ok(SalePatch {
            product_id: Some(product_id),
            user_id: Some(user_id),
            quantity: Some(quantity),
        })
    }

    fn parse_ids(&self) -> ApiResult<(i64, i64, i64)> {
        let parse = |field: &str, label: &str| -> ApiResult<i64> {
            field
                .trim()
                .parse()
                .map_err(|_| ApiError::Invalid(format!("{label} invalide")))
        };
        Ok((
            parse(&self.product_id, "Produit")?,
            parse(&self.user_id, "Vendeur")?,
            parse(&self.quantity, "Quantité")?,
        ))
    }
}

/// Recap shown under the form before submit: unit price of the selected
/// product times the entered quantity. `None` until both are valid.
pub fn recap_total(products: &[Product], draft: &SaleDraft) -> Option<f64> {
    let product_id: i64 = draft.product_id.trim().parse().ok()?;
    let quantity: i64 = draft.quantity.trim().parse().ok()?;
    let product = products.iter().find(|p| p.id == product_id)?;
    Some(product.prix * quantity as f64)
}

impl ListEntry for Sale {
    fn id(&self) -> i64 {
        self.id
    }
    fn search_text(&self) -> Vec<&str> {
        [self.product_nom.as_deref(), self.user_nom.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

/// API calls backing the sale list (reloads after a mutation).
pub struct SalesClient {
    api: Arc<ApiClient>,
}

impl ResourceClient for SalesClient {
    type Item = Sale;
    type Draft = SaleDraft;

    async fn load(&self) -> ApiResult<Vec<Sale>> {
        self.api.list_sales(0, 100).await
    }

    async fn create(&self, draft: &SaleDraft) -> ApiResult<Sale> {
        self.api.create_sale(&draft.to_new_sale()?).await
    }

    async fn update(&self, id: i64, draft: &SaleDraft) -> ApiResult<Sale> {
        self.api.update_sale(id, &draft.to_patch()?).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete_sale(id).await
    }
}

/// The sales screen: list controller plus the joined context collections.
pub struct SalesPage {
    api: Arc<ApiClient>,
    pub list: ListController<SalesClient>,
    pub products: Vec<Product>,
    pub users: Vec<User>,
    pub stats: SalesStats,
}

impl SalesPage {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self {
            list: ListController::new(SalesClient { api: api.clone() }, MESSAGES),
            api,
            products: Vec::new(),
            users: Vec::new(),
            stats: SalesStats::default(),
        }
    }

    /// Initial load: sales, products, users and the revenue total are
    /// fetched concurrently and joined. If any one fails, the whole load
    /// fails and the page shows the load error (no partial rendering).
    pub async fn load(&mut self) {
        self.list.clear_banners();
        match tokio::try_join!(
            self.api.list_sales(0, 100),
            self.api.list_products(0, 100),
            self.api.get_users(),
            self.api.total_amount(None),
        ) {
            Ok((sales, products, users, revenue)) => {
                self.stats =
                    SalesStats::compute(&sales, revenue.total_amount, Utc::now().date_naive());
                self.list.replace_items(sales);
                self.products = products;
                self.users = users;
            }
            Err(e) => {
                tracing::warn!(error = %e, "sales page load failed");
                self.list.set_load_error();
            }
        }
    }

    /// Submit the open form; a successful mutation also refreshes the
    /// context collections and the stat cards.
    pub async fn submit(&mut self) {
        self.list.submit().await;
        if self.list.success().is_some() {
            self.refresh_context().await;
        }
    }

    /// Delete a sale (stock is restored server-side). `confirmed` carries
    /// the outcome of the blocking prompt.
    pub async fn delete(&mut self, id: i64, confirmed: bool) {
        self.list.delete(id, confirmed).await;
        if self.list.success().is_some() {
            self.refresh_context().await;
        }
    }

    async fn refresh_context(&mut self) {
        match tokio::try_join!(
            self.api.list_products(0, 100),
            self.api.get_users(),
            self.api.total_amount(None),
        ) {
            Ok((products, users, revenue)) => {
                self.products = products;
                self.users = users;
                self.stats = SalesStats::compute(
                    self.list.items(),
                    revenue.total_amount,
                    Utc::now().date_naive(),
                );
            }
            Err(e) => {
                tracing::warn!(error = %e, "sales context refresh failed");
                self.list.set_load_error();
            }
        }
    }
}

/// Text of the blocking delete confirmation. The backend restores the
/// product's stock when a sale is deleted.
pub fn delete_prompt() -> &'static str {
    "Êtes-vous sûr de vouloir supprimer cette vente ? Le stock sera restauré."
}

/// Table columns for the sale history.
pub fn sale_columns() -> Vec<Column<Sale>> {
    let text = |value: &Option<String>| value.clone().unwrap_or_else(|| "—".to_string());
    let price = |value: Option<f64>| value.map(format_price).unwrap_or_else(|| "—".to_string());
    vec![
        Column::new("ID", |s: &Sale| format!("#{}", s.id)),
        Column::new("Produit", move |s: &Sale| text(&s.product_nom)),
        Column::new("Vendeur", move |s: &Sale| text(&s.user_nom)),
        Column::new("Quantité", |s: &Sale| s.quantity.to_string()),
        Column::new("Prix unitaire", move |s: &Sale| price(s.prix_unitaire)),
        Column::new("Total", move |s: &Sale| price(s.prix_total)),
        Column::new("Date", |s: &Sale| format_date(s.date)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sale(id: i64, date: chrono::DateTime<Utc>) -> Sale {
        Sale {
            id,
            product_id: 1,
            user_id: 1,
            quantity: 1,
            date,
            product_nom: Some("Lunettes Aviator".to_string()),
            user_nom: Some("Yasmine".to_string()),
            prix_unitaire: Some(100.0),
            prix_total: Some(100.0),
        }
    }

    #[test]
    fn recap_total_multiplies_price_by_quantity() {
        let products = vec![Product {
            id: 3,
            nom: "Lunettes Aviator".to_string(),
            prix: 100.0,
            stock: 10,
            image_url: None,
        }];
        let draft = SaleDraft {
            product_id: "3".to_string(),
            user_id: "1".to_string(),
            quantity: "2".to_string(),
        };
        assert_eq!(recap_total(&products, &draft), Some(200.0));
    }

    #[test]
    fn recap_total_requires_valid_selection() {
        let products = Vec::new();
        let draft = SaleDraft {
            product_id: "3".to_string(),
            user_id: "1".to_string(),
            quantity: "2".to_string(),
        };
        assert_eq!(recap_total(&products, &draft), None);

        let draft = SaleDraft {
            product_id: String::new(),
            ..Default::default()
        };
        assert_eq!(recap_total(&products, &draft), None);
    }

    #[test]
    fn draft_coerces_all_ids_to_integers() {
        let draft = SaleDraft {
            product_id: "3".to_string(),
            user_id: "7".to_string(),
            quantity: "2".to_string(),
        };
        let payload = draft.to_new_sale().unwrap();
        assert_eq!(
            (payload.product_id, payload.user_id, payload.quantity),
            (3, 7, 2)
        );

        let bad = SaleDraft {
            product_id: "3".to_string(),
            user_id: "7".to_string(),
            quantity: "deux".to_string(),
        };
        assert!(matches!(
            bad.to_new_sale().unwrap_err(),
            ApiError::Invalid(_)
        ));
    }

    #[test]
    fn stats_count_todays_sales() {
        let today = NaiveDate::from_ymd_opt(2025, 3, 12).unwrap();
        let sales = vec![
            sale(1, Utc.with_ymd_and_hms(2025, 3, 12, 9, 0, 0).unwrap()),
            sale(2, Utc.with_ymd_and_hms(2025, 3, 12, 18, 30, 0).unwrap()),
            sale(3, Utc.with_ymd_and_hms(2025, 3, 11, 23, 59, 0).unwrap()),
        ];
        let stats = SalesStats::compute(&sales, 1234.5, today);
        assert_eq!(stats.total_sales, 3);
        assert_eq!(stats.today_sales, 2);
        assert_eq!(stats.total_revenue, 1234.5);
    }

    #[test]
    fn sale_search_matches_product_or_seller() {
        let s = sale(1, Utc::now());
        let fields = s.search_text();
        assert!(fields.contains(&"Lunettes Aviator"));
        assert!(fields.contains(&"Yasmine"));
    }
}
