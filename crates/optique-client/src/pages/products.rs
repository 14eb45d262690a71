//! Products page: searchable catalog with create/edit/delete.

use std::sync::Arc;

use optique_api::{ApiClient, ApiError, Result as ApiResult};
use optique_shared::helpers::{format_price, stock_status};
use optique_shared::models::{NewProduct, Product, ProductPatch};

use crate::controller::{ListController, ListEntry, ListMessages, ResourceClient};
use crate::ui::Column;

const MESSAGES: ListMessages = ListMessages {
    load_error: "Erreur lors du chargement des produits",
    save_error: "Erreur lors de la sauvegarde du produit",
    delete_error: "Erreur lors de la suppression du produit",
    created: "Produit créé avec succès !",
    updated: "Produit modifié avec succès !",
    deleted: "Produit supprimé avec succès !",
};

/// Form fields as bound to the inputs: everything is a string until submit,
/// when the numeric fields are coerced.
#[derive(Debug, Clone, Default)]
pub struct ProductDraft {
    pub nom: String,
    pub prix: String,
    pub stock: String,
    pub image_url: String,
}

impl ProductDraft {
    /// Pre-fill the form from an existing product (edit mode).
    pub fn from_product(product: &Product) -> Self {
        Self {
            nom: product.nom.clone(),
            prix: product.prix.to_string(),
            stock: product.stock.to_string(),
            image_url: product.image_url.clone().unwrap_or_default(),
        }
    }

    /// Coerce the string fields into a creation payload. An empty image URL
    /// becomes `None` (the UI falls back to a default image).
    fn to_new_product(&self) -> ApiResult<NewProduct> {
        let (prix, stock) = self.parse_numbers()?;
        Ok(NewProduct {
            nom: self.require_nom()?,
            prix,
            stock,
            image_url: optional(&self.image_url),
        })
    }

    /// The edit form carries every field, so the patch is full.
    fn to_patch(&self) -> ApiResult<ProductPatch> {
        let (prix, stock) = self.parse_numbers()?;
        Ok(ProductPatch {
            nom: Some(self.require_nom()?),
            prix: Some(prix),
            stock: Some(stock),
            image_url: optional(&self.image_url),
        })
    }

    fn require_nom(&self) -> ApiResult<String> {
        let nom = self.nom.trim();
        if nom.is_empty() {
            return Err(ApiError::Invalid(
                "Le nom du produit est obligatoire".to_string(),
            ));
        }
        Ok(nom.to_string())
    }

    fn parse_numbers(&self) -> ApiResult<(f64, i64)> {
        let prix: f64 = self
            .prix
            .trim()
            .parse()
            .map_err(|_| ApiError::Invalid("Prix invalide".to_string()))?;
        let stock: i64 = self
            .stock
            .trim()
            .parse()
            .map_err(|_| ApiError::Invalid("Stock invalide".to_string()))?;
        Ok((prix, stock))
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

impl ListEntry for Product {
    fn id(&self) -> i64 {
        self.id
    }
    fn search_text(&self) -> Vec<&str> {
        vec![&self.nom]
    }
}

/// API calls backing the products list.
pub struct ProductsClient {
    api: Arc<ApiClient>,
}

impl ResourceClient for ProductsClient {
    type Item = Product;
    type Draft = ProductDraft;

    async fn load(&self) -> ApiResult<Vec<Product>> {
        self.api.list_products(0, 100).await
    }

    async fn create(&self, draft: &ProductDraft) -> ApiResult<Product> {
        self.api.create_product(&draft.to_new_product()?).await
    }

    async fn update(&self, id: i64, draft: &ProductDraft) -> ApiResult<Product> {
        self.api.update_product(id, &draft.to_patch()?).await
    }

    async fn delete(&self, id: i64) -> ApiResult<()> {
        self.api.delete_product(id).await
    }
}

pub type ProductsPage = ListController<ProductsClient>;

/// Build the products page over a shared API client.
pub fn products_page(api: Arc<ApiClient>) -> ProductsPage {
    ListController::new(ProductsClient { api }, MESSAGES)
}

/// Text of the blocking delete confirmation.
pub fn delete_prompt(product: &Product) -> String {
    format!("Êtes-vous sûr de vouloir supprimer \"{}\" ?", product.nom)
}

/// Table columns: ID, name, price and the stock band.
pub fn product_columns() -> Vec<Column<Product>> {
    vec![
        Column::new("ID", |p: &Product| format!("#{}", p.id)),
        Column::new("Nom", |p: &Product| p.nom.clone()),
        Column::new("Prix", |p: &Product| format_price(p.prix)),
        Column::new("Stock", |p: &Product| {
            let status = stock_status(p.stock);
            format!("{} unités ({})", p.stock, status.label())
        }),
    ]
}
