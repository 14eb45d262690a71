//! Generic resource list controller.
//!
//! Every list page of the original dashboard repeated the same workflow:
//! fetch the collection, filter it client-side with a text search, open a
//! form for create-or-edit, submit then reload, delete behind a blocking
//! confirmation. [`ListController`] formalizes that workflow once, generic
//! over the backend seam ([`ResourceClient`]) and the displayed entity
//! ([`ListEntry`]); each page contributes its API calls, its draft type and
//! its French banner strings.

use optique_api::{ApiError, Result as ApiResult};

/// Backend operations a list page needs. Implemented by thin per-resource
/// structs borrowing the shared [`optique_api::ApiClient`], and by in-memory
/// fakes in tests.
#[allow(async_fn_in_trait)]
pub trait ResourceClient {
    type Item: ListEntry;
    type Draft;

    async fn load(&self) -> ApiResult<Vec<Self::Item>>;
    async fn create(&self, draft: &Self::Draft) -> ApiResult<Self::Item>;
    async fn update(&self, id: i64, draft: &Self::Draft) -> ApiResult<Self::Item>;
    async fn delete(&self, id: i64) -> ApiResult<()>;
}

/// An entity displayable in a list view.
pub trait ListEntry {
    fn id(&self) -> i64;

    /// Text fields matched by the search filter.
    fn search_text(&self) -> Vec<&str>;
}

/// Whether the open form creates a new entity or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(i64),
}

/// The active create/edit form: mode plus the bound draft fields.
#[derive(Debug, Clone)]
pub struct Form<D> {
    pub mode: FormMode,
    pub draft: D,
}

/// Per-page user-facing strings: success banners and error fallbacks.
#[derive(Debug, Clone, Copy)]
pub struct ListMessages {
    pub load_error: &'static str,
    pub save_error: &'static str,
    pub delete_error: &'static str,
    pub created: &'static str,
    pub updated: &'static str,
    pub deleted: &'static str,
}

/// State machine behind one list view.
pub struct ListController<C: ResourceClient> {
    client: C,
    messages: ListMessages,
    items: Vec<C::Item>,
    filter: String,
    form: Option<Form<C::Draft>>,
    error: Option<String>,
    success: Option<String>,
    loading: bool,
}

impl<C: ResourceClient> ListController<C> {
    pub fn new(client: C, messages: ListMessages) -> Self {
        Self {
            client,
            messages,
            items: Vec::new(),
            filter: String::new(),
            form: None,
            error: None,
            success: None,
            loading: false,
        }
    }

    // -- loading ------------------------------------------------------------

    /// Fetch the collection, replacing `items` and clearing banners. A load
    /// failure sets the load error, which persists until the next successful
    /// load.
    pub async fn load(&mut self) {
        self.error = None;
        self.success = None;
        self.reload_items().await;
    }

    /// Refetch items without touching the banners (used after mutations, so
    /// the success message survives the reload).
    async fn reload_items(&mut self) {
        self.loading = true;
        match self.client.load().await {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(e) => {
                tracing::warn!(error = %e, "list load failed");
                self.error = Some(self.messages.load_error.to_string());
            }
        }
        self.loading = false;
    }

    /// Replace the collection from a load performed outside the controller
    /// (pages that join several fetches into one).
    pub fn replace_items(&mut self, items: Vec<C::Item>) {
        self.items = items;
        self.error = None;
    }

    /// Record a failed page-level load.
    pub fn set_load_error(&mut self) {
        self.error = Some(self.messages.load_error.to_string());
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn items(&self) -> &[C::Item] {
        &self.items
    }

    // -- filtering ----------------------------------------------------------

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
    }

    pub fn filter(&self) -> &str {
        &self.filter
    }

    /// The filtered view: items whose searched fields contain the filter
    /// text case-insensitively. Pure recompute; a blank filter shows all.
    pub fn visible_items(&self) -> Vec<&C::Item> {
        let needle = self.filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.items.iter().collect();
        }
        self.items
            .iter()
            .filter(|item| {
                item.search_text()
                    .iter()
                    .any(|field| field.to_lowercase().contains(&needle))
            })
            .collect()
    }

    // -- form lifecycle -----------------------------------------------------

    /// Open the form in create mode with default field values.
    pub fn open_create(&mut self, draft: C::Draft) {
        self.form = Some(Form {
            mode: FormMode::Create,
            draft,
        });
        self.error = None;
        self.success = None;
    }

    /// Open the form in edit mode, pre-filled from the selected entity.
    pub fn open_edit(&mut self, id: i64, draft: C::Draft) {
        self.form = Some(Form {
            mode: FormMode::Edit(id),
            draft,
        });
        self.error = None;
        self.success = None;
    }

    /// Discard the form and banners.
    pub fn close_form(&mut self) {
        self.form = None;
        self.error = None;
        self.success = None;
    }

    pub fn is_form_open(&self) -> bool {
        self.form.is_some()
    }

    pub fn form(&self) -> Option<&Form<C::Draft>> {
        self.form.as_ref()
    }

    /// Mutable access to the bound draft, for field-by-field form binding.
    pub fn draft_mut(&mut self) -> Option<&mut C::Draft> {
        self.form.as_mut().map(|form| &mut form.draft)
    }

    // -- mutations ----------------------------------------------------------

    /// Submit the open form: create or update depending on its mode.
    ///
    /// On success the success banner is set, the form closes and the list
    /// reloads. On failure the form stays open and the error banner shows
    /// the backend's `detail` (or the coercion message), falling back to the
    /// page's fixed save-error string.
    pub async fn submit(&mut self) {
        let Some(form) = self.form.take() else {
            return;
        };
        self.error = None;
        self.success = None;

        let result = match form.mode {
            FormMode::Create => self.client.create(&form.draft).await.map(|_| ()),
            FormMode::Edit(id) => self.client.update(id, &form.draft).await.map(|_| ()),
        };

        match result {
            Ok(()) => {
                self.success = Some(
                    match form.mode {
                        FormMode::Create => self.messages.created,
                        FormMode::Edit(_) => self.messages.updated,
                    }
                    .to_string(),
                );
                self.reload_items().await;
            }
            Err(e) => {
                self.error = Some(submit_error_message(&e, self.messages.save_error));
                // The form stays open so the user can correct the input.
                self.form = Some(form);
            }
        }
    }

    /// Delete an entity. `confirmed` is the outcome of the blocking yes/no
    /// prompt shown by the rendering shell: a declined confirmation is a
    /// no-op, no request is sent.
    pub async fn delete(&mut self, id: i64, confirmed: bool) {
        if !confirmed {
            return;
        }
        match self.client.delete(id).await {
            Ok(()) => {
                self.success = Some(self.messages.deleted.to_string());
                self.reload_items().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, id, "delete failed");
                self.error = Some(self.messages.delete_error.to_string());
            }
        }
    }

    // -- banners ------------------------------------------------------------

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    /// Dismiss transient banners (the shell calls this instead of the
    /// original's fixed-delay timers).
    pub fn clear_banners(&mut self) {
        self.error = None;
        self.success = None;
    }
}

/// Error banner text for a failed create/update: the backend `detail` when
/// present, a client-side coercion message verbatim, else the fixed
/// per-page fallback.
fn submit_error_message(error: &ApiError, fallback: &str) -> String {
    match error {
        ApiError::Backend { detail, .. } => detail.clone(),
        ApiError::Invalid(message) => message.clone(),
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: i64,
        nom: String,
    }

    impl ListEntry for Item {
        fn id(&self) -> i64 {
            self.id
        }
        fn search_text(&self) -> Vec<&str> {
            vec![&self.nom]
        }
    }

    /// In-memory resource used in place of the HTTP client.
    #[derive(Default)]
    struct FakeClient {
        items: RefCell<Vec<Item>>,
        next_id: Cell<i64>,
        load_calls: Cell<usize>,
        delete_calls: Cell<usize>,
        fail_submit_with: Option<ApiError>,
    }

    impl FakeClient {
        fn with_items(names: &[&str]) -> Self {
            let items = names
                .iter()
                .enumerate()
                .map(|(i, nom)| Item {
                    id: i as i64 + 1,
                    nom: nom.to_string(),
                })
                .collect::<Vec<_>>();
            let next_id = items.len() as i64 + 1;
            Self {
                items: RefCell::new(items),
                next_id: Cell::new(next_id),
                ..Default::default()
            }
        }
    }

    impl ResourceClient for FakeClient {
        type Item = Item;
        type Draft = String;

        async fn load(&self) -> ApiResult<Vec<Item>> {
            self.load_calls.set(self.load_calls.get() + 1);
            Ok(self.items.borrow().clone())
        }

        async fn create(&self, draft: &String) -> ApiResult<Item> {
            if let Some(e) = &self.fail_submit_with {
                return Err(clone_error(e));
            }
            let item = Item {
                id: self.next_id.get(),
                nom: draft.clone(),
            };
            self.next_id.set(item.id + 1);
            self.items.borrow_mut().push(item.clone());
            Ok(item)
        }

        async fn update(&self, id: i64, draft: &String) -> ApiResult<Item> {
            if let Some(e) = &self.fail_submit_with {
                return Err(clone_error(e));
            }
            let mut items = self.items.borrow_mut();
            let item = items.iter_mut().find(|i| i.id == id).expect("exists");
            item.nom = draft.clone();
            Ok(item.clone())
        }

        async fn delete(&self, id: i64) -> ApiResult<()> {
            self.delete_calls.set(self.delete_calls.get() + 1);
            self.items.borrow_mut().retain(|i| i.id != id);
            Ok(())
        }
    }

    fn clone_error(e: &ApiError) -> ApiError {
        match e {
            ApiError::Backend { status, detail } => ApiError::Backend {
                status: *status,
                detail: detail.clone(),
            },
            ApiError::Invalid(m) => ApiError::Invalid(m.clone()),
            other => panic!("unsupported fake error: {other}"),
        }
    }

    const MESSAGES: ListMessages = ListMessages {
        load_error: "Erreur lors du chargement",
        save_error: "Erreur lors de la sauvegarde",
        delete_error: "Erreur lors de la suppression",
        created: "Créé avec succès !",
        updated: "Modifié avec succès !",
        deleted: "Supprimé avec succès !",
    };

    fn controller(client: FakeClient) -> ListController<FakeClient> {
        ListController::new(client, MESSAGES)
    }

    #[tokio::test]
    async fn filter_is_case_insensitive_and_restartable() {
        let mut ctrl = controller(FakeClient::with_items(&[
            "Lunettes Aviator",
            "Monture Ronde",
            "Étui rigide",
        ]));
        ctrl.load().await;

        ctrl.set_filter("AVIATOR");
        let first: Vec<_> = ctrl.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(first, vec![1]);

        ctrl.set_filter("ronde");
        assert_eq!(ctrl.visible_items()[0].nom, "Monture Ronde");

        // Back to the prior filter reproduces the prior result.
        ctrl.set_filter("AVIATOR");
        let again: Vec<_> = ctrl.visible_items().iter().map(|i| i.id).collect();
        assert_eq!(again, first);
    }

    #[tokio::test]
    async fn blank_filter_shows_everything() {
        let mut ctrl = controller(FakeClient::with_items(&["A", "B"]));
        ctrl.load().await;
        ctrl.set_filter("   ");
        assert_eq!(ctrl.visible_items().len(), 2);
    }

    #[tokio::test]
    async fn successful_create_closes_form_and_reloads() {
        let mut ctrl = controller(FakeClient::with_items(&["A"]));
        ctrl.load().await;

        ctrl.open_create(String::new());
        *ctrl.draft_mut().unwrap() = "B".to_string();
        ctrl.submit().await;

        assert!(!ctrl.is_form_open());
        assert_eq!(ctrl.success(), Some("Créé avec succès !"));
        assert_eq!(ctrl.items().len(), 2);
    }

    #[tokio::test]
    async fn successful_edit_reloads_with_new_value() {
        let mut ctrl = controller(FakeClient::with_items(&["A", "B"]));
        ctrl.load().await;

        ctrl.open_edit(2, "B".to_string());
        *ctrl.draft_mut().unwrap() = "B corrigé".to_string();
        ctrl.submit().await;

        assert_eq!(ctrl.success(), Some("Modifié avec succès !"));
        assert_eq!(ctrl.items()[1].nom, "B corrigé");
    }

    #[tokio::test]
    async fn failed_submit_keeps_form_open_with_backend_detail() {
        let mut client = FakeClient::with_items(&["A"]);
        client.fail_submit_with = Some(ApiError::Backend {
            status: 400,
            detail: "Stock insuffisant. Stock disponible: 3".to_string(),
        });
        let mut ctrl = controller(client);
        ctrl.load().await;

        ctrl.open_create("B".to_string());
        ctrl.submit().await;

        assert!(ctrl.is_form_open());
        assert_eq!(ctrl.error(), Some("Stock insuffisant. Stock disponible: 3"));
        assert!(ctrl.success().is_none());
    }

    #[tokio::test]
    async fn failed_submit_without_detail_uses_fallback() {
        let mut client = FakeClient::with_items(&[]);
        client.fail_submit_with = Some(ApiError::Backend {
            status: 500,
            detail: "Internal Server Error".to_string(),
        });
        let mut ctrl = controller(client);
        ctrl.open_create("X".to_string());
        ctrl.submit().await;
        // A backend detail is always preferred, even for a 500.
        assert_eq!(ctrl.error(), Some("Internal Server Error"));

        // No detail at all: fixed fallback string.
        assert_eq!(
            submit_error_message(
                &ApiError::Decode(serde_json::from_str::<()>("x").unwrap_err()),
                MESSAGES.save_error
            ),
            "Erreur lors de la sauvegarde"
        );
    }

    #[tokio::test]
    async fn declined_confirmation_never_calls_delete() {
        let mut ctrl = controller(FakeClient::with_items(&["A"]));
        ctrl.load().await;

        ctrl.delete(1, false).await;

        assert_eq!(ctrl.client.delete_calls.get(), 0);
        assert_eq!(ctrl.items().len(), 1);
        assert!(ctrl.error().is_none());
        assert!(ctrl.success().is_none());
    }

    #[tokio::test]
    async fn confirmed_delete_reloads_and_keeps_banner() {
        let mut ctrl = controller(FakeClient::with_items(&["A", "B"]));
        ctrl.load().await;
        let loads_before = ctrl.client.load_calls.get();

        ctrl.delete(1, true).await;

        assert_eq!(ctrl.client.delete_calls.get(), 1);
        assert_eq!(ctrl.client.load_calls.get(), loads_before + 1);
        assert_eq!(ctrl.items().len(), 1);
        assert_eq!(ctrl.success(), Some("Supprimé avec succès !"));
    }
}
