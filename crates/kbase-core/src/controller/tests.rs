use std::cell::RefCell;
use std::collections::HashMap;

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;

use super::*;
use crate::models::{Category, FavoriteToggle, NoteDraft, Stats};

/// In-memory backend that records every request line it receives.
#[derive(Default)]
struct RecordingBackend {
    calls: RefCell<Vec<String>>,
    notes: RefCell<Vec<Note>>,
    categories: RefCell<Vec<Category>>,
    stats: Stats,
    failures: RefCell<HashMap<String, (u16, Option<String>)>>,
}

impl RecordingBackend {
    fn with_notes(notes: Vec<Note>) -> Self {
        Self {
            stats: Stats {
                total_notes: notes.len() as u64,
                total_categories: 1,
                ..Stats::default()
            },
            notes: RefCell::new(notes),
            categories: RefCell::new(vec![Category {
                id: 1,
                name: "work".to_string(),
                description: None,
                color: "#6366f1".to_string(),
                created_at: None,
            }]),
            ..Self::default()
        }
    }

    fn fail(&self, call: &str, status: u16, detail: Option<&str>) {
        self.failures
            .borrow_mut()
            .insert(call.to_string(), (status, detail.map(ToString::to_string)));
    }

    fn record(&self, call: String) -> Result<()> {
        let failure = self.failures.borrow().get(&call).cloned();
        self.calls.borrow_mut().push(call);
        match failure {
            Some((status, detail)) => Err(Error::Http { status, detail }),
            None => Ok(()),
        }
    }

    fn calls(&self) -> Vec<String> {
        self.calls.borrow().clone()
    }

    fn clear_calls(&self) {
        self.calls.borrow_mut().clear();
    }

    fn saved(&self, id: NoteId, draft: &NoteDraft) -> Note {
        Note {
            id,
            title: draft.title.clone(),
            content: draft.content.clone(),
            summary: None,
            category: draft.category.clone(),
            tags: draft.tags.clone(),
            is_favorite: false,
            is_public: false,
            created_at: Utc.with_ymd_and_hms(2024, 6, 1, 9, 0, 0).unwrap(),
            updated_at: None,
        }
    }
}

impl NotesBackend for RecordingBackend {
    async fn stats(&self) -> Result<Stats> {
        self.record("GET /api/stats".to_string())?;
        Ok(self.stats)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record("GET /api/categories".to_string())?;
        Ok(self.categories.borrow().clone())
    }

    async fn create_category(&self, draft: &CategoryDraft) -> Result<Category> {
        self.record("POST /api/categories".to_string())?;
        let category = Category {
            id: 2,
            name: draft.name.clone(),
            description: None,
            color: "#6366f1".to_string(),
            created_at: None,
        };
        self.categories.borrow_mut().push(category.clone());
        Ok(category)
    }

    async fn update_category(&self, id: i64, draft: &CategoryDraft) -> Result<Category> {
        self.record(format!("PUT /api/categories/{id}"))?;
        Ok(Category {
            id,
            name: draft.name.clone(),
            description: None,
            color: "#6366f1".to_string(),
            created_at: None,
        })
    }

    async fn delete_category(&self, id: i64) -> Result<()> {
        self.record(format!("DELETE /api/categories/{id}"))
    }

    async fn list_notes(&self, category: Option<&str>) -> Result<Vec<Note>> {
        match category {
            Some(name) => self.record(format!(
                "GET /api/notes?category={}",
                urlencoding::encode(name)
            ))?,
            None => self.record("GET /api/notes".to_string())?,
        }
        Ok(self
            .notes
            .borrow()
            .iter()
            .filter(|note| category.map_or(true, |name| note.category == name))
            .cloned()
            .collect())
    }

    async fn list_favorites(&self) -> Result<Vec<Note>> {
        self.record("GET /api/notes/favorites".to_string())?;
        Ok(self
            .notes
            .borrow()
            .iter()
            .filter(|note| note.is_favorite)
            .cloned()
            .collect())
    }

    async fn get_note(&self, id: NoteId) -> Result<Note> {
        self.record(format!("GET /api/notes/{id}"))?;
        self.notes
            .borrow()
            .iter()
            .find(|note| note.id == id)
            .cloned()
            .ok_or(Error::Http {
                status: 404,
                detail: Some("Note not found".to_string()),
            })
    }

    async fn create_note(&self, draft: &NoteDraft) -> Result<Note> {
        self.record("POST /api/notes".to_string())?;
        let id = NoteId::new(self.notes.borrow().len() as i64 + 100);
        let note = self.saved(id, draft);
        self.notes.borrow_mut().push(note.clone());
        Ok(note)
    }

    async fn update_note(&self, id: NoteId, draft: &NoteDraft) -> Result<Note> {
        self.record(format!("PUT /api/notes/{id}"))?;
        let note = self.saved(id, draft);
        for existing in self.notes.borrow_mut().iter_mut().filter(|n| n.id == id) {
            *existing = note.clone();
        }
        Ok(note)
    }

    async fn delete_note(&self, id: NoteId) -> Result<()> {
        self.record(format!("DELETE /api/notes/{id}"))?;
        self.notes.borrow_mut().retain(|note| note.id != id);
        Ok(())
    }

    async fn toggle_favorite(&self, id: NoteId) -> Result<FavoriteToggle> {
        self.record(format!("POST /api/notes/{id}/favorite"))?;
        let mut notes = self.notes.borrow_mut();
        let note = notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(Error::Http {
                status: 404,
                detail: Some("Note not found".to_string()),
            })?;
        note.is_favorite = !note.is_favorite;
        Ok(FavoriteToggle {
            message: "Favorite status updated".to_string(),
            is_favorite: note.is_favorite,
        })
    }

    async fn search(&self, query: &str) -> Result<Vec<Note>> {
        self.record(format!("GET /api/search?q={}", urlencoding::encode(query)))?;
        let needle = query.to_lowercase();
        Ok(self
            .notes
            .borrow()
            .iter()
            .filter(|note| note.title.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }
}

type TestController = Controller<RecordingBackend, RefCell<AppState>>;

fn note(id: i64, title: &str, category: &str) -> Note {
    Note {
        id: NoteId::new(id),
        title: title.to_string(),
        content: format!("{title}: body text for the card"),
        summary: None,
        category: category.to_string(),
        tags: None,
        is_favorite: false,
        is_public: false,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap(),
        updated_at: None,
    }
}

fn controller(notes: Vec<Note>) -> TestController {
    Controller::new(
        RecordingBackend::with_notes(notes),
        RefCell::new(AppState::default()),
    )
}

fn last_toast(controller: &TestController) -> Option<(ToastKind, String)> {
    controller.state().with(|state| {
        state
            .toasts()
            .last()
            .map(|toast| (toast.kind, toast.message.clone()))
    })
}

fn fill_form(controller: &TestController, title: &str, content: &str) {
    controller.update_field(FormField::Title, title.to_string());
    controller.update_field(FormField::Content, content.to_string());
}

fn sorted(mut calls: Vec<String>) -> Vec<String> {
    calls.sort();
    calls
}

#[tokio::test]
async fn init_loads_everything_concurrently() {
    let controller = controller(vec![note(1, "Rust", "work"), note(2, "Go", "work")]);
    controller.init().await;

    assert_eq!(
        sorted(controller.backend().calls()),
        vec!["GET /api/categories", "GET /api/notes", "GET /api/stats"]
    );
    controller.state().with(|state| {
        assert_eq!(state.stats().notes_label(), "2 notes");
        assert_eq!(state.filter_category_options().len(), 2);
        assert!(matches!(state.list_view(), ListView::Grid(cards) if cards.len() == 2));
        assert!(state.toasts().is_empty());
    });
}

#[tokio::test]
async fn init_stats_failure_zeroes_counters_and_toasts() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.backend().fail("GET /api/stats", 500, None);
    controller.init().await;

    controller.state().with(|state| {
        assert_eq!(state.stats().notes_label(), "0 notes");
        assert_eq!(state.stats().categories_label(), "0 categories");
        // the other loaders still applied
        assert_eq!(state.notes().len(), 1);
        assert_eq!(state.categories().len(), 1);
    });
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Error, "Failed to load stats".to_string()))
    );
}

#[tokio::test]
async fn init_reports_all_failures_in_one_toast() {
    let controller = controller(Vec::new());
    for call in ["GET /api/stats", "GET /api/categories", "GET /api/notes"] {
        controller.backend().fail(call, 503, None);
    }
    controller.init().await;

    controller.state().with(|state| {
        assert_eq!(state.toasts().len(), 1);
        assert!(!state.is_loading());
    });
    assert_eq!(
        last_toast(&controller),
        Some((
            ToastKind::Error,
            "Failed to load stats, categories, notes".to_string()
        ))
    );
}

#[tokio::test]
async fn load_stats_failure_falls_back_to_zero() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.load_stats().await;
    controller.backend().fail("GET /api/stats", 500, None);
    controller.load_stats().await;

    controller
        .state()
        .with(|state| assert_eq!(state.stats().notes_label(), "0 notes"));
    assert_eq!(last_toast(&controller).unwrap().0, ToastKind::Error);
}

#[tokio::test]
async fn short_title_and_content_never_reach_network() {
    let controller = controller(Vec::new());
    controller.open_create_form();
    fill_form(&controller, "Hi", "short");
    controller.submit_form().await;

    assert!(controller.backend().calls().is_empty());
    controller.state().with(|state| {
        let form = state.form().expect("form stays open");
        assert!(form.errors().get(FormField::Title).is_some());
        assert!(form.errors().get(FormField::Content).is_some());
        assert!(!form.is_submitting());
    });
    assert_eq!(
        last_toast(&controller),
        Some((
            ToastKind::Error,
            "Please fix the highlighted fields".to_string()
        ))
    );
}

#[tokio::test]
async fn title_boundary_on_submit() {
    let controller = controller(Vec::new());
    controller.open_create_form();
    fill_form(&controller, "ab", "0123456789");
    controller.submit_form().await;
    assert!(controller.backend().calls().is_empty());

    controller.update_field(FormField::Title, "abc".to_string());
    controller.submit_form().await;
    assert!(controller
        .backend()
        .calls()
        .contains(&"POST /api/notes".to_string()));
}

#[tokio::test]
async fn content_boundary_on_submit() {
    let controller = controller(Vec::new());
    controller.open_create_form();
    fill_form(&controller, "Title", "012345678");
    controller.submit_form().await;
    assert!(controller.backend().calls().is_empty());

    controller.update_field(FormField::Content, "0123456789".to_string());
    controller.submit_form().await;
    assert_eq!(controller.backend().calls()[0], "POST /api/notes");
}

#[tokio::test]
async fn successful_create_closes_form_and_reloads_list_and_stats() {
    let controller = controller(Vec::new());
    controller.open_create_form();
    fill_form(&controller, "Lifetimes", "Annotations describe relationships.");
    controller.submit_form().await;

    let calls = controller.backend().calls();
    assert_eq!(calls[0], "POST /api/notes");
    assert_eq!(
        sorted(calls[1..].to_vec()),
        vec!["GET /api/notes", "GET /api/stats"]
    );
    controller.state().with(|state| {
        assert!(!state.is_form_open());
        assert_eq!(state.notes().len(), 1);
    });
    assert!(controller.state().with(|state| state
        .toasts()
        .iter()
        .any(|toast| toast.message == "Note created successfully!")));
}

#[tokio::test]
async fn server_rejection_keeps_form_open_with_input() {
    let controller = controller(Vec::new());
    controller
        .backend()
        .fail("POST /api/notes", 400, Some("Title already used"));
    controller.open_create_form();
    fill_form(&controller, "Lifetimes", "Annotations describe relationships.");
    controller.submit_form().await;

    assert_eq!(controller.backend().calls(), vec!["POST /api/notes"]);
    controller.state().with(|state| {
        let form = state.form().expect("form stays open");
        assert!(!form.is_submitting());
        assert_eq!(form.fields().title, "Lifetimes");
    });
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Error, "Title already used".to_string()))
    );
}

#[tokio::test]
async fn edit_fetches_full_note_then_puts() {
    let controller = controller(vec![note(5, "Traits", "work")]);
    controller.load_notes().await;
    controller.open_modal(NoteId::new(5)).unwrap();
    controller.backend().clear_calls();

    controller.open_edit_form(NoteId::new(5)).await;
    assert_eq!(controller.backend().calls(), vec!["GET /api/notes/5"]);
    controller.state().with(|state| {
        assert!(state.modal().is_none());
        assert!(state.is_editing());
        assert_eq!(state.form().unwrap().fields().category, "work");
    });

    controller.update_field(FormField::Title, "Traits and generics".to_string());
    controller.submit_form().await;
    assert!(controller
        .backend()
        .calls()
        .contains(&"PUT /api/notes/5".to_string()));
    assert_eq!(
        controller
            .state()
            .with(|state| state.notes()[0].title.clone()),
        "Traits and generics"
    );
}

#[tokio::test]
async fn edit_of_missing_note_toasts_and_keeps_form_closed() {
    let controller = controller(Vec::new());
    controller.open_edit_form(NoteId::new(404)).await;

    assert!(!controller.state().with(AppState::is_form_open));
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Error, "Note not found".to_string()))
    );
}

#[tokio::test]
async fn edit_does_not_discard_typed_create_form() {
    let controller = controller(vec![note(5, "Traits", "rust")]);
    controller.load_notes().await;
    controller.open_create_form();
    fill_form(&controller, "Half-written", "");
    controller.open_modal(NoteId::new(5)).unwrap();
    controller.backend().clear_calls();

    controller.open_edit_form(NoteId::new(5)).await;

    assert!(controller.backend().calls().is_empty());
    controller.state().with(|state| {
        let form = state.form().expect("create form stays open");
        assert_eq!(form.mode(), FormMode::Create);
        assert_eq!(form.fields().title, "Half-written");
    });
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Info, UNSAVED_DRAFT_MESSAGE.to_string()))
    );
}

#[tokio::test]
async fn edit_replaces_untouched_create_form() {
    let controller = controller(vec![note(5, "Traits", "rust")]);
    controller.open_create_form();

    controller.open_edit_form(NoteId::new(5)).await;

    controller.state().with(|state| {
        assert_eq!(
            state.form().map(FormState::mode),
            Some(FormMode::Edit(NoteId::new(5)))
        );
    });
}

#[tokio::test]
async fn blank_search_loads_unfiltered_list() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.search("   ").await;
    controller.load_notes().await;

    assert_eq!(
        controller.backend().calls(),
        vec!["GET /api/notes", "GET /api/notes"]
    );
}

#[tokio::test]
async fn search_encodes_query_and_reports_count() {
    let controller = controller(vec![note(1, "Rust async", "work"), note(2, "Go", "work")]);
    controller.search("rust async").await;

    assert_eq!(
        controller.backend().calls(),
        vec!["GET /api/search?q=rust%20async"]
    );
    controller.state().with(|state| {
        assert!(matches!(state.list_view(), ListView::Grid(cards) if cards.len() == 1));
    });
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Info, "Found 1 note".to_string()))
    );
}

#[tokio::test]
async fn search_without_hits_shows_query_placeholder() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.search("haskell").await;

    controller.state().with(|state| {
        assert_eq!(
            state.list_view(),
            ListView::Empty("No notes match \"haskell\".".to_string())
        );
    });
    assert_eq!(last_toast(&controller).unwrap().1, "Found 0 notes");
}

#[tokio::test]
async fn search_failure_keeps_previous_grid() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.load_notes().await;
    controller
        .backend()
        .fail("GET /api/search?q=rust", 500, None);
    controller.search("rust").await;

    controller
        .state()
        .with(|state| assert_eq!(state.notes().len(), 1));
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Error, "Search failed".to_string()))
    );
}

#[tokio::test]
async fn toggling_favorites_twice_returns_to_original_endpoint() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.toggle_favorites_view().await;
    controller.toggle_favorites_view().await;

    assert_eq!(
        controller.backend().calls(),
        vec!["GET /api/notes/favorites", "GET /api/notes"]
    );
}

#[tokio::test]
async fn toggling_favorites_twice_from_category_restores_category() {
    let controller = controller(vec![note(1, "Rust", "work")]);
    controller.select_category(Some("work".to_string())).await;
    controller.toggle_favorites_view().await;
    controller.toggle_favorites_view().await;

    let calls = controller.backend().calls();
    assert_eq!(
        calls,
        vec![
            "GET /api/notes?category=work",
            "GET /api/notes/favorites",
            "GET /api/notes?category=work",
        ]
    );
    assert_eq!(calls.first(), calls.last());
    controller
        .state()
        .with(|state| assert_eq!(state.category_filter(), Some("work")));
}

#[tokio::test]
async fn category_filter_uses_encoded_query() {
    let controller = controller(vec![note(1, "Rust", "side projects")]);
    controller
        .select_category(Some("side projects".to_string()))
        .await;
    controller.select_category(None).await;

    assert_eq!(
        controller.backend().calls(),
        vec!["GET /api/notes?category=side%20projects", "GET /api/notes"]
    );
}

#[tokio::test]
async fn toggle_favorite_closes_modal_and_reloads() {
    let controller = controller(vec![note(3, "Closures", "work")]);
    controller.load_notes().await;
    controller.open_modal(NoteId::new(3)).unwrap();
    controller.backend().clear_calls();

    controller.toggle_favorite(NoteId::new(3)).await;

    assert_eq!(
        controller.backend().calls(),
        vec!["POST /api/notes/3/favorite", "GET /api/notes"]
    );
    controller.state().with(|state| {
        assert!(state.modal().is_none());
        assert!(state.notes()[0].is_favorite);
    });
    assert_eq!(last_toast(&controller).unwrap().1, "Added to favorites");
}

#[tokio::test]
async fn delete_closes_modal_and_reloads_list_and_stats() {
    let controller = controller(vec![note(3, "Closures", "work"), note(4, "Iterators", "work")]);
    controller.load_notes().await;
    controller.open_modal(NoteId::new(3)).unwrap();
    controller.backend().clear_calls();

    controller.delete_note(NoteId::new(3)).await;

    let calls = controller.backend().calls();
    assert_eq!(calls[0], "DELETE /api/notes/3");
    assert_eq!(
        sorted(calls[1..].to_vec()),
        vec!["GET /api/notes", "GET /api/stats"]
    );
    controller.state().with(|state| {
        assert!(state.modal().is_none());
        assert_eq!(state.notes().len(), 1);
    });
}

#[tokio::test]
async fn failed_delete_keeps_modal_open() {
    let controller = controller(vec![note(3, "Closures", "work")]);
    controller.load_notes().await;
    controller.open_modal(NoteId::new(3)).unwrap();
    controller
        .backend()
        .fail("DELETE /api/notes/3", 500, None);

    controller.delete_note(NoteId::new(3)).await;

    assert!(controller.state().with(|state| state.modal().is_some()));
    assert_eq!(
        last_toast(&controller),
        Some((ToastKind::Error, "Failed to delete note".to_string()))
    );
}

#[tokio::test]
async fn blank_category_name_is_rejected_locally() {
    let controller = controller(Vec::new());
    assert!(!controller.create_category("   ").await);
    assert!(controller.backend().calls().is_empty());
    assert_eq!(
        last_toast(&controller).unwrap().1,
        "Category name is required"
    );
}

#[tokio::test]
async fn duplicate_category_surfaces_server_detail() {
    let controller = controller(Vec::new());
    controller
        .backend()
        .fail("POST /api/categories", 400, Some("Category name already exists"));
    assert!(!controller.create_category("work").await);
    assert_eq!(
        last_toast(&controller),
        Some((
            ToastKind::Error,
            "Category name already exists".to_string()
        ))
    );
}

#[tokio::test]
async fn new_category_refreshes_selectors_and_stats() {
    let controller = controller(Vec::new());
    assert!(controller.create_category(" ideas ").await);

    assert_eq!(controller.backend().calls()[0], "POST /api/categories");
    assert_eq!(
        sorted(controller.backend().calls()[1..].to_vec()),
        vec!["GET /api/categories", "GET /api/stats"]
    );
    let labels = controller.state().with(|state| {
        state
            .editor_category_options()
            .into_iter()
            .map(|option| option.label)
            .collect::<Vec<_>>()
    });
    assert_eq!(labels, vec!["General", "work", "ideas"]);
}

#[tokio::test]
async fn dismissed_toast_is_removed() {
    let controller = controller(Vec::new());
    assert!(!controller.create_category("").await);
    let id = controller
        .state()
        .with(|state| state.toasts().last().map(|toast| toast.id))
        .unwrap();
    assert!(controller.dismiss_toast(id));
    assert!(controller.state().with(|state| state.toasts().is_empty()));
}
