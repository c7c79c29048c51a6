//! Application state and core logic

use crate::people::{person_path, PersonId};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, Form, FormSource, PersonEditForm, View};
use crate::submission::{FormInterceptor, Page, PendingUpdate, SubmitEvent};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Person the edit page belongs to
    person_id: PersonId,
    /// Submit handler attached to the edit form
    interceptor: FormInterceptor,
    /// Requests sent but not yet handled, in submission order
    pending: Vec<PendingUpdate>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Open the edit page of `person_id`
    pub fn new(person_id: PersonId, form: PersonEditForm, interceptor: FormInterceptor) -> Self {
        let location = format!("{}/edit", person_path(&person_id));
        Self {
            state: AppState::new(location, form),
            person_id,
            interceptor,
            pending: Vec::new(),
            quit: false,
        }
    }

    pub fn person_id(&self) -> &PersonId {
        &self.person_id
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn quit(&mut self) {
        self.quit = true;
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        match self.state.current_view {
            View::PersonEdit => self.handle_edit_key(key),
            View::Listing { .. } => self.handle_listing_key(key),
        }
    }

    fn handle_edit_key(&mut self, key: KeyEvent) {
        let submit_combo = key.modifiers.contains(SUBMIT_MODIFIER)
            || key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('s') if submit_combo => self.submit(),
            KeyCode::Char('u') if submit_combo => {
                self.state.form.get_active_field_mut().clear();
                self.state.validation_message = None;
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => self.quit(),
            KeyCode::Tab | KeyCode::Down => self.state.form.next_field(),
            KeyCode::BackTab | KeyCode::Up => self.state.form.prev_field(),
            KeyCode::Backspace => {
                self.state.form.get_active_field_mut().pop_char();
                self.state.validation_message = None;
            }
            KeyCode::Char(c) if !submit_combo => {
                self.state.form.get_active_field_mut().push_char(c);
                self.state.validation_message = None;
            }
            _ => {}
        }
    }

    fn handle_listing_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
            self.quit();
        }
    }

    /// Submit the edit form.
    ///
    /// Native constraints run first; an invalid form never fires the submit
    /// event. Otherwise the interceptor takes over and always prevents the
    /// native submission, so the page stays put until the response arrives.
    pub fn submit(&mut self) {
        if let Err(violation) = self.state.form.check_validity() {
            tracing::debug!(%violation, "Form constraints not satisfied");
            self.state.validation_message = Some(violation.to_string());
            return;
        }
        self.state.validation_message = None;

        let mut event = SubmitEvent::new(&self.state.form);
        let pending = self.interceptor.on_submit(&mut event, &self.person_id);
        tracing::debug!(
            default_prevented = event.default_prevented(),
            "Submit event dispatched"
        );

        self.pending.push(pending);
        self.state.pending_requests = self.pending.len();
    }

    /// Run the continuation of every request the network layer has resolved
    pub async fn poll_pending(&mut self) {
        while let Some(index) = self.pending.iter().position(PendingUpdate::is_settled) {
            let update = self.pending.remove(index);
            tracing::debug!(person_id = %update.person_id(), "Handling update response");
            update.settle(&mut *self).await;
        }
        self.state.pending_requests = self.pending.len();
    }

    /// Number of requests still in flight
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

impl Page for App {
    /// Leaving the page abandons the handlers of requests still in flight
    fn navigate(&mut self, route: &str) {
        tracing::debug!(route, "Navigating");
        self.pending.clear();
        self.state.pending_requests = 0;
        self.state.validation_message = None;
        self.state.location = route.to_string();
        self.state.current_view = View::Listing {
            route: route.to_string(),
        };
    }

    fn alert(&mut self, message: &str) {
        self.state.push_error(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::people::{MockPeopleClientTrait, PatchResponse, TransportError};
    use crossterm::event::KeyEventKind;
    use pretty_assertions::assert_eq;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(client: MockPeopleClientTrait, form: PersonEditForm) -> App {
        App::new(
            PersonId::from(42u64),
            form,
            FormInterceptor::new(Arc::new(client)),
        )
    }

    fn alice() -> PersonEditForm {
        PersonEditForm::with_values(Some("Alice".to_string()), Some(1990))
    }

    fn responding(status: u16, body: &'static str) -> MockPeopleClientTrait {
        let mut client = MockPeopleClientTrait::new();
        client
            .expect_patch_person()
            .returning(move |_, _| Ok(PatchResponse::new(status, body)));
        client
    }

    async fn settle_all(app: &mut App) {
        while app.pending_count() > 0 {
            tokio::task::yield_now().await;
            app.poll_pending().await;
        }
    }

    #[tokio::test]
    async fn test_starts_on_edit_page() {
        let app = app_with(MockPeopleClientTrait::new(), alice());
        assert_eq!(app.state.current_view, View::PersonEdit);
        assert_eq!(app.state.location, "/people/42/edit");
        assert_eq!(app.person_id().as_str(), "42");
        assert!(!app.should_quit());
    }

    #[tokio::test]
    async fn test_typing_edits_active_field() {
        let mut app = app_with(MockPeopleClientTrait::new(), PersonEditForm::new());
        for c in "Bob".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Tab));
        for c in "19a85".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }

        assert_eq!(app.state.form.name.as_text(), "Bo");
        assert_eq!(app.state.form.year_of_birth.as_text(), "1985");

        app.handle_key(ctrl('u'));
        assert_eq!(app.state.form.year_of_birth.as_text(), "");
        assert_eq!(app.state.form.name.as_text(), "Bo");
    }

    #[tokio::test]
    async fn test_invalid_form_never_fires_submit() {
        let mut client = MockPeopleClientTrait::new();
        client.expect_patch_person().never();
        let mut app = app_with(client, PersonEditForm::new());

        app.handle_key(key(KeyCode::Enter));

        assert_eq!(app.pending_count(), 0);
        assert_eq!(
            app.state.validation_message.as_deref(),
            Some("Name must not be empty")
        );
        assert_eq!(app.state.current_view, View::PersonEdit);
    }

    #[tokio::test]
    async fn test_submit_does_not_navigate_before_response() {
        let mut app = app_with(responding(200, ""), alice());

        app.handle_key(ctrl('s'));

        assert_eq!(app.pending_count(), 1);
        assert_eq!(app.state.pending_requests, 1);
        assert_eq!(app.state.current_view, View::PersonEdit);
        assert_eq!(app.state.location, "/people/42/edit");
    }

    #[tokio::test]
    async fn test_success_navigates_to_listing() {
        let mut app = app_with(responding(200, ""), alice());

        app.submit();
        settle_all(&mut app).await;

        assert_eq!(
            app.state.current_view,
            View::Listing {
                route: "/people".to_string()
            }
        );
        assert_eq!(app.state.location, "/people");
        assert!(!app.state.has_errors());
    }

    #[tokio::test]
    async fn test_failure_shows_modal_error() {
        let mut app = app_with(responding(400, "Invalid name"), alice());

        app.submit();
        settle_all(&mut app).await;

        assert_eq!(
            app.state.current_error(),
            Some("Error updating person: Invalid name")
        );
        assert_eq!(app.state.current_view, View::PersonEdit);

        // Modal swallows input until dismissed
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.state.form.name.as_text(), "Alice");
        app.handle_key(key(KeyCode::Enter));
        assert!(!app.state.has_errors());
        assert_eq!(app.pending_count(), 0);
    }

    #[tokio::test]
    async fn test_transport_failure_shows_modal_error() {
        let mut client = MockPeopleClientTrait::new();
        client
            .expect_patch_person()
            .returning(|_, _| Err(TransportError::new("Failed to fetch")));
        let mut app = app_with(client, alice());

        app.submit();
        settle_all(&mut app).await;

        assert_eq!(
            app.state.current_error(),
            Some("Error updating person: Failed to fetch")
        );
    }

    #[tokio::test]
    async fn test_double_submit_is_not_guarded() {
        let mut client = MockPeopleClientTrait::new();
        client
            .expect_patch_person()
            .times(2)
            .returning(|_, _| Ok(PatchResponse::new(409, "Conflict")));
        let mut app = app_with(client, alice());

        app.submit();
        app.submit();
        assert_eq!(app.pending_count(), 2);

        settle_all(&mut app).await;
        assert_eq!(app.state.current_error(), Some("Error updating person: Conflict"));
        app.state.dismiss_error();
        assert_eq!(app.state.current_error(), Some("Error updating person: Conflict"));
    }

    #[tokio::test]
    async fn test_esc_quits_from_edit_page() {
        let mut app = app_with(MockPeopleClientTrait::new(), alice());
        app.handle_key(KeyEvent {
            code: KeyCode::Esc,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        });
        assert!(app.should_quit());
    }

    #[tokio::test]
    async fn test_listing_page_quits_on_q() {
        let mut app = app_with(MockPeopleClientTrait::new(), alice());
        app.navigate("/people");
        app.handle_key(key(KeyCode::Char('x')));
        assert!(!app.should_quit());
        app.handle_key(key(KeyCode::Char('q')));
        assert!(app.should_quit());
    }
}
