//! Route handlers.
//!
//! Every protected handler resolves the caller's subject from the session
//! first and redirects to `/login` when there is none. Note mutations always
//! end with a redirect back to `/`, whether or not a row changed.

use axum::extract::rejection::FormRejection;
use axum::extract::{Form, Path, Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tower_sessions::Session;

use api::auth::{self, CallbackParams};

use crate::error::AppError;
use crate::state::AppState;

/// Body of the note add/update forms.
#[derive(Debug, Default, Deserialize)]
pub struct NoteForm {
    #[serde(default)]
    pub note: Option<String>,
}

impl NoteForm {
    /// An unreadable body (missing, wrong content type) counts as an empty form.
    fn or_empty(form: Result<Form<NoteForm>, FormRejection>) -> Self {
        form.map(|Form(form)| form).unwrap_or_default()
    }

    fn text(&self) -> &str {
        self.note.as_deref().unwrap_or_default()
    }
}

fn to_login() -> Response {
    Redirect::to("/login").into_response()
}

fn to_home() -> Response {
    Redirect::to("/").into_response()
}

/// `GET /` — the caller's notes.
pub async fn home(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let Some(user) = auth::current_user(&session).await? else {
        return Ok(to_login());
    };

    let notes = state.notes.list(user.subject()).await?;
    Ok(Html(ui::render_home(&user.userinfo, notes)).into_response())
}

/// `GET /login` — off to the identity provider.
pub async fn login(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    let url = auth::initiate_login(state.provider.as_ref(), &session).await?;
    Ok(Redirect::to(url.as_str()).into_response())
}

/// `GET /callback` — provider redirect with `code` and `state` in the query.
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<CallbackParams>,
) -> Result<Response, AppError> {
    complete_login(&state, &session, params).await
}

/// `POST /callback` — same as [`callback`] for `response_mode=form_post`.
pub async fn callback_form(
    State(state): State<AppState>,
    session: Session,
    Form(params): Form<CallbackParams>,
) -> Result<Response, AppError> {
    complete_login(&state, &session, params).await
}

async fn complete_login(
    state: &AppState,
    session: &Session,
    params: CallbackParams,
) -> Result<Response, AppError> {
    auth::handle_callback(state.provider.as_ref(), session, params).await?;
    Ok(to_home())
}

/// `GET /logout` — clear the session and end the provider session too.
pub async fn logout(State(state): State<AppState>, session: Session) -> Result<Response, AppError> {
    if let Some(sub) = auth::current_subject(&session).await? {
        tracing::info!(%sub, "user logged out");
    }
    let url = auth::logout(state.provider.as_ref(), &session).await?;
    Ok(Redirect::to(url.as_str()).into_response())
}

/// `POST /add-note`
pub async fn add_note(
    State(state): State<AppState>,
    session: Session,
    form: Result<Form<NoteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Some(owner_id) = auth::current_subject(&session).await? else {
        return Ok(to_login());
    };

    let form = NoteForm::or_empty(form);
    state.notes.create(&owner_id, form.text()).await?;
    Ok(to_home())
}

/// `POST /delete-note/{id}`
pub async fn delete_note(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
) -> Result<Response, AppError> {
    let Some(owner_id) = auth::current_subject(&session).await? else {
        return Ok(to_login());
    };

    state.notes.delete(&owner_id, note_id).await?;
    Ok(to_home())
}

/// `POST /update-note/{id}`
pub async fn update_note(
    State(state): State<AppState>,
    session: Session,
    Path(note_id): Path<i64>,
    form: Result<Form<NoteForm>, FormRejection>,
) -> Result<Response, AppError> {
    let Some(owner_id) = auth::current_subject(&session).await? else {
        return Ok(to_login());
    };

    let form = NoteForm::or_empty(form);
    state.notes.update(&owner_id, note_id, form.text()).await?;
    Ok(to_home())
}
