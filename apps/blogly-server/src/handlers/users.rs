//! User pages.

use actix_web::{HttpResponse, web};
use blogly_core::domain::UserDraft;
use blogly_shared::UserForm;
use tera::Context;

use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::post_views;

fn draft(form: UserForm) -> UserDraft {
    UserDraft::new(form.first_name, form.last_name, form.image_url)
}

/// GET /users
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let users = state.store.list_users().await?;

    let mut context = Context::new();
    context.insert("users", &users);
    state.templates.render("users/index.html", &context)
}

/// GET /users/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    state.templates.render("users/new.html", &Context::new())
}

/// POST /users/new
pub async fn create(state: web::Data<AppState>, body: FormBody) -> AppResult<HttpResponse> {
    let form = UserForm::parse(&fields(body))?;
    state.store.create_user(draft(form)).await?;

    Ok(redirect("/users"))
}

/// GET /users/{user_id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let user = state.store.get_user(user_id).await?;
    let posts = state.store.user_posts(user_id).await?;

    let mut context = Context::new();
    context.insert("user", &user);
    context.insert("full_name", &user.full_name());
    context.insert("posts", &post_views(&posts));
    state.templates.render("users/show.html", &context)
}

/// GET /users/{user_id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.store.get_user(path.into_inner()).await?;

    let mut context = Context::new();
    context.insert("user", &user);
    state.templates.render("users/edit.html", &context)
}

/// POST /users/{user_id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: FormBody,
) -> AppResult<HttpResponse> {
    let form = UserForm::parse(&fields(body))?;
    state
        .store
        .update_user(path.into_inner(), draft(form))
        .await?;

    Ok(redirect("/users"))
}

/// POST /users/{user_id}/delete
pub async fn destroy(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.store.delete_user(path.into_inner()).await?;

    Ok(redirect("/users"))
}
