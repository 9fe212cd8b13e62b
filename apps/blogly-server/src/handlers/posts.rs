//! Post pages. New posts hang off their author's URL.

use actix_web::{HttpResponse, web};
use blogly_core::domain::PostDraft;
use blogly_shared::PostForm;
use tera::Context;

use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::PostView;

fn draft(form: PostForm) -> PostDraft {
    PostDraft {
        title: form.title,
        content: form.content,
        tag_ids: form.tags,
    }
}

/// GET /users/{user_id}/posts/new
pub async fn new_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let user = state.store.get_user(path.into_inner()).await?;
    let tags = state.store.list_tags().await?;

    let mut context = Context::new();
    context.insert("user", &user);
    context.insert("tags", &tags);
    state.templates.render("posts/new.html", &context)
}

/// POST /users/{user_id}/posts/new
pub async fn create(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: FormBody,
) -> AppResult<HttpResponse> {
    let user_id = path.into_inner();
    let form = PostForm::parse(&fields(body))?;
    state.store.create_post(user_id, draft(form)).await?;

    Ok(redirect(format!("/users/{user_id}")))
}

/// GET /posts/{post_id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let detail = state.store.get_post(path.into_inner()).await?;

    let mut context = Context::new();
    context.insert("post", &PostView::from(&detail.post));
    context.insert("user", &detail.author);
    context.insert("full_name", &detail.author.full_name());
    context.insert("tags", &detail.tags);
    state.templates.render("posts/show.html", &context)
}

/// GET /posts/{post_id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.store.get_post(path.into_inner()).await?;
    let tags = state.store.list_tags().await?;
    let selected: Vec<i32> = detail.tags.iter().map(|t| t.id).collect();

    let mut context = Context::new();
    context.insert("post", &PostView::from(&detail.post));
    context.insert("tags", &tags);
    context.insert("selected", &selected);
    state.templates.render("posts/edit.html", &context)
}

/// POST /posts/{post_id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: FormBody,
) -> AppResult<HttpResponse> {
    let form = PostForm::parse(&fields(body))?;
    let post = state.store.update_post(path.into_inner(), draft(form)).await?;

    Ok(redirect(format!("/users/{}", post.user_id)))
}

/// POST /posts/{post_id}/delete
pub async fn destroy(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let post = state.store.delete_post(path.into_inner()).await?;

    Ok(redirect(format!("/users/{}", post.user_id)))
}
