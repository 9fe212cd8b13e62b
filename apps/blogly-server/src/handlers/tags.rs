//! Tag pages.

use actix_web::{HttpResponse, web};
use blogly_core::domain::TagDraft;
use blogly_shared::TagForm;
use tera::Context;

use super::{FormBody, fields, redirect};
use crate::middleware::error::AppResult;
use crate::state::AppState;
use crate::views::post_views;

fn draft(form: TagForm) -> TagDraft {
    TagDraft {
        name: form.name,
        post_ids: form.posts,
    }
}

/// GET /tags
pub async fn index(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let tags = state.store.list_tags().await?;

    let mut context = Context::new();
    context.insert("tags", &tags);
    state.templates.render("tags/index.html", &context)
}

/// GET /tags/{tag_id}
pub async fn show(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    let detail = state.store.get_tag(path.into_inner()).await?;

    let mut context = Context::new();
    context.insert("tag", &detail.tag);
    context.insert("posts", &post_views(&detail.posts));
    state.templates.render("tags/show.html", &context)
}

/// GET /tags/new
pub async fn new_form(state: web::Data<AppState>) -> AppResult<HttpResponse> {
    let posts = state.store.list_posts().await?;

    let mut context = Context::new();
    context.insert("posts", &post_views(&posts));
    state.templates.render("tags/new.html", &context)
}

/// POST /tags/new
pub async fn create(state: web::Data<AppState>, body: FormBody) -> AppResult<HttpResponse> {
    let form = TagForm::parse(&fields(body))?;
    state.store.create_tag(draft(form)).await?;

    Ok(redirect("/tags"))
}

/// GET /tags/{tag_id}/edit
pub async fn edit_form(
    state: web::Data<AppState>,
    path: web::Path<i32>,
) -> AppResult<HttpResponse> {
    let detail = state.store.get_tag(path.into_inner()).await?;
    let posts = state.store.list_posts().await?;
    let selected: Vec<i32> = detail.posts.iter().map(|p| p.id).collect();

    let mut context = Context::new();
    context.insert("tag", &detail.tag);
    context.insert("posts", &post_views(&posts));
    context.insert("selected", &selected);
    state.templates.render("tags/edit.html", &context)
}

/// POST /tags/{tag_id}/edit
pub async fn update(
    state: web::Data<AppState>,
    path: web::Path<i32>,
    body: FormBody,
) -> AppResult<HttpResponse> {
    let form = TagForm::parse(&fields(body))?;
    state.store.update_tag(path.into_inner(), draft(form)).await?;

    Ok(redirect("/tags"))
}

/// POST /tags/{tag_id}/delete
pub async fn destroy(state: web::Data<AppState>, path: web::Path<i32>) -> AppResult<HttpResponse> {
    state.store.delete_tag(path.into_inner()).await?;

    Ok(redirect("/tags"))
}
