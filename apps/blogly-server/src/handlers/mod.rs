//! HTTP handlers and route configuration.

mod health;
mod home;
mod posts;
mod tags;
mod users;


use actix_web::http::header;
use actix_web::{HttpResponse, web};
use blogly_shared::FormFields;

/// Urlencoded body decoded as ordered pairs so repeated keys survive.
pub type FormBody = web::Form<Vec<(String, String)>>;

fn fields(body: FormBody) -> FormFields {
    FormFields::from(body.into_inner())
}

/// `302 Found` to `location`, as browsers expect after a form post.
fn redirect(location: impl AsRef<str>) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location.as_ref()))
        .finish()
}

/// Configure all application routes.
///
/// Literal segments (`/new`) are registered before `{id}` captures.
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(home::index))
        .route("/health", web::get().to(health::health_check))
        .service(
            web::scope("/users")
                .route("", web::get().to(users::index))
                .route("/new", web::get().to(users::new_form))
                .route("/new", web::post().to(users::create))
                .route("/{user_id}", web::get().to(users::show))
                .route("/{user_id}/edit", web::get().to(users::edit_form))
                .route("/{user_id}/edit", web::post().to(users::update))
                .route("/{user_id}/delete", web::post().to(users::destroy))
                .route("/{user_id}/posts/new", web::get().to(posts::new_form))
                .route("/{user_id}/posts/new", web::post().to(posts::create)),
        )
        .service(
            web::scope("/posts")
                .route("/{post_id}", web::get().to(posts::show))
                .route("/{post_id}/edit", web::get().to(posts::edit_form))
                .route("/{post_id}/edit", web::post().to(posts::update))
                .route("/{post_id}/delete", web::post().to(posts::destroy)),
        )
        .service(
            web::scope("/tags")
                .route("", web::get().to(tags::index))
                .route("/new", web::get().to(tags::new_form))
                .route("/new", web::post().to(tags::create))
                .route("/{tag_id}", web::get().to(tags::show))
                .route("/{tag_id}/edit", web::get().to(tags::edit_form))
                .route("/{tag_id}/edit", web::post().to(tags::update))
                .route("/{tag_id}/delete", web::post().to(tags::destroy)),
        );
}
