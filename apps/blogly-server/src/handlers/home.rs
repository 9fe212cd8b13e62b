//! Landing page.

use actix_web::HttpResponse;

/// GET / - the user list is the home page.
pub async fn index() -> HttpResponse {
    super::redirect("/users")
}
