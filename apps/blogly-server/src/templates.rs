//! Tera templates compiled into the binary.

use actix_web::HttpResponse;
use actix_web::http::header::ContentType;
use tera::{Context, Tera};

use crate::middleware::error::AppResult;

const TEMPLATES: &[(&str, &str)] = &[
    ("base.html", include_str!("../templates/base.html")),
    ("users/index.html", include_str!("../templates/users/index.html")),
    ("users/new.html", include_str!("../templates/users/new.html")),
    ("users/show.html", include_str!("../templates/users/show.html")),
    ("users/edit.html", include_str!("../templates/users/edit.html")),
    ("posts/new.html", include_str!("../templates/posts/new.html")),
    ("posts/show.html", include_str!("../templates/posts/show.html")),
    ("posts/edit.html", include_str!("../templates/posts/edit.html")),
    ("tags/index.html", include_str!("../templates/tags/index.html")),
    ("tags/show.html", include_str!("../templates/tags/show.html")),
    ("tags/new.html", include_str!("../templates/tags/new.html")),
    ("tags/edit.html", include_str!("../templates/tags/edit.html")),
];

/// The page renderer. HTML output is auto-escaped.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    pub fn load() -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_templates(TEMPLATES.iter().copied())?;
        Ok(Self { tera })
    }

    pub fn render(&self, name: &str, context: &Context) -> AppResult<HttpResponse> {
        let body = self.tera.render(name, context)?;
        Ok(HttpResponse::Ok()
            .insert_header(ContentType::html())
            .body(body))
    }
}
