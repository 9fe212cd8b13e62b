//! Data Transfer Objects - form bodies submitted by the HTML pages.
//!
//! Forms arrive as `application/x-www-form-urlencoded` and are decoded into
//! an ordered list of `(key, value)` pairs first, so that checkbox groups
//! (`tags=1&tags=3`) keep every value.

use thiserror::Error;

/// Column width of `users.first_name` and `users.last_name`.
pub const NAME_MAX_CHARS: usize = 50;

/// Reasons a submitted form cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("missing form field `{0}`")]
    Missing(&'static str),

    #[error("form field `{field}` has non-numeric id `{value}`")]
    InvalidId { field: &'static str, value: String },

    #[error("form field `{field}` is longer than {max} characters")]
    TooLong { field: &'static str, max: usize },
}

/// Decoded form body.
#[derive(Debug, Clone, Default)]
pub struct FormFields(Vec<(String, String)>);

impl From<Vec<(String, String)>> for FormFields {
    fn from(pairs: Vec<(String, String)>) -> Self {
        Self(pairs)
    }
}

impl FormFields {
    fn first(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// First value of `key`. The field must be present but may be empty.
    pub fn required(&self, key: &'static str) -> Result<String, FormError> {
        self.first(key)
            .map(str::to_string)
            .ok_or(FormError::Missing(key))
    }

    /// Like [`required`](Self::required), rejecting values over `max` characters.
    pub fn required_max(&self, key: &'static str, max: usize) -> Result<String, FormError> {
        let value = self.required(key)?;
        if value.chars().count() > max {
            return Err(FormError::TooLong { field: key, max });
        }
        Ok(value)
    }

    pub fn optional(&self, key: &str) -> Option<String> {
        self.first(key).map(str::to_string)
    }

    /// Every value of a repeated id field. Blank entries are ignored.
    pub fn ids(&self, key: &'static str) -> Result<Vec<i32>, FormError> {
        self.0
            .iter()
            .filter(|(k, v)| k == key && !v.trim().is_empty())
            .map(|(_, v)| {
                v.trim().parse().map_err(|_| FormError::InvalidId {
                    field: key,
                    value: v.clone(),
                })
            })
            .collect()
    }
}

/// Add/edit user form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserForm {
    pub first_name: String,
    pub last_name: String,
    pub image_url: Option<String>,
}

impl UserForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            first_name: fields.required_max("first_name", NAME_MAX_CHARS)?,
            last_name: fields.required_max("last_name", NAME_MAX_CHARS)?,
            image_url: fields.optional("image_url"),
        })
    }
}

/// Add/edit post form; `tags` holds the checked tag ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub tags: Vec<i32>,
}

impl PostForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            title: fields.required("title")?,
            content: fields.required("content")?,
            tags: fields.ids("tags")?,
        })
    }
}

/// Add/edit tag form; `posts` holds the checked post ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagForm {
    pub name: String,
    pub posts: Vec<i32>,
}

impl TagForm {
    pub fn parse(fields: &FormFields) -> Result<Self, FormError> {
        Ok(Self {
            name: fields.required("name")?,
            posts: fields.ids("posts")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> FormFields {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn post_form_collects_repeated_tags() {
        let form = PostForm::parse(&fields(&[
            ("title", "Hello"),
            ("content", "World"),
            ("tags", "1"),
            ("tags", "3"),
            ("tags", ""),
        ]))
        .unwrap();

        assert_eq!(form.title, "Hello");
        assert_eq!(form.tags, vec![1, 3]);
    }

    #[test]
    fn post_form_without_tags_is_empty_set() {
        let form = PostForm::parse(&fields(&[("title", "Hello"), ("content", "")])).unwrap();
        assert!(form.tags.is_empty());
        assert_eq!(form.content, "");
    }

    #[test]
    fn non_numeric_id_is_rejected() {
        let err = TagForm::parse(&fields(&[("name", "Fun"), ("posts", "abc")])).unwrap_err();
        assert_eq!(
            err,
            FormError::InvalidId {
                field: "posts",
                value: "abc".into()
            }
        );
    }

    #[test]
    fn missing_required_field_is_reported() {
        let err = UserForm::parse(&fields(&[("first_name", "Ariel")])).unwrap_err();
        assert_eq!(err, FormError::Missing("last_name"));
    }

    #[test]
    fn user_form_image_is_optional() {
        let form = UserForm::parse(&fields(&[("first_name", "Ariel"), ("last_name", "Waters")]))
            .unwrap();
        assert_eq!(form.image_url, None);
    }

    #[test]
    fn user_names_are_limited_to_column_width() {
        let fifty = "a".repeat(NAME_MAX_CHARS);
        let form = UserForm::parse(&fields(&[
            ("first_name", fifty.as_str()),
            ("last_name", "Waters"),
        ]))
        .unwrap();
        assert_eq!(form.first_name.len(), NAME_MAX_CHARS);

        // Characters, not bytes.
        let accented = "é".repeat(NAME_MAX_CHARS);
        let form = UserForm::parse(&fields(&[
            ("first_name", "Ariel"),
            ("last_name", accented.as_str()),
        ]));
        assert!(form.is_ok());

        let long = "a".repeat(NAME_MAX_CHARS + 1);
        let err = UserForm::parse(&fields(&[
            ("first_name", "Ariel"),
            ("last_name", long.as_str()),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            FormError::TooLong {
                field: "last_name",
                max: NAME_MAX_CHARS
            }
        );
    }
}
