//! Shared route and context-key contracts.
//!
//! Handlers build responses against these constants and the integration
//! tests consume the same ones, so a route or key rename cannot silently
//! break only one side.

/// Number of news items shown on the home page.
pub const NEWS_COUNT_ON_HOME_PAGE: usize = 10;

/// Route paths for both applications.
pub mod routes {
    /// Auth pages shared by both apps.
    pub mod auth {
        pub const LOGIN: &str = "/auth/login";
        pub const LOGOUT: &str = "/auth/logout";
        pub const SIGNUP: &str = "/auth/signup";

        /// Login URL carrying the page to return to after signing in.
        pub fn login_with_next(next: &str) -> String {
            format!("{LOGIN}?next={next}")
        }
    }

    /// News application routes.
    pub mod news {
        pub const HOME: &str = "/";

        pub fn detail(id: i64) -> String {
            format!("/news/{id}")
        }

        /// Post-mutation redirect target: the detail page's comment block.
        pub fn comments_anchor(id: i64) -> String {
            format!("/news/{id}#comments")
        }

        pub fn edit_comment(id: i64) -> String {
            format!("/comments/{id}/edit")
        }

        pub fn delete_comment(id: i64) -> String {
            format!("/comments/{id}/delete")
        }
    }

    /// Notes application routes.
    pub mod notes {
        pub const HOME: &str = "/";
        pub const LIST: &str = "/notes/";
        pub const ADD: &str = "/notes/add";
        pub const SUCCESS: &str = "/done/";

        pub fn detail(slug: &str) -> String {
            format!("/notes/{slug}")
        }

        pub fn edit(slug: &str) -> String {
            format!("/notes/{slug}/edit")
        }

        pub fn delete(slug: &str) -> String {
            format!("/notes/{slug}/delete")
        }
    }
}

/// Top-level keys of the JSON page context.
pub mod context {
    pub const OBJECT_LIST: &str = "object_list";
    pub const FORM: &str = "form";
    pub const NEWS: &str = "news";
    pub const NOTE: &str = "note";
    pub const COMMENT: &str = "comment";
}
