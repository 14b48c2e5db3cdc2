//! Embedded templates and the token substitution engine
//!
//! The default daily template and the archive index template are compiled
//! into the binary; `init` materializes the daily template so sites can
//! edit it in place.

use indexmap::IndexMap;

/// Default daily briefing template, written out by `init` and read back
/// from the site's template path at generation time.
pub const DAILY_TEMPLATE: &str = include_str!("daily.html");

/// Archive index template.
pub const INDEX_TEMPLATE: &str = include_str!("index.html");

/// Replace every occurrence of every token with its computed value.
///
/// Replacement is global: a token that appears several times in the
/// template (the date shows up in the page title, the header and the
/// footer) is replaced at each occurrence. Tokens absent from the table
/// are left untouched.
pub fn substitute(template: &str, values: &IndexMap<&'static str, String>) -> String {
    let mut out = template.to_string();
    for (token, value) in values {
        out = out.replace(token, value);
    }
    out
}
