//! HTML page builders for the web front end
//!
//! Pages are rendered with plain string formatting; the app has four small
//! pages and does not warrant a template engine. All user-supplied text is
//! escaped before it is interpolated.

/// Escape text for safe interpolation into HTML bodies and attributes.
pub fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Outcome notice shown on the add-quote page after a form submission.
pub enum AddNotice {
    Added(String),
    Invalid,
}

fn layout(title: &str, body: &str) -> String {
    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n</head>\n<body>\n\
         <nav><a href=\"/\">Random</a> | <a href=\"/daily\">Daily</a> | <a href=\"/all\">All</a> | <a href=\"/add\">Add</a></nav>\n\
         {body}\n</body>\n</html>\n"
    )
}

/// Main page: one random quote with the time it was picked.
pub fn random_page(quote: &str, timestamp: &str) -> String {
    layout(
        "Quote Display App",
        &format!(
            "<h1>💭 Random Quote</h1>\n<blockquote>{}</blockquote>\n<p>📅 {}</p>",
            escape_html(quote),
            escape_html(timestamp),
        ),
    )
}

/// Quote-of-the-day page.
pub fn daily_page(quote: &str, timestamp: &str) -> String {
    layout(
        "Quote of the Day",
        &format!(
            "<h1>🌟 Quote of the Day</h1>\n<blockquote>{}</blockquote>\n<p>📅 {}</p>",
            escape_html(quote),
            escape_html(timestamp),
        ),
    )
}

/// Full collection as an ordered list.
pub fn all_page(quotes: &[String]) -> String {
    let mut items = String::new();
    for quote in quotes {
        items.push_str(&format!("<li>{}</li>\n", escape_html(quote)));
    }
    layout(
        "All Quotes",
        &format!("<h1>📚 All Quotes</h1>\n<ol>\n{items}</ol>"),
    )
}

/// Add-quote form, optionally with the outcome of a previous submission.
pub fn add_page(notice: Option<&AddNotice>) -> String {
    let notice_html = match notice {
        Some(AddNotice::Added(quote)) => format!(
            "<p>✅ Quote added successfully: {}</p>\n",
            escape_html(quote)
        ),
        Some(AddNotice::Invalid) => "<p>❌ Please enter a valid quote.</p>\n".to_string(),
        None => String::new(),
    };
    layout(
        "Add a Quote",
        &format!(
            "<h1>➕ Add a Quote</h1>\n{notice_html}\
             <form method=\"post\" action=\"/add\">\n\
             <input type=\"text\" name=\"quote\" size=\"80\">\n\
             <button type=\"submit\">Add</button>\n</form>"
        ),
    )
}
