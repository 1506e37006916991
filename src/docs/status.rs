//! Display metadata for HTTP status codes.
//!
//! Response examples and live test results are decorated with a label, a
//! color, and an icon derived from the numeric status code. Band-level
//! color/icon mapping is a range rule; reason phrases come from a sorted
//! lookup table.

/// Display metadata for one status code
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub label: String,
    pub color: &'static str,
    pub icon: &'static str,
}

/// Band color used when rendering a live test response
pub fn band_color(status: u16) -> &'static str {
    match status {
        100..=199 => "info",
        200..=299 => "success",
        300..=399 => "primary",
        400..=499 => "warning",
        500..=599 => "danger",
        _ => "default",
    }
}

/// Full display metadata for a status code
pub fn display(status: u16) -> StatusDisplay {
    let (color, icon) = match status {
        100..=199 => ("sky", "information-circle"),
        200..=299 => ("teal", "check-circle"),
        300..=399 => ("orange", "arrow-circle-right"),
        400..=499 => ("red", "exclamation-triangle"),
        _ => ("red", "x-circle"),
    };

    let label = match reason_phrase(status) {
        Some(phrase) => format!("{status} {phrase}"),
        None => status.to_string(),
    };

    StatusDisplay { label, color, icon }
}

/// Reason phrase for known status codes
pub fn reason_phrase(status: u16) -> Option<&'static str> {
    REASON_PHRASES
        .binary_search_by_key(&status, |&(code, _)| code)
        .ok()
        .map(|idx| REASON_PHRASES[idx].1)
}

// Sorted by code; lookup is a binary search.
const REASON_PHRASES: &[(u16, &str)] = &[
    (100, "Continue"),
    (101, "Switching Protocols"),
    (102, "Processing"),
    (103, "Early Hints"),
    (200, "OK"),
    (201, "Created"),
    (202, "Accepted"),
    (203, "Non-Authoritative Information"),
    (204, "No Content"),
    (205, "Reset Content"),
    (206, "Partial Content"),
    (207, "Multi-Status"),
    (208, "Already Reported"),
    (226, "IM Used"),
    (300, "Multiple Choices"),
    (301, "Moved Permanently"),
    (302, "Found"),
    (303, "See Other"),
    (304, "Not Modified"),
    (305, "Use Proxy"),
    (306, "(Unused)"),
    (307, "Temporary Redirect"),
    (308, "Permanent Redirect"),
    (400, "Bad Request"),
    (401, "Unauthorized"),
    (402, "Payment Required"),
    (403, "Forbidden"),
    (404, "Not Found"),
    (405, "Method Not Allowed"),
    (406, "Not Acceptable"),
    (407, "Proxy Authentication Required"),
    (408, "Request Timeout"),
    (409, "Conflict"),
    (410, "Gone"),
    (411, "Length Required"),
    (412, "Precondition Failed"),
    (413, "Payload Too Large"),
    (414, "URI Too Long"),
    (415, "Unsupported Media Type"),
    (416, "Range Not Satisfiable"),
    (417, "Expectation Failed"),
    (418, "I'm a Teapot"),
    (421, "Misdirected Request"),
    (422, "Unprocessable Entity"),
    (423, "Locked"),
    (424, "Failed Dependency"),
    (425, "Too Early"),
    (426, "Upgrade Required"),
    (428, "Precondition Required"),
    (429, "Too Many Requests"),
    (431, "Request Header Fields Too Large"),
    (451, "Unavailable For Legal Reasons"),
    (500, "Internal Server Error"),
    (501, "Not Implemented"),
    (502, "Bad Gateway"),
    (503, "Service Unavailable"),
    (504, "Gateway Timeout"),
    (505, "HTTP Version Not Supported"),
    (506, "Variant Also Negotiates"),
    (507, "Insufficient Storage"),
    (508, "Loop Detected"),
    (510, "Not Extended"),
    (511, "Network Authentication Required"),
];

/// Binary success/failure decoration applied to imported responses.
///
/// Postman collections carry no display metadata, so imported responses
/// collapse to success (2xx) or failure (everything else).
pub fn import_display(status: u16) -> (&'static str, &'static str) {
    if (200..300).contains(&status) {
        ("check-circle", "teal")
    } else {
        ("exclamation-triangle", "red")
    }
}
