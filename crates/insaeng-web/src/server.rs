//! Single-endpoint form server for the weeks calculation.
//!
//! One route: GET serves the entry form, POST answers with the lived and
//! remaining week counts plus a reminder. No other endpoints, no session,
//! no persisted state.

use std::io::{Cursor, Read};
use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{Local, NaiveDate};
use color_eyre::eyre::eyre;
use insaeng_core::{Language, locale, parse_birth_date, weeks_lived, weeks_remaining};
use tiny_http::{Header, Method, Request, Response, Server};
use url::form_urlencoded;

/// The entry form, served on GET.
const FORM_PAGE: &str = include_str!("form.html");

/// Placeholder in the form page replaced by an inline error message.
const ERROR_SLOT: &str = "<!-- error -->";

/// Serve the form until the process is killed.
pub fn run(listen_addr: &str) -> color_eyre::Result<()> {
    let server =
        Server::http(listen_addr).map_err(|e| eyre!("failed to bind {listen_addr}: {e}"))?;
    eprintln!("insaeng-web listening on http://{listen_addr}");

    loop {
        let request = server.recv()?;
        handle_request(request);
    }
}

/// Answer one request; per-request failures never take the server down.
fn handle_request(mut request: Request) {
    let method = request.method().clone();
    let url = request.url().to_string();

    let response = match (method, url.as_str()) {
        (Method::Get, "/") => html_response(FORM_PAGE.to_string()),
        (Method::Post, "/") => {
            let mut body = String::new();
            match request.as_reader().read_to_string(&mut body) {
                Ok(_) => html_response(handle_submit(
                    &body,
                    Local::now().date_naive(),
                    request_seed(),
                )),
                Err(_) => Response::from_string("bad request").with_status_code(400),
            }
        }
        _ => Response::from_string("not found").with_status_code(404),
    };

    let _ = request.respond(response);
}

/// Compute the response page for one form submission.
///
/// Pure over `(body, today, seed)` so tests can drive it without sockets.
fn handle_submit(body: &str, today: NaiveDate, seed: u64) -> String {
    let mut birth_date = String::new();
    let mut language_value = String::new();
    for (key, value) in form_urlencoded::parse(body.as_bytes()) {
        match key.as_ref() {
            "birth_date" => birth_date = value.into_owned(),
            "language" => language_value = value.into_owned(),
            _ => {}
        }
    }
    let language = Language::from_form_value(&language_value);

    match parse_birth_date(&birth_date) {
        Ok(birth) => {
            let lived = weeks_lived(birth, today);
            let reminder = locale::pick_reminder(language, None, seed);
            result_page(&language.result_text(lived, weeks_remaining(lived)), reminder)
        }
        Err(_) => FORM_PAGE.replace(
            ERROR_SLOT,
            &format!("<p style=\"color:red\">{}</p>", language.invalid_date()),
        ),
    }
}

fn result_page(result_text: &str, reminder: &str) -> String {
    format!(
        "<!DOCTYPE html>\n\
         <html>\n\
         <head><meta charset=\"utf-8\"><title>Life Weeks Reminder</title></head>\n\
         <body>\n\
         <p>{result_text}</p>\n\
         <p><em>{reminder}</em></p>\n\
         <p><a href=\"/\">&larr;</a></p>\n\
         </body>\n\
         </html>\n"
    )
}

fn html_response(page: String) -> Response<Cursor<Vec<u8>>> {
    let mut response = Response::from_string(page);
    if let Ok(header) =
        Header::from_bytes(&b"Content-Type"[..], &b"text/html; charset=utf-8"[..])
    {
        response.add_header(header);
    }
    response
}

/// Per-request seed for the reminder pick.
fn request_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn valid_submit_reports_both_counts() {
        // 2000-01-01 is exactly 364 days before 2000-12-30
        let page = handle_submit(
            "birth_date=2000-01-01&language=English",
            date(2000, 12, 30),
            7,
        );
        assert!(page.contains("You have lived 52 weeks"));
        assert!(page.contains("4524 weeks remaining"));
    }

    #[test]
    fn invalid_date_shows_localized_error() {
        let page = handle_submit(
            "birth_date=2024-13-40&language=%E4%B8%AD%E6%96%87",
            date(2024, 11, 30),
            0,
        );
        assert!(page.contains("请输入有效的出生日期"));
        assert!(page.contains("<form"));
    }

    #[test]
    fn unknown_language_falls_back_to_chinese() {
        let page = handle_submit(
            "birth_date=2000-01-01&language=Deutsch",
            date(2000, 12, 30),
            0,
        );
        assert!(page.contains("你已经度过了 52 周"));
    }

    #[test]
    fn missing_fields_read_as_invalid() {
        let page = handle_submit("", date(2024, 11, 30), 0);
        assert!(page.contains("请输入有效的出生日期"));
    }

    #[test]
    fn submit_includes_a_reminder_from_the_list() {
        let page = handle_submit(
            "birth_date=1990-06-15&language=English",
            date(2024, 11, 30),
            3,
        );
        let found = Language::English
            .reminders()
            .iter()
            .any(|r| page.contains(r));
        assert!(found);
    }
}
