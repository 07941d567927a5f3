//! Remote data client for the market backend.
//!
//! Three read-only JSON endpoints under a common base URL:
//!
//! | Path               | Query    | Payload                  |
//! |--------------------|----------|--------------------------|
//! | `time_status`      | —        | [`SessionStatus`]        |
//! | `recent_holidays`  | —        | [`RecentHolidays`]       |
//! | `quote`            | `symbol` | [`Quote`]                |
//!
//! Every call is a fresh round trip: no retries and no caching. Any status
//! outside 200–299 fails the call.
use std::time::Duration;

use dashboard_common::model::{HolidayInfo, Quote, RecentHolidays, SessionStatus};
use dashboard_common::{DashboardError, Result, Symbol};
use log::debug;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;

/// Read access to the market backend.
pub trait MarketApi: Send + Sync {
    /// Current session phase and the time left until the next one.
    fn session_status(&self) -> Result<SessionStatus>;

    /// Nearest upcoming holiday, `None` when the backend knows of none.
    fn recent_holidays(&self) -> Result<Option<HolidayInfo>>;

    /// Latest quote for `symbol`.
    fn quote(&self, symbol: &Symbol) -> Result<Quote>;
}

/// [`MarketApi`] over HTTP.
pub struct HttpMarketApi {
    client: Client,
    base_url: String,
}

impl HttpMarketApi {
    /// Creates a client for `base_url`, e.g. `http://127.0.0.1:8000/api`.
    ///
    /// Without a `timeout` requests wait for the backend indefinitely.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DashboardError::Request {
                endpoint: base_url.to_string(),
                reason: e.to_string(),
            })?;
        Ok(HttpMarketApi {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn get_json<T: DeserializeOwned>(&self, endpoint: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}/{}", self.base_url, endpoint);
        debug!("GET {} {:?}", url, query);

        let mut request = self.client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().map_err(|e| DashboardError::Request {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DashboardError::Status {
                endpoint: endpoint.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<T>().map_err(|e| DashboardError::Decode {
            endpoint: endpoint.to_string(),
            reason: e.to_string(),
        })
    }
}

impl MarketApi for HttpMarketApi {
    fn session_status(&self) -> Result<SessionStatus> {
        self.get_json("time_status", &[])
    }

    fn recent_holidays(&self) -> Result<Option<HolidayInfo>> {
        let holidays: RecentHolidays = self.get_json("recent_holidays", &[])?;
        Ok(holidays.upcoming_holiday)
    }

    fn quote(&self, symbol: &Symbol) -> Result<Quote> {
        self.get_json("quote", &[("symbol", symbol.as_str())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread::{self, JoinHandle};

    /// Answers a single request with `status` and `body`, returning the raw
    /// request text from the join handle.
    fn serve_once(status: &str, body: &str) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        let response = format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        );
        let handle = thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut buf = [0u8; 4096];
            let size = stream.read(&mut buf).unwrap();
            stream.write_all(response.as_bytes()).unwrap();
            String::from_utf8_lossy(&buf[..size]).to_string()
        });
        (format!("http://{}/api/", addr), handle)
    }

    #[test]
    fn fetches_session_status() {
        let body = r#"{"us_time":"2025-01-06 10:15 Monday","china_time":"2025-01-06 23:15 Monday",
                       "current_state":"盘中","next_state":"盘后","time_to_next_state_seconds":42.5}"#;
        let (base, server) = serve_once("200 OK", body);
        let api = HttpMarketApi::new(&base, None).unwrap();

        let status = api.session_status().unwrap();
        assert_eq!(status.current_state, "盘中");
        assert_eq!(status.seconds_to_next_state(), 42);

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /api/time_status "));
    }

    #[test]
    fn quote_sends_symbol_query() {
        let body = r#"{"symbol":"AAPL","current_price":190.5,"previous_close":188.0,"change":2.5,"percent_change":1.33}"#;
        let (base, server) = serve_once("200 OK", body);
        let api = HttpMarketApi::new(&base, None).unwrap();

        let quote = api.quote(&Symbol::normalize("aapl").unwrap()).unwrap();
        assert_eq!(quote.current_price, Some(190.5));

        let request = server.join().unwrap();
        assert!(request.starts_with("GET /api/quote?symbol=AAPL "));
    }

    #[test]
    fn missing_holiday_is_none() {
        let (base, server) = serve_once("200 OK", r#"{"upcoming_holiday":null}"#);
        let api = HttpMarketApi::new(&base, None).unwrap();
        assert_eq!(api.recent_holidays().unwrap(), None);
        server.join().unwrap();
    }

    #[test]
    fn non_success_status_fails() {
        let (base, server) = serve_once("500 Internal Server Error", r#"{"error":"boom"}"#);
        let api = HttpMarketApi::new(&base, None).unwrap();

        let err = api.recent_holidays().unwrap_err();
        assert!(matches!(err, DashboardError::Status { status: 500, .. }));
        assert!(err.is_request_error());
        server.join().unwrap();
    }

    #[test]
    fn malformed_body_fails_to_decode() {
        let (base, server) = serve_once("200 OK", "not json");
        let api = HttpMarketApi::new(&base, None).unwrap();
        assert!(matches!(api.session_status(), Err(DashboardError::Decode { .. })));
        server.join().unwrap();
    }

    #[test]
    fn unreachable_backend_is_a_request_error() {
        let port = {
            let listener = TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let api = HttpMarketApi::new(&format!("http://127.0.0.1:{}/api", port), None).unwrap();
        let err = api.session_status().unwrap_err();
        assert!(matches!(err, DashboardError::Request { .. }));
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let api = HttpMarketApi::new("http://localhost:8000/api/", None).unwrap();
        assert_eq!(api.base_url(), "http://localhost:8000/api");
    }
}
