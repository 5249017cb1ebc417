//! Common test utilities and helpers
//!
//! This module provides shared utilities for integration tests: HTML
//! fixtures mirroring the portal's markup and wiremock setup helpers.

#![allow(dead_code)]

use portal_scraper::config::Settings;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// HTML fixtures mirroring the portal pages
pub mod fixtures {
    /// Login page, optionally carrying a CSRF token
    pub fn login_page(csrf_token: Option<&str>) -> String {
        let token_input = csrf_token
            .map(|token| format!(r#"<input type="hidden" name="_csrf" value="{}">"#, token))
            .unwrap_or_default();

        format!(
            r#"<html><body>
            <form action="/customer/login" method="post">
                {}
                <input name="USERNAME">
                <input name="PASS" type="password">
            </form>
        </body></html>"#,
            token_input
        )
    }

    /// Dashboard page with every labeled field populated
    pub fn dashboard_page(name: &str, payment_rows: &[[&str; 4]]) -> String {
        let rows: String = payment_rows
            .iter()
            .map(|cells| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    cells[0], cells[1], cells[2], cells[3]
                )
            })
            .collect();

        format!(
            r#"<html><body>
            <div class="d-flex"><i data-toggle="tooltip" title="Name"></i> {} </div>
            <div class="d-flex"><i data-toggle="tooltip" title="ID"></i> 10244 </div>
            <div class="d-flex"><i data-toggle="tooltip" title="Username"></i> alice01 </div>
            <div class="d-flex"><i data-toggle="tooltip" title="Mobile"></i> 01700000000 </div>
            <div class="d-flex"><i data-toggle="tooltip" title="Account Status"></i>
                <span><font>Active</font></span></div>
            <div class="d-flex"><i data-toggle="tooltip" title="Connection Status"></i>
                <span class="bg-success">Online</span></div>
            <div class="d-flex"><i data-toggle="tooltip" title="Expiry Date"></i>
                <span class="text-success"><font>2026-09-01</font></span></div>
            <div class="d-flex"><i data-toggle="tooltip" title="Package"></i> Home 20M </div>
            <div class="d-flex"><i data-toggle="tooltip" title="Plan rate"></i>
                <span>20   Mbps /
 1000 BDT</span></div>
            <table id="paymentH"><tbody>{}</tbody></table>
        </body></html>"#,
            name, rows
        )
    }

    /// Dashboard page with no labeled fields and no payment table
    pub fn bare_dashboard_page() -> String {
        "<html><body><h1>Dashboard</h1></body></html>".to_string()
    }

    /// Usage-log page with the given session rows
    pub fn usage_page(rows: &[[&str; 5]]) -> String {
        let rows: String = rows
            .iter()
            .map(|cells| {
                format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>",
                    cells[0], cells[1], cells[2], cells[3], cells[4]
                )
            })
            .collect();

        format!(
            r#"<html><body><table id="sessionL"><tbody>{}</tbody></table></body></html>"#,
            rows
        )
    }
}

/// Settings pointed at a mock portal
pub fn settings_for(server: &MockServer) -> Settings {
    let mut settings = Settings::default();
    settings.portal.base_url = server.uri();
    settings
}

/// Mount the full happy-path portal behind a mock server
///
/// Login page with a CSRF token, login redirect to the dashboard, a fully
/// populated dashboard for `name`, and a one-row usage log.
pub async fn mount_happy_portal(server: &MockServer, name: &str) {
    Mock::given(method("GET"))
        .and(path("/customer/"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(fixtures::login_page(Some("tok-123"))),
        )
        .mount(server)
        .await;
    Mock::given(method("POST"))
        .and(path("/customer/login"))
        .respond_with(ResponseTemplate::new(302).insert_header("Location", "/customer/dashboard"))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customer/dashboard"))
        .respond_with(ResponseTemplate::new(200).set_body_string(fixtures::dashboard_page(
            name,
            &[["2026-07-01", "1000", "1000", "paid  in  full"]],
        )))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/customer/syslog"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(fixtures::usage_page(&[[
                "2026-07-30 08:00",
                "2026-07-30 22:15",
                "1.2 GB",
                "18.4 GB",
                "14:15:00",
            ]])),
        )
        .mount(server)
        .await;
}
