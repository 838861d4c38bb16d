//! List-nomis command.

use std::io::Write;

use anyhow::Result;
use clap::Args;
use nomi_client::NomiClient;

use super::{Context, print_error};
use crate::display;

/// Arguments for the list-nomis command.
#[derive(Args, Debug)]
pub struct ListNomisArgs {
    /// Display full details of each Nomi
    #[arg(short, long)]
    pub full: bool,
}

/// Run the list-nomis command.
pub async fn run(args: ListNomisArgs, ctx: &Context) -> Result<()> {
    let mut out = std::io::stdout();
    let Some(client) = ctx.client_or_report(&mut out)? else {
        return Ok(());
    };
    execute(&client, args.full, ctx.json_output, &mut out).await
}

async fn execute<W: Write>(client: &NomiClient, full: bool, json: bool, out: &mut W) -> Result<()> {
    let response = match client.nomis().list().await {
        Ok(response) => response,
        Err(e) => {
            print_error(out, &e)?;
            return Ok(());
        }
    };

    if json {
        writeln!(out, "{}", serde_json::to_string_pretty(&response.nomis)?)?;
        return Ok(());
    }

    for nomi in &response.nomis {
        display::write_nomi_summary(out, nomi, full)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    async fn run_against(status: u16, body: serde_json::Value, full: bool) -> String {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/nomis"))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&server)
            .await;

        let client = NomiClient::builder()
            .base_url(server.uri())
            .api_key("test-api-key")
            .build()
            .unwrap();
        let mut out = Vec::new();
        execute(&client, full, false, &mut out).await.unwrap();
        String::from_utf8(out).unwrap()
    }

    fn body() -> serde_json::Value {
        json!({"nomis": [
            {"uuid": "test-uuid-1", "name": "John", "gender": "male",
             "created": "2024-01-01T12:00:00Z", "relationshipType": "Friend"},
            {"uuid": "test-uuid-2", "name": "Alice", "gender": "female",
             "created": "2024-01-02T12:00:00Z", "relationshipType": "Mentor"}
        ]})
    }

    #[tokio::test]
    async fn test_default_output() {
        assert_eq!(
            run_against(200, body(), false).await,
            "John (Friend)\nAlice (Mentor)\n"
        );
    }

    #[tokio::test]
    async fn test_full_output() {
        let text = run_against(200, body(), true).await;
        assert!(text.starts_with("- ID: test-uuid-1\n  Name: John\n"));
        assert!(text.contains("  Relationship: Mentor\n\n"));
    }

    #[tokio::test]
    async fn test_server_error() {
        let text = run_against(500, json!({}), false).await;
        assert_eq!(text, "Error: 500 Internal Server Error\n");
    }
}
