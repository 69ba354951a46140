//! Company CLI commands - talk to a running API over HTTP
//!
//! Commands: list, get, create, update, delete
//!
//! ```bash
//! companyctl companies create --name Acme --location NYC
//! companyctl companies list --json | jq '.[].name'
//! ```

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use company_server::{Company, CompanyPayload};

/// Default API endpoint
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

// ============================================================================
// Args
// ============================================================================

#[derive(Parser, Debug)]
pub struct CompaniesArgs {
    /// API endpoint
    #[arg(long, env = "COMPANY_API_ENDPOINT", default_value = DEFAULT_ENDPOINT, global = true)]
    pub endpoint: String,

    /// Print raw JSON (for piping to jq)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: CompanyCommands,
}

#[derive(Subcommand, Debug)]
pub enum CompanyCommands {
    /// List companies
    List(ListArgs),
    /// Show one company
    Get(IdArgs),
    /// Create a company
    Create(FieldArgs),
    /// Replace a company's name and location
    Update(UpdateArgs),
    /// Delete a company
    Delete(IdArgs),
}

#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Rows to skip
    #[arg(long, default_value_t = 0)]
    pub skip: i64,

    /// Max rows to return
    #[arg(long, short, default_value_t = 100)]
    pub limit: i64,
}

#[derive(Parser, Debug)]
pub struct IdArgs {
    /// Company id
    pub id: i64,
}

#[derive(Parser, Debug)]
pub struct FieldArgs {
    /// Company name
    #[arg(long, short)]
    pub name: String,

    /// Company location
    #[arg(long, short)]
    pub location: String,
}

impl From<FieldArgs> for CompanyPayload {
    fn from(args: FieldArgs) -> Self {
        CompanyPayload::new(args.name, args.location)
    }
}

#[derive(Parser, Debug)]
pub struct UpdateArgs {
    /// Company id
    pub id: i64,

    #[command(flatten)]
    pub fields: FieldArgs,
}

// ============================================================================
// API Client
// ============================================================================

#[derive(Deserialize, Debug)]
struct MessageResponse {
    message: String,
}

#[derive(Deserialize, Debug)]
struct ErrorResponse {
    detail: Value,
}

/// Thin HTTP client for the company routes
pub struct CompanyClient {
    client: Client,
    endpoint: String,
}

impl CompanyClient {
    pub fn new(endpoint: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.endpoint, path)
    }

    pub async fn list(&self, skip: i64, limit: i64) -> Result<Vec<Company>> {
        let response = self
            .client
            .get(self.url("/companies"))
            .query(&[("skip", skip), ("limit", limit)])
            .send()
            .await
            .context("Failed to connect to company API")?;
        handle_response(response).await
    }

    pub async fn get(&self, id: i64) -> Result<Company> {
        let response = self
            .client
            .get(self.url(&format!("/companies/{id}")))
            .send()
            .await
            .context("Failed to connect to company API")?;
        handle_response(response).await
    }

    pub async fn create(&self, payload: &CompanyPayload) -> Result<Company> {
        let response = self
            .client
            .post(self.url("/companies"))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to company API")?;
        handle_response(response).await
    }

    pub async fn update(&self, id: i64, payload: &CompanyPayload) -> Result<Company> {
        let response = self
            .client
            .put(self.url(&format!("/companies/{id}")))
            .json(payload)
            .send()
            .await
            .context("Failed to connect to company API")?;
        handle_response(response).await
    }

    /// Returns the server's confirmation message.
    pub async fn delete(&self, id: i64) -> Result<String> {
        let response = self
            .client
            .delete(self.url(&format!("/companies/{id}")))
            .send()
            .await
            .context("Failed to connect to company API")?;
        let body: MessageResponse = handle_response(response).await?;
        Ok(body.message)
    }
}

async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();

    if status.is_success() {
        return response.json::<T>().await.context("Failed to parse response");
    }

    let error_text = response
        .text()
        .await
        .unwrap_or_else(|_| "Unknown error".to_string());

    match serde_json::from_str::<ErrorResponse>(&error_text) {
        Ok(err) => Err(anyhow!("{}: {}", status, describe_detail(&err.detail))),
        Err(_) => Err(anyhow!("{}: {}", status, error_text)),
    }
}

/// Render a `detail` value: a plain message, or a list of field errors.
fn describe_detail(detail: &Value) -> String {
    match detail {
        Value::String(s) => s.clone(),
        Value::Array(errors) => errors
            .iter()
            .map(|e| {
                let loc = e["loc"]
                    .as_array()
                    .map(|parts| {
                        parts
                            .iter()
                            .map(|p| match p {
                                Value::String(s) => s.clone(),
                                other => other.to_string(),
                            })
                            .collect::<Vec<_>>()
                            .join(".")
                    })
                    .unwrap_or_default();
                let msg = e["msg"].as_str().unwrap_or("invalid");
                format!("{loc}: {msg}")
            })
            .collect::<Vec<_>>()
            .join("; "),
        other => other.to_string(),
    }
}

// ============================================================================
// Main Dispatcher
// ============================================================================

pub async fn run_companies(args: CompaniesArgs) -> Result<()> {
    let client = CompanyClient::new(&args.endpoint)?;
    let json = args.json;

    match args.command {
        CompanyCommands::List(list) => {
            let companies = client.list(list.skip, list.limit).await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&companies)?);
            } else if companies.is_empty() {
                println!("(no companies)");
            } else {
                for company in &companies {
                    println!("{}", format_company(company));
                }
            }
        }
        CompanyCommands::Get(id) => {
            let company = client.get(id.id).await?;
            print_company(&company, json)?;
        }
        CompanyCommands::Create(fields) => {
            let company = client.create(&fields.into()).await?;
            print_company(&company, json)?;
        }
        CompanyCommands::Update(update) => {
            let company = client.update(update.id, &update.fields.into()).await?;
            print_company(&company, json)?;
        }
        CompanyCommands::Delete(id) => {
            let message = client.delete(id.id).await?;
            if json {
                println!("{}", serde_json::json!({ "message": message }));
            } else {
                println!("{message}");
            }
        }
    }

    Ok(())
}

fn format_company(company: &Company) -> String {
    format!("{:>6}  {}  ({})", company.id, company.name, company.location)
}

fn print_company(company: &Company, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(company)?);
    } else {
        println!("{}", format_company(company));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    use company_server::{build_router, AppState, MemoryCompanyStore, ServerConfig};

    /// Serve a fresh in-memory API on an ephemeral port.
    async fn spawn_api() -> String {
        let app = build_router(
            AppState::new(MemoryCompanyStore::new()),
            &ServerConfig::default(),
        )
        .unwrap();
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[test]
    fn detail_string_passes_through() {
        assert_eq!(describe_detail(&json!("Company not found")), "Company not found");
    }

    #[test]
    fn detail_list_is_flattened() {
        let detail = json!([
            {"loc": ["body", "name"], "msg": "Field required", "type": "missing"},
            {"loc": ["body", 3], "msg": "JSON decode error", "type": "json_invalid"}
        ]);
        assert_eq!(
            describe_detail(&detail),
            "body.name: Field required; body.3: JSON decode error"
        );
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        let client = CompanyClient::new("http://localhost:8000/").unwrap();
        assert_eq!(client.url("/companies"), "http://localhost:8000/companies");
    }

    #[test]
    fn human_format() {
        let company = Company {
            id: 7,
            name: "Acme".into(),
            location: "NYC".into(),
        };
        assert_eq!(format_company(&company), "     7  Acme  (NYC)");
    }

    #[tokio::test]
    async fn client_drives_full_lifecycle() {
        let client = CompanyClient::new(&spawn_api().await).unwrap();

        let created = client
            .create(&CompanyPayload::new("Acme", "NYC"))
            .await
            .unwrap();
        assert_eq!(created.id, 1);

        let updated = client
            .update(1, &CompanyPayload::new("Acme", "Boston"))
            .await
            .unwrap();
        assert_eq!(updated.location, "Boston");

        let listed = client.list(0, 10).await.unwrap();
        assert_eq!(listed, vec![updated.clone()]);
        assert_eq!(client.get(1).await.unwrap(), updated);

        let message = client.delete(1).await.unwrap();
        assert_eq!(message, "Company deleted successfully");

        let err = client.get(1).await.unwrap_err();
        assert_eq!(err.to_string(), "404 Not Found: Company not found");
    }
}
