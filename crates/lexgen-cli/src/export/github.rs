//! Push to a newly created GitHub repository.
//!
//! One `POST /user/repos`, then one contents `PUT` per file in generation
//! order. The first failing request aborts the push; files already uploaded
//! stay in the repository.

use std::cell::Cell;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use lexgen_compiler::model::AppInfo;
use lexgen_compiler::GeneratedCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::{ExportError, ExportReport, Exporter};

pub const GITHUB_API: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("lexgen/", env!("CARGO_PKG_VERSION"));
const ACCEPT: &str = "application/vnd.github.v3+json";

#[derive(Debug, Serialize)]
struct CreateRepo<'a> {
    name: &'a str,
    description: &'a str,
    private: bool,
    auto_init: bool,
}

#[derive(Debug, Deserialize)]
struct Owner {
    login: String,
}

#[derive(Debug, Deserialize)]
struct CreatedRepo {
    owner: Owner,
    html_url: String,
}

#[derive(Debug, Serialize)]
struct PutContents {
    message: String,
    content: String,
}

pub struct GithubPusher {
    /// Taken on the first push and dropped when it returns.
    token: Cell<Option<String>>,
    repo: String,
    description: String,
    api_base: String,
}

impl GithubPusher {
    pub fn new(token: String, repo: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            token: Cell::new(Some(token)),
            repo: repo.into(),
            description: description.into(),
            api_base: GITHUB_API.to_string(),
        }
    }

    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn create_repo(&self, agent: &ureq::Agent, token: &str) -> Result<CreatedRepo, ExportError> {
        let body = CreateRepo {
            name: &self.repo,
            description: &self.description,
            private: false,
            auto_init: false,
        };

        let response = agent
            .post(&format!("{}/user/repos", self.api_base))
            .set("Authorization", &format!("token {}", token))
            .set("Accept", ACCEPT)
            .set("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(remote_error)?;

        response.into_json().map_err(|e| ExportError::Remote {
            message: format!("unexpected create-repository response: {}", e),
        })
    }

    fn put_file(
        &self,
        agent: &ureq::Agent,
        token: &str,
        owner: &str,
        path: &str,
        content: &str,
    ) -> Result<(), ExportError> {
        let body = PutContents {
            message: format!("Add {}", path),
            content: encode_content(content),
        };

        agent
            .put(&contents_url(&self.api_base, owner, &self.repo, path))
            .set("Authorization", &format!("token {}", token))
            .set("Accept", ACCEPT)
            .set("User-Agent", USER_AGENT)
            .send_json(&body)
            .map_err(remote_error)?;

        debug!(path, "uploaded file");
        Ok(())
    }
}

impl Exporter for GithubPusher {
    fn export(&self, files: &GeneratedCode) -> Result<ExportReport, ExportError> {
        let token = self.token.take().ok_or(ExportError::MissingToken)?;
        let agent = ureq::agent();

        let repo = self.create_repo(&agent, &token)?;
        info!(repo = %self.repo, owner = %repo.owner.login, "created repository");

        for (path, content) in files.iter() {
            self.put_file(&agent, &token, &repo.owner.login, path, content)?;
        }

        info!(url = %repo.html_url, files = files.len(), "pushed repository");
        Ok(ExportReport {
            destination: repo.html_url,
            files: files.len(),
        })
    }
}

/// Repository description: the app description, or a generated one.
pub fn repo_description(info: &AppInfo) -> String {
    if info.description.is_empty() {
        format!("{} - An AT Protocol application", info.app_name)
    } else {
        info.description.clone()
    }
}

fn contents_url(api_base: &str, owner: &str, repo: &str, path: &str) -> String {
    format!("{}/repos/{}/{}/contents/{}", api_base, owner, repo, path)
}

/// Base64 of the UTF-8 bytes.
fn encode_content(content: &str) -> String {
    STANDARD.encode(content.as_bytes())
}

fn remote_error(err: ureq::Error) -> ExportError {
    let message = match err {
        ureq::Error::Status(code, response) => {
            let api_message = response
                .into_json::<serde_json::Value>()
                .ok()
                .and_then(|v| v.get("message").and_then(|m| m.as_str()).map(str::to_string));
            match api_message {
                Some(message) => format!("{} ({})", message, code),
                None => format!("HTTP {}", code),
            }
        }
        ureq::Error::Transport(transport) => transport.to_string(),
    };
    ExportError::Remote { message }
}
