use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::CodeExecutionError;

/// Languages offered by the code runner, with the endpoint's numeric ids.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Language {
    #[default]
    Python,
    JavaScript,
    Java,
    Cpp,
    Go,
    Rust,
}

impl Language {
    pub const ALL: [Self; 6] = [
        Self::Python,
        Self::JavaScript,
        Self::Java,
        Self::Cpp,
        Self::Go,
        Self::Rust,
    ];

    #[must_use]
    pub fn id(self) -> u32 {
        match self {
            Self::Python => 71,
            Self::JavaScript => 63,
            Self::Java => 62,
            Self::Cpp => 54,
            Self::Go => 60,
            Self::Rust => 73,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Python => "Python 3",
            Self::JavaScript => "JavaScript",
            Self::Java => "Java",
            Self::Cpp => "C++",
            Self::Go => "Go",
            Self::Rust => "Rust",
        }
    }

    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Python => "python",
            Self::JavaScript => "javascript",
            Self::Java => "java",
            Self::Cpp => "cpp",
            Self::Go => "go",
            Self::Rust => "rust",
        }
    }

    #[must_use]
    pub fn from_slug(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.slug() == value)
    }

    /// Starter code shown when the language is picked.
    #[must_use]
    pub fn template(self) -> &'static str {
        match self {
            Self::Python => "print(\"Hello, world!\")\n",
            Self::JavaScript => "console.log(\"Hello, world!\");\n",
            Self::Java => {
                "public class Main {\n    public static void main(String[] args) {\n        System.out.println(\"Hello, world!\");\n    }\n}\n"
            }
            Self::Cpp => {
                "#include <iostream>\n\nint main() {\n    std::cout << \"Hello, world!\" << std::endl;\n}\n"
            }
            Self::Go => {
                "package main\n\nimport \"fmt\"\n\nfunc main() {\n    fmt.Println(\"Hello, world!\")\n}\n"
            }
            Self::Rust => "fn main() {\n    println!(\"Hello, world!\");\n}\n",
        }
    }
}

/// Normalized result of one run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ExecutionOutcome {
    pub stdout: String,
    pub stderr: String,
    pub compile_output: String,
    pub status: String,
}

impl ExecutionOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        self.status.eq_ignore_ascii_case("accepted")
    }

    /// The text to show: stdout, else compiler output, else stderr.
    #[must_use]
    pub fn display_output(&self) -> &str {
        [&self.stdout, &self.compile_output, &self.stderr]
            .into_iter()
            .find(|text| !text.trim().is_empty())
            .map_or("", String::as_str)
    }
}

#[derive(Clone)]
pub struct CodeExecutionService {
    client: Client,
    endpoint: Option<String>,
}

impl CodeExecutionService {
    #[must_use]
    pub fn new(endpoint: Option<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.endpoint.is_some()
    }

    /// Run `source` once. No retries.
    ///
    /// # Errors
    ///
    /// Returns `CodeExecutionError` when the runner is disabled, the source is
    /// empty, or the request fails.
    pub async fn execute(
        &self,
        language: Language,
        source: &str,
        stdin: &str,
    ) -> Result<ExecutionOutcome, CodeExecutionError> {
        let endpoint = self
            .endpoint
            .as_deref()
            .ok_or(CodeExecutionError::Disabled)?;
        if source.trim().is_empty() {
            return Err(CodeExecutionError::EmptySource);
        }

        tracing::info!(language = language.slug(), "submitting code for execution");
        let payload = ExecuteRequest {
            source_code: source,
            language_id: language.id(),
            stdin,
        };
        let response = self.client.post(endpoint).json(&payload).send().await?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), "code execution request failed");
            return Err(CodeExecutionError::HttpStatus(response.status()));
        }

        let body: ExecuteResponse = response.json().await?;
        Ok(body.into_outcome())
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecuteRequest<'a> {
    source_code: &'a str,
    language_id: u32,
    stdin: &'a str,
}

#[derive(Debug, Default, Deserialize)]
struct ExecuteResponse {
    #[serde(default)]
    stdout: Option<String>,
    #[serde(default)]
    stderr: Option<String>,
    #[serde(default)]
    compile_output: Option<String>,
    #[serde(default)]
    status: Option<ExecuteStatus>,
}

#[derive(Debug, Deserialize)]
struct ExecuteStatus {
    description: String,
}

impl ExecuteResponse {
    fn into_outcome(self) -> ExecutionOutcome {
        ExecutionOutcome {
            stdout: self.stdout.unwrap_or_default(),
            stderr: self.stderr.unwrap_or_default(),
            compile_output: self.compile_output.unwrap_or_default(),
            status: self
                .status
                .map_or_else(|| "Unknown".to_string(), |status| status.description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_camel_case_keys() {
        let payload = ExecuteRequest {
            source_code: "print(1)",
            language_id: Language::Python.id(),
            stdin: "",
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["sourceCode"], "print(1)");
        assert_eq!(json["languageId"], 71);
        assert_eq!(json["stdin"], "");
    }

    #[test]
    fn response_with_nulls_parses() {
        let body: ExecuteResponse = serde_json::from_str(
            r#"{"stdout":null,"stderr":null,"compile_output":"main.rs:1: error","status":{"description":"Compilation Error"}}"#,
        )
        .unwrap();
        let outcome = body.into_outcome();
        assert_eq!(outcome.status, "Compilation Error");
        assert_eq!(outcome.display_output(), "main.rs:1: error");
        assert!(!outcome.is_accepted());
    }

    #[tokio::test]
    async fn disabled_without_endpoint() {
        let service = CodeExecutionService::new(None);
        assert!(!service.enabled());
        let err = service
            .execute(Language::Rust, "fn main() {}", "")
            .await
            .unwrap_err();
        assert!(matches!(err, CodeExecutionError::Disabled));
    }

    #[test]
    fn language_slugs_round_trip() {
        for language in Language::ALL {
            assert_eq!(Language::from_slug(language.slug()), Some(language));
        }
    }
}
