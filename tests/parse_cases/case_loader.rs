/// Parse-case loader.
///
/// Loads the table-driven parsing cases from `parse_cases.json`. A case
/// names an input string plus the component values it should parse to;
/// expectations are optional field by field, and the rendered form
/// defaults to the input itself (most URLs round-trip unchanged).
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
#[allow(dead_code)]
pub enum Case {
    /// A parsing test case
    Test(ParseCase),
    /// A comment line (string)
    Comment(String),
}

#[derive(Debug, Deserialize, Clone)]
pub struct ParseCase {
    pub input: String,
    #[serde(default)]
    pub scheme: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub port: Option<u16>,
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub parameters: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
    #[serde(default)]
    pub fragment: Option<String>,
    /// Expected canonical rendering; defaults to `input`.
    #[serde(default)]
    pub rendered: Option<String>,
    /// When true, parsing must fail.
    #[serde(default)]
    pub error: Option<bool>,
}

impl ParseCase {
    pub fn expects_error(&self) -> bool {
        self.error.unwrap_or(false)
    }

    pub fn expected_rendering(&self) -> &str {
        self.rendered.as_deref().unwrap_or(&self.input)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CaseOutcome {
    pub passed: usize,
    pub failed: usize,
    pub failures: Vec<CaseFailure>,
}

#[derive(Debug, Clone)]
pub struct CaseFailure {
    pub case_num: usize,
    pub input: String,
    pub field: String,
    pub expected: String,
    pub actual: String,
}

impl CaseOutcome {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn summary(&self) -> String {
        format!("Passed: {}, Failed: {}", self.passed, self.failed)
    }
}
