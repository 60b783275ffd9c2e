//! MCP configuration blocks.
//!
//! Builds the `mcpServers` JSON object for stdio and URL transports and the
//! per-client instructions telling the reader where that JSON goes.
//!
//! # Examples
//!
//! ```
//! use composer_engine::fields::EnvMap;
//! use composer_engine::mcp::{McpServerEntry, McpServersDocument};
//!
//! let doc = McpServersDocument::single(
//!     "postgres",
//!     McpServerEntry::stdio("npx", vec!["-y".into(), "pkg".into()], EnvMap::new()),
//! );
//! let json = doc.to_pretty_json().unwrap();
//! assert!(json.contains("\"mcpServers\""));
//! assert!(!json.contains("\"env\""));
//! ```

use crate::fields::{self, EnvMap, is_reserved_key};
use composer_core::McpClient;
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Server name used when the field is blank or reserved.
pub const DEFAULT_SERVER_NAME: &str = "server";

/// One server entry under `mcpServers`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum McpServerEntry {
    /// Server launched as a subprocess speaking over stdio.
    Stdio {
        /// Executable
        command: String,
        /// Arguments
        args: Vec<String>,
        /// Environment, omitted when empty
        #[serde(skip_serializing_if = "EnvMap::is_empty")]
        env: EnvMap,
    },
    /// Remote server reached by URL.
    Url {
        /// Endpoint
        url: String,
        /// Environment, omitted when empty
        #[serde(skip_serializing_if = "EnvMap::is_empty")]
        env: EnvMap,
    },
}

impl McpServerEntry {
    /// Creates a stdio entry.
    #[must_use]
    pub fn stdio(
        command: impl Into<String>,
        args: Vec<String>,
        env: EnvMap,
    ) -> Self {
        Self::Stdio {
            command: command.into(),
            args,
            env,
        }
    }

    /// Creates a URL entry.
    #[must_use]
    pub fn url(url: impl Into<String>, env: EnvMap) -> Self {
        Self::Url {
            url: url.into(),
            env,
        }
    }
}

/// The `{"mcpServers": {...}}` document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct McpServersDocument {
    /// Servers keyed by name
    #[serde(rename = "mcpServers")]
    pub mcp_servers: BTreeMap<String, McpServerEntry>,
}

impl McpServersDocument {
    /// Creates a document holding a single server.
    ///
    /// Blank or reserved names are replaced by [`DEFAULT_SERVER_NAME`].
    #[must_use]
    pub fn single(name: &str, entry: McpServerEntry) -> Self {
        let name = if name.trim().is_empty() || is_reserved_key(name) {
            debug!(name, "unusable server name, using default");
            DEFAULT_SERVER_NAME
        } else {
            name
        };
        let mut mcp_servers = BTreeMap::new();
        mcp_servers.insert(name.to_string(), entry);
        Self { mcp_servers }
    }

    /// Serializes with 2-space indentation.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes into a fenced `json` code block.
    ///
    /// Serialization cannot fail for string-only data; if it ever does the
    /// block renders empty.
    #[must_use]
    pub fn to_fenced_block(&self) -> String {
        match self.to_pretty_json() {
            Ok(json) => format!("```json\n{json}\n```"),
            Err(e) => {
                warn!(error = %e, "failed to serialize MCP servers block");
                String::new()
            }
        }
    }
}

fn field<'a>(values: &'a BTreeMap<String, String>, name: &str) -> &'a str {
    values.get(name).map_or("", String::as_str)
}

fn env_or_empty(values: &BTreeMap<String, String>) -> EnvMap {
    fields::parse_env(field(values, "env")).unwrap_or_else(|e| {
        debug!(error = %e, "malformed env field, using empty mapping");
        EnvMap::new()
    })
}

/// Builds the fenced JSON block for a stdio server from resolved field values.
///
/// Reads `serverName`, `command`, `args` and `env`. Malformed `args` or
/// `env` degrade to empty.
#[must_use]
pub fn stdio_block(values: &BTreeMap<String, String>) -> String {
    let args = fields::parse_args(field(values, "args")).unwrap_or_else(|e| {
        debug!(error = %e, "malformed args field, using empty list");
        Vec::new()
    });
    let entry = McpServerEntry::stdio(field(values, "command"), args, env_or_empty(values));
    McpServersDocument::single(field(values, "serverName"), entry).to_fenced_block()
}

/// Builds the fenced JSON block for a URL server from resolved field values.
///
/// Reads `serverName`, `url` and `env`.
#[must_use]
pub fn url_block(values: &BTreeMap<String, String>) -> String {
    let entry = McpServerEntry::url(field(values, "url"), env_or_empty(values));
    McpServersDocument::single(field(values, "serverName"), entry).to_fenced_block()
}

/// Returns the setup instructions for a client.
#[must_use]
pub const fn target_header(client: McpClient) -> &'static str {
    match client {
        McpClient::ClaudeDesktop => {
            "## MCP Setup: Claude Desktop\n\n\
             Add the configuration below to `claude_desktop_config.json` under the `mcpServers` key:\n\n\
             - macOS: `~/Library/Application Support/Claude/claude_desktop_config.json`\n\
             - Windows: `%APPDATA%\\Claude\\claude_desktop_config.json`\n\n\
             Restart Claude Desktop after saving."
        }
        McpClient::Vscode => {
            "## MCP Setup: VS Code\n\n\
             Add the server to `.vscode/mcp.json` in your workspace.\n\n\
             VS Code lists servers under the `servers` key: copy the entries from \
             `mcpServers` below into `servers`."
        }
        McpClient::Cursor => {
            "## MCP Setup: Cursor\n\n\
             Add the configuration below to `.cursor/mcp.json` in your project \
             (or `~/.cursor/mcp.json` for all projects) under the `mcpServers` key."
        }
        McpClient::Windsurf => {
            "## MCP Setup: Windsurf\n\n\
             Add the configuration below to `~/.codeium/windsurf/mcp_config.json` \
             under the `mcpServers` key, then refresh the MCP panel."
        }
        McpClient::ClaudeCode => {
            "## MCP Setup: Claude Code\n\n\
             Add the configuration below to `.mcp.json` at the project root under the \
             `mcpServers` key, or register it with `claude mcp add`."
        }
    }
}

/// Builds the client instructions from resolved field values.
///
/// Unknown or missing `client` values fall back to Claude Desktop.
#[must_use]
pub fn client_header(values: &BTreeMap<String, String>) -> String {
    target_header(McpClient::from_str_lenient(field(values, "client"))).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn test_stdio_block_omits_empty_env() {
        let out = stdio_block(&values(&[
            ("serverName", "postgres"),
            ("command", "npx"),
            ("args", r#"["-y","pkg"]"#),
            ("env", "[]"),
        ]));
        let expected = "```json\n{\n  \"mcpServers\": {\n    \"postgres\": {\n      \"command\": \"npx\",\n      \"args\": [\n        \"-y\",\n        \"pkg\"\n      ]\n    }\n  }\n}\n```";
        assert_eq!(out, expected);
    }

    #[test]
    fn test_stdio_block_with_env() {
        let out = stdio_block(&values(&[
            ("serverName", "github"),
            ("command", "npx"),
            ("args", "[]"),
            ("env", r#"{"__proto__": "x", "API_KEY": "secret"}"#),
        ]));
        let json = out
            .trim_start_matches("```json\n")
            .trim_end_matches("\n```");
        let parsed: serde_json::Value = serde_json::from_str(json).unwrap();
        assert_eq!(
            parsed["mcpServers"]["github"]["env"],
            serde_json::json!({"API_KEY": "secret"})
        );
        assert_eq!(parsed["mcpServers"]["github"]["args"], serde_json::json!([]));
    }

    #[test]
    fn test_stdio_block_env_in_author_order() {
        let out = stdio_block(&values(&[
            ("serverName", "svc"),
            ("command", "run"),
            ("env", r#"{"Z": "1", "A": "2"}"#),
        ]));
        let z = out.find("\"Z\"").unwrap();
        let a = out.find("\"A\"").unwrap();
        assert!(z < a, "env keys reordered:\n{out}");
    }

    #[test]
    fn test_stdio_block_malformed_json_degrades() {
        let out = stdio_block(&values(&[
            ("serverName", "x"),
            ("command", "run"),
            ("args", "not json"),
            ("env", "{broken"),
        ]));
        assert!(out.contains("\"args\": []"));
        assert!(!out.contains("\"env\""));
    }

    #[test]
    fn test_url_block_shape() {
        let out = url_block(&values(&[
            ("serverName", "remote"),
            ("url", "https://example.com/mcp"),
        ]));
        assert!(out.contains("\"url\": \"https://example.com/mcp\""));
        assert!(!out.contains("\"command\""));
        assert!(!out.contains("\"args\""));
    }

    #[test]
    fn test_reserved_server_name_replaced() {
        let doc = McpServersDocument::single(
            "__proto__",
            McpServerEntry::url("u", EnvMap::new()),
        );
        assert!(doc.mcp_servers.contains_key(DEFAULT_SERVER_NAME));
    }

    #[test]
    fn test_client_header_known_clients() {
        for client in McpClient::ALL {
            let header = client_header(&values(&[("client", client.as_str())]));
            assert!(header.contains(client.servers_key()));
        }
        assert!(client_header(&values(&[("client", "vscode")])).contains(".vscode/mcp.json"));
        assert!(client_header(&values(&[("client", "claude-code")])).contains(".mcp.json"));
    }

    #[test]
    fn test_client_header_unknown_falls_back() {
        let fallback = target_header(McpClient::ClaudeDesktop);
        assert_eq!(client_header(&values(&[("client", "emacs")])), fallback);
        assert_eq!(client_header(&BTreeMap::new()), fallback);
    }
}
