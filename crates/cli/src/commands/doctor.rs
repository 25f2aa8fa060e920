//! Doctor command - validate configuration and show status

use anyhow::Result;
use serde::Serialize;
use std::path::PathBuf;

use crate::args::DoctorArgs;
use crate::commands::open_store;
use crate::config::{AppConfig, StorageBackend};

#[derive(Debug, Serialize)]
struct DoctorReport {
    config: CheckResult,
    storage: CheckResult,
    server: CheckResult,
    posts: CheckResult,
    overall: String,
}

#[derive(Debug, Serialize)]
struct CheckResult {
    status: String,
    message: String,
    details: Option<serde_json::Value>,
}

impl CheckResult {
    fn ok(message: impl Into<String>) -> Self {
        Self {
            status: "ok".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn warn(message: impl Into<String>) -> Self {
        Self {
            status: "warn".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
            details: None,
        }
    }

    fn with_details(mut self, details: serde_json::Value) -> Self {
        self.details = Some(details);
        self
    }

    fn is_ok(&self) -> bool {
        self.status == "ok"
    }

    fn is_error(&self) -> bool {
        self.status == "error"
    }
}

pub async fn execute(args: DoctorArgs, config_path: Option<PathBuf>) -> Result<()> {
    let mut report = DoctorReport {
        config: CheckResult::error("Not checked"),
        storage: CheckResult::error("Not checked"),
        server: CheckResult::error("Not checked"),
        posts: CheckResult::error("Not checked"),
        overall: "error".to_string(),
    };

    let config = match AppConfig::load(config_path.as_deref()) {
        Ok(c) => {
            report.config = CheckResult::ok("Configuration loaded successfully");
            Some(c)
        }
        Err(e) => {
            report.config = CheckResult::error(format!("Failed to load config: {:#}", e));
            None
        }
    };

    if let Some(ref config) = config {
        report.storage = check_storage(config).await;
        report.server = check_server(config);
        report.posts = check_posts(config);
    }

    let checks = [
        &report.config,
        &report.storage,
        &report.server,
        &report.posts,
    ];

    let has_error = checks.iter().any(|c| c.is_error());
    let all_ok = checks.iter().all(|c| c.is_ok());

    report.overall = if has_error {
        "error".to_string()
    } else if all_ok {
        "ok".to_string()
    } else {
        "warn".to_string()
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    if report.overall == "error" {
        std::process::exit(1);
    }

    Ok(())
}

async fn check_storage(config: &AppConfig) -> CheckResult {
    let store = match open_store(config).await {
        Ok(s) => s,
        Err(e) => return CheckResult::error(format!("{:#}", e)),
    };

    match store.collection_names().await {
        Ok(collections) => {
            let details = serde_json::json!({
                "backend": store.backend(),
                "database_name": store.database_name(),
                "database_url": config.storage.database_url(),
                "collections": collections,
            });
            let message = format!(
                "Backend: {}, Database: {}",
                store.backend(),
                store.database_name()
            );

            if config.storage.backend == StorageBackend::Memory {
                CheckResult::warn(format!("{} (posts are not persisted)", message))
                    .with_details(details)
            } else {
                CheckResult::ok(message).with_details(details)
            }
        }
        Err(e) => CheckResult::error(format!("Store opened but not usable: {}", e)),
    }
}

fn check_server(config: &AppConfig) -> CheckResult {
    let server = &config.server;

    if server.host.trim().is_empty() {
        return CheckResult::error("server.host is empty");
    }

    if server.port == 0 {
        return CheckResult::warn(format!(
            "Listening on {} with an ephemeral port",
            server.host
        ));
    }

    CheckResult::ok(format!(
        "Listening on {}:{}, CORS: {}",
        server.host,
        server.port,
        if server.cors_permissive {
            "permissive"
        } else {
            "off"
        }
    ))
}

fn check_posts(config: &AppConfig) -> CheckResult {
    let posts = &config.posts;

    if posts.max_limit == 0 {
        return CheckResult::error("posts.max_limit must be greater than zero");
    }

    if posts.default_limit > posts.max_limit {
        return CheckResult::warn(format!(
            "posts.default_limit ({}) exceeds max_limit ({}); lists are capped at {}",
            posts.default_limit, posts.max_limit, posts.max_limit
        ));
    }

    CheckResult::ok(format!(
        "Default limit: {}, Max limit: {}",
        posts.default_limit, posts.max_limit
    ))
}

fn print_report(report: &DoctorReport) {
    println!("creator-studio Doctor Report");
    println!("============================");
    println!();

    print_check("Config", &report.config);
    print_check("Storage", &report.storage);
    print_check("Server", &report.server);
    print_check("Posts", &report.posts);

    println!();
    let symbol = match report.overall.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} Overall: {}", symbol, report.overall.to_uppercase());

    if report.overall == "ok" {
        println!();
        println!("Ready to run! Try: creator-studio serve");
    }
}

fn print_check(name: &str, result: &CheckResult) {
    let symbol = match result.status.as_str() {
        "ok" => "✓",
        "warn" => "⚠",
        _ => "✗",
    };
    println!("{} {}: {}", symbol, name, result.message);
}
