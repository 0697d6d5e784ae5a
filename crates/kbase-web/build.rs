use std::env;
use std::fs;
use std::io;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Default, Serialize)]
struct WebBootstrapConfig {
    api_base_url: Option<String>,
    toast_ttl_ms: Option<u64>,
}

fn main() {
    println!("cargo:rerun-if-env-changed=KBASE_API_BASE_URL");
    println!("cargo:rerun-if-env-changed=KBASE_TOAST_TTL_MS");

    if let Err(error) = write_web_bootstrap_config() {
        println!("cargo:warning=failed to generate web bootstrap config: {error}");
    }
}

fn write_web_bootstrap_config() -> io::Result<()> {
    load_workspace_dotenv();

    let out_dir = env::var_os("OUT_DIR")
        .map(PathBuf::from)
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "OUT_DIR is not set"))?;
    fs::create_dir_all(&out_dir)?;

    let toast_ttl_ms = match env_var_trimmed("KBASE_TOAST_TTL_MS") {
        Some(raw) => match raw.parse::<u64>() {
            Ok(value) => Some(value),
            Err(error) => {
                println!("cargo:warning=ignoring KBASE_TOAST_TTL_MS={raw}: {error}");
                None
            }
        },
        None => None,
    };

    let config = WebBootstrapConfig {
        api_base_url: env_var_trimmed("KBASE_API_BASE_URL"),
        toast_ttl_ms,
    };

    let content = serde_json::to_string_pretty(&config)
        .map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error.to_string()))?;
    fs::write(out_dir.join("web-bootstrap.json"), content)?;
    Ok(())
}

fn load_workspace_dotenv() {
    let manifest_dir =
        env::var_os("CARGO_MANIFEST_DIR").map_or_else(|| PathBuf::from("."), PathBuf::from);
    let candidate = manifest_dir.join("..").join("..").join(".env");
    if candidate.exists() {
        let _ = dotenvy::from_path(candidate);
    }
}

fn env_var_trimmed(name: &str) -> Option<String> {
    let value = env::var(name).ok()?;
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
