//! Config commands.

use std::path::Path;

use anyhow::Result;

use crate::config::ClientConfig;

/// Values given to `tienda config set`.
#[derive(Debug, Default)]
pub struct Changes {
    pub server: Option<String>,
    pub cookie: Option<String>,
    pub csrf_token: Option<String>,
    pub locale: Option<String>,
}

/// Print the effective config. The session cookie is masked.
pub fn show(config: &ClientConfig, output_json: bool) -> Result<()> {
    let mut shown = config.clone();
    if !shown.cookie.is_empty() {
        shown.cookie = "********".into();
    }
    if output_json {
        return super::print_json(&shown);
    }
    let or_dash = |s: &str| if s.is_empty() { "-".to_string() } else { s.to_string() };
    println!("{:12} {}", "SERVER", or_dash(&shown.server));
    println!("{:12} {}", "COOKIE", or_dash(&shown.cookie));
    println!("{:12} {}", "CSRF", or_dash(&shown.csrf_token));
    println!("{:12} {}", "LOCALE", shown.locale());
    println!();
    println!("{:20} {}", "ENDPOINT", "ROUTE");
    let e = &shown.endpoints;
    for (name, route) in [
        ("lookup", &e.lookup),
        ("presence", &e.presence),
        ("categories", &e.categories),
        ("transfer", &e.transfer),
        ("label", &e.label),
        ("register_product", &e.register_product),
        ("add_inventory", &e.add_inventory),
    ] {
        println!("{:20} {}", name, route);
    }
    Ok(())
}

/// Apply `changes` to the config file.
pub fn set(config_path: &Path, changes: Changes) -> Result<()> {
    let mut config = ClientConfig::load(config_path)?;
    apply(&mut config, changes)?;
    config.save(config_path)?;
    println!("Config updated: {}", config_path.display());
    Ok(())
}

fn apply(config: &mut ClientConfig, changes: Changes) -> Result<()> {
    if let Some(server) = changes.server {
        if !server.starts_with("http://") && !server.starts_with("https://") {
            anyhow::bail!("Server URL must start with http:// or https://.");
        }
        config.server = server;
    }
    if let Some(cookie) = changes.cookie {
        config.cookie = cookie;
    }
    if let Some(token) = changes.csrf_token {
        config.csrf_token = token;
    }
    if let Some(locale) = changes.locale {
        config.locale = locale;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_keeps_unchanged_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        set(
            &path,
            Changes {
                server: Some("http://localhost:8000".into()),
                locale: Some("en".into()),
                ..Changes::default()
            },
        )
        .unwrap();
        set(
            &path,
            Changes {
                csrf_token: Some("tok".into()),
                ..Changes::default()
            },
        )
        .unwrap();

        let config = ClientConfig::load(&path).unwrap();
        assert_eq!(config.server, "http://localhost:8000");
        assert_eq!(config.locale, "en");
        assert_eq!(config.csrf_token, "tok");
    }

    #[test]
    fn rejects_server_without_scheme() {
        let mut config = ClientConfig::default();
        let err = apply(
            &mut config,
            Changes {
                server: Some("localhost:8000".into()),
                ..Changes::default()
            },
        );
        assert!(err.is_err());
        assert!(config.server.is_empty());
    }
}
