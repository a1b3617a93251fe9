use reqwest::Method;

pub(crate) fn parse_method(value: &str) -> anyhow::Result<Method> {
    let upper = value.trim().to_ascii_uppercase();
    if upper.is_empty() {
        anyhow::bail!("HTTP method is required");
    }
    Method::from_bytes(upper.as_bytes())
        .map_err(|_| anyhow::anyhow!("invalid HTTP method: {value}"))
}

pub(crate) fn normalize_path(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

pub(crate) fn parse_body(data: &str) -> anyhow::Result<serde_json::Value> {
    serde_json::from_str(data).map_err(|err| anyhow::anyhow!("invalid --data JSON: {err}"))
}

/// Pretty-prints JSON responses; anything else is printed as text.
pub(crate) fn format_response(data: &[u8]) -> String {
    match serde_json::from_slice::<serde_json::Value>(data) {
        Ok(value) => serde_json::to_string_pretty(&value)
            .unwrap_or_else(|_| String::from_utf8_lossy(data).into_owned()),
        Err(_) => String::from_utf8_lossy(data).into_owned(),
    }
}

pub(crate) fn print_response(data: &[u8]) {
    println!("{}", format_response(data));
}
