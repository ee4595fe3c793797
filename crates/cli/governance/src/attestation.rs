use anyhow::{bail, Context};
use serde_json::Value;
use sn_types::hex_to_bytes;
use sn_utils_cli::{GovernanceConfig, ATTESTATION_PATH};
use url::Url;

/// Endpoint serving the enclave's attestation document.
///
/// Resolved against the enclave URL, so any path on it is replaced.
pub fn attestation_url(enclave_url: &str) -> anyhow::Result<Url> {
    let base = Url::parse(enclave_url)
        .with_context(|| format!("Invalid enclave URL: {enclave_url}"))?;
    Ok(base.join(ATTESTATION_PATH)?)
}

/// Fetches the hex attestation document from a running enclave.
pub async fn fetch_attestation(http: &reqwest::Client, enclave_url: &str) -> anyhow::Result<String> {
    let url = attestation_url(enclave_url)?;
    log::info!("fetching attestation from {url}");

    let response = http.get(url.clone()).send().await?;
    let status = response.status();
    if !status.is_success() {
        bail!(
            "Failed to fetch attestation: {} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or_default()
        );
    }

    let payload: Value = response
        .json()
        .await
        .with_context(|| format!("Attestation response from {url} is not JSON"))?;

    match payload.get("attestation").and_then(Value::as_str) {
        Some(attestation) if !attestation.is_empty() => Ok(attestation.to_string()),
        _ => bail!("Attestation missing in response payload."),
    }
}

/// Attestation bytes from `--attestation-hex`, or fetched from the enclave.
pub async fn resolve_attestation(
    http: &reqwest::Client,
    config: &GovernanceConfig,
) -> anyhow::Result<Vec<u8>> {
    let attestation_hex = match &config.attestation_hex {
        Some(hex) => hex.clone(),
        None => fetch_attestation(http, config.required_enclave_url()?).await?,
    };
    Ok(hex_to_bytes(&attestation_hex)?)
}
