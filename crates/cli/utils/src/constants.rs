pub const ADMIN_PRIVATE_KEY_ENV: &str = "ADMIN_PRIVATE_KEY";
pub const SUI_RPC_URL_ENV: &str = "SUI_RPC_URL";

pub const DEFAULT_LOGS_DIR: &str = "logs";
pub const DEFAULT_PACKAGES_ROOT: &str = "..";
pub const DEFAULT_CONFIG_FILE: &str = "script.config.json";

pub const ATTESTATION_PATH: &str = "/get_attestation";
