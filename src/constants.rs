//! Constants used throughout nscgen

/// Answers file extensions accepted by `--answers-file`
pub const JSON_EXTENSIONS: &[&str] = &["json"];
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// STDIN indicator for CLI arguments
pub const STDIN_INDICATOR: &str = "-";

/// Digest algorithm label carried by every `<pin>` element
pub const PIN_DIGEST_ALGORITHM: &str = "SHA-256";

/// XML declaration written at the top of the generated file
pub const XML_DECLARATION: &str = "<?xml version='1.0' encoding='utf-8'?>";

/// Element and attribute names of the network security config schema
pub mod schema {
    pub const NETWORK_SECURITY_CONFIG: &str = "network-security-config";
    pub const BASE_CONFIG: &str = "base-config";
    pub const DOMAIN_CONFIG: &str = "domain-config";
    pub const DEBUG_OVERRIDES: &str = "debug-overrides";
    pub const DOMAIN: &str = "domain";
    pub const PIN_SET: &str = "pin-set";
    pub const PIN: &str = "pin";
    pub const TRUST_ANCHORS: &str = "trust-anchors";
    pub const CERTIFICATES: &str = "certificates";

    pub const CLEARTEXT_TRAFFIC_PERMITTED: &str = "cleartextTrafficPermitted";
    pub const INCLUDE_SUBDOMAINS: &str = "includeSubdomains";
    pub const EXPIRATION: &str = "expiration";
    pub const DIGEST: &str = "digest";
    pub const SRC: &str = "src";
    pub const OVERRIDE_PINS: &str = "overridePins";
}

/// Documentation links shown by the wizard
pub mod docs {
    pub const OVERVIEW: &str =
        "https://developer.android.com/privacy-and-security/security-config";
    pub const CLEARTEXT: &str = "https://developer.android.com/privacy-and-security/security-config#CleartextTrafficPermitted";
    pub const BASE_CONFIG: &str =
        "https://developer.android.com/privacy-and-security/security-config#base-config";
    pub const TRUST_ANCHORS: &str =
        "https://developer.android.com/privacy-and-security/security-config#trust-anchors";
    pub const DOMAIN_CONFIG: &str =
        "https://developer.android.com/privacy-and-security/security-config#domain-config";
    pub const PIN_SET: &str =
        "https://developer.android.com/privacy-and-security/security-config#pin-set";
    pub const DEBUG_OVERRIDES: &str = "https://developer.android.com/privacy-and-security/security-config#TrustingDebugCa";
}

/// Prompt texts asked by the wizard.
///
/// Scripted prompters match responses on these exact strings.
pub mod prompts {
    pub const ROOT_CLEARTEXT: &str =
        "Do you want to enable cleartext traffic for the whole app?";
    pub const ADD_BASE_CONFIG: &str = "Do you want to add a base config?";
    pub const BASE_CLEARTEXT: &str = "Do you want to enable cleartext traffic for BaseConfig?";
    pub const ADD_DOMAIN_CONFIGS: &str = "Do you want to add domain configs?";
    pub const ANOTHER_DOMAIN_CONFIG: &str = "Do you want to add another domain config?";
    pub const DOMAIN_CLEARTEXT: &str =
        "Do you want to enable cleartext traffic for DomainConfig?";
    pub const DOMAIN_NAME: &str = "What domain do you want to add?";
    pub const INCLUDE_SUBDOMAINS: &str = "Do you want to include subdomains as well?";
    pub const ANOTHER_DOMAIN: &str = "Is there another domain you want to add?";
    pub const ADD_TRUST_ANCHORS: &str = "Do you want to provide trust anchors?";
    pub const TRUST_ANCHORS: &str = "Enter trust anchors for secure connections";
    pub const OVERRIDE_PINS: &str = "Should these certificates override pins?";
    pub const ADD_PIN_SET: &str = "Do you want to add a pin set?";
    pub const PIN_EXPIRATION: &str =
        "Expiration date for the pin set (leave blank if pins should not expire)";
    pub const PIN: &str =
        "Add a pin (base64 encoded SHA-256 digest of the X.509 SubjectPublicKeyInfo)";
    pub const ANOTHER_PIN: &str = "Do you want to add another pin?";
    pub const ADD_NESTED_DOMAIN_CONFIG: &str = "Do you want to add a nested domain config?";
    pub const ANOTHER_NESTED_DOMAIN_CONFIG: &str =
        "Do you want to add another nested domain config?";
    pub const ADD_DEBUG_OVERRIDES: &str = "Do you want to add overrides for debug builds?";
    pub const OUTPUT_PATH: &str = "Provide the file path where this config should be saved";
    pub const OUTPUT_PATH_RETRY: &str =
        "Without a file path the config cannot be saved, provide one";
}

/// Exit codes
pub mod exit_codes {
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
