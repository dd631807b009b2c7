//! Interactive collector that walks the operator through the policy.
//!
//! The question sequence is fixed: root cleartext flag, base config, domain
//! configs (recursing into nested ones), debug overrides. Free-text answers
//! are taken verbatim.

use crate::{
    constants::{docs, prompts},
    error::Result,
    model::{
        BaseConfig, Certificates, DebugOverrides, Domain, DomainConfig, NetworkSecurityConfig,
        Pin, PinSet, TrustAnchors,
    },
    prompt::{ConfirmationConfig, PromptProvider, TextPromptConfig},
};
use std::path::PathBuf;

/// Splits a trust anchor answer such as `"user, system @raw/ca"` into sources.
pub fn parse_certificate_sources(input: &str) -> Vec<String> {
    input
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|source| !source.is_empty())
        .map(str::to_string)
        .collect()
}

pub struct Wizard<P: PromptProvider> {
    provider: P,
}

impl<P: PromptProvider> Wizard<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Runs the full question sequence and returns the assembled document.
    pub fn run(&self) -> Result<NetworkSecurityConfig> {
        println!("Welcome to nscgen!");
        println!();
        println!("I will guide you through the network security configuration.");
        println!("Full documentation of the format can be found here:\n{}", docs::OVERVIEW);
        println!();
        println!("First, start with the basics: cleartext traffic ({}).", docs::CLEARTEXT);

        let mut config = NetworkSecurityConfig::new(self.confirm(prompts::ROOT_CLEARTEXT, false)?);

        println!();
        println!("Next we'll set up the base config ({}).", docs::BASE_CONFIG);
        if let Some(base_config) = self.collect_base_config()? {
            config.add_base_config(base_config);
        }

        println!();
        for domain_config in self.collect_domain_configs()? {
            config.add_domain_config(domain_config);
        }

        println!();
        if let Some(debug_overrides) = self.collect_debug_overrides()? {
            config.add_debug_overrides(debug_overrides);
        }

        log::info!(
            "Collected {} domain config(s), base config: {}, debug overrides: {}",
            config.domain_configs.len(),
            config.base_config.is_some(),
            config.debug_overrides.is_some()
        );
        Ok(config)
    }

    pub fn collect_base_config(&self) -> Result<Option<BaseConfig>> {
        if !self.confirm(prompts::ADD_BASE_CONFIG, true)? {
            return Ok(None);
        }

        let mut base_config = BaseConfig::new(self.confirm(prompts::BASE_CLEARTEXT, false)?);

        println!();
        println!("We will set up trust anchors for the base config ({}).", docs::TRUST_ANCHORS);
        for certificate in self.collect_trust_anchors()?.certificates {
            base_config.add_certificate(certificate);
        }

        log::debug!("Added base config with {} certificate(s)", base_config.trust_anchors.certificates.len());
        Ok(Some(base_config))
    }

    /// Top-level domain configs; keeps going until the operator declines another.
    pub fn collect_domain_configs(&self) -> Result<Vec<DomainConfig>> {
        let mut domain_configs = Vec::new();
        if !self.confirm(prompts::ADD_DOMAIN_CONFIGS, true)? {
            return Ok(domain_configs);
        }

        println!();
        println!("Next we'll add all domain configs ({}).", docs::DOMAIN_CONFIG);
        println!();

        loop {
            domain_configs.push(self.collect_domain_config()?);
            if !self.confirm(prompts::ANOTHER_DOMAIN_CONFIG, true)? {
                break;
            }
        }
        Ok(domain_configs)
    }

    /// Collects one domain config, recursing for nested ones.
    pub fn collect_domain_config(&self) -> Result<DomainConfig> {
        let mut domain_config = DomainConfig::new(self.confirm(prompts::DOMAIN_CLEARTEXT, false)?);

        loop {
            let name = self.text(TextPromptConfig::new(prompts::DOMAIN_NAME))?;
            let include_subdomains = self.confirm(prompts::INCLUDE_SUBDOMAINS, true)?;
            log::debug!("Adding domain '{}'", name.trim());
            domain_config.add_domain(Domain::new(name.trim(), include_subdomains));

            if !self.confirm(prompts::ANOTHER_DOMAIN, false)? {
                break;
            }
        }

        if self.confirm(prompts::ADD_TRUST_ANCHORS, true)? {
            domain_config.add_trust_anchors(self.collect_trust_anchors()?);
        }

        if let Some(pin_set) = self.collect_pin_set()? {
            domain_config.add_pin_set(pin_set);
        }

        println!();
        if self.confirm(prompts::ADD_NESTED_DOMAIN_CONFIG, false)? {
            loop {
                println!();
                println!("Adding nested domain config...");
                domain_config.add_domain_config(self.collect_domain_config()?);

                if !self.confirm(prompts::ANOTHER_NESTED_DOMAIN_CONFIG, false)? {
                    println!("Leaving nested domain config...");
                    break;
                }
            }
        }

        log::debug!(
            "Collected domain config with {} domain(s), nesting depth {}",
            domain_config.domains.len(),
            domain_config.depth()
        );
        Ok(domain_config)
    }

    /// Asks for a list of certificate sources and whether they override pins.
    pub fn collect_trust_anchors(&self) -> Result<TrustAnchors> {
        println!("Available trust anchor options are: \"user\", \"system\", \"@raw/{{your_resource}}\"");
        let answer = self.text(TextPromptConfig::new(prompts::TRUST_ANCHORS).allow_empty())?;
        let sources = parse_certificate_sources(&answer);

        let override_pins =
            !sources.is_empty() && self.confirm(prompts::OVERRIDE_PINS, false)?;

        Ok(sources
            .into_iter()
            .map(|source| Certificates::with_override_pins(source, override_pins))
            .collect())
    }

    pub fn collect_pin_set(&self) -> Result<Option<PinSet>> {
        println!("Pin sets are described here: {}", docs::PIN_SET);
        if !self.confirm(prompts::ADD_PIN_SET, true)? {
            return Ok(None);
        }

        let expiration = self.text(TextPromptConfig::new(prompts::PIN_EXPIRATION).allow_empty())?;
        let mut pin_set = match expiration.trim() {
            "" => PinSet::new(),
            date => PinSet::with_expiration(date),
        };

        loop {
            pin_set.add_pin(Pin::new(self.text(TextPromptConfig::new(prompts::PIN))?));
            if !self.confirm(prompts::ANOTHER_PIN, false)? {
                break;
            }
        }

        log::debug!("Added pin set with {} pin(s)", pin_set.pins.len());
        Ok(Some(pin_set))
    }

    pub fn collect_debug_overrides(&self) -> Result<Option<DebugOverrides>> {
        println!("Debug overrides are described here: {}", docs::DEBUG_OVERRIDES);
        if !self.confirm(prompts::ADD_DEBUG_OVERRIDES, true)? {
            return Ok(None);
        }

        println!("We'll set up trust anchors for debug overrides.");
        let mut debug_overrides = DebugOverrides::new();
        for certificate in self.collect_trust_anchors()?.certificates {
            debug_overrides.add_certificate(certificate);
        }
        Ok(Some(debug_overrides))
    }

    /// Asks for the destination file until a non-empty path is given.
    pub fn ask_output_path(&self) -> Result<PathBuf> {
        let mut answer = self.text(TextPromptConfig::new(prompts::OUTPUT_PATH).allow_empty())?;
        while answer.trim().is_empty() {
            answer = self.text(TextPromptConfig::new(prompts::OUTPUT_PATH_RETRY).allow_empty())?;
        }
        Ok(PathBuf::from(answer.trim()))
    }

    fn confirm(&self, prompt: &str, default: bool) -> Result<bool> {
        self.provider.prompt_confirmation(&ConfirmationConfig::new(prompt, default))
    }

    fn text(&self, config: TextPromptConfig) -> Result<String> {
        self.provider.prompt_text(&config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::automatic_impl::AutomaticPrompter;

    #[test]
    fn splits_sources_on_commas_and_whitespace() {
        assert_eq!(
            parse_certificate_sources("user, system  @raw/my_ca,@raw/other"),
            vec!["user", "system", "@raw/my_ca", "@raw/other"]
        );
        assert!(parse_certificate_sources(" , ").is_empty());
    }

    #[test]
    fn trust_anchors_apply_override_answer_to_every_source() {
        let provider = AutomaticPrompter::new()
            .with_text_response(prompts::TRUST_ANCHORS, "user system")
            .with_confirmation_response(prompts::OVERRIDE_PINS, true);
        let anchors = Wizard::new(provider).collect_trust_anchors().unwrap();

        assert_eq!(
            anchors.certificates,
            vec![
                Certificates::with_override_pins("user", true),
                Certificates::with_override_pins("system", true)
            ]
        );
    }

    #[test]
    fn empty_trust_anchor_answer_skips_override_question() {
        let wizard = Wizard::new(AutomaticPrompter::new());
        let anchors = wizard.collect_trust_anchors().unwrap();
        assert!(anchors.is_empty());
        assert!(!wizard.provider().asked().iter().any(|p| p == prompts::OVERRIDE_PINS));
    }

    #[test]
    fn blank_expiration_means_no_expiration() {
        let provider = AutomaticPrompter::new()
            .with_text_response(prompts::PIN_EXPIRATION, "   ")
            .with_text_response(prompts::PIN, "AAA=");
        let pin_set = Wizard::new(provider).collect_pin_set().unwrap().unwrap();

        assert_eq!(pin_set.expiration, None);
        assert_eq!(pin_set.pins, vec![Pin::new("AAA=")]);
    }

    #[test]
    fn declined_pin_set_is_none() {
        let provider =
            AutomaticPrompter::new().with_confirmation_response(prompts::ADD_PIN_SET, false);
        assert_eq!(Wizard::new(provider).collect_pin_set().unwrap(), None);
    }

    #[test]
    fn output_path_is_asked_until_non_empty() {
        let provider = AutomaticPrompter::new()
            .with_text_response(prompts::OUTPUT_PATH, "")
            .with_text_responses(prompts::OUTPUT_PATH_RETRY, &["  ", "", " res/xml/config.xml "]);
        let wizard = Wizard::new(provider);

        assert_eq!(wizard.ask_output_path().unwrap(), PathBuf::from("res/xml/config.xml"));
        assert_eq!(wizard.provider().remaining(), 0);
    }

    #[test]
    fn declining_everything_yields_bare_root() {
        let provider = AutomaticPrompter::new()
            .with_confirmation_response(prompts::ADD_BASE_CONFIG, false)
            .with_confirmation_response(prompts::ADD_DOMAIN_CONFIGS, false)
            .with_confirmation_response(prompts::ADD_DEBUG_OVERRIDES, false);
        let config = Wizard::new(provider).run().unwrap();
        assert_eq!(config, NetworkSecurityConfig::new(false));
    }
}
