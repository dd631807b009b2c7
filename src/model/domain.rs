use super::{PinSet, Render, TrustAnchors};
use crate::{constants::schema, xml::Element};
use serde::{Deserialize, Serialize};

fn default_include_subdomains() -> bool {
    true
}

/// A hostname the enclosing domain config applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    pub name: String,
    #[serde(default = "default_include_subdomains")]
    pub include_subdomains: bool,
}

impl Domain {
    pub fn new(name: impl Into<String>, include_subdomains: bool) -> Self {
        Self { name: name.into(), include_subdomains }
    }
}

impl Render for Domain {
    fn render(&self, parent: &mut Element) {
        parent
            .sub_element(schema::DOMAIN)
            .set_attr(schema::INCLUDE_SUBDOMAINS, self.include_subdomains.to_string())
            .set_text(self.name.as_str());
    }
}

/// Per-domain policy. Domain configs nest to any depth.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DomainConfig {
    pub cleartext_traffic_permitted: bool,
    pub domains: Vec<Domain>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_anchors: Option<TrustAnchors>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pin_set: Option<PinSet>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub domain_configs: Vec<DomainConfig>,
}

impl DomainConfig {
    pub fn new(cleartext_traffic_permitted: bool) -> Self {
        Self { cleartext_traffic_permitted, ..Default::default() }
    }

    pub fn add_domain(&mut self, domain: Domain) -> &mut Self {
        self.domains.push(domain);
        self
    }

    pub fn add_trust_anchors(&mut self, trust_anchors: TrustAnchors) -> &mut Self {
        self.trust_anchors = Some(trust_anchors);
        self
    }

    pub fn add_pin_set(&mut self, pin_set: PinSet) -> &mut Self {
        self.pin_set = Some(pin_set);
        self
    }

    pub fn add_domain_config(&mut self, domain_config: DomainConfig) -> &mut Self {
        self.domain_configs.push(domain_config);
        self
    }

    /// Depth of the deepest nested domain config, counting this one.
    pub fn depth(&self) -> usize {
        1 + self.domain_configs.iter().map(DomainConfig::depth).max().unwrap_or(0)
    }
}

/// Children are written as domains, pin set, trust anchors, nested configs.
impl Render for DomainConfig {
    fn render(&self, parent: &mut Element) {
        let domain_config = parent.sub_element(schema::DOMAIN_CONFIG);
        domain_config.set_attr(
            schema::CLEARTEXT_TRAFFIC_PERMITTED,
            self.cleartext_traffic_permitted.to_string(),
        );

        for domain in &self.domains {
            domain.render(domain_config);
        }
        if let Some(pin_set) = &self.pin_set {
            pin_set.render(domain_config);
        }
        if let Some(trust_anchors) = &self.trust_anchors {
            trust_anchors.render(domain_config);
        }
        for nested in &self.domain_configs {
            nested.render(domain_config);
        }
    }
}
