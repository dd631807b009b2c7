//! Object model of the Android network security config document
//!
//! Every node owns its children outright. Nodes are assembled with the
//! `add_*` methods and rendered once, top-down, into an [`Element`] tree.

use crate::{
    constants::schema,
    xml::{self, Element, XmlStyle},
};
use serde::{Deserialize, Serialize};

mod domain;
mod pinning;
mod trust;


pub use domain::{Domain, DomainConfig};
pub use pinning::{Pin, PinSet};
pub use trust::{Certificates, TrustAnchors};

/// A node that appends its own element, and its subtree, to a parent element.
pub trait Render {
    fn render(&self, parent: &mut Element);
}

/// Defaults applied to every connection not matched by a domain config.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseConfig {
    pub cleartext_traffic_permitted: bool,
    pub trust_anchors: TrustAnchors,
}

impl BaseConfig {
    pub fn new(cleartext_traffic_permitted: bool) -> Self {
        Self { cleartext_traffic_permitted, trust_anchors: TrustAnchors::new() }
    }

    pub fn add_certificate(&mut self, certificate: Certificates) -> &mut Self {
        self.trust_anchors.add_certificate(certificate);
        self
    }
}

impl Render for BaseConfig {
    fn render(&self, parent: &mut Element) {
        let base_config = parent.sub_element(schema::BASE_CONFIG);
        if self.cleartext_traffic_permitted {
            base_config.set_attr(schema::CLEARTEXT_TRAFFIC_PERMITTED, "true");
        }
        self.trust_anchors.render(base_config);
    }
}

/// Extra trust anchors honoured only by debuggable builds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DebugOverrides {
    pub trust_anchors: TrustAnchors,
}

impl DebugOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_certificate(&mut self, certificate: Certificates) -> &mut Self {
        self.trust_anchors.add_certificate(certificate);
        self
    }
}

impl Render for DebugOverrides {
    fn render(&self, parent: &mut Element) {
        let debug_overrides = parent.sub_element(schema::DEBUG_OVERRIDES);
        self.trust_anchors.render(debug_overrides);
    }
}

/// Root of the document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NetworkSecurityConfig {
    pub cleartext_traffic_permitted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_config: Option<BaseConfig>,
    pub domain_configs: Vec<DomainConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug_overrides: Option<DebugOverrides>,
}

impl NetworkSecurityConfig {
    pub fn new(cleartext_traffic_permitted: bool) -> Self {
        Self { cleartext_traffic_permitted, ..Default::default() }
    }

    /// Sets the base config, replacing any previous one.
    pub fn add_base_config(&mut self, base_config: BaseConfig) -> &mut Self {
        self.base_config = Some(base_config);
        self
    }

    pub fn add_domain_config(&mut self, domain_config: DomainConfig) -> &mut Self {
        self.domain_configs.push(domain_config);
        self
    }

    /// Sets the debug overrides, replacing any previous ones.
    pub fn add_debug_overrides(&mut self, debug_overrides: DebugOverrides) -> &mut Self {
        self.debug_overrides = Some(debug_overrides);
        self
    }

    /// Builds the element tree: base config, domain configs, then debug overrides.
    pub fn to_element(&self) -> Element {
        let mut root = Element::new(schema::NETWORK_SECURITY_CONFIG);
        if self.cleartext_traffic_permitted {
            root.set_attr(schema::CLEARTEXT_TRAFFIC_PERMITTED, "true");
        }

        if let Some(base_config) = &self.base_config {
            base_config.render(&mut root);
        }
        for domain_config in &self.domain_configs {
            domain_config.render(&mut root);
        }
        if let Some(debug_overrides) = &self.debug_overrides {
            debug_overrides.render(&mut root);
        }
        root
    }

    pub fn to_xml(&self, style: &XmlStyle) -> String {
        xml::to_string(&self.to_element(), style)
    }
}
