use super::Render;
use crate::{constants::schema, xml::Element};
use serde::{Deserialize, Serialize};

/// A certificate source: `"system"`, `"user"` or a raw resource such as `"@raw/my_ca"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certificates {
    pub src: String,
    #[serde(default)]
    pub override_pins: bool,
}

impl Certificates {
    pub fn new(src: impl Into<String>) -> Self {
        Self::with_override_pins(src, false)
    }

    pub fn with_override_pins(src: impl Into<String>, override_pins: bool) -> Self {
        Self { src: src.into(), override_pins }
    }
}

impl Render for Certificates {
    fn render(&self, parent: &mut Element) {
        let certificates = parent.sub_element(schema::CERTIFICATES);
        certificates.set_attr(schema::SRC, self.src.as_str());
        if self.override_pins {
            certificates.set_attr(schema::OVERRIDE_PINS, self.override_pins.to_string());
        }
    }
}

/// Set of certificate sources trusted for secure connections.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrustAnchors {
    pub certificates: Vec<Certificates>,
}

impl TrustAnchors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_certificate(&mut self, certificate: Certificates) -> &mut Self {
        self.certificates.push(certificate);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.certificates.is_empty()
    }
}

impl FromIterator<Certificates> for TrustAnchors {
    fn from_iter<I: IntoIterator<Item = Certificates>>(iter: I) -> Self {
        Self { certificates: iter.into_iter().collect() }
    }
}

/// Always renders, even without certificates.
impl Render for TrustAnchors {
    fn render(&self, parent: &mut Element) {
        let anchors = parent.sub_element(schema::TRUST_ANCHORS);
        for certificate in &self.certificates {
            certificate.render(anchors);
        }
    }
}
