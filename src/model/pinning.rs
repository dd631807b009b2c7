use super::Render;
use crate::{
    constants::{schema, PIN_DIGEST_ALGORITHM},
    xml::Element,
};
use serde::{Deserialize, Serialize};

/// Base64 encoded SHA-256 digest of an X.509 SubjectPublicKeyInfo.
///
/// Serialized as a bare string; read from either `"AAA="` or `{"digest": "AAA="}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "PinRepr", into = "String")]
pub struct Pin {
    pub digest: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PinRepr {
    Digest(String),
    Fields { digest: String },
}

impl From<PinRepr> for Pin {
    fn from(repr: PinRepr) -> Self {
        match repr {
            PinRepr::Digest(digest) | PinRepr::Fields { digest } => Pin::new(digest),
        }
    }
}

impl From<Pin> for String {
    fn from(pin: Pin) -> Self {
        pin.digest
    }
}

impl Pin {
    pub fn new(digest: impl Into<String>) -> Self {
        Self { digest: digest.into() }
    }

    pub fn algorithm(&self) -> &'static str {
        PIN_DIGEST_ALGORITHM
    }
}

impl Render for Pin {
    fn render(&self, parent: &mut Element) {
        parent
            .sub_element(schema::PIN)
            .set_attr(schema::DIGEST, self.algorithm())
            .set_text(self.digest.as_str());
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PinSet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<String>,
    pub pins: Vec<Pin>,
}

impl PinSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_expiration(expiration: impl Into<String>) -> Self {
        Self { expiration: Some(expiration.into()), pins: Vec::new() }
    }

    pub fn add_pin(&mut self, pin: Pin) -> &mut Self {
        self.pins.push(pin);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }
}

/// Renders nothing while the set holds no pins.
impl Render for PinSet {
    fn render(&self, parent: &mut Element) {
        if self.is_empty() {
            return;
        }

        let pin_set = parent.sub_element(schema::PIN_SET);
        if let Some(expiration) = &self.expiration {
            pin_set.set_attr(schema::EXPIRATION, expiration.as_str());
        }
        for pin in &self.pins {
            pin.render(pin_set);
        }
    }
}
