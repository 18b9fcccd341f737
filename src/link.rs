/// Protocols whose share links we know how to rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Protocol {
    /// Base64-encoded JSON record after the scheme.
    Vmess,
    /// Plain URI: `vless://uuid@host:port?params#name`
    Vless,
    /// Plain URI: `trojan://password@host:port?params#name`
    Trojan,
}

impl Protocol {
    pub fn scheme(&self) -> &'static str {
        match self {
            Protocol::Vmess => "vmess://",
            Protocol::Vless => "vless://",
            Protocol::Trojan => "trojan://",
        }
    }
}

/// A raw link tagged with the protocol its scheme announced.
///
/// The payload is not validated here; a bad payload surfaces at rewrite time
/// as a pass-through.
#[derive(Debug, Clone)]
pub struct ClassifiedLink {
    pub protocol: Protocol,
    pub raw: String,
}

pub fn classify(raw: &str) -> Option<ClassifiedLink> {
    let raw = raw.trim();
    let protocol = [Protocol::Vmess, Protocol::Vless, Protocol::Trojan]
        .into_iter()
        .find(|p| raw.starts_with(p.scheme()))?;

    Some(ClassifiedLink {
        protocol,
        raw: raw.to_string(),
    })
}
