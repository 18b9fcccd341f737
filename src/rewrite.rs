use crate::link::{ClassifiedLink, Protocol};
use crate::{uri, vmess};

/// Outcome of a single rewrite attempt.
///
/// A malformed payload is never an error: the original link is passed through
/// in place so one bad node cannot abort a batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rewrite {
    /// The link was rewritten against the replacement address.
    Done(String),
    /// The payload could not be decoded; the input comes back untouched.
    Unchanged(String),
}

impl Rewrite {
    pub fn into_inner(self) -> String {
        match self {
            Rewrite::Done(link) | Rewrite::Unchanged(link) => link,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Rewrite::Done(link) | Rewrite::Unchanged(link) => link,
        }
    }
}

/// Rewrite one classified link against one replacement address.
///
/// `index` is the 1-based position of the address in the batch; it lands in
/// the generated label so outputs from the same link stay distinguishable.
pub fn rewrite(link: &ClassifiedLink, address: &str, index: usize) -> Rewrite {
    match link.protocol {
        Protocol::Vmess => vmess::rewrite(&link.raw, address, index),
        Protocol::Vless | Protocol::Trojan => uri::rewrite(&link.raw, address, index),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::link::classify;

    #[test]
    fn dispatches_uri_protocols_to_one_path() {
        for scheme in ["vless", "trojan"] {
            let link = classify(&format!("{}://id@example.com:443#N", scheme)).unwrap();
            let out = rewrite(&link, "1.2.3.4", 1).into_inner();
            assert_eq!(
                out,
                format!("{}://id@1.2.3.4:443?host=example.com&sni=example.com#N_1", scheme)
            );
        }
    }

    #[test]
    fn into_inner_returns_either_side() {
        assert_eq!(Rewrite::Done("a".into()).into_inner(), "a");
        assert_eq!(Rewrite::Unchanged("b".into()).into_inner(), "b");
    }
}
