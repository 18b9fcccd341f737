//! Batch expansion: every classifiable link, rewritten once per address.

use base64::{engine::general_purpose, Engine as _};
use log::debug;
use thiserror::Error;

use crate::link::classify;
use crate::rewrite;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    #[error("no node links supplied")]
    EmptyLinks,
    #[error("no replacement addresses supplied")]
    EmptyAddresses,
}

/// Ordered result of a batch expansion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Generated {
    links: Vec<String>,
}

impl Generated {
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn count(&self) -> usize {
        self.links.len()
    }

    pub fn to_text(&self) -> String {
        self.links.join("\n")
    }

    /// Base64 subscription form, the format share clients import from.
    pub fn to_subscription(&self) -> String {
        general_purpose::STANDARD.encode(self.to_text())
    }
}

/// Expand `links` × `addresses` in input order.
///
/// Both sequences must be non-empty; the caller is expected to have dropped
/// blank lines already (see [`split_lines`]). Links with an unrecognized
/// scheme are skipped silently and contribute nothing to the output.
pub fn generate(links: &[String], addresses: &[String]) -> Result<Generated, GenerateError> {
    if links.is_empty() {
        return Err(GenerateError::EmptyLinks);
    }
    if addresses.is_empty() {
        return Err(GenerateError::EmptyAddresses);
    }

    let mut out = Vec::with_capacity(links.len() * addresses.len());
    for raw in links {
        let link = match classify(raw) {
            Some(link) => link,
            None => {
                debug!("skipping unrecognized link: {}", raw);
                continue;
            }
        };

        for (i, address) in addresses.iter().enumerate() {
            out.push(rewrite::rewrite(&link, address, i + 1).into_inner());
        }
    }

    Ok(Generated { links: out })
}

/// Split text-area style input: one entry per line, blanks dropped.
pub fn split_lines(input: &str) -> Vec<String> {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn output_length_is_links_times_addresses() {
        let links = strings(&[
            "trojan://pw@a.example:443#A",
            "vless://id@b.example:443#B",
        ]);
        let addresses = strings(&["1.1.1.1", "2.2.2.2", "3.3.3.3"]);

        let generated = generate(&links, &addresses).unwrap();
        assert_eq!(generated.count(), 6);
    }

    #[test]
    fn unrecognized_links_are_skipped_silently() {
        let links = strings(&["foo://bar", "trojan://pw@a.example:443#A"]);
        let addresses = strings(&["1.1.1.1"]);

        let generated = generate(&links, &addresses).unwrap();
        assert_eq!(generated.count(), 1);
        assert!(generated.links()[0].starts_with("trojan://"));
    }

    #[test]
    fn output_order_follows_input_order() {
        let links = strings(&[
            "trojan://pw@a.example:443#A",
            "trojan://pw@b.example:443#B",
        ]);
        let addresses = strings(&["1.1.1.1", "2.2.2.2"]);

        let generated = generate(&links, &addresses).unwrap();
        let out = generated.links();
        assert!(out[0].contains("1.1.1.1") && out[0].ends_with("#A_1"));
        assert!(out[1].contains("2.2.2.2") && out[1].ends_with("#A_2"));
        assert!(out[2].contains("1.1.1.1") && out[2].ends_with("#B_1"));
        assert!(out[3].contains("2.2.2.2") && out[3].ends_with("#B_2"));
    }

    #[test]
    fn duplicate_addresses_are_legal() {
        let links = strings(&["trojan://pw@a.example:443#A"]);
        let addresses = strings(&["1.1.1.1", "1.1.1.1"]);

        let out = generate(&links, &addresses).unwrap();
        assert_eq!(out.count(), 2);
        // Same address, different labels.
        assert_ne!(out.links()[0], out.links()[1]);
    }

    #[test]
    fn empty_inputs_are_preconditions() {
        let links = strings(&["trojan://pw@a.example:443#A"]);
        assert_eq!(generate(&[], &links), Err(GenerateError::EmptyLinks));
        assert_eq!(generate(&links, &[]), Err(GenerateError::EmptyAddresses));
    }

    #[test]
    fn splits_and_drops_blank_lines() {
        let lines = split_lines("a\n\n  \n b \r\nc");
        assert_eq!(lines, vec!["a", "b", "c"]);
    }

    #[test]
    fn subscription_form_is_base64_of_text() {
        let links = strings(&["trojan://pw@a.example:443#A"]);
        let addresses = strings(&["1.1.1.1"]);
        let generated = generate(&links, &addresses).unwrap();

        let decoded = general_purpose::STANDARD
            .decode(generated.to_subscription())
            .unwrap();
        assert_eq!(String::from_utf8(decoded).unwrap(), generated.to_text());
    }
}
