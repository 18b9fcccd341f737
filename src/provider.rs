use clap::ValueEnum;

/// CDN providers with a builtin preferred-address sample list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Provider {
    Cloudflare,
    Cloudfront,
    Gcore,
}

impl Provider {
    /// Builtin sample addresses. Real deployments should feed a fresh list
    /// via `--ips`; fetching one is deliberately left to the caller.
    pub fn addresses(&self) -> &'static [&'static str] {
        match self {
            Provider::Cloudflare => &[
                "104.16.123.96",
                "172.67.123.45",
                "104.21.12.34",
                "188.114.96.1",
                "188.114.97.2",
            ],
            Provider::Cloudfront => &["13.224.1.1", "13.224.2.2"],
            Provider::Gcore => &["92.223.84.1", "92.223.84.2"],
        }
    }
}
