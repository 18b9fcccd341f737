//! Host/query/fragment rewrite for the plain-URI protocols (vless, trojan).
//! Both share one code path; they differ only in scheme.

use urlencoding::encode;

use crate::rewrite::Rewrite;

struct ParsedUri<'a> {
    scheme: &'a str,
    userinfo: Option<&'a str>,
    host: &'a str,
    port: Option<&'a str>,
    path: &'a str,
    query: Option<&'a str>,
    fragment: Option<&'a str>,
}

fn parse(raw: &str) -> Option<ParsedUri<'_>> {
    let (scheme, rest) = raw.split_once("://")?;

    let (rest, fragment) = match rest.split_once('#') {
        Some((r, f)) => (r, Some(f)),
        None => (rest, None),
    };
    let (rest, query) = match rest.split_once('?') {
        Some((r, q)) => (r, Some(q)),
        None => (rest, None),
    };
    let (authority, path) = match rest.find('/') {
        Some(idx) => (&rest[..idx], &rest[idx..]),
        None => (rest, ""),
    };
    let (userinfo, host_port) = match authority.rsplit_once('@') {
        Some((u, hp)) => (Some(u), hp),
        None => (None, authority),
    };
    let (host, port) = split_host_port(host_port)?;
    if host.is_empty() {
        return None;
    }

    Some(ParsedUri {
        scheme,
        userinfo,
        host,
        port,
        path,
        query,
        fragment,
    })
}

fn split_host_port(host_port: &str) -> Option<(&str, Option<&str>)> {
    if let Some(rest) = host_port.strip_prefix('[') {
        // Bracketed IPv6 literal; the brackets stay part of the host.
        let end = rest.find(']')?;
        let host = &host_port[..end + 2];
        let after = &rest[end + 1..];
        return match after.strip_prefix(':') {
            Some(port) => Some((host, Some(port))),
            None if after.is_empty() => Some((host, None)),
            None => None,
        };
    }

    match host_port.rsplit_once(':') {
        Some((host, port)) if !port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()) => {
            Some((host, Some(port)))
        }
        _ => Some((host_port, None)),
    }
}

fn has_param(query: &str, name: &str) -> bool {
    query.split('&').any(|pair| {
        let key = pair.split_once('=').map_or(pair, |(k, _)| k);
        key == name
    })
}

pub fn rewrite(raw: &str, address: &str, index: usize) -> Rewrite {
    match try_rewrite(raw, address, index) {
        Some(link) => Rewrite::Done(link),
        None => Rewrite::Unchanged(raw.to_string()),
    }
}

fn try_rewrite(raw: &str, address: &str, index: usize) -> Option<String> {
    let uri = parse(raw)?;
    let original_host = uri.host;

    // Existing query text is kept byte for byte; host/sni are only appended
    // when the link does not already carry them.
    let mut query = uri.query.unwrap_or("").to_string();
    for key in ["host", "sni"] {
        if !has_param(&query, key) {
            if !query.is_empty() {
                query.push('&');
            }
            query.push_str(key);
            query.push('=');
            query.push_str(&encode(original_host));
        }
    }

    let address = address.trim();
    let new_host = if address.contains(':') && !address.starts_with('[') {
        // IPv6 literals need brackets inside the authority.
        format!("[{}]", address)
    } else {
        address.to_string()
    };

    let fragment = match uri.fragment {
        Some(f) if !f.is_empty() => format!("{}_{}", f, index),
        _ => format!("Node_{}", index),
    };

    let mut out = String::with_capacity(raw.len() + query.len());
    out.push_str(uri.scheme);
    out.push_str("://");
    if let Some(userinfo) = uri.userinfo {
        out.push_str(userinfo);
        out.push('@');
    }
    out.push_str(&new_host);
    if let Some(port) = uri.port {
        out.push(':');
        out.push_str(port);
    }
    out.push_str(uri.path);
    out.push('?');
    out.push_str(&query);
    out.push('#');
    out.push_str(&fragment);
    Some(out)
}
