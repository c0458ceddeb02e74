// Copyright (c) 2025 woxQAQ
//
// Licensed under the MIT License or Apache License 2.0
// See LICENSE files for details

//! # Cluster name normalization
//!
//! Maps a configured cluster URL to the canonical short name used both for
//! deterministic cascade ordering and for the emitted `cluster('...')`
//! literal. Two connections pointing at the same cluster through different
//! spellings normalize to the same name.

/// Domain suffixes stripped from well-known Kusto hosts
const CLUSTER_DOMAIN_SUFFIXES: &[&str] = &[
    ".kusto.windows.net",
    ".kusto.chinacloudapi.cn",
    ".kusto.usgovcloudapi.net",
    ".kusto.azuresynapse.net",
];

/// Normalize a cluster URL or host into its canonical short name.
///
/// Strips the scheme, trailing slashes, an explicit port, and a known
/// Kusto domain suffix, then lowercases. Hosts outside the known domains
/// keep their full host name.
///
/// # Examples
///
/// ```rust
/// use kusto_qualify_catalog::normalize_cluster_name;
///
/// assert_eq!(normalize_cluster_name("https://contoso.kusto.windows.net"), "contoso");
/// assert_eq!(normalize_cluster_name("https://contoso.kusto.windows.net:443/"), "contoso");
/// assert_eq!(normalize_cluster_name("http://localhost:8080"), "localhost");
/// ```
pub fn normalize_cluster_name(url: &str) -> String {
    let mut host = url.trim();

    for scheme in ["https://", "http://"] {
        if let Some(rest) = host.strip_prefix(scheme) {
            host = rest;
            break;
        }
    }

    host = host.trim_end_matches('/');

    if let Some((candidate, port)) = host.rsplit_once(':')
        && !port.is_empty()
        && port.bytes().all(|b| b.is_ascii_digit())
    {
        host = candidate;
    }

    let mut name = host.to_ascii_lowercase();
    for suffix in CLUSTER_DOMAIN_SUFFIXES {
        if let Some(stripped) = name.strip_suffix(suffix) {
            name = stripped.to_string();
            break;
        }
    }

    name
}
