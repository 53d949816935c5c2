// SPDX-License-Identifier: MPL-2.0
//! Content-addressed (`ipfs://`) source handling.
//!
//! The rewrite to a gateway URL is pure; the actual network suspension point
//! lives in [`crate::net`], so views only ever depend on resolved state.

use crate::error::{Error, Result};

/// URI scheme marking a content-addressed source.
pub const SCHEME: &str = "ipfs://";

/// Whether the source uses the content-addressed scheme.
pub fn is_content_addressed(source: &str) -> bool {
    source.starts_with(SCHEME)
}

/// Rewrites `ipfs://<cid>[/path]` to a fetchable URL on `gateway`.
///
/// The content identifier is kept opaque; validating it is the gateway's job.
pub fn gateway_url(source: &str, gateway: &str) -> Result<String> {
    let rest = source.strip_prefix(SCHEME).ok_or_else(|| {
        Error::Resolve(format!("not a content-addressed source: {source}"))
    })?;

    let rest = rest.trim_start_matches('/');
    let (cid, path) = match rest.split_once('/') {
        Some((cid, path)) => (cid, Some(path)),
        None => (rest, None),
    };

    if cid.is_empty() {
        return Err(Error::Resolve("empty content identifier".to_string()));
    }

    let base = gateway.trim_end_matches('/');
    Ok(match path {
        Some(path) if !path.is_empty() => format!("{base}/ipfs/{cid}/{path}"),
        _ => format!("{base}/ipfs/{cid}"),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_IPFS_GATEWAY;

    const CID: &str = "bafybeigdyrzt5sfp7udm7hu76uh7y26nf3efuylqabf3oclgtqy55fbzdi";

    #[test]
    fn detects_scheme() {
        assert!(is_content_addressed("ipfs://abc"));
        assert!(!is_content_addressed("https://example.com/a.png"));
        assert!(!is_content_addressed(""));
    }

    #[test]
    fn rewrites_bare_cid() {
        let url = gateway_url(&format!("ipfs://{CID}"), DEFAULT_IPFS_GATEWAY).unwrap();
        assert_eq!(url, format!("https://ipfs.io/ipfs/{CID}"));
    }

    #[test]
    fn rewrites_cid_with_path() {
        let url = gateway_url(&format!("ipfs://{CID}/gallery/0.png"), "https://gw.example/").unwrap();
        assert_eq!(url, format!("https://gw.example/ipfs/{CID}/gallery/0.png"));
    }

    #[test]
    fn rejects_foreign_scheme() {
        let err = gateway_url("https://example.com/a.png", DEFAULT_IPFS_GATEWAY).unwrap_err();
        assert!(matches!(err, Error::Resolve(_)));
    }

    #[test]
    fn rejects_empty_cid() {
        let err = gateway_url("ipfs://", DEFAULT_IPFS_GATEWAY).unwrap_err();
        assert!(matches!(err, Error::Resolve(_)));
        let err = gateway_url("ipfs:///", DEFAULT_IPFS_GATEWAY).unwrap_err();
        assert!(matches!(err, Error::Resolve(_)));
    }
}
