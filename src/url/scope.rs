use url::Url;

/// Decides whether a candidate link stays on the seed's network location
///
/// A candidate is in scope when its scheme is HTTP or HTTPS and its host and
/// port match the seed's exactly. The candidate's scheme does not have to
/// match the seed's own scheme: an `http://` link on an `https://` site is
/// still the same network location. There is no wildcard subdomain matching
/// and no case folding beyond what URL parsing already normalizes.
///
/// The port comparison works on `Url::port`, which reports `None` for a
/// scheme's default port, so `https://example.com` and
/// `https://example.com:8080` are distinct locations.
pub fn is_in_scope(seed: &Url, candidate: &Url) -> bool {
    if !matches!(candidate.scheme(), "http" | "https") {
        return false;
    }

    candidate.host_str() == seed.host_str() && candidate.port() == seed.port()
}
