use mulgara_model::{Iri, NamedNode};
use rustc_hash::FxHashSet;
use std::fmt::Debug;

/// Information about the server the interpreter runs in.
///
/// A stand-alone client has no server information. On a server, graph URIs that name the server
/// by one of its aliases are rewritten to the canonical server name, so that
/// `rmi://localhost/server1#g` and `rmi://db.example.com/server1#g` address the same graph.
pub trait ServerInfo: Debug + Send + Sync {
    /// The host names (and addresses) under which the local server is known.
    fn hostname_aliases(&self) -> &FxHashSet<String>;

    /// The canonical URI of the local server.
    fn server_uri(&self) -> Option<&Iri<String>>;
}

/// A [ServerInfo] with fixed values.
#[derive(Debug, Clone, Default)]
pub struct StaticServerInfo {
    pub hostname_aliases: FxHashSet<String>,
    pub server_uri: Option<Iri<String>>,
}

impl ServerInfo for StaticServerInfo {
    fn hostname_aliases(&self) -> &FxHashSet<String> {
        &self.hostname_aliases
    }

    fn server_uri(&self) -> Option<&Iri<String>> {
        self.server_uri.as_ref()
    }
}

/// Rewrites the host of a remote graph URI to the canonical host of the local server.
///
/// Only `rmi` and `soap` URIs whose host is a known alias are rewritten. The result keeps the
/// scheme, path and fragment; user info, port and query are dropped. All other URIs are returned
/// unchanged.
pub fn canonicalize_graph_uri(graph: NamedNode, server_info: Option<&dyn ServerInfo>) -> NamedNode {
    let Some(server_info) = server_info else {
        return graph;
    };
    let Ok(iri) = Iri::parse(graph.as_str()) else {
        return graph;
    };
    if !matches!(iri.scheme(), "rmi" | "soap") {
        return graph;
    }

    let Some(host) = iri.authority().map(host_of) else {
        return graph;
    };
    if !server_info.hostname_aliases().contains(host) {
        return graph;
    }
    let Some(server_host) = server_info
        .server_uri()
        .and_then(|server_uri| server_uri.authority())
        .map(host_of)
    else {
        return graph;
    };

    let mut canonical = format!("{}://{server_host}{}", iri.scheme(), iri.path());
    if let Some(fragment) = iri.fragment() {
        canonical.push('#');
        canonical.push_str(fragment);
    }
    tracing::debug!("canonicalized graph {graph} to <{canonical}>");
    NamedNode::new_unchecked(canonical)
}

/// Strips the user info and the port of an authority.
fn host_of(authority: &str) -> &str {
    let host_and_port = authority
        .rsplit_once('@')
        .map_or(authority, |(_, host_and_port)| host_and_port);
    if host_and_port.starts_with('[') {
        // IPv6 literal
        return host_and_port
            .find(']')
            .map_or(host_and_port, |end| &host_and_port[..=end]);
    }
    host_and_port
        .split_once(':')
        .map_or(host_and_port, |(host, _)| host)
}
