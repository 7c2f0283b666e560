use crate::{ItqlError, ItqlResult};
use mulgara_model::{Iri, NamedNode};
use rustc_hash::FxHashMap;

/// Maps alias prefixes (e.g. `dc`) to namespaces (e.g. `http://purl.org/dc/elements/1.1/`).
///
/// Aliases are added by `alias` commands and live as long as the interpreter. They are never
/// removed; aliasing a prefix again replaces its namespace.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasMap {
    aliases: FxHashMap<String, Iri<String>>,
}

impl AliasMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Maps `prefix` to `namespace`, returning the namespace it was mapped to before.
    pub fn insert(
        &mut self,
        prefix: impl Into<String>,
        namespace: Iri<String>,
    ) -> Option<Iri<String>> {
        self.aliases.insert(prefix.into(), namespace)
    }

    pub fn get(&self, prefix: &str) -> Option<&Iri<String>> {
        self.aliases.get(prefix)
    }

    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }

    /// Resolves a resource token into a URI.
    ///
    /// Tokens of the form `prefix:local` whose prefix is an alias are expanded to the namespace
    /// followed by `local`, without the fragment of the token. Hierarchical URIs (`scheme:/...`)
    /// and tokens with an unknown prefix are returned unchanged.
    pub fn resolve(&self, token: &str) -> ItqlResult<NamedNode> {
        let iri = parse_iri(token)?;
        let scheme = iri.scheme();
        let rest = &token[scheme.len() + 1..];
        if rest.starts_with('/') {
            return Ok(NamedNode::new_unchecked(iri.into_inner()));
        }

        match self.get(scheme) {
            Some(namespace) => {
                let local = rest.split_once('#').map_or(rest, |(local, _)| local);
                let expanded = format!("{}{local}", namespace.as_str());
                tracing::debug!("expanded alias {token} to {expanded}");
                Ok(NamedNode::new_unchecked(parse_iri(&expanded)?.into_inner()))
            }
            None => Ok(NamedNode::new_unchecked(iri.into_inner())),
        }
    }
}

impl FromIterator<(String, Iri<String>)> for AliasMap {
    fn from_iter<T: IntoIterator<Item = (String, Iri<String>)>>(iter: T) -> Self {
        Self {
            aliases: iter.into_iter().collect(),
        }
    }
}

pub(crate) fn parse_iri(text: &str) -> ItqlResult<Iri<String>> {
    Iri::parse(text.to_owned()).map_err(|error| ItqlError::malformed(text, error))
}
