//! Vocabularies used by the query model.

pub use oxrdf::vocab::{rdf, rdfs, xsd};

/// The Mulgara namespace, home of the special ("magic") predicates.
pub mod mulgara {
    use oxrdf::NamedNodeRef;

    pub const NAMESPACE: &str = "http://mulgara.org/mulgara#";

    /// Equality of the subject and the object.
    pub const IS: NamedNodeRef<'_> = NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#is");
    /// Cardinality equal to the object.
    pub const OCCURS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#occurs");
    /// Cardinality not equal to the object.
    pub const NOT_OCCURS: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#notOccurs");
    /// Cardinality less than the object.
    pub const OCCURS_LESS_THAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#occursLessThan");
    /// Cardinality greater than the object.
    pub const OCCURS_MORE_THAN: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#occursMoreThan");
    /// The default type of a newly created model.
    pub const MODEL: NamedNodeRef<'_> =
        NamedNodeRef::new_unchecked("http://mulgara.org/mulgara#Model");
}

/// The legacy Tucana namespace. Older queries still spell the special predicates this way.
pub mod tucana {
    pub const NAMESPACE: &str = "http://tucana.org/tucana#";
}
