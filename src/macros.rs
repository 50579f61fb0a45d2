/// Lazily compiled static regex for a literal pattern.
#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

/// Dictionary entry: a canonical term, its literal variants, and the
/// categories a hit on it implies.
#[macro_export]
macro_rules! entry {
    (
        $canonical:literal => [ $($variant:literal),+ $(,)? ]
        $(, categories: [ $($cat:ident),* $(,)? ])?
        $(,)?
    ) => {
        $crate::lexicon::Entry {
            canonical: $canonical,
            variants: &[ $($variant),+ ],
            categories: &[ $($($crate::Category::$cat),*)? ],
        }
    };
}

/// Phrase alternation table: `alias => canonical`.
#[macro_export]
macro_rules! aliases {
    ( $( $alias:literal => $canonical:literal ),* $(,)? ) => {
        &[ $( ($alias, $canonical) ),* ]
    };
}
