#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! rule {
    (
        name: $name:expr,
        severity: $severity:expr,
        check: |$doc:ident : &$doc_ty:ty, $ctx:ident : &$ctx_ty:ty| $body:block
        $(,)?
    ) => {
        $crate::Rule::new($name, $severity, move |$doc: &$doc_ty, $ctx: &$ctx_ty| $body)
    };
}
