use backdrop_style::Compiled;

/// Last derivation, keyed by the full parameter set and catalog revision.
#[derive(Debug)]
pub(crate) struct Memo<P> {
    entry: Option<(P, u64, Compiled)>,
}

impl<P: Clone + PartialEq> Memo<P> {
    pub(crate) fn new() -> Self {
        Self { entry: None }
    }

    pub(crate) fn get_or_derive(
        &mut self,
        params: &P,
        revision: u64,
        derive: impl FnOnce() -> Compiled,
    ) -> &Compiled {
        let fresh = matches!(&self.entry, Some((p, r, _)) if p == params && *r == revision);
        if !fresh {
            self.entry = None;
        }
        let (_, _, compiled) = self
            .entry
            .get_or_insert_with(|| (params.clone(), revision, derive()));
        compiled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compiled(tag: &str) -> Compiled {
        Compiled::neutral(tag)
    }

    #[test]
    fn same_key_is_served_from_cache() {
        let mut memo = Memo::new();
        memo.get_or_derive(&1u32, 0, || compiled(".a"));
        let css = memo.get_or_derive(&1u32, 0, || compiled(".b")).css.clone();
        assert!(css.starts_with(".a"));
    }

    #[test]
    fn param_change_rederives() {
        let mut memo = Memo::new();
        memo.get_or_derive(&1u32, 0, || compiled(".a"));
        let css = memo.get_or_derive(&2u32, 0, || compiled(".b")).css.clone();
        assert!(css.starts_with(".b"));
    }

    #[test]
    fn revision_change_rederives() {
        let mut memo = Memo::new();
        memo.get_or_derive(&1u32, 0, || compiled(".a"));
        let css = memo.get_or_derive(&1u32, 1, || compiled(".b")).css.clone();
        assert!(css.starts_with(".b"));
    }
}
