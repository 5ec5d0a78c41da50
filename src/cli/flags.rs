use crate::entropy::SourceKind;
use crate::pass::{CharClass, ClassSet};

#[derive(Debug, Default)]
pub struct CliFlags {
    pub help: bool,
    pub version: bool,
    pub quiet: bool,
    pub clipboard: bool,
    pub saved: bool,
    pub default: bool,
    pub avoid_similar: bool,
    pub length: Option<usize>,
    pub number: Option<usize>,
    pub classes: Option<ClassSet>,
    pub disabled: ClassSet,
    pub symbols: Option<String>,
    pub rng: Option<SourceKind>,
}

impl CliFlags {
    /// Classes to generate from, given the starting set.
    pub fn resolve_classes(&self, base: ClassSet) -> ClassSet {
        let mut classes = self.classes.unwrap_or(base);
        for class in CharClass::ALL {
            if self.disabled.contains(class) {
                classes.remove(class);
            }
        }
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_classes_win_over_selection() {
        let flags = CliFlags {
            classes: Some([CharClass::Uppercase, CharClass::Numbers].into_iter().collect()),
            disabled: [CharClass::Numbers].into_iter().collect(),
            ..Default::default()
        };
        let classes = flags.resolve_classes(ClassSet::all());
        assert_eq!(classes.codes(), "u");
    }

    #[test]
    fn falls_back_to_base() {
        let flags = CliFlags::default();
        assert_eq!(flags.resolve_classes(ClassSet::all()), ClassSet::all());
    }
}
